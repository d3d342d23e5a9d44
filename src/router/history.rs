// ============================================================================
// HISTORY - Estrategias de historial (HTML5, hash, memoria)
// ============================================================================
// GESTIÓN DE LISTENERS:
// - `listen` registra UN listener global de `popstate` por historial.
//   El router lo llama una sola vez desde `start()`.
// ============================================================================

use std::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::HistoryMode;
use crate::error::{describe_js, RouteError};
use crate::router::path::{ensure_leading_slash, normalize_base, strip_base};

pub type PopListener = Box<dyn Fn(String)>;

/// Fuente y destino de la ubicación actual.
/// Las ubicaciones son relativas a la app: `/path?query#hash`, sin la base.
pub trait History {
    fn location(&self) -> String;
    fn push(&self, location: &str) -> Result<(), RouteError>;
    fn replace(&self, location: &str) -> Result<(), RouteError>;
    /// Moverse por el historial; el cambio llega por el listener
    fn go(&self, delta: i32) -> Result<(), RouteError>;
    fn listen(&self, on_pop: PopListener) -> Result<(), RouteError>;
    /// href visible en el navegador para una ubicación
    fn create_href(&self, location: &str) -> String;
}

/// Construir el historial configurado
pub fn create_history(mode: HistoryMode, base: &str) -> Result<Box<dyn History>, RouteError> {
    Ok(match mode {
        HistoryMode::Web => Box::new(BrowserHistory::web(base)?),
        HistoryMode::Hash => Box::new(BrowserHistory::hash(base)?),
        HistoryMode::Memory => Box::new(MemoryHistory::new("/")),
    })
}

fn history_error(err: JsValue) -> RouteError {
    RouteError::History(describe_js(&err))
}

/// Historial del navegador. En modo hash la ubicación vive detrás de `#`.
pub struct BrowserHistory {
    window: web_sys::Window,
    /// Modo web: prefijo a quitar del pathname. Modo hash: todo lo que va antes del `#`.
    base: String,
    hash_mode: bool,
    listening: Cell<bool>,
}

impl BrowserHistory {
    pub fn web(base: &str) -> Result<Self, RouteError> {
        Self::new(base, false)
    }

    pub fn hash(base: &str) -> Result<Self, RouteError> {
        Self::new(base, true)
    }

    fn new(base: &str, hash_mode: bool) -> Result<Self, RouteError> {
        let window = web_sys::window().ok_or_else(|| RouteError::History("No window".to_string()))?;
        let base = if hash_mode {
            let pathname = window.location().pathname().unwrap_or_else(|_| "/".to_string());
            hash_base(base, &pathname)
        } else {
            normalize_base(base)
        };
        Ok(Self {
            window,
            base,
            hash_mode,
            listening: Cell::new(false),
        })
    }

    fn history(&self) -> Result<web_sys::History, RouteError> {
        self.window.history().map_err(history_error)
    }

    fn read_location(window: &web_sys::Window, base: &str, hash_mode: bool) -> String {
        let location = window.location();
        if hash_mode {
            let hash = location.hash().unwrap_or_default();
            return ensure_leading_slash(hash.trim_start_matches('#'));
        }
        let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        format!("{}{}{}", ensure_leading_slash(strip_base(&pathname, base)), search, hash)
    }
}

impl History for BrowserHistory {
    fn location(&self) -> String {
        Self::read_location(&self.window, &self.base, self.hash_mode)
    }

    fn push(&self, location: &str) -> Result<(), RouteError> {
        self.history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&self.create_href(location)))
            .map_err(history_error)
    }

    fn replace(&self, location: &str) -> Result<(), RouteError> {
        self.history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(&self.create_href(location)))
            .map_err(history_error)
    }

    fn go(&self, delta: i32) -> Result<(), RouteError> {
        self.history()?.go_with_delta(delta).map_err(history_error)
    }

    fn listen(&self, on_pop: PopListener) -> Result<(), RouteError> {
        if self.listening.replace(true) {
            log::warn!("⚠️ [HISTORY] popstate ya registrado, se ignora");
            return Ok(());
        }

        let window = self.window.clone();
        let base = self.base.clone();
        let hash_mode = self.hash_mode;
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            on_pop(Self::read_location(&window, &base, hash_mode));
        }) as Box<dyn FnMut(web_sys::Event)>);

        self.window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .map_err(history_error)?;
        // Listener global registrado una sola vez, vive tanto como la pestaña
        closure.forget();
        Ok(())
    }

    fn create_href(&self, location: &str) -> String {
        let location = ensure_leading_slash(location);
        if self.hash_mode {
            format!("{}#{}", self.base, location)
        } else {
            format!("{}{}", self.base, location)
        }
    }
}

/// Prefijo de los href en modo hash. Sin base explícita se usa el pathname de la página,
/// así `/index.html` sigue siendo `/index.html#/ruta` tras un `pushState`.
pub fn hash_base(base: &str, pathname: &str) -> String {
    let base = normalize_base(base);
    if !base.is_empty() {
        return format!("{}/", base);
    }
    if pathname.is_empty() {
        "/".to_string()
    } else {
        pathname.to_string()
    }
}

/// Historial en memoria: no toca la URL. Para tests y hosts sin navegador.
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    position: Cell<usize>,
    listener: RefCell<Option<PopListener>>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: RefCell::new(vec![ensure_leading_slash(initial)]),
            position: Cell::new(0),
            listener: RefCell::new(None),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries.borrow()[self.position.get()].clone()
    }

    fn push(&self, location: &str) -> Result<(), RouteError> {
        let mut entries = self.entries.borrow_mut();
        let next = self.position.get() + 1;
        // Una entrada nueva descarta el "forward"
        entries.truncate(next);
        entries.push(ensure_leading_slash(location));
        self.position.set(next);
        Ok(())
    }

    fn replace(&self, location: &str) -> Result<(), RouteError> {
        self.entries.borrow_mut()[self.position.get()] = ensure_leading_slash(location);
        Ok(())
    }

    fn go(&self, delta: i32) -> Result<(), RouteError> {
        let len = self.entries.borrow().len() as i64;
        let target = self.position.get() as i64 + i64::from(delta);
        if delta == 0 || target < 0 || target >= len {
            return Ok(());
        }
        self.position.set(target as usize);

        let location = self.location();
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(location);
        }
        Ok(())
    }

    fn listen(&self, on_pop: PopListener) -> Result<(), RouteError> {
        *self.listener.borrow_mut() = Some(on_pop);
        Ok(())
    }

    fn create_href(&self, location: &str) -> String {
        ensure_leading_slash(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn memory_push_truncates_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push("/new-page").unwrap();
        history.push("/configurator").unwrap();
        history.go(-2).unwrap();
        assert_eq!(history.location(), "/");

        history.push("new-page").unwrap();
        assert_eq!(history.location(), "/new-page");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn memory_go_notifies_listener_and_ignores_out_of_range() {
        let history = MemoryHistory::new("/");
        history.push("/new-page").unwrap();

        let popped = Rc::new(RefCell::new(Vec::new()));
        let sink = popped.clone();
        history.listen(Box::new(move |loc| sink.borrow_mut().push(loc))).unwrap();

        history.go(-1).unwrap();
        history.go(-1).unwrap();
        history.go(1).unwrap();
        assert_eq!(*popped.borrow(), vec!["/".to_string(), "/new-page".to_string()]);
    }

    #[test]
    fn hash_base_keeps_the_page_pathname() {
        assert_eq!(hash_base("", "/index.html"), "/index.html");
        assert_eq!(hash_base("", "/"), "/");
        assert_eq!(hash_base("", ""), "/");
        assert_eq!(hash_base("/shop/", "/index.html"), "/shop/");
        assert_eq!(hash_base("shop", "/"), "/shop/");
    }

    #[test]
    fn memory_replace_keeps_length() {
        let history = MemoryHistory::new("/");
        history.replace("/configurator").unwrap();
        assert_eq!(history.location(), "/configurator");
        assert_eq!(history.len(), 1);
        assert_eq!(history.create_href("configurator"), "/configurator");
    }
}
