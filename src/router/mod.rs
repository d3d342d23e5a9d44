// ============================================================================
// ROUTER - Resolución de ubicaciones y navegación
// ============================================================================
// El router es dueño de la URL durante toda la sesión:
// - Resuelve cada ubicación contra la tabla (primer match en orden de tabla)
// - Publica la ubicación actual por `on_change`
// - Navega con push/replace/back/forward sobre la estrategia de historial
// ============================================================================

pub mod history;
pub mod link;
pub mod path;
pub mod route;

pub use history::{create_history, BrowserHistory, History, MemoryHistory};
pub use link::{refresh_active_links, router_link};
pub use route::{Route, RouteTable};

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::app::{App, Plugin};
use crate::error::{AppError, RouteError};
use crate::state::ReactiveState;
use path::{ensure_leading_slash, normalize_path, split_location};

/// Ubicación resuelta. `matched` es `None` si ninguna ruta coincide.
#[derive(Debug, Clone)]
pub struct ResolvedLocation {
    pub full_path: String,
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
    pub matched: Option<Rc<Route>>,
}

impl ResolvedLocation {
    pub fn name(&self) -> Option<&str> {
        self.matched.as_ref().map(|route| route.name())
    }

    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }

    /// Misma ubicación a efectos de navegación: path normalizado, query y hash iguales
    pub fn same_place(&self, other: &ResolvedLocation) -> bool {
        normalize_path(&self.path) == normalize_path(&other.path)
            && self.query == other.query
            && self.hash == other.hash
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// La ubicación cambió y se notificó a los subscribers
    Changed,
    /// Ya estábamos ahí; no hay re-render
    Duplicated,
}

#[derive(Clone, Copy)]
enum NavigationKind {
    Push,
    Replace,
}

pub struct Router {
    table: RouteTable,
    history: Box<dyn History>,
    current: ReactiveState<Option<ResolvedLocation>>,
    started: Cell<bool>,
}

impl Router {
    pub fn new(table: RouteTable, history: Box<dyn History>) -> Rc<Self> {
        Rc::new(Self {
            table,
            history,
            current: ReactiveState::new(None),
            started: Cell::new(false),
        })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolver una ubicación sin navegar
    pub fn resolve(&self, location: &str) -> ResolvedLocation {
        let full_path = ensure_leading_slash(location);
        let (path, query, hash) = split_location(&full_path);
        let (path, query, hash) = (path.to_string(), query.map(str::to_string), hash.map(str::to_string));
        let wanted = normalize_path(&path);
        let matched = self
            .table
            .iter()
            .find(|route| route.normalized_path() == wanted)
            .cloned();

        ResolvedLocation {
            full_path,
            path,
            query,
            hash,
            matched,
        }
    }

    /// Ubicación actual; `None` antes de `start()`
    pub fn current(&self) -> Option<ResolvedLocation> {
        self.current.get()
    }

    pub fn is_started(&self) -> bool {
        self.started.get()
    }

    /// Hook tras cada navegación
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(&ResolvedLocation) + 'static,
    {
        self.current.subscribe(move |location| {
            if let Some(location) = location {
                callback(location);
            }
        });
    }

    /// Resolver la ubicación inicial y escuchar el historial. Solo la primera llamada cuenta.
    pub fn start(self: &Rc<Self>) -> Result<(), RouteError> {
        if self.started.replace(true) {
            log::warn!("⚠️ [ROUTER] start() llamado dos veces, se ignora");
            return Ok(());
        }

        let router: Weak<Router> = Rc::downgrade(self);
        self.history.listen(Box::new(move |location| {
            if let Some(router) = router.upgrade() {
                log::info!("🔙 [ROUTER] popstate → {}", location);
                router.commit(&location);
            }
        }))?;

        let initial = self.history.location();
        log::info!("🧭 [ROUTER] Ubicación inicial: {}", initial);
        self.commit(&initial);
        Ok(())
    }

    pub fn push(&self, location: &str) -> Result<NavigationOutcome, RouteError> {
        self.navigate(location, NavigationKind::Push)
    }

    pub fn replace(&self, location: &str) -> Result<NavigationOutcome, RouteError> {
        self.navigate(location, NavigationKind::Replace)
    }

    /// Navegar por nombre de ruta
    pub fn push_named(&self, name: &str) -> Result<NavigationOutcome, RouteError> {
        let path = self
            .table
            .find_by_name(name)
            .map(|route| route.path().to_string())
            .ok_or_else(|| RouteError::UnknownName { name: name.to_string() })?;
        self.push(&path)
    }

    pub fn back(&self) -> Result<(), RouteError> {
        self.history.go(-1)
    }

    pub fn forward(&self) -> Result<(), RouteError> {
        self.history.go(1)
    }

    /// href que el navegador mostrará para una ubicación
    pub fn href(&self, location: &str) -> String {
        self.history.create_href(location)
    }

    fn navigate(&self, location: &str, kind: NavigationKind) -> Result<NavigationOutcome, RouteError> {
        let target = ensure_leading_slash(location);
        let wanted = self.resolve(&target);
        let duplicated = self
            .current
            .with(|current| current.as_ref().map(|c| c.same_place(&wanted)).unwrap_or(false));
        if duplicated {
            log::info!("↩️ [ROUTER] Navegación duplicada a {}, se ignora", target);
            return Ok(NavigationOutcome::Duplicated);
        }

        match kind {
            NavigationKind::Push => self.history.push(&target)?,
            NavigationKind::Replace => self.history.replace(&target)?,
        }
        self.commit(&target);
        Ok(NavigationOutcome::Changed)
    }

    fn commit(&self, location: &str) {
        let resolved = self.resolve(location);
        match resolved.name() {
            Some(name) => log::info!("✅ [ROUTER] {} → {}", resolved.full_path, name),
            None => log::warn!("⚠️ [ROUTER] No match found for location with path \"{}\"", resolved.path),
        }
        self.current.set(Some(resolved));
    }
}

impl Plugin for Rc<Router> {
    fn name(&self) -> &str {
        "router"
    }

    fn install(self, app: &mut App) -> Result<(), AppError> {
        app.set_router(self)
    }
}
