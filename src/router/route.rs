// ============================================================================
// ROUTE TABLE - Lista inmutable y validada de rutas
// ============================================================================

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::error::RouteError;
use crate::router::path::normalize_path;
use crate::views::View;

/// Una ruta: path literal → vista con nombre
pub struct Route {
    path: String,
    name: String,
    view: Rc<dyn View>,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: Rc<dyn View>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> &Rc<dyn View> {
        &self.view
    }

    /// Forma canónica del path, la que usa el matching
    pub fn normalized_path(&self) -> String {
        normalize_path(&self.path)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("view", &self.view.name())
            .finish()
    }
}

/// Tabla ordenada de rutas. Se valida una vez al construirla y no cambia después.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Rc<[Rc<Route>]>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        Self::validate(&routes)?;
        Ok(Self {
            routes: routes.into_iter().map(Rc::new).collect(),
        })
    }

    fn validate(routes: &[Route]) -> Result<(), RouteError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for route in routes {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath { path: route.path.clone() });
            }
            if route.name.trim().is_empty() {
                return Err(RouteError::EmptyName { path: route.path.clone() });
            }
            if !paths.insert(route.normalized_path()) {
                return Err(RouteError::DuplicatePath { path: route.path.clone() });
            }
            if !names.insert(route.name.as_str()) {
                return Err(RouteError::DuplicateName { name: route.name.clone() });
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Route>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rc<Route>> {
        self.routes.get(index)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Rc<Route>> {
        self.routes.iter().find(|route| route.name == name)
    }
}
