use std::fmt;
use std::slice;

use crate::router::route::{HistoryMode, Route};

/// Ordered list of routes plus the history mode.
///
/// Routes keep declaration order; lookups return the first match.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<P> {
    history: HistoryMode,
    routes: Vec<Route<P>>,
}

impl<P> Default for RouteTable<P> {
    fn default() -> Self {
        RouteTable {
            history: HistoryMode::default(),
            routes: Vec::new(),
        }
    }
}

impl<P> RouteTable<P> {
    /// Empty table using the given history mode.
    pub fn new(history: HistoryMode) -> Self {
        RouteTable {
            history,
            routes: Vec::new(),
        }
    }

    /// Appends a route.
    pub fn route(mut self, path: &'static str, name: &'static str, page: P) -> Self {
        self.routes.push(Route::new(path, name, page));
        self
    }

    /// History mode the navigator should use.
    pub fn history(&self) -> HistoryMode {
        self.history
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route<P>] {
        &self.routes
    }

    /// First route whose path equals `path` exactly.
    pub fn find_by_path(&self, path: &str) -> Option<&Route<P>> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// First route named `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Route<P>> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> slice::Iter<'_, Route<P>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a, P> IntoIterator for &'a RouteTable<P> {
    type Item = &'a Route<P>;
    type IntoIter = slice::Iter<'a, Route<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pages of the to-do application.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page
    Home,
    /// Task list with the task form
    ToDoList,
}

impl Page {
    /// Name of the component that renders the page.
    pub fn component(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::ToDoList => "ToDoList",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component())
    }
}

/// The application's route table.
///
/// # Examples
/// ```rust
/// use todo_form::router::{route::HistoryMode, table::{app_routes, Page}};
///
/// let routes = app_routes();
/// assert_eq!(routes.history(), HistoryMode::Web);
/// assert_eq!(routes.find_by_name("home").map(|r| r.path), Some("/"));
/// assert_eq!(routes.find_by_path("/todolist").map(|r| r.page), Some(Page::ToDoList));
/// ```
pub fn app_routes() -> RouteTable<Page> {
    RouteTable::new(HistoryMode::Web)
        .route("/", "home", Page::Home)
        .route("/todolist", "todolist", Page::ToDoList)
}
