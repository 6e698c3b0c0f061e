/// One entry of a route table.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<P> {
    /// Path matched by the navigator, e.g. `/todolist`
    pub path: &'static str,

    /// Name used for named navigation
    pub name: &'static str,

    /// Page component rendered for this path
    pub page: P,
}

impl<P> Route<P> {
    /// Creates a route entry.
    pub const fn new(path: &'static str, name: &'static str, page: P) -> Self {
        Route { path, name, page }
    }
}

/// How the navigator reflects the current route.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// Real URL paths through the browser history API
    #[default]
    Web,
    /// Paths kept after `#` in the URL
    Hash,
    /// Kept in memory only, the URL never changes
    Memory,
}
