//! Page routing declarations.
//!
//! A [`RouteTable`](table::RouteTable) is pure data: it maps paths to named
//! pages and carries the history mode the navigator should use. Rendering and
//! navigation belong to the caller.

pub mod route;
pub mod table;
