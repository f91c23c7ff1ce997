//! Sidebar Navigation
//!
//! Static link table plus the selection state the navbar owns.

pub mod links;
pub mod selection;

pub use links::{find_by_path, find_by_value, links, NavLink, DEFAULT_SELECTION};
pub use selection::{nav_items, ActiveSelection, NavItem, SelectionSeed};
