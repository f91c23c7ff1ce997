//! Pages
//!
//! Top-level page components for each route.

pub mod interface;
pub mod placeholder;

pub use interface::Interface;
pub use placeholder::Placeholder;
