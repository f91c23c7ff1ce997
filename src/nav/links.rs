//! Link Table
//!
//! The static sidebar navigation entries. Table order is display order.

use serde::Serialize;

use crate::icon::IconRef;

/// One sidebar navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Unique identifier, used as the selection value
    pub value: &'static str,
    /// Display name
    pub name: &'static str,
    /// Route path the link navigates to
    pub to: &'static str,
    /// Icon handle rendered next to the name
    pub icon: IconRef,
}

impl NavLink {
    const fn new(value: &'static str, name: &'static str, to: &'static str, icon: &'static str) -> Self {
        Self {
            value,
            name,
            to,
            icon: IconRef::named(icon),
        }
    }
}

/// Identifier selected when nothing else decides the initial selection
pub const DEFAULT_SELECTION: &str = "dashboard";

static LINKS: [NavLink; 7] = [
    NavLink::new("dashboard", "Dashboard", "/", "home"),
    NavLink::new("tables", "Tables", "/Tables", "table"),
    NavLink::new("billing", "Billing", "/Billing", "bank"),
    NavLink::new("rtl", "RTL", "/RTL", "chart-line"),
    NavLink::new("Profile", "Profile", "/Profile", "user"),
    NavLink::new("signIn", "Sign In", "/SignIn", "sign-in"),
    NavLink::new("signUp", "Sign Up", "/SignUp", "user-edit"),
];

/// All navigation links in display order
pub fn links() -> &'static [NavLink] {
    &LINKS
}

/// Find a link by its identifier
pub fn find_by_value(value: &str) -> Option<&'static NavLink> {
    LINKS.iter().find(|link| link.value == value)
}

/// Find the link pointing at an exact route path
pub fn find_by_path(path: &str) -> Option<&'static NavLink> {
    LINKS.iter().find(|link| link.to == path)
}
