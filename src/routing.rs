//! App Router Table
//!
//! The fixed set of client-side routes and their placeholder content.
//! Paths that match nothing resolve to `None` and render nothing.

use serde::Serialize;

/// A routed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Interface,
    About,
    Services,
    Contact,
}

impl Page {
    /// All pages in routing order
    pub const ALL: [Page; 4] = [Page::Interface, Page::About, Page::Services, Page::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Page::Interface => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Contact => "/contact",
        }
    }

    /// Placeholder content shown for the page
    pub fn placeholder(self) -> &'static str {
        match self {
            Page::Interface => "interface",
            Page::About => "about",
            Page::Services => "ser",
            Page::Contact => "cont",
        }
    }

    /// Match a location against the route table.
    ///
    /// Query and fragment are ignored, the path is percent-decoded, a single
    /// trailing slash is tolerated and matching is ASCII case-insensitive.
    pub fn resolve(location: &str) -> Option<Page> {
        let path = normalize(location);
        let page = Page::ALL
            .into_iter()
            .find(|page| page.path().eq_ignore_ascii_case(&path));
        if page.is_none() {
            tracing::trace!(location, "No route matched");
        }
        page
    }
}

/// Route table entry as exposed over the API
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub page: Page,
    pub path: &'static str,
    pub placeholder: &'static str,
}

/// The full route table
pub fn route_table() -> Vec<RouteEntry> {
    Page::ALL
        .into_iter()
        .map(|page| RouteEntry {
            page,
            path: page.path(),
            placeholder: page.placeholder(),
        })
        .collect()
}

fn normalize(location: &str) -> String {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let raw = &location[..end];

    let decoded = urlencoding::decode(raw)
        .map(|d| d.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    let mut path = if decoded.starts_with('/') {
        decoded
    } else {
        format!("/{}", decoded)
    };

    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}
