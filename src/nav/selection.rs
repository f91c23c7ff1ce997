//! Active Selection
//!
//! Tracks which navigation entry is highlighted. Exactly one entry is active
//! at any time because the selection only ever holds a value from the table.

use serde::{Deserialize, Serialize};

use super::links::{self, NavLink, DEFAULT_SELECTION};

/// How the initial selection is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSeed {
    /// Always start on the dashboard entry, whatever the current route
    #[default]
    Fixed,
    /// Start on the entry whose path matches the current route
    FromRoute,
}

impl std::str::FromStr for SelectionSeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "from_route" | "from-route" => Ok(Self::FromRoute),
            other => Err(format!("unknown selection seed: {}", other)),
        }
    }
}

/// Currently highlighted navigation identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSelection {
    current: &'static str,
}

impl Default for ActiveSelection {
    fn default() -> Self {
        Self {
            current: DEFAULT_SELECTION,
        }
    }
}

impl ActiveSelection {
    /// Initial selection for a navbar mounted at `current_path`
    pub fn new(seed: SelectionSeed, current_path: &str) -> Self {
        match seed {
            SelectionSeed::Fixed => Self::default(),
            SelectionSeed::FromRoute => links::find_by_path(current_path)
                .map(|link| Self { current: link.value })
                .unwrap_or_default(),
        }
    }

    /// The highlighted identifier
    pub fn current(&self) -> &'static str {
        self.current
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.current == value
    }

    /// Activate a link by identifier.
    ///
    /// Returns the link so the caller can navigate to its path. Unknown
    /// identifiers leave the selection untouched.
    pub fn activate(&mut self, value: &str) -> Option<&'static NavLink> {
        let link = links::find_by_value(value)?;
        if self.current != link.value {
            tracing::debug!(from = self.current, to = link.value, "Navigation selection changed");
        }
        self.current = link.value;
        Some(link)
    }
}

/// Render model for a single navbar entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    #[serde(flatten)]
    pub link: &'static NavLink,
    pub active: bool,
}

/// Render model for the whole navbar, in table order
pub fn nav_items(selection: &ActiveSelection) -> Vec<NavItem> {
    links::links()
        .iter()
        .map(|link| NavItem {
            link,
            active: selection.is_active(link.value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_values(selection: &ActiveSelection) -> Vec<&'static str> {
        nav_items(selection)
            .into_iter()
            .filter(|item| item.active)
            .map(|item| item.link.value)
            .collect()
    }

    #[test]
    fn test_default_selection() {
        let selection = ActiveSelection::default();
        assert_eq!(selection.current(), "dashboard");
        assert_eq!(active_values(&selection), vec!["dashboard"]);
    }

    #[test]
    fn test_exactly_one_active_after_each_activation() {
        let mut selection = ActiveSelection::default();
        for link in links::links() {
            let activated = selection.activate(link.value).unwrap();
            assert_eq!(activated.to, link.to);
            assert_eq!(active_values(&selection), vec![link.value]);
        }
    }

    #[test]
    fn test_unknown_value_keeps_selection() {
        let mut selection = ActiveSelection::default();
        selection.activate("billing");
        assert!(selection.activate("nope").is_none());
        assert_eq!(selection.current(), "billing");
    }

    #[test]
    fn test_fixed_seed_ignores_route() {
        let selection = ActiveSelection::new(SelectionSeed::Fixed, "/Billing");
        assert_eq!(selection.current(), "dashboard");
    }

    #[test]
    fn test_route_seed() {
        let selection = ActiveSelection::new(SelectionSeed::FromRoute, "/Billing");
        assert_eq!(selection.current(), "billing");

        let fallback = ActiveSelection::new(SelectionSeed::FromRoute, "/about");
        assert_eq!(fallback.current(), "dashboard");
    }

    #[test]
    fn test_seed_from_str() {
        assert_eq!("fixed".parse::<SelectionSeed>(), Ok(SelectionSeed::Fixed));
        assert_eq!("From-Route".parse::<SelectionSeed>(), Ok(SelectionSeed::FromRoute));
        assert!("sticky".parse::<SelectionSeed>().is_err());
    }
}
