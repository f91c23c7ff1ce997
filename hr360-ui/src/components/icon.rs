//! Icon Component
//!
//! Resolves icon handles to Font Awesome glyphs.

use hr360::icon::{IconRef, IconResolver};
use leptos::*;

/// Maps icon handles to Font Awesome solid-style classes
pub struct FontAwesome;

impl IconResolver for FontAwesome {
    type Output = String;

    fn resolve(&self, icon: &IconRef) -> String {
        format!("fa-solid fa-{}", icon.name())
    }
}

/// Icon glyph
#[component]
pub fn Icon(
    icon: IconRef,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let classes = format!("{} {}", FontAwesome.resolve(&icon), class);

    view! {
        <i class=classes.trim_end().to_string() aria-hidden="true" />
    }
}
