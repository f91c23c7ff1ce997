//! Sidebar Navbar
//!
//! Vertical link list with exactly one highlighted entry. Highlighting is
//! owned by the navbar and changes only when a link is clicked.

use hr360::nav::{self, ActiveSelection, NavLink, SelectionSeed};
use leptos::*;
use leptos_router::*;

use super::{Icon, NavbarHeader};

/// Initial selection policy, fixed at build time through `HR360_SELECTION_SEED`
fn selection_seed() -> SelectionSeed {
    option_env!("HR360_SELECTION_SEED")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

/// Navigation sidebar
#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let selection = create_rw_signal(ActiveSelection::new(
        selection_seed(),
        &location.pathname.get_untracked(),
    ));

    view! {
        <div class="flex flex-col gap-2 p-5 h-screen justify-start items-start px-9">
            <NavbarHeader />
            <div class="flex flex-col justify-center items-start gap-3 w-[230px]">
                {nav::links()
                    .iter()
                    .map(|link| view! { <NavEntry link=link selection=selection /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One sidebar link
#[component]
fn NavEntry(
    link: &'static NavLink,
    selection: RwSignal<ActiveSelection>,
) -> impl IntoView {
    let is_active = move || selection.with(|s| s.is_active(link.value));

    let on_click = move |_| {
        selection.update(|s| {
            s.activate(link.value);
        });
    };

    view! {
        // The router intercepts plain anchor clicks for client-side navigation
        <a
            href=link.to
            class="nav-link flex items-center gap-3 w-full px-4 py-3 rounded-xl"
            class:active=is_active
            on:click=on_click
        >
            <span class="nav-icon flex items-center justify-center w-8 h-8 rounded-lg">
                <Icon icon=link.icon.clone() />
            </span>
            <span>{link.name}</span>
        </a>
    }
}
