//! App Root Component
//!
//! Router plus the layout that keeps the navbar beside the routed page.

use hr360::routing::Page;
use leptos::*;
use leptos_router::*;

use crate::components::Navbar;
use crate::pages::{Interface, Placeholder};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="flex bg-[#E5E5E5]">
                // Navigation sidebar, rendered for every route
                <Navbar />

                // Routed content. Unmatched paths render nothing.
                <Routes>
                    <Route path=Page::Interface.path() view=Interface />
                    <Route
                        path=Page::About.path()
                        view=|| view! { <Placeholder page=Page::About /> }
                    />
                    <Route
                        path=Page::Services.path()
                        view=|| view! { <Placeholder page=Page::Services /> }
                    />
                    <Route
                        path=Page::Contact.path()
                        view=|| view! { <Placeholder page=Page::Contact /> }
                    />
                </Routes>
            </div>
        </Router>
    }
}
