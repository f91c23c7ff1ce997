//! Navbar Header
//!
//! Logo and product name.

use leptos::*;

#[component]
pub fn NavbarHeader() -> impl IntoView {
    view! {
        <div class="flex gap-3 p-3 justify-center items-center">
            <img height="20" src="/assets/logo.svg" alt="" />
            <p>"HR.360"</p>
        </div>
    }
}
