//! Placeholder Page

use hr360::routing::Page;
use leptos::*;

/// Page that only shows its placeholder text
#[component]
pub fn Placeholder(page: Page) -> impl IntoView {
    view! {
        <section class="flex-1 p-5">{page.placeholder()}</section>
    }
}
