//! HR.360 Shell
//!
//! Dashboard shell built with Leptos (WASM).
//!
//! # Features
//!
//! - Sidebar navigation with a single highlighted entry
//! - Client-side routing to placeholder pages
//! - Chart container with themed series colors, tooltip and legend
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Navigation tables and chart adapter logic come from the
//! `hr360` core crate; this crate only turns its render models into DOM.

use leptos::*;

mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
