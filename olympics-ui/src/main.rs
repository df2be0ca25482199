//! Olympics Dashboard
//!
//! Olympic Games participation dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Medals per country pie chart with callout labels
//! - Per-country detail with entries, medals and athletes
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches a static JSON fixture once at start-up; all
//! derivation and chart geometry lives in the shared `olympics` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
