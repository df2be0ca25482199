//! Loading Component
//!
//! Loading spinner and the error panel.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Message shown when the fixture could not be loaded
#[component]
pub fn ErrorPanel(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 rounded-lg p-6 text-center">
            <p class="font-medium">{message}</p>
            <p class="text-sm mt-2">"Reload the page to try again."</p>
        </div>
    }
}
