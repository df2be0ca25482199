//! Metric Card Component
//!
//! A labelled number, used for the home and detail summaries.

use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Caption above the value
    #[prop(into)]
    label: String,
    value: u64,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg px-6 py-4 border border-slate-200 text-center min-w-[10rem]">
            <span class="text-slate-500 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{value}</div>
        </div>
    }
}
