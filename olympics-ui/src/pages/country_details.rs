//! Country Details Page
//!
//! Entries, medals and athletes for the country in the route.

use leptos::*;
use leptos_router::*;

use olympics::{derive_detail, DetailStatus, DetailViewModel};

use crate::components::{ErrorPanel, Loading, MetricCard};
use crate::state::GlobalState;

/// Country detail page component
#[component]
pub fn CountryDetails() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let snapshot = state.snapshot;
    let params = use_params_map();

    // Re-derived whenever the route id or the store changes
    let route_id = create_memo(move |_| params.with(|p| p.get("id").cloned()));
    let detail = create_memo(move |_| {
        let id = route_id.get();
        snapshot.with(|s| derive_detail(id.as_deref(), s))
    });

    view! {
        <div class="space-y-8">
            {move || {
                let detail = detail.get();
                match detail.status {
                    DetailStatus::Loading => view! { <Loading /> }.into_view(),
                    DetailStatus::Error => view! {
                        <ErrorPanel message="Olympic data could not be loaded." />
                    }.into_view(),
                    DetailStatus::NotFound => view! { <CountryNotFound /> }.into_view(),
                    DetailStatus::Ready => view! { <CountryReady detail=detail /> }.into_view(),
                }
            }}
        </div>
    }
}

#[component]
fn CountryNotFound() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <h1 class="text-2xl font-bold mb-2">"Country not found"</h1>
            <p class="text-slate-500 mb-6">"No country matches this address."</p>
            <A href="/" class="text-sky-700 hover:underline">"Back to the medals chart"</A>
        </div>
    }
}

#[component]
fn CountryReady(detail: DetailViewModel) -> impl IntoView {
    let metrics = detail.metrics;

    view! {
        <div class="flex items-center justify-between">
            <h1 class="text-3xl font-bold">{detail.country_name}</h1>
            <A href="/" class="text-sky-700 hover:underline">"← Back"</A>
        </div>

        <div class="flex flex-wrap justify-center gap-4">
            <MetricCard label="Number of entries" value=metrics.entries as u64 />
            <MetricCard label="Total number medals" value=metrics.medals />
            <MetricCard label="Total number of athletes" value=metrics.athletes />
        </div>

        <div class="bg-white rounded-lg border border-slate-200 overflow-x-auto">
            <table class="w-full text-sm">
                <thead class="bg-slate-100 text-slate-600">
                    <tr>
                        <th class="text-left px-4 py-2">"Year"</th>
                        <th class="text-left px-4 py-2">"City"</th>
                        <th class="text-right px-4 py-2">"Medals"</th>
                        <th class="text-right px-4 py-2">"Athletes"</th>
                    </tr>
                </thead>
                <tbody>
                    {detail
                        .timeline
                        .into_iter()
                        .map(|edition| view! {
                            <tr class="border-t border-slate-100">
                                <td class="px-4 py-2">{edition.year}</td>
                                <td class="px-4 py-2">{edition.city}</td>
                                <td class="px-4 py-2 text-right">{edition.medals}</td>
                                <td class="px-4 py-2 text-right">{edition.athletes}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
