//! Home Page
//!
//! Games and country counts, and the medal pie chart.

use leptos::*;
use leptos_router::*;

use olympics::chart::color_for;
use olympics::{country_path, derive_home, HomeStatus, HomeViewModel};

use crate::components::{ErrorPanel, Loading, MetricCard, PieChart};
use crate::state::GlobalState;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let snapshot = state.snapshot;

    let status = create_memo(move |_| snapshot.with(HomeStatus::from_state));
    let model = create_memo(move |_| snapshot.with(derive_home).unwrap_or_default());

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold text-center">"Medals per Country"</h1>

            {move || match status.get() {
                HomeStatus::Loading => view! { <Loading /> }.into_view(),
                HomeStatus::Error => view! {
                    <ErrorPanel message="Olympic data could not be loaded." />
                }.into_view(),
                HomeStatus::Ready(home) => view! {
                    <div class="flex flex-wrap justify-center gap-4">
                        <MetricCard label="Number of JOs" value=home.total_participations as u64 />
                        <MetricCard label="Number of countries" value=home.country_count as u64 />
                    </div>

                    <div class="bg-white rounded-lg border border-slate-200 p-4">
                        <PieChart model=model />
                    </div>

                    <CountryList home=home />
                }.into_view(),
            }}
        </div>
    }
}

/// Country links with their slice color, for keyboard and screen readers
#[component]
fn CountryList(home: HomeViewModel) -> impl IntoView {
    if home.medal_series.is_empty() {
        return view! {
            <p class="text-center text-slate-500">"No countries to show."</p>
        }
        .into_view();
    }

    view! {
        <ul class="flex flex-wrap justify-center gap-4">
            {home
                .medal_series
                .into_iter()
                .enumerate()
                .map(|(index, slice)| {
                    view! {
                        <li>
                            <A
                                href=country_path(slice.country_id)
                                class="flex items-center space-x-2 text-sm hover:underline"
                            >
                                <span
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color_for(index))
                                />
                                <span>{slice.label}</span>
                            </A>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}
