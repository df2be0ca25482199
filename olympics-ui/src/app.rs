//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{CountryDetails, Home};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Start the one and only fixture fetch
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    state.load_initial_data();

    view! {
        <Router>
            <div class="min-h-screen bg-slate-50 text-slate-800 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/country/:id" view=CountryDetails />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with data status
                <Footer />
            </div>
        </Router>
    }
}

/// Footer component showing the fixture status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white border-t border-slate-200 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                {move || {
                    let resolved = state.snapshot.with(|s| s.is_resolved());
                    match (resolved, state.country_count()) {
                        (false, _) => view! {
                            <div class="flex items-center space-x-2 text-slate-500">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading Olympic data..."</span>
                            </div>
                        }.into_view(),
                        (true, Some(count)) => view! {
                            <span class="flex items-center space-x-1 text-emerald-600">
                                <span class="w-2 h-2 bg-emerald-500 rounded-full" />
                                <span>{format!("{} countries loaded", count)}</span>
                            </span>
                        }.into_view(),
                        (true, None) => view! {
                            <span class="flex items-center space-x-1 text-red-600">
                                <span class="w-2 h-2 bg-red-500 rounded-full" />
                                <span>"Data unavailable"</span>
                            </span>
                        }.into_view(),
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-sky-700 hover:bg-sky-800 text-white rounded-lg font-medium transition-colors"
            >
                "Back to the medals chart"
            </A>
        </div>
    }
}
