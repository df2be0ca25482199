//! Navigation Component
//!
//! Header bar with the dashboard title.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-slate-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏅"</span>
                        <span class="text-xl font-bold">"Olympic Games"</span>
                    </A>

                    <A
                        href="/"
                        class="px-4 py-2 rounded-lg text-slate-600 hover:text-slate-900 hover:bg-slate-100 transition-colors"
                        active_class="bg-slate-100 text-slate-900"
                        exact=true
                    >
                        "Medals"
                    </A>
                </div>
            </div>
        </nav>
    }
}
