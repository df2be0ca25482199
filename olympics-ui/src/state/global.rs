//! Global Application State
//!
//! The shared [`OlympicStore`] mirrored into a Leptos signal.

use leptos::*;
use std::rc::Rc;

use olympics::{FixtureSource, OlympicStore, StoreState};

use crate::api::HttpFixture;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Canonical snapshot owner
    pub store: Rc<OlympicStore>,
    /// Latest store value, updated on every store change
    pub snapshot: RwSignal<StoreState>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let store = Rc::new(OlympicStore::new());
    let snapshot = create_rw_signal(StoreState::Unloaded);

    // Forward every store value into the signal
    let mut subscription = store.current();
    spawn_local(async move {
        while let Some(state) = subscription.next().await {
            snapshot.set(state);
        }
    });

    provide_context(GlobalState { store, snapshot });
}

impl GlobalState {
    /// Fetch the fixture once. A failure is logged to the console and
    /// published as [`StoreState::Failed`].
    pub fn load_initial_data(&self) {
        let store = Rc::clone(&self.store);
        spawn_local(async move {
            let source = HttpFixture::default();
            let result = source.fetch().await;

            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Failed to load Olympic data from {}: {}", source.describe(), e).into(),
                );
            }

            store.resolve(&source.describe(), result);
        });
    }

    /// Number of loaded countries, if any
    pub fn country_count(&self) -> Option<usize> {
        self.snapshot.with(|state| state.countries().map(|c| c.len()))
    }
}
