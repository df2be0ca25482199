//! Olympic Data Store
//!
//! Holds the single fetched country collection behind a latest-value channel.
//!
//! ```text
//!   Unloaded ──load() ok──▶ Loaded(records)
//!       │
//!       └────load() err──▶ Failed
//! ```
//!
//! The transition happens once per store. The snapshot is replaced as a
//! whole and never mutated, so every reader sees a complete value.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::FetchResult;
use crate::models::Country;
use crate::source::FixtureSource;

/// Current content of the store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreState {
    /// Fetch not resolved yet
    Unloaded,
    /// Fetch failed; no data will ever arrive
    Failed,
    /// The full collection, in source order
    Loaded(Arc<[Country]>),
}

impl StoreState {
    /// Build a loaded state from records
    pub fn loaded(countries: Vec<Country>) -> Self {
        StoreState::Loaded(countries.into())
    }

    /// Records when loaded
    pub fn countries(&self) -> Option<&[Country]> {
        match self {
            StoreState::Loaded(countries) => Some(countries),
            _ => None,
        }
    }

    /// Whether the fetch has resolved, successfully or not
    pub fn is_resolved(&self) -> bool {
        !matches!(self, StoreState::Unloaded)
    }

    /// Look a country up by id; unloaded and failed states pass through
    pub fn lookup(&self, id: i64) -> CountryLookup {
        match self {
            StoreState::Unloaded => CountryLookup::Unloaded,
            StoreState::Failed => CountryLookup::Failed,
            StoreState::Loaded(countries) => countries
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .map(CountryLookup::Found)
                .unwrap_or(CountryLookup::NotFound),
        }
    }
}

/// Result of looking a single country up in the store
#[derive(Debug, Clone, PartialEq)]
pub enum CountryLookup {
    Unloaded,
    Failed,
    NotFound,
    Found(Country),
}

/// Owner of the canonical country snapshot
pub struct OlympicStore {
    tx: watch::Sender<StoreState>,
    /// Set by the first `load`; later callers wait for its outcome
    fetching: AtomicBool,
}

impl Default for OlympicStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OlympicStore {
    /// Create an empty store in the `Unloaded` state
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(StoreState::Unloaded);
        Self {
            tx,
            fetching: AtomicBool::new(false),
        }
    }

    /// Latest value, without subscribing
    pub fn snapshot(&self) -> StoreState {
        self.tx.borrow().clone()
    }

    /// Subscribe to the store.
    ///
    /// The first [`StoreSubscription::next`] yields the latest value at once;
    /// later calls wait for the next change.
    pub fn current(&self) -> StoreSubscription {
        StoreSubscription {
            rx: self.tx.subscribe(),
            primed: false,
        }
    }

    /// Subscribe to a single country
    pub fn by_id(&self, id: i64) -> CountrySubscription {
        CountrySubscription {
            inner: self.current(),
            id,
        }
    }

    /// Fetch the fixture once and publish the outcome.
    ///
    /// Failures are logged and published as [`StoreState::Failed`]; they are
    /// never returned to the caller. Calling this on a resolved store does
    /// nothing and returns the existing state. Overlapping calls share the
    /// first call's fetch.
    pub async fn load<S>(&self, source: &S) -> StoreState
    where
        S: FixtureSource + ?Sized,
    {
        if self.tx.borrow().is_resolved() {
            tracing::warn!(source = %source.describe(), "Store already resolved, ignoring load");
            return self.snapshot();
        }

        if self.fetching.swap(true, Ordering::AcqRel) {
            tracing::debug!(source = %source.describe(), "Fetch already in flight, waiting");
            let mut subscription = self.current();
            while let Some(state) = subscription.next().await {
                if state.is_resolved() {
                    return state;
                }
            }
            return self.snapshot();
        }

        tracing::debug!(source = %source.describe(), "Fetching fixture");
        let result = source.fetch().await;
        self.resolve(&source.describe(), result)
    }

    /// Publish a fetch outcome. Only the first resolution is applied.
    pub fn resolve(&self, origin: &str, result: FetchResult<Vec<Country>>) -> StoreState {
        let next = match result {
            Ok(countries) => {
                tracing::info!(source = %origin, countries = countries.len(), "Fixture loaded");
                StoreState::loaded(countries)
            }
            Err(e) => {
                tracing::error!(source = %origin, error = %e, "Failed to load fixture");
                StoreState::Failed
            }
        };

        let applied = self.tx.send_if_modified(|state| {
            if state.is_resolved() {
                false
            } else {
                *state = next;
                true
            }
        });

        if !applied {
            tracing::warn!(source = %origin, "Store already resolved, dropping result");
        }

        self.snapshot()
    }
}

/// Stream of store values
pub struct StoreSubscription {
    rx: watch::Receiver<StoreState>,
    primed: bool,
}

impl StoreSubscription {
    /// Next value: the latest one on the first call, then each change.
    ///
    /// Returns `None` once the store is gone.
    pub async fn next(&mut self) -> Option<StoreState> {
        if !self.primed {
            self.primed = true;
            return Some(self.rx.borrow_and_update().clone());
        }

        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Latest value without waiting
    pub fn latest(&self) -> StoreState {
        self.rx.borrow().clone()
    }
}

/// Store stream narrowed to one country id
pub struct CountrySubscription {
    inner: StoreSubscription,
    id: i64,
}

impl CountrySubscription {
    pub async fn next(&mut self) -> Option<CountryLookup> {
        let state = self.inner.next().await?;
        Some(state.lookup(self.id))
    }

    pub fn latest(&self) -> CountryLookup {
        self.inner.latest().lookup(self.id)
    }
}
