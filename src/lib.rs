//! # Olympics
//!
//! Olympic Games participation dashboard: per-country medal and athlete
//! aggregates, and a medal pie chart with callout labels.
//!
//! ## Modules
//!
//! - [`models`]: Country and participation records
//! - [`store`]: Single-snapshot data store with latest-value subscriptions
//! - [`source`]: Where the fixture is fetched from
//! - [`view_model`]: Home summary and country detail derivations
//! - [`route`]: Home, country detail and catch-all routes
//! - [`chart`]: Pie layout, callout geometry and drawing
//! - `config`: TOML configuration (`cli` feature)
//!
//! The library itself is target-independent and is shared by the `olympics`
//! CLI and the browser dashboard.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use olympics::source::StaticSource;
//! use olympics::store::OlympicStore;
//! use olympics::view_model::{derive_detail, derive_home};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = OlympicStore::new();
//!     let state = store.load(&StaticSource::Ready(Vec::new())).await;
//!
//!     if let Some(home) = derive_home(&state) {
//!         println!("{} countries", home.country_count);
//!     }
//!
//!     let detail = derive_detail(Some("1"), &state);
//!     println!("status: {}", detail.status);
//! }
//! ```

pub mod chart;
#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod models;
pub mod route;
pub mod source;
pub mod store;
pub mod view_model;

// Re-export top-level types for convenience
pub use error::{FetchError, FetchResult};
pub use models::{parse_fixture, Country, Participation};
pub use route::{country_path, Route};
pub use source::{FixtureSource, StaticSource};
pub use store::{CountryLookup, CountrySubscription, OlympicStore, StoreState, StoreSubscription};
pub use view_model::{
    derive_detail, derive_home, tooltip_text, CountryMetrics, DetailDeriver, DetailStatus,
    DetailViewModel, HomeStatus, HomeViewModel, MedalSlice,
};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, FixtureConfig, LoggingConfig};
