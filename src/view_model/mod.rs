//! View Models
//!
//! Pure derivations from a store snapshot to what each page displays.
//! They never suspend and never fail: loading, error and not-found are all
//! reported through status values.

pub mod detail;
pub mod home;

pub use detail::{
    derive_detail, parse_country_id, CountryMetrics, DetailDeriver, DetailStatus,
    DetailViewModel, EditionPoint,
};
pub use home::{derive_home, tooltip_text, HomeStatus, HomeViewModel, MedalSlice};
