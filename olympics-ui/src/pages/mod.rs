//! Pages
//!
//! Top-level page components for each route.

pub mod country_details;
pub mod home;

pub use country_details::CountryDetails;
pub use home::Home;
