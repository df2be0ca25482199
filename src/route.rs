//! Navigation surface
//!
//! Three logical routes: home (`/`), country detail (`/country/{id}`) and a
//! catch-all. The detail id stays opaque here; the detail deriver parses it.

/// A resolved location in the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Country(String),
    NotFound,
}

impl Route {
    /// Resolve a path. Leading and trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }

        let mut segments = trimmed.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("country"), Some(id), None) if !id.is_empty() => Route::Country(id.to_string()),
            _ => Route::NotFound,
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Country(id) => format!("/country/{}", id),
            Route::NotFound => "/not-found".to_string(),
        }
    }
}

/// Detail path for a country id
pub fn country_path(id: i64) -> String {
    Route::Country(id.to_string()).path()
}
