//! HTTP Fixture Client
//!
//! Fetches the Olympic fixture with a single GET.

use async_trait::async_trait;
use gloo_net::http::Request;

use olympics::{parse_fixture, Country, FetchError, FetchResult, FixtureSource};

/// Location of the static fixture, served next to the app
pub const FIXTURE_URL: &str = "/assets/mock/olympic.json";

/// [`FixtureSource`] backed by the browser fetch API
pub struct HttpFixture {
    url: String,
}

impl HttpFixture {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpFixture {
    fn default() -> Self {
        Self::new(FIXTURE_URL)
    }
}

#[async_trait(?Send)]
impl FixtureSource for HttpFixture {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> FetchResult<Vec<Country>> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                url: self.url.clone(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_fixture(&body)
    }
}
