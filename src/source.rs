//! Fixture Sources
//!
//! The fixture is fetched exactly once, from wherever the host provides it.
//! Native builds read it from disk or over HTTP; the browser dashboard
//! implements [`FixtureSource`] on top of its own fetch client.

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::models::Country;

/// Something that can produce the country collection.
///
/// Futures are not required to be `Send` so that browser fetch clients can
/// implement the trait.
#[async_trait(?Send)]
pub trait FixtureSource {
    /// Human-readable location, used in logs
    fn describe(&self) -> String;

    /// Fetch and decode the whole collection
    async fn fetch(&self) -> FetchResult<Vec<Country>>;
}

/// In-memory source with a fixed outcome
#[derive(Debug, Clone)]
pub enum StaticSource {
    /// Always yields these records
    Ready(Vec<Country>),
    /// Always fails with a network error carrying this message
    Unavailable(String),
}

#[async_trait(?Send)]
impl FixtureSource for StaticSource {
    fn describe(&self) -> String {
        match self {
            StaticSource::Ready(countries) => format!("static ({} countries)", countries.len()),
            StaticSource::Unavailable(_) => "static (unavailable)".to_string(),
        }
    }

    async fn fetch(&self) -> FetchResult<Vec<Country>> {
        match self {
            StaticSource::Ready(countries) => Ok(countries.clone()),
            StaticSource::Unavailable(msg) => Err(FetchError::Network(msg.clone())),
        }
    }
}

#[cfg(feature = "cli")]
pub use native::{source_from_location, FileSource, HttpSource};

#[cfg(feature = "cli")]
mod native {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    use crate::models::parse_fixture;

    /// Reads the fixture from a local JSON file
    #[derive(Debug, Clone)]
    pub struct FileSource {
        path: PathBuf,
    }

    impl FileSource {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }
    }

    #[async_trait(?Send)]
    impl FixtureSource for FileSource {
        fn describe(&self) -> String {
            self.path.display().to_string()
        }

        async fn fetch(&self) -> FetchResult<Vec<Country>> {
            let content = tokio::fs::read_to_string(&self.path).await?;
            parse_fixture(&content)
        }
    }

    /// Fetches the fixture with a single HTTP GET
    pub struct HttpSource {
        client: reqwest::Client,
        url: String,
    }

    impl HttpSource {
        /// Create an HTTP source with a request timeout
        pub fn new(url: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            Ok(Self {
                client,
                url: url.into(),
            })
        }
    }

    #[async_trait(?Send)]
    impl FixtureSource for HttpSource {
        fn describe(&self) -> String {
            self.url.clone()
        }

        async fn fetch(&self) -> FetchResult<Vec<Country>> {
            let response = self.client.get(&self.url).send().await?;

            if !response.status().is_success() {
                return Err(FetchError::Status {
                    status: response.status().as_u16(),
                    url: self.url.clone(),
                });
            }

            let body = response.text().await?;
            parse_fixture(&body)
        }
    }

    /// Pick a source for a location string: `http(s)://` URLs go over the
    /// network, anything else is treated as a file path.
    pub fn source_from_location(
        location: &str,
        timeout: Duration,
    ) -> FetchResult<Box<dyn FixtureSource>> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Box::new(HttpSource::new(location, timeout)?))
        } else {
            Ok(Box::new(FileSource::new(location)))
        }
    }
}
