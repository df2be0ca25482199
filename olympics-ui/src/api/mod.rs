//! Fixture fetching over HTTP.

pub mod client;

pub use client::HttpFixture;
