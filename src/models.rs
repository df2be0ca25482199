//! Core data types for the Olympic participation fixture
//!
//! - `Country`: one country with its ordered list of participations
//! - `Participation`: one edition of the Games attended by a country
//!
//! The JSON shape follows the fixture file: the country name lives under the
//! `country` key and participation fields are camelCase.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{FetchError, FetchResult};

/// A country and every Games edition it took part in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    /// Unique identifier within the collection
    pub id: i64,
    /// Display name
    #[serde(rename = "country")]
    pub name: String,
    /// Participations in source order
    #[serde(default)]
    pub participations: Vec<Participation>,
}

/// One participation of a country in a Games edition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub id: i64,
    pub year: i32,
    pub city: String,
    pub medals_count: u32,
    pub athlete_count: u32,
}

impl Participation {
    /// Create a participation record
    pub fn new(id: i64, year: i32, city: impl Into<String>, medals: u32, athletes: u32) -> Self {
        Self {
            id,
            year,
            city: city.into(),
            medals_count: medals,
            athlete_count: athletes,
        }
    }
}

impl Country {
    /// Create a country with no participations
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            participations: Vec::new(),
        }
    }

    /// Builder method: append a participation
    pub fn participation(mut self, participation: Participation) -> Self {
        self.participations.push(participation);
        self
    }

    /// Total medals over every participation
    pub fn medal_total(&self) -> u64 {
        self.participations
            .iter()
            .map(|p| u64::from(p.medals_count))
            .sum()
    }

    /// Total athletes over every participation
    pub fn athlete_total(&self) -> u64 {
        self.participations
            .iter()
            .map(|p| u64::from(p.athlete_count))
            .sum()
    }

    /// Participations sorted ascending by year.
    ///
    /// The sort is stable: editions sharing a year keep their source order.
    pub fn participations_by_year(&self) -> Vec<Participation> {
        let mut sorted = self.participations.clone();
        sorted.sort_by_key(|p| p.year);
        sorted
    }
}

/// Decode the fixture document into country records.
///
/// Rejects collections where two countries share an id.
pub fn parse_fixture(json: &str) -> FetchResult<Vec<Country>> {
    let countries: Vec<Country> = serde_json::from_str(json)?;
    validate_unique_ids(&countries)?;
    Ok(countries)
}

pub(crate) fn validate_unique_ids(countries: &[Country]) -> FetchResult<()> {
    let mut seen = HashSet::with_capacity(countries.len());
    for country in countries {
        if !seen.insert(country.id) {
            return Err(FetchError::DuplicateId(country.id));
        }
    }
    Ok(())
}
