//! Home summary: country count, Games count and medals per country.

use serde::Serialize;

use crate::models::Country;
use crate::store::StoreState;

/// One pie slice worth of data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalSlice {
    /// Country to navigate to when the slice is selected
    pub country_id: i64,
    pub label: String,
    pub value: u64,
}

/// Everything the home page shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HomeViewModel {
    pub country_count: usize,
    pub total_participations: usize,
    /// Per-country medal totals, in source order
    pub medal_series: Vec<MedalSlice>,
}

impl HomeViewModel {
    /// Summarise a loaded collection
    pub fn from_countries(countries: &[Country]) -> Self {
        let total_participations = countries.iter().map(|c| c.participations.len()).sum();

        let medal_series = countries
            .iter()
            .map(|country| MedalSlice {
                country_id: country.id,
                label: country.name.clone(),
                value: country.medal_total(),
            })
            .collect();

        Self {
            country_count: countries.len(),
            total_participations,
            medal_series,
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.medal_series.iter().map(|s| s.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.medal_series.iter().map(|s| s.value).collect()
    }

    /// Tooltip for the slice at `index`
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.medal_series
            .get(index)
            .map(|slice| tooltip_text(&slice.label, slice.value))
    }
}

/// Derive the home summary.
///
/// Only a loaded store produces a value; `Unloaded` and `Failed` are filtered
/// out and yield `None`.
pub fn derive_home(state: &StoreState) -> Option<HomeViewModel> {
    let countries = state.countries()?;
    let model = HomeViewModel::from_countries(countries);
    tracing::debug!(
        countries = model.country_count,
        participations = model.total_participations,
        "Derived home view model"
    );
    Some(model)
}

/// Text shown when hovering a slice
pub fn tooltip_text(label: &str, medals: u64) -> String {
    format!("{}: {} medals", label, medals)
}

/// What the home page should display around the chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeStatus {
    Loading,
    Error,
    Ready(HomeViewModel),
}

impl HomeStatus {
    pub fn from_state(state: &StoreState) -> Self {
        match state {
            StoreState::Unloaded => HomeStatus::Loading,
            StoreState::Failed => HomeStatus::Error,
            StoreState::Loaded(countries) => {
                HomeStatus::Ready(HomeViewModel::from_countries(countries))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participation;

    fn two_countries() -> Vec<Country> {
        vec![
            Country::new(1, "Italy")
                .participation(Participation::new(1, 2012, "Londres", 3, 10))
                .participation(Participation::new(2, 2016, "Rio", 2, 12)),
            Country::new(2, "Spain").participation(Participation::new(3, 2012, "Londres", 5, 9)),
        ]
    }

    #[test]
    fn test_derive_home() {
        let model = derive_home(&StoreState::loaded(two_countries())).unwrap();

        assert_eq!(model.country_count, 2);
        assert_eq!(model.total_participations, 3);
        assert_eq!(model.values(), vec![5, 5]);
        assert_eq!(model.labels(), vec!["Italy".to_string(), "Spain".to_string()]);
        assert_eq!(model.medal_series[1].country_id, 2);
    }

    #[test]
    fn test_order_follows_source() {
        let mut countries = two_countries();
        countries.reverse();

        let model = derive_home(&StoreState::loaded(countries)).unwrap();
        assert_eq!(model.labels(), vec!["Spain".to_string(), "Italy".to_string()]);
    }

    #[test]
    fn test_unresolved_states_are_filtered() {
        assert_eq!(derive_home(&StoreState::Unloaded), None);
        assert_eq!(derive_home(&StoreState::Failed), None);
    }

    #[test]
    fn test_empty_collection() {
        let model = derive_home(&StoreState::loaded(Vec::new())).unwrap();
        assert_eq!(model.country_count, 0);
        assert_eq!(model.total_participations, 0);
        assert!(model.medal_series.is_empty());
    }

    #[test]
    fn test_tooltip() {
        let model = HomeViewModel::from_countries(&two_countries());
        assert_eq!(model.tooltip(0).as_deref(), Some("Italy: 5 medals"));
        assert_eq!(model.tooltip(2), None);
        assert_eq!(tooltip_text("France", 0), "France: 0 medals");
    }

    #[test]
    fn test_home_status() {
        assert_eq!(HomeStatus::from_state(&StoreState::Unloaded), HomeStatus::Loading);
        assert_eq!(HomeStatus::from_state(&StoreState::Failed), HomeStatus::Error);
        assert!(matches!(
            HomeStatus::from_state(&StoreState::loaded(two_countries())),
            HomeStatus::Ready(model) if model.country_count == 2
        ));
    }

    #[test]
    fn test_home_status_loaded_empty_is_ready() {
        assert_eq!(
            HomeStatus::from_state(&StoreState::loaded(Vec::new())),
            HomeStatus::Ready(HomeViewModel::default())
        );
    }
}
