//! Country detail: status plus aggregate metrics for one country.

use serde::Serialize;

use crate::models::Country;
use crate::store::{CountryLookup, StoreState};

/// Outcome of resolving the requested country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailStatus {
    Loading,
    Error,
    NotFound,
    Ready,
}

impl std::fmt::Display for DetailStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailStatus::Loading => write!(f, "loading"),
            DetailStatus::Error => write!(f, "error"),
            DetailStatus::NotFound => write!(f, "not-found"),
            DetailStatus::Ready => write!(f, "ready"),
        }
    }
}

/// Aggregates over a country's participations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CountryMetrics {
    pub entries: usize,
    pub medals: u64,
    pub athletes: u64,
}

/// One Games edition in the country timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditionPoint {
    pub year: i32,
    pub city: String,
    pub medals: u32,
    pub athletes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailViewModel {
    pub status: DetailStatus,
    pub country_name: String,
    pub metrics: CountryMetrics,
    /// Editions in ascending year order; empty unless `Ready`
    pub timeline: Vec<EditionPoint>,
}

impl DetailViewModel {
    fn empty(status: DetailStatus) -> Self {
        Self {
            status,
            country_name: String::new(),
            metrics: CountryMetrics::default(),
            timeline: Vec::new(),
        }
    }

    /// Ready view model for a country
    pub fn for_country(country: &Country) -> Self {
        let participations = country.participations_by_year();

        let metrics = CountryMetrics {
            entries: participations.len(),
            medals: participations.iter().map(|p| u64::from(p.medals_count)).sum(),
            athletes: participations.iter().map(|p| u64::from(p.athlete_count)).sum(),
        };

        let timeline = participations
            .into_iter()
            .map(|p| EditionPoint {
                year: p.year,
                city: p.city,
                medals: p.medals_count,
                athletes: p.athlete_count,
            })
            .collect();

        Self {
            status: DetailStatus::Ready,
            country_name: country.name.clone(),
            metrics,
            timeline,
        }
    }
}

/// Parse the opaque route identifier as a decimal integer
pub fn parse_country_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Derive the detail view model from the route id and the store.
///
/// Evaluated in order: failed store, unloaded store, unparsable id, unknown
/// id, then ready.
pub fn derive_detail(raw_id: Option<&str>, state: &StoreState) -> DetailViewModel {
    match state {
        StoreState::Failed => return DetailViewModel::empty(DetailStatus::Error),
        StoreState::Unloaded => return DetailViewModel::empty(DetailStatus::Loading),
        StoreState::Loaded(_) => {}
    }

    let Some(id) = raw_id.and_then(parse_country_id) else {
        tracing::debug!(raw_id = ?raw_id, "Country id missing or not an integer");
        return DetailViewModel::empty(DetailStatus::NotFound);
    };

    match state.lookup(id) {
        CountryLookup::Found(country) => DetailViewModel::for_country(&country),
        _ => {
            tracing::debug!(id, "No country with this id");
            DetailViewModel::empty(DetailStatus::NotFound)
        }
    }
}

/// Keeps the latest route id and store state and re-derives whenever
/// either one changes.
#[derive(Debug, Clone)]
pub struct DetailDeriver {
    route_id: Option<String>,
    state: StoreState,
}

impl Default for DetailDeriver {
    fn default() -> Self {
        Self {
            route_id: None,
            state: StoreState::Unloaded,
        }
    }
}

impl DetailDeriver {
    pub fn new(route_id: Option<String>, state: StoreState) -> Self {
        Self { route_id, state }
    }

    /// New route id, same store
    pub fn set_route(&mut self, route_id: Option<String>) -> DetailViewModel {
        self.route_id = route_id;
        self.current()
    }

    /// New store value, same route id
    pub fn set_store(&mut self, state: StoreState) -> DetailViewModel {
        self.state = state;
        self.current()
    }

    pub fn current(&self) -> DetailViewModel {
        derive_detail(self.route_id.as_deref(), &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participation;

    fn loaded() -> StoreState {
        StoreState::loaded(vec![
            Country::new(1, "Italy")
                .participation(Participation::new(1, 2012, "Londres", 3, 372))
                .participation(Participation::new(2, 2008, "Pékin", 5, 350)),
            Country::new(2, "Spain"),
        ])
    }

    #[test]
    fn test_ready() {
        let vm = derive_detail(Some("1"), &loaded());

        assert_eq!(vm.status, DetailStatus::Ready);
        assert_eq!(vm.country_name, "Italy");
        assert_eq!(
            vm.metrics,
            CountryMetrics {
                entries: 2,
                medals: 8,
                athletes: 722,
            }
        );
    }

    #[test]
    fn test_timeline_sorted_by_year() {
        let vm = derive_detail(Some("1"), &loaded());
        let years: Vec<_> = vm.timeline.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2008, 2012]);
        assert_eq!(vm.timeline[0].city, "Pékin");
    }

    #[test]
    fn test_country_without_participations() {
        let vm = derive_detail(Some("2"), &loaded());
        assert_eq!(vm.status, DetailStatus::Ready);
        assert_eq!(vm.metrics, CountryMetrics::default());
    }

    #[test]
    fn test_not_found() {
        for raw in [Some("42"), Some("-1"), Some("abc"), Some(""), Some("1.5"), None] {
            let vm = derive_detail(raw, &loaded());
            assert_eq!(vm.status, DetailStatus::NotFound, "raw id {:?}", raw);
            assert!(vm.country_name.is_empty());
        }
    }

    #[test]
    fn test_loading_and_error_ignore_id() {
        for raw in [Some("1"), Some("abc"), None] {
            assert_eq!(
                derive_detail(raw, &StoreState::Unloaded).status,
                DetailStatus::Loading
            );
            assert_eq!(
                derive_detail(raw, &StoreState::Failed).status,
                DetailStatus::Error
            );
        }
    }

    #[test]
    fn test_parse_country_id() {
        assert_eq!(parse_country_id("7"), Some(7));
        assert_eq!(parse_country_id(" 12 "), Some(12));
        assert_eq!(parse_country_id("-3"), Some(-3));
        assert_eq!(parse_country_id("3a"), None);
        assert_eq!(parse_country_id(""), None);
    }

    #[test]
    fn test_deriver_combines_latest_values() {
        let mut deriver = DetailDeriver::new(Some("1".to_string()), StoreState::Unloaded);
        assert_eq!(deriver.current().status, DetailStatus::Loading);

        let vm = deriver.set_store(loaded());
        assert_eq!(vm.status, DetailStatus::Ready);
        assert_eq!(vm.country_name, "Italy");

        let vm = deriver.set_route(Some("2".to_string()));
        assert_eq!(vm.country_name, "Spain");

        let vm = deriver.set_route(Some("9".to_string()));
        assert_eq!(vm.status, DetailStatus::NotFound);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(DetailStatus::NotFound.to_string(), "not-found");
        assert_eq!(
            serde_json::to_value(DetailStatus::NotFound).unwrap(),
            serde_json::json!("not-found")
        );
    }
}
