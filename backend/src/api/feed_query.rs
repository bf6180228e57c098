//! Query-string builders for the meteorite feed.
//!
//! The backend expects SoQL-style `$query=SELECT ... WHERE ...` suffixes with
//! the percent-encoding written out literally, so these builders concatenate
//! fixed fragments instead of running the values through an encoder.

use common::{facet::Facet, search_query::FacetSearchInput};

use crate::error::SearchError;

pub const QUERY_SELECT_ALL_WHERE: &str = "/?$query=SELECT%20*%20WHERE%20";
pub const START_OF_YEAR_SUFFIX: &str = "-01-01T00:00:00.000";
pub const LATITUDE_BAND_HALF_WIDTH: i64 = 5;
pub const YEAR_PREFIX_LEN: usize = 4;

fn range_clause(field: &str, low: &str, high: &str) -> String {
    format!("{field}%20>=%20%27{low}%27%20AND%20{field}%20<=%20%27{high}%27")
}

pub fn id_query(base_url: &str, raw_id: &str) -> String {
    format!("{base_url}/?id={raw_id}")
}

pub fn name_query(base_url: &str, raw_name: &str) -> String {
    format!("{base_url}/?name={raw_name}")
}

/// Returns `(min, max)` exactly as the existing page computes them: the
/// lower name gets `v + 5` and the upper name gets `v - 5`.
pub fn latitude_band(value: i64) -> (i64, i64) {
    (value + LATITUDE_BAND_HALF_WIDTH, value - LATITUDE_BAND_HALF_WIDTH)
}

/// The band is matched against `reclong`, as the existing page does.
pub fn latitude_query(base_url: &str, value: i64) -> String {
    let (min, max) = latitude_band(value);
    format!("{base_url}{QUERY_SELECT_ALL_WHERE}{}", range_clause("reclong", &min.to_string(), &max.to_string()))
}

pub fn year_prefix(raw: &str) -> String {
    raw.chars().take(YEAR_PREFIX_LEN).collect()
}

/// Both inputs are cut down to their year prefix before use.
pub fn time_range_query(base_url: &str, start: &str, end: &str) -> String {
    let start = format!("{}{START_OF_YEAR_SUFFIX}", year_prefix(start));
    let end = format!("{}{START_OF_YEAR_SUFFIX}", year_prefix(end));
    format!("{base_url}{QUERY_SELECT_ALL_WHERE}{}", range_clause("year", &start, &end))
}

pub fn mass_range_query(base_url: &str, min: &str, max: &str) -> String {
    format!("{base_url}{QUERY_SELECT_ALL_WHERE}{}", range_clause("mass", min, max))
}

/// Query for the filters that are loaded once at startup.
pub fn default_filter_query(base_url: &str, facet: Facet) -> Option<String> {
    match facet {
        Facet::Found => Some(format!("{base_url}/?fall=Found")),
        Facet::Fell => Some(format!("{base_url}/?fall=Fell")),
        Facet::All => Some(base_url.to_string()),
        _ => None,
    }
}

/// Name of the input control a validation error points at.
fn control_id(facet: Facet, index: usize) -> &'static str {
    facet.input_control_ids().get(index).copied().unwrap_or_default()
}

fn require_text<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, SearchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SearchError::EmptyInput { field });
    }
    Ok(trimmed)
}

pub fn parse_latitude(raw: &str) -> Result<i64, SearchError> {
    let field = control_id(Facet::Latitude, 0);
    let text = require_text(field, raw)?;
    // i32 keeps the +/- band arithmetic clear of overflow
    text.parse::<i32>()
        .map(i64::from)
        .map_err(|_| SearchError::NotAnInteger { field, value: raw.to_string() })
}

fn validate_year<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, SearchError> {
    let text = require_text(field, raw)?;
    let prefix = year_prefix(text);
    if prefix.len() != YEAR_PREFIX_LEN || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return Err(SearchError::NotAYear { field, value: raw.to_string() });
    }
    Ok(text)
}

fn validate_mass<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, SearchError> {
    let text = require_text(field, raw)?;
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(text),
        _ => Err(SearchError::NotANumber { field, value: raw.to_string() }),
    }
}

/// Validates the raw input of a search and builds the full feed URL for it.
pub fn build_facet_query(base_url: &str, input: &FacetSearchInput) -> Result<String, SearchError> {
    let url = match input {
        FacetSearchInput::Id { text } => id_query(base_url, require_text(control_id(Facet::Id, 0), text)?),
        FacetSearchInput::Name { text } => name_query(base_url, require_text(control_id(Facet::Name, 0), text)?),
        FacetSearchInput::Latitude { text } => latitude_query(base_url, parse_latitude(text)?),
        FacetSearchInput::TimeRange { start, end, .. } => time_range_query(
            base_url,
            validate_year(control_id(Facet::TimeRange, 0), start)?,
            validate_year(control_id(Facet::TimeRange, 1), end)?,
        ),
        FacetSearchInput::MassRange { min, max, .. } => mass_range_query(
            base_url,
            validate_mass(control_id(Facet::MassRange, 0), min)?,
            validate_mass(control_id(Facet::MassRange, 1), max)?,
        ),
    };
    Ok(url)
}

#[cfg(test)]
mod tests {
    use common::search_query::Trigger;

    use super::*;

    const BASE: &str = "https://data.nasa.gov/resource/y77d-th95.geojson";

    #[test]
    fn id_query_is_plain_concatenation() {
        for id in [1_u64, 42, 57165] {
            assert_eq!(id_query(BASE, &id.to_string()), format!("{BASE}/?id={id}"));
        }
    }

    #[test]
    fn name_query_keeps_raw_text() {
        assert_eq!(name_query(BASE, "Api"), format!("{BASE}/?name=Api"));
    }

    #[test]
    fn latitude_band_keeps_swapped_bounds_on_reclong() {
        assert_eq!(latitude_band(40), (45, 35));
        assert_eq!(
            latitude_query(BASE, 40),
            format!("{BASE}/?$query=SELECT%20*%20WHERE%20reclong%20>=%20%2745%27%20AND%20reclong%20<=%20%2735%27")
        );
        assert_eq!(
            latitude_query(BASE, -3),
            format!("{BASE}/?$query=SELECT%20*%20WHERE%20reclong%20>=%20%272%27%20AND%20reclong%20<=%20%27-8%27")
        );
    }

    #[test]
    fn time_range_query_matches_backend_syntax() {
        assert_eq!(
            time_range_query(BASE, "2000", "2010"),
            format!("{BASE}/?$query=SELECT%20*%20WHERE%20year%20>=%20%272000-01-01T00:00:00.000%27%20AND%20year%20<=%20%272010-01-01T00:00:00.000%27")
        );
    }

    #[test]
    fn time_range_truncates_to_year_prefix() {
        assert_eq!(time_range_query(BASE, "2000-06-01", "20101"), time_range_query(BASE, "2000", "2010"));
    }

    #[test]
    fn mass_range_query_matches_backend_syntax() {
        assert_eq!(
            mass_range_query(BASE, "10", "1000"),
            format!("{BASE}/?$query=SELECT%20*%20WHERE%20mass%20>=%20%2710%27%20AND%20mass%20<=%20%271000%27")
        );
    }

    #[test]
    fn default_filters() {
        assert_eq!(default_filter_query(BASE, Facet::Found), Some(format!("{BASE}/?fall=Found")));
        assert_eq!(default_filter_query(BASE, Facet::Fell), Some(format!("{BASE}/?fall=Fell")));
        assert_eq!(default_filter_query(BASE, Facet::All), Some(BASE.to_string()));
        assert_eq!(default_filter_query(BASE, Facet::Id), None);
    }

    #[test]
    fn invalid_input_fails_fast() {
        let latitude = FacetSearchInput::Latitude { text: "north".to_string() };
        assert!(matches!(build_facet_query(BASE, &latitude), Err(SearchError::NotAnInteger { field: "location-search-text", .. })));

        let years = FacetSearchInput::TimeRange { start: "20x0".to_string(), end: "2010".to_string(), trigger: Trigger::enter() };
        assert!(matches!(build_facet_query(BASE, &years), Err(SearchError::NotAYear { field: "range-start", .. })));

        let mass = FacetSearchInput::MassRange { min: "10".to_string(), max: "heavy".to_string(), trigger: Trigger::enter() };
        assert!(matches!(build_facet_query(BASE, &mass), Err(SearchError::NotANumber { field: "mass-max", .. })));

        let id = FacetSearchInput::Id { text: "   ".to_string() };
        assert_eq!(build_facet_query(BASE, &id), Err(SearchError::EmptyInput { field: "id-search-text" }));
    }

    #[test]
    fn valid_input_builds_the_same_url_as_the_builders() {
        let mass = FacetSearchInput::MassRange { min: " 10 ".to_string(), max: "1000".to_string(), trigger: Trigger::enter() };
        assert_eq!(build_facet_query(BASE, &mass).unwrap(), mass_range_query(BASE, "10", "1000"));

        let latitude = FacetSearchInput::Latitude { text: "12".to_string() };
        assert_eq!(build_facet_query(BASE, &latitude).unwrap(), latitude_query(BASE, 12));
    }
}
