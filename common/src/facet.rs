//! Search facets and the metadata attached to each of them.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One independently toggleable filter over the meteorite feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Facet {
    Id,
    Name,
    Latitude,
    TimeRange,
    MassRange,
    Found,
    Fell,
    All,
}

impl Facet {
    pub const ALL: [Facet; 8] = [
        Facet::Id,
        Facet::Name,
        Facet::Latitude,
        Facet::TimeRange,
        Facet::MassRange,
        Facet::Found,
        Facet::Fell,
        Facet::All,
    ];

    pub fn layer_display_name(&self) -> &'static str {
        match self {
            Facet::Id => "Search By Id",
            Facet::Name => "Search By Name",
            Facet::Latitude => "Search By Latitude",
            Facet::TimeRange => "Search By Time Range",
            Facet::MassRange => "Search By Mass Range",
            Facet::Found => "Found Meteorite",
            Facet::Fell => "Fallen Meteorite",
            Facet::All => "Show All Meteorites",
        }
    }

    /// Input controls feeding this facet. Default filters have none.
    pub fn input_control_ids(&self) -> &'static [&'static str] {
        match self {
            Facet::Id => &["id-search-text"],
            Facet::Name => &["name-search-text"],
            Facet::Latitude => &["location-search-text"],
            Facet::TimeRange => &["range-start", "range-end"],
            Facet::MassRange => &["mass-min", "mass-max"],
            Facet::Found | Facet::Fell | Facet::All => &[],
        }
    }

    /// Default filters are loaded once at startup and shown straight away.
    pub fn is_default_filter(&self) -> bool {
        matches!(self, Facet::Found | Facet::Fell | Facet::All)
    }

    pub fn enabled_at_startup(&self) -> bool {
        self.is_default_filter()
    }

    /// Whether a search on a visible layer hides it instead of fetching again.
    pub fn search_toggles_visibility(&self) -> bool {
        matches!(self, Facet::Id | Facet::Name | Facet::Latitude)
    }
}

impl Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.layer_display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facets_use_kebab_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&Facet::TimeRange).unwrap(), "\"time-range\"");
        let parsed: Facet = serde_json::from_str("\"mass-range\"").unwrap();
        assert_eq!(parsed, Facet::MassRange);
    }

    #[test]
    fn only_default_filters_start_enabled() {
        let enabled = Facet::ALL.iter().filter(|f| f.enabled_at_startup()).copied().collect::<Vec<_>>();
        assert_eq!(enabled, vec![Facet::Found, Facet::Fell, Facet::All]);
    }
}
