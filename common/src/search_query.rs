//! Raw search input as typed by the user, before any validation.

use serde::{Deserialize, Serialize};

use crate::facet::Facet;

/// The event that fired a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Trigger {
    #[default]
    Click,
    Key { key: String },
}

impl Trigger {
    pub fn enter() -> Self {
        Trigger::Key { key: "Enter".to_string() }
    }

    /// Range searches only run on a confirm action, not on every keystroke.
    pub fn is_confirm(&self) -> bool {
        match self {
            Trigger::Key { key } => key == "Enter",
            Trigger::Click => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "facet", rename_all = "kebab-case")]
pub enum FacetSearchInput {
    Id { text: String },
    Name { text: String },
    Latitude { text: String },
    TimeRange {
        start: String,
        end: String,
        #[serde(default)]
        trigger: Trigger,
    },
    MassRange {
        min: String,
        max: String,
        #[serde(default)]
        trigger: Trigger,
    },
}

impl FacetSearchInput {
    pub fn facet(&self) -> Facet {
        match self {
            FacetSearchInput::Id { .. } => Facet::Id,
            FacetSearchInput::Name { .. } => Facet::Name,
            FacetSearchInput::Latitude { .. } => Facet::Latitude,
            FacetSearchInput::TimeRange { .. } => Facet::TimeRange,
            FacetSearchInput::MassRange { .. } => Facet::MassRange,
        }
    }
}

/// What the controller did in response to a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum SearchOutcome {
    /// The facet layer was visible and has been hidden. Nothing was fetched.
    Hidden { facet: Facet },
    /// The trigger was not a confirm action.
    Ignored { facet: Facet },
    /// A load was started into the facet layer.
    Loading { facet: Facet, generation: u64, url: String },
}
