//! Layer views shared between the controller and its clients.

use serde::{Deserialize, Serialize};

use crate::{facet::Facet, geometry::FeedGeometry, style::StyleAttributes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub u64);

/// One styled feature inside a renderable layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Renderable {
    pub display_name: Option<String>,
    pub geometry: FeedGeometry,
    pub attributes: Option<StyleAttributes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSummary {
    pub layer_id: LayerId,
    pub display_name: String,
    pub facet: Facet,
    pub enabled: bool,
    pub renderable_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerContents {
    pub summary: LayerSummary,
    pub renderables: Vec<Renderable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum LoadOutcome {
    Loaded { renderable_count: u64, skipped_features: u64 },
    Failed { message: String },
    /// A newer load for the same facet superseded this one.
    Cancelled,
}

/// Completion notice for one feed load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerLoadEvent {
    pub facet: Facet,
    pub generation: u64,
    pub url: String,
    pub outcome: LoadOutcome,
}
