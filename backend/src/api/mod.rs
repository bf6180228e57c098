//! Facet search: query building and the layer controller.

pub mod feed_query;

mod layer_controller;
pub use layer_controller::{FilterLayerBinding, LayerController};
