//! In-memory list of renderable layers, the part of the globe the controller
//! talks to.

use common::{
    facet::Facet,
    layer::{LayerContents, LayerId, LayerSummary, Renderable},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderableLayer {
    pub layer_id: LayerId,
    pub display_name: String,
    pub facet: Facet,
    pub enabled: bool,
    pub renderables: Vec<Renderable>,
}

impl RenderableLayer {
    pub fn summary(&self) -> LayerSummary {
        LayerSummary {
            layer_id: self.layer_id,
            display_name: self.display_name.clone(),
            facet: self.facet,
            enabled: self.enabled,
            renderable_count: self.renderables.len() as u64,
        }
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    layers: Vec<RenderableLayer>,
    next_layer_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty layer on top of the others.
    pub fn add_layer(&mut self, display_name: impl Into<String>, facet: Facet, enabled: bool) -> LayerId {
        let layer_id = LayerId(self.next_layer_id);
        self.next_layer_id += 1;
        self.layers.push(RenderableLayer {
            layer_id,
            display_name: display_name.into(),
            facet,
            enabled,
            renderables: Vec::new(),
        });
        layer_id
    }

    pub fn layer(&self, layer_id: LayerId) -> Option<&RenderableLayer> {
        self.layers.iter().find(|l| l.layer_id == layer_id)
    }

    fn layer_mut(&mut self, layer_id: LayerId) -> Option<&mut RenderableLayer> {
        self.layers.iter_mut().find(|l| l.layer_id == layer_id)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_enabled(&self, layer_id: LayerId) -> bool {
        self.layer(layer_id).map(|l| l.enabled).unwrap_or(false)
    }

    /// Returns false if the layer is unknown.
    pub fn set_enabled(&mut self, layer_id: LayerId, enabled: bool) -> bool {
        let Some(layer) = self.layer_mut(layer_id) else {
            return false;
        };
        layer.enabled = enabled;
        true
    }

    /// Replaces everything the layer draws. Returns false if the layer is unknown.
    pub fn replace_renderables(&mut self, layer_id: LayerId, renderables: Vec<Renderable>) -> bool {
        let Some(layer) = self.layer_mut(layer_id) else {
            return false;
        };
        layer.renderables = renderables;
        true
    }

    pub fn layer_list(&self) -> Vec<LayerSummary> {
        self.layers.iter().map(|l| l.summary()).collect()
    }

    pub fn layer_contents(&self, layer_id: LayerId) -> Option<LayerContents> {
        self.layer(layer_id).map(|l| LayerContents { summary: l.summary(), renderables: l.renderables.clone() })
    }
}
