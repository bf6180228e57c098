//! Turns facet searches into feed loads and keeps one layer per facet.

use std::sync::Arc;

use common::{
    facet::Facet,
    geometry::FeedFeatureCollection,
    layer::{LayerContents, LayerId, LayerLoadEvent, LayerSummary, LoadOutcome, Renderable},
    search_query::{FacetSearchInput, SearchOutcome, Trigger},
};
use tokio::sync::{Mutex, broadcast};
use tokio_util::sync::CancellationToken;

use crate::{
    api::feed_query::{build_facet_query, default_filter_query},
    error::SearchError,
    feed_utils::feed_client::FeedLoader,
    render::{scene::Scene, shape_configuration::ShapeConfigurator},
};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// The layer owned by one facet and the load currently filling it.
#[derive(Debug, Clone)]
pub struct FilterLayerBinding {
    pub facet: Facet,
    pub layer_id: LayerId,
    /// Bumped on every load; only the load holding the latest value may
    /// write into the layer.
    pub generation: u64,
    in_flight: Option<CancellationToken>,
}

impl FilterLayerBinding {
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }
}

struct ControllerState {
    scene: Scene,
    // indexed by `Facet as usize`, same order as `Facet::ALL`
    bindings: [FilterLayerBinding; Facet::ALL.len()],
}

impl ControllerState {
    fn binding(&self, facet: Facet) -> &FilterLayerBinding {
        &self.bindings[facet as usize]
    }

    fn binding_mut(&mut self, facet: Facet) -> &mut FilterLayerBinding {
        &mut self.bindings[facet as usize]
    }
}

struct Shared<L, S> {
    base_url: String,
    loader: L,
    configurator: S,
    state: Mutex<ControllerState>,
    events: broadcast::Sender<LayerLoadEvent>,
}

pub struct LayerController<L, S> {
    shared: Arc<Shared<L, S>>,
}

impl<L, S> Clone for LayerController<L, S> {
    fn clone(&self) -> Self {
        Self { shared: self.shared.clone() }
    }
}

impl<L: FeedLoader, S: ShapeConfigurator> LayerController<L, S> {
    /// Creates one layer per facet. Default filters start visible, searchable
    /// facets start hidden. Nothing is fetched until `initialize` or a search.
    pub fn new(base_url: impl Into<String>, loader: L, configurator: S) -> Self {
        let mut scene = Scene::new();
        let bindings = Facet::ALL.map(|facet| FilterLayerBinding {
            facet,
            layer_id: scene.add_layer(facet.layer_display_name(), facet, facet.enabled_at_startup()),
            generation: 0,
            in_flight: None,
        });
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                base_url: base_url.into(),
                loader,
                configurator,
                state: Mutex::new(ControllerState { scene, bindings }),
                events,
            }),
        }
    }

    /// Completion notices for every load started after subscribing.
    pub fn subscribe(&self) -> broadcast::Receiver<LayerLoadEvent> {
        self.shared.events.subscribe()
    }

    /// Starts the found, fell and all filters.
    pub async fn initialize(&self) -> Vec<SearchOutcome> {
        let mut state = self.shared.state.lock().await;
        let mut outcomes = Vec::new();
        for facet in Facet::ALL.into_iter().filter(|f| f.is_default_filter()) {
            if let Some(url) = default_filter_query(&self.shared.base_url, facet) {
                outcomes.push(self.start_load(&mut state, facet, url));
            }
        }
        outcomes
    }

    pub async fn search(&self, input: FacetSearchInput) -> Result<SearchOutcome, SearchError> {
        let facet = input.facet();
        match &input {
            FacetSearchInput::TimeRange { trigger, .. } | FacetSearchInput::MassRange { trigger, .. } => {
                if !trigger.is_confirm() {
                    return Ok(SearchOutcome::Ignored { facet });
                }
            }
            _ => {}
        }

        let mut state = self.shared.state.lock().await;
        let layer_id = state.binding(facet).layer_id;
        if facet.search_toggles_visibility() && state.scene.is_enabled(layer_id) {
            state.scene.set_enabled(layer_id, false);
            tracing::info!("{}: layer hidden", facet);
            return Ok(SearchOutcome::Hidden { facet });
        }

        let url = build_facet_query(&self.shared.base_url, &input)?;
        Ok(self.start_load(&mut state, facet, url))
    }

    pub async fn search_by_id(&self, raw_id: &str) -> Result<SearchOutcome, SearchError> {
        self.search(FacetSearchInput::Id { text: raw_id.to_string() }).await
    }

    pub async fn search_by_name(&self, raw_name: &str) -> Result<SearchOutcome, SearchError> {
        self.search(FacetSearchInput::Name { text: raw_name.to_string() }).await
    }

    pub async fn search_by_latitude(&self, raw_latitude: &str) -> Result<SearchOutcome, SearchError> {
        self.search(FacetSearchInput::Latitude { text: raw_latitude.to_string() }).await
    }

    pub async fn search_by_time_range(&self, trigger: Trigger, start: &str, end: &str) -> Result<SearchOutcome, SearchError> {
        self.search(FacetSearchInput::TimeRange { start: start.to_string(), end: end.to_string(), trigger }).await
    }

    pub async fn search_by_mass_range(&self, trigger: Trigger, min: &str, max: &str) -> Result<SearchOutcome, SearchError> {
        self.search(FacetSearchInput::MassRange { min: min.to_string(), max: max.to_string(), trigger }).await
    }

    /// Flips the visibility of a facet layer without fetching anything.
    pub async fn toggle(&self, facet: Facet) -> Option<LayerSummary> {
        let mut state = self.shared.state.lock().await;
        let layer_id = state.binding(facet).layer_id;
        let enabled = !state.scene.is_enabled(layer_id);
        state.scene.set_enabled(layer_id, enabled);
        state.scene.layer(layer_id).map(|l| l.summary())
    }

    pub async fn layer_list(&self) -> Vec<LayerSummary> {
        self.shared.state.lock().await.scene.layer_list()
    }

    pub async fn layer_contents(&self, facet: Facet) -> Option<LayerContents> {
        let state = self.shared.state.lock().await;
        state.scene.layer_contents(state.binding(facet).layer_id)
    }

    pub async fn binding(&self, facet: Facet) -> FilterLayerBinding {
        self.shared.state.lock().await.binding(facet).clone()
    }

    fn start_load(&self, state: &mut ControllerState, facet: Facet, url: String) -> SearchOutcome {
        let binding = state.binding_mut(facet);
        if let Some(previous) = binding.in_flight.take() {
            tracing::debug!("{}: cancelling load generation {}", facet, binding.generation);
            previous.cancel();
        }
        binding.generation += 1;
        let generation = binding.generation;
        let layer_id = binding.layer_id;
        let token = CancellationToken::new();
        binding.in_flight = Some(token.clone());

        // the layer is shown empty straight away and filled when the load lands
        state.scene.replace_renderables(layer_id, Vec::new());
        state.scene.set_enabled(layer_id, true);
        tracing::info!("{}: loading generation {} from {}", facet, generation, url);

        let shared = self.shared.clone();
        let task_url = url.clone();
        tokio::spawn(async move {
            shared.run_load(facet, generation, layer_id, task_url, token).await;
        });
        SearchOutcome::Loading { facet, generation, url }
    }
}

impl<L: FeedLoader, S: ShapeConfigurator> Shared<L, S> {
    async fn run_load(&self, facet: Facet, generation: u64, layer_id: LayerId, url: String, token: CancellationToken) {
        let result = tokio::select! {
            _ = token.cancelled() => None,
            result = self.loader.load(&url) => Some(result),
        };

        let outcome = match result {
            None => LoadOutcome::Cancelled,
            Some(result) => {
                let styled = result.map(|collection| self.style_features(collection));
                let mut state = self.state.lock().await;
                let binding = state.binding_mut(facet);
                if token.is_cancelled() || binding.generation != generation {
                    LoadOutcome::Cancelled
                } else {
                    binding.in_flight = None;
                    match styled {
                        Ok((renderables, skipped_features)) => {
                            let renderable_count = renderables.len() as u64;
                            state.scene.replace_renderables(layer_id, renderables);
                            LoadOutcome::Loaded { renderable_count, skipped_features }
                        }
                        Err(e) => {
                            tracing::error!("{}: load of {} failed: {:#}", facet, url, e);
                            LoadOutcome::Failed { message: format!("{e:#}") }
                        }
                    }
                }
            }
        };

        if outcome == LoadOutcome::Cancelled {
            tracing::debug!("{}: generation {} superseded", facet, generation);
        }
        // nobody listening is fine
        let _ = self.events.send(LayerLoadEvent { facet, generation, url, outcome });
    }

    /// Runs the styling callback over every feature that has a geometry.
    fn style_features(&self, collection: FeedFeatureCollection) -> (Vec<Renderable>, u64) {
        let mut skipped_features = 0;
        let renderables = collection
            .features
            .into_iter()
            .filter_map(|feature| {
                let Some(geometry) = feature.geometry else {
                    skipped_features += 1;
                    return None;
                };
                let style = self.configurator.configure(geometry.kind(), &feature.properties);
                Some(Renderable { display_name: style.name, geometry, attributes: style.attributes })
            })
            .collect::<Vec<_>>();
        (renderables, skipped_features)
    }
}
