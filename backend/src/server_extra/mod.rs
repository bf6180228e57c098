use axum::{Router, routing::{get, post}};

use crate::{api::LayerController, feed_utils::feed_client::FeedLoader, render::shape_configuration::ShapeConfigurator};

pub mod layer_routes;

pub fn router<L: FeedLoader, S: ShapeConfigurator>(controller: LayerController<L, S>) -> Router {
    Router::new()
        .route("/api/layers", get(layer_routes::list_layers::<L, S>))
        .route("/api/layers/{facet}", get(layer_routes::layer_contents::<L, S>))
        .route("/api/layers/{facet}/toggle", post(layer_routes::toggle_layer::<L, S>))
        .route("/api/search", post(layer_routes::search::<L, S>))
        .with_state(controller)
}
