use anyhow::Context;
use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{facet::Facet, layer::{LayerContents, LayerSummary}, search_query::FacetSearchInput};
use tracing::info;

use crate::{api::LayerController, feed_utils::feed_client::FeedLoader, render::shape_configuration::ShapeConfigurator};

pub async fn list_layers<L: FeedLoader, S: ShapeConfigurator>(State(controller): State<LayerController<L, S>>) -> Json<Vec<LayerSummary>> {
    Json(controller.layer_list().await)
}

async fn _layer_contents<L: FeedLoader, S: ShapeConfigurator>(controller: LayerController<L, S>, facet: Facet) -> anyhow::Result<LayerContents> {
    controller.layer_contents(facet).await.with_context(|| format!("No layer for facet: {}", facet))
}

pub async fn layer_contents<L: FeedLoader, S: ShapeConfigurator>(
    State(controller): State<LayerController<L, S>>,
    Path(facet): Path<Facet>,
) -> Response {
    match _layer_contents(controller, facet).await {
        Ok(contents) => Json(contents).into_response(),
        Err(e) => {
            tracing::error!("layer_contents: request failed: {:#?}", e);
            return (StatusCode::NOT_FOUND, Body::from(e.to_string())).into_response();
        }
    }
}

pub async fn toggle_layer<L: FeedLoader, S: ShapeConfigurator>(
    State(controller): State<LayerController<L, S>>,
    Path(facet): Path<Facet>,
) -> Response {
    info!("Toggling layer: {}", facet);
    match controller.toggle(facet).await {
        Some(summary) => Json(summary).into_response(),
        None => {
            tracing::error!("toggle_layer: no layer for facet {}", facet);
            (StatusCode::NOT_FOUND, Body::from(format!("No layer for facet: {}", facet))).into_response()
        }
    }
}

pub async fn search<L: FeedLoader, S: ShapeConfigurator>(
    State(controller): State<LayerController<L, S>>,
    Json(input): Json<FacetSearchInput>,
) -> Response {
    info!("Search request: {:?}", input);
    match controller.search(input).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => {
            tracing::warn!("search: rejected input: {}", e);
            (StatusCode::BAD_REQUEST, Body::from(e.to_string())).into_response()
        }
    }
}
