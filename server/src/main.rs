//! Server entry point.

use axum::{extract::Request, middleware::Next};
use backend::{
    api::LayerController,
    config::FeedConfig,
    feed_utils::feed_client::HttpFeedLoader,
    render::shape_configuration::MeteoriteShapeConfigurator,
};
use common::layer::LoadOutcome;
use tokio::sync::broadcast::error::RecvError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let config = FeedConfig::from_env();
    tracing::info!("Meteorite feed: {}", config.feed_url);
    let controller = LayerController::new(
        config.feed_url.clone(),
        HttpFeedLoader::new(&config)?,
        MeteoriteShapeConfigurator::new(&config),
    );

    let mut events = controller.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match event.outcome {
                    LoadOutcome::Loaded { renderable_count, skipped_features } => tracing::info!(
                        "{}: generation {} loaded {} features ({} without geometry)",
                        event.facet, event.generation, renderable_count, skipped_features
                    ),
                    LoadOutcome::Failed { message } => tracing::warn!("{}: generation {} failed: {}", event.facet, event.generation, message),
                    LoadOutcome::Cancelled => {}
                },
                Err(RecvError::Lagged(skipped)) => tracing::warn!("load event log skipped {} events", skipped),
                Err(RecvError::Closed) => break,
            }
        }
    });

    controller.initialize().await;

    let app = backend::server_extra::router(controller)
        .layer(axum::middleware::from_fn(
            |request: Request, next: Next| async move {
                tracing::debug!("Request: {} {}", request.method(), request.uri().path());
                let res = next.run(request).await;
                tracing::debug!("Response: {}", res.status());
                res
            },
        ));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
