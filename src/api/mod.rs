pub mod handlers;
pub mod models;
pub mod router;

use crate::board::LiveOrderBoard;
use crate::config::Config;
use axum::Router;
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use axum_prometheus::metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub struct ApiServer {
    board: LiveOrderBoard,
}

impl ApiServer {
    pub fn new(board: LiveOrderBoard) -> Self {
        Self { board }
    }

    /// Binds the server to the configured address and serves until Ctrl+C.
    /// Installs the process-wide Prometheus recorder, so call it once.
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        let app = app(self.board, prometheus_layer, metric_handle);

        let addr = config.socket_addr();
        tracing::info!("API server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Order routes plus `/metrics`, wrapped in tracing, metrics and CORS.
/// CORS sits innermost: it needs a response body with `Default`.
pub fn app(
    board: LiveOrderBoard,
    prometheus_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    router::build(board)
        .route("/metrics", get(move || async move { metric_handle.render() }))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(prometheus_layer)
                .layer(CorsLayer::permissive()),
        )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryOrderStore;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum_prometheus::metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::Arc;
    use tower::ServiceExt;

    // local recorder handle, so no process-wide recorder gets installed
    fn layered_app() -> Router {
        let board = LiveOrderBoard::new(Arc::new(InMemoryOrderStore::new()));
        let handle = PrometheusBuilder::new().build_recorder().handle();
        app(board, PrometheusMetricLayer::new(), handle)
    }

    #[tokio::test]
    async fn health_passes_through_every_layer() {
        let response = layered_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn cors_headers_are_added() {
        let response = layered_app()
            .oneshot(
                Request::get("/summary")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn metrics_route_is_served() {
        let response = layered_app()
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
