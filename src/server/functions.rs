// Standard library
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};

// Project imports
use crate::metrics::MetricsSink;

// Current module imports
use super::constants::REQUEST_TIMEOUT;
use super::errors::ServerError;

/// Routes of the metrics endpoint.
pub fn router(sink: Arc<MetricsSink>) -> Router {
    let routes = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(sink);
    with_timeout(routes, REQUEST_TIMEOUT)
}

/// Bounds the handling of every request routed so far.
fn with_timeout(routes: Router, request_timeout: Duration) -> Router {
    routes.layer(TimeoutLayer::new(request_timeout))
}

async fn metrics_handler(State(sink): State<Arc<MetricsSink>>) -> Response {
    match sink.encode() {
        Ok(body) => ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response(),
        Err(e) => {
            error!(error = %e, "failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub async fn bind(address: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })
}

/// Serves the metrics endpoint until a shutdown signal is received.
pub async fn serve(
    listener: TcpListener,
    sink: Arc<MetricsSink>,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), ServerError> {
    if let Ok(address) = listener.local_addr() {
        info!(listen = %address, "starting server");
    }

    axum::serve(listener, router(sink))
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .map_err(ServerError::Serve)
}

#[cfg(test)]
mod tests {
    use tokio::time::sleep;

    use super::*;
    use crate::metrics::TargetLabels;

    #[tokio::test]
    async fn serves_current_metrics_and_stops_on_shutdown() {
        let sink = Arc::new(MetricsSink::new(Duration::from_secs(5)).unwrap());
        let labels = TargetLabels {
            host: "example.com".to_string(),
            dns_server: "udp://9.9.9.9:53".to_string(),
        };
        sink.initialize_zero(&labels);
        sink.increment_total(&labels, Some("NOERROR"));

        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let address = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let server = tokio::spawn(serve(listener, Arc::clone(&sink), shutdown_rx));

        let response = reqwest::get(format!("http://{}/metrics", address))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body = response.text().await.unwrap();
        assert!(body.contains("hostlookuper_dns_lookup_total{"));
        assert!(body.contains("hostlookuper_dns_errors_total{"));
        assert!(body.contains("host=\"example.com\""));
        assert!(body.contains("dns_server=\"udp://9.9.9.9:53\""));

        // later writes show up in the next scrape
        sink.increment_errors(&labels);
        let body = reqwest::get(format!("http://{}/metrics", address))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(body
            .lines()
            .any(|l| l.starts_with("hostlookuper_dns_errors_total{") && l.ends_with(" 1")));

        let missing = reqwest::get(format!("http://{}/", address)).await.unwrap();
        assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

        shutdown_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = taken.local_addr().unwrap();

        assert!(matches!(
            bind(address).await,
            Err(ServerError::Bind { .. })
        ));
    }

    #[tokio::test]
    async fn slow_requests_time_out() {
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                sleep(Duration::from_secs(5)).await;
                "too late"
            }),
        );
        let app = with_timeout(slow, Duration::from_millis(50));

        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        let response = reqwest::get(format!("http://{}/slow", address))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::REQUEST_TIMEOUT);
    }
}
