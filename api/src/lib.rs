mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::{info, warn};

pub use crate::core::app_state::{AppState, ConfigError};
use crate::{
    error_handler::AppError,
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        chat::{chat_history_route::chat_history_route, chat_route::chat_route},
        docs::docs_route::docs_route,
        health_route::health_route,
        search::search_route::search_route,
        suggestions_route::suggestions_route,
    },
};

/// All HTTP routes over a shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_route))
        .route("/search", post(search_route))
        .route("/suggestions", get(suggestions_route))
        .route("/docs/{topic}", get(docs_route))
        .route("/chat", post(chat_route))
        .route("/chat/{session_id}", get(chat_history_route))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state)
}

pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);
    let address = state.api_address.clone();

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %address, "api: listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("api: stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::{sync::Arc, time::Duration};

    use axum::response::Response;
    use doc_engine::{DocEngine, EngineConfig};

    use crate::core::app_state::{AppState, DEFAULT_API_ADDRESS};

    /// State over the bundled pages with no simulated latency.
    pub fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(
            DEFAULT_API_ADDRESS,
            DocEngine::new(EngineConfig::default()),
        ))
    }

    /// State whose content fetches take `content_delay`.
    pub fn slow_state(content_delay: Duration) -> Arc<AppState> {
        let mut cfg = EngineConfig::default();
        cfg.latency.content_ms = content_delay.as_millis() as u64;
        Arc::new(AppState::new(DEFAULT_API_ADDRESS, DocEngine::new(cfg)))
    }

    pub async fn body_json(res: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{
        middleware_layer::json_extractor::REQUEST_ID_HEADER,
        test_support::{body_json, test_state},
    };

    fn post_json(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn malformed_json_gets_envelope_and_request_id() {
        let res = router(test_state())
            .oneshot(post_json("/search", "{\"query\": "))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let id = res.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(id.to_str().unwrap().starts_with("req-"));

        let body = body_json(res).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn missing_field_points_at_it() {
        let res = router(test_state())
            .oneshot(post_json("/chat", "{}"))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(res).await;
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
        assert_eq!(body["error"]["details"][0]["path"], "message");
    }

    #[tokio::test]
    async fn successful_response_echoes_request_id() {
        let req = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "trace-42")
            .body(Body::empty())
            .unwrap();
        let res = router(test_state()).oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers().get(REQUEST_ID_HEADER).unwrap(), "trace-42");
    }

    #[tokio::test]
    async fn request_id_is_minted_for_successful_calls() {
        let res = router(test_state())
            .oneshot(post_json("/search", "{\"query\":\"fs\"}"))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().get(REQUEST_ID_HEADER).is_some());
    }

    #[tokio::test]
    async fn blank_chat_message_is_enveloped() {
        let res = router(test_state())
            .oneshot(post_json("/chat", "{\"message\":\"   \"}"))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }
}
