//! Scout Web Server
//!
//! Axum-based web server for the research page, the research API and static
//! assets.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use config::ServerConfig;
use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/research", post(routes::research::research))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server until Ctrl+C or SIGTERM.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let addr = config.addr();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::debug!("Shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use std::path::Path;
    use std::time::{Duration, Instant};
    use tower::ServiceExt;

    fn test_app(static_dir: &Path) -> Router {
        create_router(AppState::new(ServerConfig {
            static_dir: static_dir.to_path_buf(),
            research_delay: Duration::ZERO,
            ..ServerConfig::default()
        }))
    }

    async fn post_research(app: Router, body: &str) -> Response {
        let req = Request::builder()
            .method("POST")
            .uri("/api/research")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.oneshot(req).await.unwrap()
    }

    async fn get(app: Router, uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(req).await.unwrap()
    }

    async fn json_body(resp: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_research_climate_change() {
        let dir = tempfile::tempdir().unwrap();
        let resp = post_research(test_app(dir.path()), r#"{"query": "climate change"}"#).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = json_body(resp).await;
        let text = json["text"].as_str().unwrap();
        assert!(text.starts_with(
            "Based on research across multiple AI models, here's the best answer for \"climate change\"..."
        ));

        let sources = json["sources"].as_array().unwrap();
        assert_eq!(sources.len(), 3);
        let names: Vec<&str> = sources.iter().map(|s| s["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["GPT-4", "Gemini", "Claude"]);
        let confidences: Vec<f64> = sources
            .iter()
            .map(|s| s["confidence"].as_f64().unwrap())
            .collect();
        assert_eq!(confidences, [0.92, 0.89, 0.87]);
    }

    #[tokio::test]
    async fn test_research_query_with_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let query = r#"what is "ownership"?"#;
        let body = serde_json::json!({ "query": query }).to_string();
        let resp = post_research(test_app(dir.path()), &body).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = json_body(resp).await;
        assert!(json["text"].as_str().unwrap().contains(query));
    }

    #[tokio::test]
    async fn test_research_missing_query() {
        let dir = tempfile::tempdir().unwrap();
        for body in ["{}", r#"{"query": ""}"#, r#"{"query": null}"#] {
            let resp = post_research(test_app(dir.path()), body).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(
                json_body(resp).await,
                serde_json::json!({"error": "Query is required"})
            );
        }
    }

    #[tokio::test]
    async fn test_research_malformed_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let resp = post_research(test_app(dir.path()), "{not json").await;
        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn test_research_non_object_body() {
        let dir = tempfile::tempdir().unwrap();
        for body in ["[]", r#"["x"]"#, r#""x""#] {
            let resp = post_research(test_app(dir.path()), body).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
            let json = json_body(resp).await;
            assert_eq!(json["error"], "Request body must be a JSON object");
        }
    }

    #[tokio::test]
    async fn test_research_query_not_a_string() {
        let dir = tempfile::tempdir().unwrap();
        let resp = post_research(test_app(dir.path()), r#"{"query": 5}"#).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_body(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_concurrent_requests_wait_independently() {
        let dir = tempfile::tempdir().unwrap();
        let delay = Duration::from_millis(200);
        let app = create_router(AppState::new(ServerConfig {
            static_dir: dir.path().to_path_buf(),
            research_delay: delay,
            ..ServerConfig::default()
        }));

        let start = Instant::now();
        let (first, second) = tokio::join!(
            post_research(app.clone(), r#"{"query": "first"}"#),
            post_research(app, r#"{"query": "second"}"#),
        );
        let elapsed = start.elapsed();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);
        assert!(elapsed >= delay);
        assert!(elapsed < delay * 2, "requests ran one after another: {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_research_get_not_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let resp = get(test_app(dir.path()), "/api/research").await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_index_is_html() {
        let dir = tempfile::tempdir().unwrap();
        let resp = get(test_app(dir.path()), "/").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("/static/js/script.js"));
        assert!(!html.contains("Development mode"));
    }

    #[tokio::test]
    async fn test_index_debug_badge() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(AppState::new(ServerConfig {
            static_dir: dir.path().to_path_buf(),
            debug: true,
            ..ServerConfig::default()
        }));
        let resp = get(app, "/").await;
        let body = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Development mode"));
    }

    #[tokio::test]
    async fn test_static_file_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("js")).unwrap();
        std::fs::write(dir.path().join("js/app.js"), "console.log('hi');").unwrap();

        let resp = get(test_app(dir.path()), "/static/js/app.js").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        assert_eq!(&body[..], b"console.log('hi');");
    }

    #[tokio::test]
    async fn test_static_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let resp = get(test_app(dir.path()), "/static/doesnotexist.js").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let dir = tempfile::tempdir().unwrap();
        let resp = get(test_app(dir.path()), "/nope").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
