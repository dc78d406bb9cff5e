//! Router assembly

use std::path::Path;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{health_check, image_proxy};
use crate::state::AppState;

/// API routes, then the WASM bundle; unknown paths get `index.html` so the
/// client-side router can take over.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let bundle = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route("/_image", get(image_proxy))
        .fallback_service(bundle)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use fugo_content::{ImagePolicy, RemotePattern};
    use tower::ServiceExt;

    fn static_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fugo-server-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>fugo</html>").unwrap();
        dir
    }

    fn app(policy: ImagePolicy, name: &str) -> Router {
        router(AppState::new(policy, 60).unwrap(), &static_dir(name))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8_lossy(&body).into_owned())
    }

    const LARGE_IMAGE: usize = 512 * 1024;

    /// Upstream image host on a random local port
    async fn upstream() -> String {
        let app = Router::new()
            .route(
                "/img/ok.png",
                axum::routing::get(|| async { ([(header::CONTENT_TYPE, "image/png")], "PNGDATA") }),
            )
            .route("/img/missing.png", axum::routing::get(|| async { StatusCode::NOT_FOUND }))
            .route(
                "/img/moved.png",
                axum::routing::get(|| async { (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, "/private")]) }),
            )
            .route("/private", axum::routing::get(|| async { "PRIVATE" }))
            .route("/img/large.png", axum::routing::get(|| async { vec![7_u8; LARGE_IMAGE] }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        addr.to_string()
    }

    fn local_policy(addr: &str) -> ImagePolicy {
        let host = addr.split(':').next().unwrap_or("127.0.0.1");
        ImagePolicy::new(vec![RemotePattern {
            protocol: "http".into(),
            hostname: host.into(),
            pathname: "/img/**".into(),
        }])
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = get(app(ImagePolicy::default(), "health"), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let health: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_disallowed_image_host() {
        let (status, _, body) = get(
            app(ImagePolicy::default(), "disallowed"),
            "/_image?url=https%3A%2F%2Fimages.pexels.com%2Fphoto.jpg",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("IMAGE_NOT_ALLOWED"));
    }

    #[tokio::test]
    async fn test_missing_url_param() {
        let (status, _, _) = get(app(ImagePolicy::default(), "missing"), "/_image").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_proxies_allowed_image() {
        let addr = upstream().await;
        let uri = format!("/_image?url=http%3A%2F%2F{addr}%2Fimg%2Fok.png");
        let (status, headers, body) = get(app(local_policy(&addr), "proxy"), &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "PNGDATA");
        assert_eq!(headers[header::CONTENT_TYPE], "image/png");
        assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=60");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let addr = upstream().await;
        let uri = format!("/_image?url=http%3A%2F%2F{addr}%2Fimg%2Fmissing.png");
        let (status, _, body) = get(app(local_policy(&addr), "gateway"), &uri).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("UPSTREAM_ERROR"));
    }

    #[tokio::test]
    async fn test_redirect_off_the_allow_list_is_not_followed() {
        let addr = upstream().await;
        let policy = local_policy(&addr);
        assert!(!policy.allows(&format!("http://{addr}/private")));

        let uri = format!("/_image?url=http%3A%2F%2F{addr}%2Fimg%2Fmoved.png");
        let (status, _, body) = get(app(policy, "redirect"), &uri).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("UPSTREAM_ERROR"));
        assert!(!body.contains("PRIVATE"));
    }

    #[tokio::test]
    async fn test_large_image_streams_through_intact() {
        let addr = upstream().await;
        let uri = format!("/_image?url=http%3A%2F%2F{addr}%2Fimg%2Flarge.png");
        let response = app(local_policy(&addr), "large")
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body.len(), LARGE_IMAGE);
        assert!(body.iter().all(|b| *b == 7));
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let (status, _, body) = get(app(ImagePolicy::default(), "spa"), "/portfolio").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>fugo</html>");
    }
}
