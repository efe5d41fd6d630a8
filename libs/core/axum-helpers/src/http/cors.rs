use axum::http::{HeaderValue, Method, header};
use core_config::cors::CorsConfig;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// CORS layer allowing exactly one origin.
///
/// - Methods: GET, POST, PUT, PATCH, DELETE, OPTIONS
/// - Headers: Content-Type, Accept, Authorization
/// - 1 hour max age
pub fn create_cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}

/// Build the layer from [`CorsConfig`].
///
/// Without a configured origin, or with one that is not a valid header value, the
/// layer adds no CORS headers so browsers block every cross-origin call.
pub fn cors_layer_from_config(config: &CorsConfig) -> CorsLayer {
    let Some(origin) = config.allowed_origin.as_deref() else {
        tracing::warn!("FRONTEND_URL is not set, cross-origin requests will be blocked");
        return CorsLayer::new();
    };

    match HeaderValue::from_str(origin) {
        Ok(value) => {
            tracing::info!(origin, "CORS configured");
            create_cors_layer(value)
        }
        Err(e) => {
            tracing::warn!(origin, error = %e, "Invalid CORS origin, cross-origin requests will be blocked");
            CorsLayer::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn preflight(layer: CorsLayer, origin: &str) -> Option<HeaderValue> {
        let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);
        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/")
                    .header(header::ORIGIN, origin)
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn test_configured_origin_is_allowed() {
        let layer = cors_layer_from_config(&CorsConfig::allow("http://localhost:5173"));
        assert_eq!(
            preflight(layer, "http://localhost:5173").await,
            Some(HeaderValue::from_static("http://localhost:5173"))
        );
    }

    #[tokio::test]
    async fn test_other_origins_get_no_cors_headers() {
        let layer = cors_layer_from_config(&CorsConfig::allow("http://localhost:5173"));
        assert_eq!(preflight(layer, "http://evil.example").await, None);
    }

    #[tokio::test]
    async fn test_unconfigured_blocks_everything() {
        let layer = cors_layer_from_config(&CorsConfig::default());
        assert_eq!(preflight(layer, "http://localhost:5173").await, None);
    }
}
