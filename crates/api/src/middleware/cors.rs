use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS for the admin client: credentials allowed from the site's own
/// origin only.
pub fn cors_layer(site_url: &str) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(HeaderValue::from_str(site_url).ok()))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    async fn allowed_origin(origin: &str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/", get(|| async { StatusCode::OK }))
            .layer(cors_layer("https://nounstudio.dz"));
        let req = Request::get("/")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn only_the_site_origin_is_allowed() {
        assert_eq!(
            allowed_origin("https://nounstudio.dz").await,
            Some(HeaderValue::from_static("https://nounstudio.dz"))
        );
        assert_eq!(allowed_origin("https://evil.example").await, None);
    }
}
