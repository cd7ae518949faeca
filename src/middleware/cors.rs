use tower_http::cors::{Any, CorsLayer};

/// Allow-all policy for the separately hosted front-end.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}
