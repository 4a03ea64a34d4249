use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    routing::get,
};
use salesdesk_core::api::routes::system;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::system::{health_handler, index_handler, ping_handler},
    infra::{app_state::AppState, config::CorsConfig},
    routes,
};

/// Assemble the full router: system endpoints, the `/api` tree, CORS and
/// request tracing.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = if state.config().dev_mode {
        CorsLayer::permissive()
    } else {
        build_cors_layer(&state.config().cors)
    };

    Router::new()
        .route(system::INDEX, get(index_handler))
        .route(system::PING, get(ping_handler))
        .route(system::HEALTH, get(health_handler))
        .merge(routes::create_api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(state)
}

// Entries were checked by the config guard rails; anything unparsable is
// skipped rather than failing the whole layer.
fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let allow_origin = if cors.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            cors.allowed_origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok()),
        )
    };

    let methods: Vec<Method> = cors
        .allowed_methods
        .iter()
        .filter_map(|method| Method::from_bytes(method.trim().as_bytes()).ok())
        .collect();

    let headers: Vec<HeaderName> = cors
        .allowed_headers
        .iter()
        .filter_map(|header| HeaderName::from_bytes(header.trim().as_bytes()).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use salesdesk_core::SqliteDatabase;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app_with(config: Config) -> Router {
        let database = SqliteDatabase::in_memory().await.unwrap();
        create_app(AppState::new(Arc::new(config), database))
    }

    #[tokio::test]
    async fn preflight_echoes_allowed_origin() {
        let mut config = Config::in_memory();
        config.cors.allowed_origins = vec!["http://localhost:3000".into()];
        let app = app_with(config).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/clientes")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn empty_origin_list_allows_any_origin() {
        let app = app_with(Config::in_memory()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ping")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
