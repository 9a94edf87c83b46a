//! API Routes
//!
//! Configures the Axum router with the list endpoints behind the response cache.

use axum::{
    http::{header, HeaderValue},
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, create_list, delete_list, get_lists, health_handler, update_list,
    AppState,
};
use super::middleware::{cache_response, CacheLayer};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/list/create/:user_id` - Create a list
/// - `GET /api/list/getlists/:user_id` - A user's lists (cached)
/// - `PUT /api/list/update/:id` - Update a list
/// - `DELETE /api/list/delete/:id` - Delete a list
/// - `GET /cache/stats` - Response cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Response cache: only on `/api/list`; GETs are served from the cache
/// - Cache-Control: `no-store` so clients and proxies do not cache API output
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cache_layer =
        CacheLayer::new(state.cache.clone()).with_max_body_bytes(state.max_cache_body_bytes);

    let lists = Router::new()
        .route("/create/:user_id", post(create_list))
        .route("/getlists/:user_id", get(get_lists))
        .route("/delete/:id", delete(delete_list))
        .route("/update/:id", put(update_list))
        .layer(middleware::from_fn_with_state(cache_layer, cache_response));

    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/list", lists)
        .route("/cache/stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, private"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
