use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use shared::jwt::JwtConfig;

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{admin, auth, events, health, rsvps};
use crate::services::auth::build_jwt_config;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    /// Token signing/verification keys, parsed once at startup.
    pub jwt: Arc<JwtConfig>,
}

pub fn create_app(config: Config, pool: PgPool) -> anyhow::Result<Router> {
    let config = Arc::new(config);

    let jwt = Arc::new(build_jwt_config(&config.jwt)?);

    let state = AppState {
        pool,
        config: config.clone(),
        jwt,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Authentication is request-scoped: handlers that need a caller
    // identity take a UserAuth or AdminAuth extractor argument, so no
    // auth middleware layer exists here.
    let api_routes = Router::new()
        // Auth routes (v1)
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        // Event routes (v1)
        .route("/api/v1/events", get(events::list_events))
        .route("/api/v1/events", post(events::create_event))
        .route("/api/v1/events/:event_id", get(events::get_event))
        .route("/api/v1/events/:event_id", delete(events::delete_event))
        // RSVP routes (v1)
        .route("/api/v1/events/:event_id/rsvp", put(rsvps::set_rsvp))
        .route("/api/v1/events/:event_id/rsvp", get(rsvps::get_my_rsvp))
        .route("/api/v1/events/:event_id/rsvps", get(rsvps::list_event_rsvps))
        .route("/api/v1/users/:user_id/rsvps", get(rsvps::list_user_rsvps))
        // Admin routes (v1)
        .route(
            "/api/v1/admin/event-responses",
            get(admin::event_responses),
        );

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    let router = Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state);

    Ok(router)
}
