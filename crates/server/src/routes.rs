use axum::routing::{get, post, MethodRouter};
use axum::{Json, Router};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod admin;
pub mod public;

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Knobs that change which routes exist.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub media_root: String,
    pub enable_admin: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self { media_root: "media".into(), enable_admin: false }
    }
}

/// Register `path` both with and without its trailing slash.
fn route_both(router: Router<ServerState>, path: &str, handler: MethodRouter<ServerState>) -> Router<ServerState> {
    let bare = path.trim_end_matches('/');
    router.route(bare, handler.clone()).route(&format!("{bare}/"), handler)
}

/// Build the full application router: public API, docs, media and optional admin.
pub fn build_router(state: ServerState, opts: &RouterOptions, cors: CorsLayer) -> Router {
    let mut api = Router::new();
    api = route_both(api, "/api/categories/", get(public::categories));
    api = route_both(api, "/api/clients/", get(public::clients_list));
    api = route_both(api, "/api/contact-info/", get(public::contact_info));
    api = route_both(api, "/api/contact-message/", post(public::contact_message));
    api = route_both(api, "/api/hardware/", get(public::hardware_bundle));
    api = route_both(api, "/api/home/", get(public::home_bundle));
    api = route_both(api, "/api/modules/", get(public::modules_list));
    api = route_both(api, "/api/modules/:slug/", get(public::module_detail));

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api)
        .nest_service("/media", ServeDir::new(&opts.media_root));

    if opts.enable_admin {
        app = app.nest("/admin", admin::router());
    }

    app.with_state(state).layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
