mod api_doc;
pub mod color;
pub mod root;

use crate::api_state::ApiContext;
use crate::color::router::color_public_router;
use crate::root::router::root_public_router;
use crate::routes::api_doc::ApiDoc;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(public_routes())
        .with_state(api_state)
}

fn public_routes() -> Router<ApiContext> {
    Router::new()
        .merge(root_public_router())
        .merge(color_public_router())
}
