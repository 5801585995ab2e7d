use crate::api_state::ApiContext;
use crate::color::handlers::{
    detect_color_in_box_handler, get_color_handler, post_color_handler, upload_file_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

pub fn color_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/color", get(get_color_handler).post(post_color_handler))
        .route("/detect-color-in-box", post(detect_color_in_box_handler))
        .route("/uploadfile", post(upload_file_handler))
}
