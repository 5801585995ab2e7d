use crate::routes::{color, root};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        // Color handlers
        color::handlers::get_color_handler,
        color::handlers::post_color_handler,
        color::handlers::detect_color_in_box_handler,
        color::handlers::upload_file_handler,
    ),
    tags(
        (name = "Color Detection", description = "Color Detection API"),
        (name = "Color", description = "Predict color names from RGB values and images"),
        (name = "System", description = "Status and health check"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/health", "/color", "/detect-color-in-box", "/uploadfile"] {
            assert!(doc.paths.paths.contains_key(path), "{path} is not documented");
        }
    }
}
