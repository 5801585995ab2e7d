use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::State;
use common_services::api::color::interfaces::ServiceStatus;
use std::collections::BTreeMap;

const ENDPOINTS: [(&str, &str); 5] = [
    ("/uploadfile", "Upload image for color detection"),
    ("/detect-color-in-box", "Detect color in specific region"),
    ("/color", "Direct RGB to color prediction"),
    ("/health", "Health check"),
    ("/openapi.json", "OpenAPI document"),
];

#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Service status and available endpoints", body = ServiceStatus)
    )
)]
pub async fn root(State(context): State<ApiContext>) -> Json<ServiceStatus> {
    let endpoints: BTreeMap<String, String> = ENDPOINTS
        .iter()
        .map(|(path, description)| ((*path).to_owned(), (*description).to_owned()))
        .collect();

    Json(ServiceStatus {
        status: "online".to_owned(),
        endpoints,
        labels: context.classifier.labels().len(),
        samples: context.sample_count,
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "API is healthy and ready to accept traffic", body = String),
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}
