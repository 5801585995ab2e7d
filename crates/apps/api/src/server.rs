use crate::api_state::ApiContext;
use crate::create_router;
use app_state::{ApiSettings, AppSettings};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use color_eyre::Result;
use color_eyre::eyre::Context;
use common_services::classifier::load_classifier;
use http::{HeaderValue, Method, header};
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Trains the classifier from the configured samples, binds and serves until shutdown.
pub async fn serve(settings: AppSettings) -> Result<()> {
    // --- Server Startup ---
    info!("🚀 Initializing server...");
    let api_state = create_context(settings)?;

    let addr = api_state.settings.api.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Cannot bind to {addr}"))?;

    info!("🐸 Server listening on http://{}", addr);
    serve_with_listener(listener, api_state).await
}

/// Builds the shared state. The classifier is fully trained before this returns.
pub fn create_context(settings: AppSettings) -> Result<ApiContext> {
    let (classifier, sample_count) = load_classifier(&settings.classifier)?;
    Ok(ApiContext::new(classifier, settings, sample_count))
}

/// Serves on an already bound listener, used by tests to pick a free port.
pub async fn serve_with_listener(listener: TcpListener, api_state: ApiContext) -> Result<()> {
    let app = create_app(api_state);
    axum::serve(listener, app).await?;
    Ok(())
}

/// The router with CORS, tracing, compression and the body limit applied.
///
/// Oversized bodies are rejected by the JSON extractor, so the 413 carries a JSON error.
pub fn create_app(api_state: ApiContext) -> Router {
    let cors = cors_layer(&api_state.settings.api);
    let body_limit = api_state.settings.api.body_limit_bytes();

    create_router(api_state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CompressionLayer::new())
}

fn cors_layer(settings: &ApiSettings) -> CorsLayer {
    let allow_origin = if settings.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let allowed_origins: Vec<HeaderValue> = settings
            .allowed_origins
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(hv) => Some(hv),
                Err(e) => {
                    error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                    None
                }
            })
            .collect();
        AllowOrigin::list(allowed_origins)
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .max_age(std::time::Duration::from_secs(3600))
        .expose_headers(cors::Any)
}
