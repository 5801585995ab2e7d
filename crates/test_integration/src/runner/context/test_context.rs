use app_state::{AppSettings, load_settings_from_path};
use color_eyre::Result;
use std::path::Path;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// A running API trained on `assets/colors.csv`, with a client pointed at it.
pub struct TestContext {
    pub settings: AppSettings,
    pub http_client: reqwest::Client,
    /// Scratch space for files sent to `/uploadfile`.
    pub upload_dir: TempDir,
    _api_handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        info!("Setting up test environment...");

        let assets = Path::new(ASSETS_DIR);
        let mut settings = load_settings_from_path(&assets.join("settings.yaml"), false)?;
        settings.classifier.samples_path = assets.join("colors.csv");

        // Port 0 lets the OS pick, the real address is known once bound.
        let listener = TcpListener::bind(settings.api.socket_addr()?).await?;
        let addr = listener.local_addr()?;
        settings.api.port = addr.port();
        settings.api.public_url = format!("http://{addr}");

        // Training happens here, before any request can arrive.
        let api_state = api::create_context(settings.clone())?;
        let api_handle = tokio::spawn(async move {
            if let Err(e) = api::serve_with_listener(listener, api_state).await {
                error!("API server failed: {}", e);
            }
        });

        info!("Test environment is ready at {}", settings.api.public_url);

        Ok(Self {
            settings,
            http_client: reqwest::Client::new(),
            upload_dir: TempDir::new()?,
            _api_handle: api_handle,
        })
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.settings.api.public_url)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        info!("Tearing down test environment...");
        self._api_handle.abort();
    }
}
