use api::serve;
use app_state::load_app_settings;
use color_eyre::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = load_app_settings()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("api=info,tower_http=debug,{}", settings.logging.level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    serve(settings).await?;

    Ok(())
}
