use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod session;

use booking_form_cell::{BookingPage, HeadlessView};
use shared_backend::MediturnosClient;
use shared_config::AppConfig;

const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing; logs go to stderr so they do not mix with the prompts
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Mediturnos booking session");

    let config = AppConfig::from_env();
    if !config.is_configured() {
        anyhow::bail!("MEDITURNOS_API_BASE_URL is empty");
    }
    info!("Using backend at {}", config.api_base_url);

    let backend = Arc::new(MediturnosClient::new(&config));
    let page = BookingPage::new(backend, HeadlessView::new());

    session::run(page).await
}
