//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; the submission pipeline lives in ContactService.

use dotenv::dotenv;
use folio::adapters::content::JsonContent;
use folio::adapters::email::{EmailJsDelivery, MockDelivery};
use folio::adapters::mailto::SystemMailClient;
use folio::adapters::ui::TuiInputPort;
use folio::ports::{ContentPort, DeliveryPort, InputPort, MailClientPort};
use folio::shared::config::AppConfig;
use folio::usecases::{ContactService, PortfolioService};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_default();

    // --- Content: data.json with built-in defaults ---
    let content: Arc<dyn ContentPort> = Arc::new(JsonContent::new(cfg.data_path_or_default()));
    let portfolio_service = PortfolioService::new(content);
    let data = portfolio_service.load_or_default().await;

    // --- Delivery: EmailJS, or the mock adapter when requested ---
    let email_cfg = cfg.email_service_config();
    let delivery: Arc<dyn DeliveryPort> = if cfg.mock_delivery() {
        warn!("FOLIO_MOCK_DELIVERY set, using mock delivery adapter");
        Arc::new(MockDelivery::succeeding().with_delay(300))
    } else {
        if !email_cfg.is_initialized() {
            warn!("EmailJS credentials not set, submissions will fall back to the mail client");
        }
        Arc::new(EmailJsDelivery::new(
            cfg.emailjs_api_url_or_default(),
            email_cfg.clone(),
        ))
    };

    // --- Contact pipeline: injected delivery + mail-client fallback ---
    let mail_client: Arc<dyn MailClientPort> = Arc::new(SystemMailClient);
    let contact_service = Arc::new(ContactService::new(
        delivery,
        mail_client,
        email_cfg.recipient.clone(),
    ));

    // --- Run (menu -> sections / contact form) ---
    let input_port: Arc<dyn InputPort> =
        Arc::new(TuiInputPort::new(data, contact_service, cfg.typewriter()));
    input_port.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
