use service_core::error::AppError;
use service_core::observability::logging::init_tracing;
use wallet_service::config::WalletConfig;
use wallet_service::startup::Application;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = WalletConfig::from_env()?;

    // Initialize tracing/logging using shared logic
    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        "Starting wallet service"
    );

    let app = Application::build(config).await?;
    tracing::info!(port = app.port(), "Wallet service listening");

    app.run_until_stopped().await
}
