//! CarQuote API Gateway
//!
//! Car insurance premium calculator over HTTP:
//! - Premium = BaseRate × CarValue (+ BrokerFee)
//! - Coverage = CoveragePercentage × CarValue

use carquote_api_gateway::{router, AppState, GatewayConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("carquote_api_gateway=info".parse()?)
                .add_directive("carquote_underwriting=info".parse()?),
        )
        .json()
        .init();

    let config = GatewayConfig::load()?;
    info!(
        currency = %config.underwriting.currency,
        base_rate = %config.underwriting.base_rate,
        coverage = %config.underwriting.coverage,
        "Loaded underwriting defaults"
    );

    let app = router(AppState::new(config.underwriting.clone()));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("CarQuote API Gateway v{} starting on {}", carquote_api_gateway::VERSION, addr);
    info!("Endpoints: /health, /api/v1/version, /api/v1/insurance/calculate");

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received shutdown signal"),
            Err(e) => {
                // Keep serving without graceful shutdown
                error!("Failed to install CTRL+C signal handler: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Shutting down CarQuote API Gateway");
    Ok(())
}
