use anyhow::Result;
use contact_relay::config::Config;
use contact_relay::dispatch::Dispatcher;
use contact_relay::mailer::SmtpMailer;
use contact_relay::server;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("contact_relay=info".parse()?),
        )
        .init();

    info!("Starting contact relay");

    // Load configuration from environment
    let config = Arc::new(Config::from_env()?);

    let mailer = Arc::new(SmtpMailer::new(&config)?);
    let dispatcher = Dispatcher::new(Arc::clone(&config), mailer);

    let app = server::app(dispatcher);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
