use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // SMTP relay
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,

    // Where operator notifications are delivered
    pub operator_email: String,

    // HTTP server
    pub port: u16,

    // Upper bound on a single SMTP delivery, in seconds
    pub send_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            smtp_host: std::env::var("SMTP_HOST")
                .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            smtp_username: std::env::var("SMTP_USERNAME")
                .context("SMTP_USERNAME not set")?,
            smtp_password: std::env::var("SMTP_PASSWORD")
                .context("SMTP_PASSWORD not set")?,

            operator_email: std::env::var("OPERATOR_EMAIL")
                .context("OPERATOR_EMAIL not set")?,

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            send_timeout_secs: std::env::var("SEND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}
