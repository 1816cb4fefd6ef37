use anyhow::{anyhow, Result};
use std::env;
use url::Url;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/courses.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    /// Base URL of the course platform that deep links point into.
    pub auth_url: Url,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let database_url = database_url_from_env();

        let auth_url = parse_auth_url(&env::var("AUTH_URL").unwrap_or_default())?;

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            auth_url,
            http_port,
        })
    }
}

/// `DATABASE_URL`, falling back to the default when unset or blank.
pub fn database_url_from_env() -> String {
    env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

fn parse_auth_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(anyhow!("AUTH_URL must be set"));
    }

    let url = Url::parse(raw).map_err(|e| anyhow!("Invalid AUTH_URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("Invalid AUTH_URL: unsupported scheme {other}")),
    }
}
