use anyhow::{anyhow, Result};
use std::env;

use crate::api::{DGTY_API_URL, TPI_API_URL};

/// Which backend keeps session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    Sqlite,
}

/// How the login flow picks the institution.
///
/// `DefaultTpi` starts the dialogue immediately with the fixed institution;
/// `ExplicitChoice` asks the user through an inline keyboard first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstitutionSelectionMode {
    DefaultTpi,
    ExplicitChoice,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub storage_kind: StorageKind,
    pub database_url: String,
    pub http_port: u16,
    pub institution_mode: InstitutionSelectionMode,
    pub tpi_api_url: String,
    pub dgty_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let storage_kind = match env::var("STORAGE_TYPE")
            .unwrap_or_else(|_| "memory".to_string())
            .trim()
            .to_lowercase()
            .as_str()
        {
            "memory" | "" => StorageKind::Memory,
            "sqlite" => StorageKind::Sqlite,
            other => return Err(anyhow!("Unknown STORAGE_TYPE: {other}")),
        };

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./data/sessions.db".to_string());
        let database_url = if database_url.trim().is_empty() {
            "sqlite:./data/sessions.db".to_string()
        } else {
            database_url
        };

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let institution_mode = match env::var("INSTITUTION_SELECTION_MODE")
            .unwrap_or_else(|_| "default".to_string())
            .trim()
            .to_lowercase()
            .as_str()
        {
            "default" | "" => InstitutionSelectionMode::DefaultTpi,
            "choice" => InstitutionSelectionMode::ExplicitChoice,
            other => return Err(anyhow!("Unknown INSTITUTION_SELECTION_MODE: {other}")),
        };

        let tpi_api_url =
            env::var("TPI_API_URL").unwrap_or_else(|_| TPI_API_URL.to_string());
        let dgty_api_url =
            env::var("DGTY_API_URL").unwrap_or_else(|_| DGTY_API_URL.to_string());

        Ok(Config {
            telegram_bot_token: token,
            storage_kind,
            database_url,
            http_port,
            institution_mode,
            tpi_api_url,
            dgty_api_url,
        })
    }
}
