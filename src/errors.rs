//! Unified application error type.
//! All modules (api, cli, config, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Configuration
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Request lifecycle
    // ---------------------------
    #[error("Failed to build a request to ClickUp's API: {0}")]
    BuildRequest(String),

    #[error("Failed to request ClickUp's API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    ReadBody(String),

    #[error("Failed to parse response body: {0}")]
    ParseResponse(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
