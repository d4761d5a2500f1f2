//! Environment-backed configuration.
//! The token and team id are required; the API base URL can be overridden
//! to point the tool at a different backend without recompiling.

use crate::errors::{AppError, AppResult};
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.clickup.com/api/v2";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub team: String,
    pub base_url: String,
}

impl Config {
    /// Read the configuration from the process environment. Loading a
    /// `.env` file first is the caller's job.
    pub fn from_env() -> AppResult<Self> {
        let token = require(
            "CLICKUP_TOKEN",
            "No ClickUp access token provided. Please set the .env file",
        )?;
        let team = require(
            "CLICKUP_TEAM",
            "No ClickUp team id provided. Please set the .env file",
        )?;
        let base_url =
            env::var("CLICKUP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Config {
            token,
            team,
            base_url,
        })
    }
}

/// An empty variable counts as missing, same as an unset one.
fn require(key: &str, msg: &str) -> AppResult<String> {
    match env::var(key) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Config(msg.to_string())),
    }
}
