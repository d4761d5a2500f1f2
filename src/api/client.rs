//! Blocking HTTP client for the two ClickUp read endpoints.

use crate::api::models::{CurrentEntryResponse, EntriesResponse, TimeEntry};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::time::today_window_ms;
use chrono::Local;
use log::{debug, error};
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

pub struct ApiClient {
    http: Client,
    token: String,
    team: String,
    base_url: String,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> Self {
        ApiClient {
            http: Client::new(),
            token: cfg.token.clone(),
            team: cfg.team.clone(),
            base_url: cfg.base_url.clone(),
        }
    }

    /// Completed entries logged inside today's local-midnight window.
    /// Billable entries are excluded, matching what the status line is
    /// meant to count.
    pub fn fetch_today_entries(&self) -> AppResult<Vec<TimeEntry>> {
        let (start, end) = today_window_ms(Local::now());
        let url = format!(
            "{}/team/{}/time_entries?is_billable=false&start_date={}&end_date={}",
            self.base_url, self.team, start, end,
        );
        let res: EntriesResponse = self.get_json(&url)?;
        Ok(res.data)
    }

    /// The entry whose timer is currently running, if any.
    pub fn fetch_current_entry(&self) -> AppResult<Option<TimeEntry>> {
        let url = format!("{}/team/{}/time_entries/current", self.base_url, self.team);
        let res: CurrentEntryResponse = self.get_json(&url)?;
        Ok(res.data)
    }

    /// GET `url` with the auth header and decode the JSON body.
    /// Read and decode are separate stages so their failures stay
    /// distinguishable; a decode failure logs the serde error before
    /// returning.
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        debug!("GET {}", url);

        let url = Url::parse(url).map_err(|e| AppError::BuildRequest(e.to_string()))?;
        let res = self
            .http
            .get(url)
            .header(AUTHORIZATION, self.token.as_str())
            .send()?;

        let body = res.text().map_err(|e| AppError::ReadBody(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            error!("{}", e);
            AppError::ParseResponse(e)
        })
    }
}
