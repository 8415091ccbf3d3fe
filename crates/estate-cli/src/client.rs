//! HTTP client for the estate server.

use anyhow::Result;
use estate_core::{
    CreateEstateRequest, CreateTreeRequest, CreatedResponse, DronePlanResult, ErrorResponse,
    StatsResult,
};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Client for the estate server REST API.
pub struct EstateClient {
    base_url: String,
    client: reqwest::Client,
}

impl EstateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create an estate and return its id.
    pub async fn create_estate(&self, width: i64, length: i64) -> Result<String> {
        let url = format!("{}/estate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CreateEstateRequest { width, length })
            .send()
            .await?;
        let created: CreatedResponse = parse(response).await?;
        Ok(created.id)
    }

    /// Plant a tree and return its id.
    pub async fn add_tree(&self, estate_id: &str, x: i64, y: i64, height: i64) -> Result<String> {
        let url = format!("{}/estate/{}/tree", self.base_url, estate_id);
        let response = self
            .client
            .post(&url)
            .json(&CreateTreeRequest { x, y, height })
            .send()
            .await?;
        let created: CreatedResponse = parse(response).await?;
        Ok(created.id)
    }

    pub async fn stats(&self, estate_id: &str) -> Result<StatsResult> {
        let url = format!("{}/estate/{}/stats", self.base_url, estate_id);
        parse(self.client.get(&url).send().await?).await
    }

    pub async fn drone_plan(&self, estate_id: &str) -> Result<DronePlanResult> {
        let url = format!("{}/estate/{}/drone-plan", self.base_url, estate_id);
        parse(self.client.get(&url).send().await?).await
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    anyhow::bail!("Request failed ({}): {}", status, message)
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.to_string())
}
