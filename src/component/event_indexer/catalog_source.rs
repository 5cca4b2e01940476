//! 遠端賽事來源
//!
//! 預設使用 TheSportsDB 的賽季賽事 API

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// 取得某個賽季的所有賽事
pub trait CatalogSource {
    fn fetch_season(&self, season: i32) -> Result<Vec<Value>>;
}

#[derive(Debug, Deserialize)]
struct SeasonResponse {
    #[serde(default)]
    events: Option<Vec<Value>>,
}

/// TheSportsDB HTTP 來源
pub struct SportsDbSource {
    url_template: String,
    client: reqwest::blocking::Client,
}

impl SportsDbSource {
    /// `url_template` 中的 `{season}` 會替換為賽季年份
    pub fn new(url_template: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            url_template: url_template.into(),
            client,
        })
    }

    #[must_use]
    pub fn season_url(&self, season: i32) -> String {
        self.url_template.replace("{season}", &season.to_string())
    }
}

impl CatalogSource for SportsDbSource {
    fn fetch_season(&self, season: i32) -> Result<Vec<Value>> {
        let url = self.season_url(season);
        log::debug!("Fetching events from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to request {url}"))?;

        let status = response.status();
        let body = response
            .text()
            .with_context(|| format!("Failed to read response from {url}"))?;

        if !status.is_success() {
            bail!("Failed to retrieve events: {status}, Response: {body}");
        }

        parse_season_response(&body)
    }
}

/// 解析 API 回應，`events` 為 null 或不存在時回傳空陣列
pub fn parse_season_response(body: &str) -> Result<Vec<Value>> {
    let response: SeasonResponse =
        serde_json::from_str(body).context("Failed to decode events response")?;
    Ok(response.events.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_season_response() {
        let events = parse_season_response(
            r#"{"events": [{"idEvent": "1", "strEvent": "UFC 300"}, {"idEvent": "2", "strEvent": "UFC 301"}]}"#,
        )
        .unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1]["strEvent"], "UFC 301");
    }

    #[test]
    fn test_parse_season_response_null_events() {
        assert!(parse_season_response(r#"{"events": null}"#).unwrap().is_empty());
        assert!(parse_season_response("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_season_response_invalid() {
        assert!(parse_season_response("<html>rate limited</html>").is_err());
    }

    #[test]
    fn test_season_url() {
        let source = SportsDbSource::new("https://example.test/events?id=4443&s={season}").unwrap();
        assert_eq!(source.season_url(2025), "https://example.test/events?id=4443&s=2025");
    }
}
