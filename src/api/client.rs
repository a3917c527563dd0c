//! HTTP client for the stars backend.

use super::service::StarsApi;
use crate::constants::{REQUEST_TIMEOUT_SECS, TOTAL_COUNT_HEADER};
use crate::error::{AppError, Result};
use crate::types::{NewStar, Star, StarPage, Universe};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// reqwest-backed implementation of [`StarsApi`].
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build HTTP client, using defaults");
                Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn stars_url(&self, universe_id: Option<u64>) -> String {
        match universe_id {
            Some(id) => format!("{}/universes/{}/stars", self.base_url, id),
            None => format!("{}/stars", self.base_url),
        }
    }
}

/// Map a response status onto the error type, 404 naming `what`.
fn check_status(response: Response, what: impl FnOnce() -> String) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(AppError::NotFound(what()));
    }
    if !status.is_success() {
        return Err(AppError::Http {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// Missing or non-numeric totals count as zero.
pub(crate) fn parse_total_count(headers: &HeaderMap) -> u64 {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

#[async_trait]
impl StarsApi for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn get_stars(&self, universe_id: Option<u64>, page: u32) -> Result<StarPage> {
        let start = Instant::now();
        let url = self.stars_url(universe_id);

        let response = self
            .client
            .get(&url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url = %url, "Star list network error");
                AppError::from(e)
            })?;
        let response = check_status(response, || format!("stars of universe {:?}", universe_id))?;

        let total_count = parse_total_count(response.headers());
        let stars = response.json::<Vec<Star>>().await.map_err(|e| {
            error!(error = %e, "Star list parse error");
            AppError::Decode(e.to_string())
        })?;

        debug!(
            duration_ms = start.elapsed().as_millis(),
            count = stars.len(),
            total_count,
            "Stars fetched"
        );
        Ok(StarPage { stars, total_count })
    }

    #[tracing::instrument(skip(self))]
    async fn get_universe(&self, id: u64) -> Result<Universe> {
        let url = format!("{}/universes/{}", self.base_url, id);
        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(error = %e, url = %url, "Universe fetch network error");
            AppError::from(e)
        })?;
        let response = check_status(response, || format!("universe {}", id))?;

        let universe = response.json::<Universe>().await.map_err(|e| {
            error!(error = %e, "Universe parse error");
            AppError::Decode(e.to_string())
        })?;
        debug!(name = %universe.name, max_size = universe.max_size, "Universe fetched");
        Ok(universe)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_star(&self, id: u64) -> Result<()> {
        let url = format!("{}/stars/{}", self.base_url, id);
        let response = self.client.delete(&url).send().await.map_err(|e| {
            error!(error = %e, url = %url, "Star delete network error");
            AppError::from(e)
        })?;
        check_status(response, || format!("star {}", id))?;
        debug!("Star deleted");
        Ok(())
    }

    #[tracing::instrument(skip(self, star), fields(name = %star.name, universe_id = star.universe_id))]
    async fn create_star(&self, star: &NewStar) -> Result<Star> {
        let url = format!("{}/stars", self.base_url);
        let response = self.client.post(&url).json(star).send().await.map_err(|e| {
            error!(error = %e, url = %url, "Star create network error");
            AppError::from(e)
        })?;
        let response = check_status(response, || format!("universe {}", star.universe_id))?;

        let created = response.json::<Star>().await.map_err(|e| {
            error!(error = %e, "Created star parse error");
            AppError::Decode(e.to_string())
        })?;
        debug!(id = created.id, "Star created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn total_count_header_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(parse_total_count(&headers), 0);

        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("42"));
        assert_eq!(parse_total_count(&headers), 42);

        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("many"));
        assert_eq!(parse_total_count(&headers), 0);
    }

    #[test]
    fn urls_follow_scope() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.stars_url(None), "http://localhost:8080/api/stars");
        assert_eq!(
            client.stars_url(Some(3)),
            "http://localhost:8080/api/universes/3/stars"
        );
    }
}
