//! HTTP client for the shop catalog API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{CategoryGroupQuery, ProductQuery, Query},
    types::{CategoryGroups, ProductPage, ShopList},
    Error,
};

/// Base URL used by [`Client::new`].
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the shop catalog API.
///
/// Each request builds a fresh `reqwest::Client` with the configured timeout.
/// Exactly one attempt is made per call; retrying is left to the caller.
pub struct Client {
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches one page of a shop's products.
    pub async fn get_products(&self, query: &ProductQuery) -> Result<ProductPage, Error> {
        self.get::<ProductPage, ProductQuery>("/products/filter", Some(query))
            .await
    }

    /// Fetches the distinct categories of a shop's products.
    pub async fn get_products_grouped_by_category(
        &self,
        query: &CategoryGroupQuery,
    ) -> Result<CategoryGroups, Error> {
        self.get::<CategoryGroups, CategoryGroupQuery>(
            "/products/grouped-by-category",
            Some(query),
        )
        .await
    }

    /// Fetches every shop.
    pub async fn get_shops(&self) -> Result<ShopList, Error> {
        self.get::<ShopList, ProductQuery>("/shops", None).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_points_at_default_base_url() {
        let client = Client::new();
        assert_eq!(client.base_api_url, DEFAULT_BASE_URL);
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);
        assert_eq!(Client::default().base_api_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn with_base_url_trims_trailing_slash() {
        let client = Client::with_base_url("http://shop.test/api/");
        assert_eq!(client.base_api_url, "http://shop.test/api");

        let url = client
            .get_url("/shops", None::<&ProductQuery>)
            .expect("valid url");
        assert_eq!(url.as_str(), "http://shop.test/api/shops");
    }
}
