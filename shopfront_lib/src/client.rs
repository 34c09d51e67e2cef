//! [`RemoteService`] implementation over the HTTP API client.

use std::time::Duration;

use async_trait::async_trait;
use shopfront_api::types::{CategoryGroup, ProductPage, Shop};
use shopfront_api::{CategoryGroupQuery, Client, ProductQuery};

use crate::cache::MemoryCache;
use crate::config::ClientConfig;
use crate::error::ShopfrontError;
use crate::remote::RemoteService;

/// API client wrapper used by the catalog engine.
///
/// Category listings change rarely and are cached per shop. Product pages
/// are always fetched fresh so that "load more" sees the live listing.
pub struct ShopClient {
    inner: Client,
    category_cache: MemoryCache<Vec<CategoryGroup>>,
}

impl ShopClient {
    /// Creates a client from the resolved configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Client::with_base_url(&config.base_url).with_timeout(config.timeout),
            category_cache: MemoryCache::new(config.facet_cache_ttl),
        }
    }

    /// Creates a client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str, category_ttl: Duration) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
            category_cache: MemoryCache::new(category_ttl),
        }
    }
}

#[async_trait]
impl RemoteService for ShopClient {
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, ShopfrontError> {
        Ok(self.inner.get_products(query).await?)
    }

    async fn list_products_grouped_by_category(
        &self,
        shop: &str,
    ) -> Result<Vec<CategoryGroup>, ShopfrontError> {
        let cache_key = format!("categories:{}", shop);
        if let Some(cached) = self.category_cache.get(&cache_key) {
            tracing::debug!("category cache hit for shop {}", shop);
            return Ok(cached);
        }

        let groups = self
            .inner
            .get_products_grouped_by_category(&CategoryGroupQuery::new(shop))
            .await?
            .groups;
        self.category_cache.set(cache_key, groups.clone());
        Ok(groups)
    }

    async fn list_shops(&self) -> Result<Vec<Shop>, ShopfrontError> {
        Ok(self.inner.get_shops().await?.shops)
    }
}
