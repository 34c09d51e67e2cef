//! The seam between the catalog engine and whatever serves the catalog.

use async_trait::async_trait;
use shopfront_api::types::{CategoryGroup, ProductPage, Shop};
use shopfront_api::ProductQuery;

use crate::error::ShopfrontError;

/// Read operations the engine needs from the remote shop service.
///
/// Each call is a single attempt. Implementations must not retry.
#[async_trait]
pub trait RemoteService: Send + Sync {
    /// One page of a shop's products, optionally filtered by category.
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, ShopfrontError>;

    /// The distinct categories of a shop, in server order.
    async fn list_products_grouped_by_category(
        &self,
        shop: &str,
    ) -> Result<Vec<CategoryGroup>, ShopfrontError>;

    /// Every shop.
    async fn list_shops(&self) -> Result<Vec<Shop>, ShopfrontError>;
}

#[async_trait]
impl<T: RemoteService + ?Sized> RemoteService for std::sync::Arc<T> {
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, ShopfrontError> {
        (**self).list_products(query).await
    }

    async fn list_products_grouped_by_category(
        &self,
        shop: &str,
    ) -> Result<Vec<CategoryGroup>, ShopfrontError> {
        (**self).list_products_grouped_by_category(shop).await
    }

    async fn list_shops(&self) -> Result<Vec<Shop>, ShopfrontError> {
        (**self).list_shops().await
    }
}
