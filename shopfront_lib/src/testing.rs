//! Fixtures and a scripted remote for engine tests.

use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use shopfront_api::types::{CategoryGroup, Product, ProductPage, Shop};
use shopfront_api::ProductQuery;

use crate::error::ShopfrontError;
use crate::remote::RemoteService;

pub(crate) fn product(n: usize) -> Product {
    Product {
        id: format!("p{}", n),
        name: format!("Product {}", n),
        category: Some("coffee".to_string()),
        price: Some(n as f64),
        description: None,
        image_url: None,
    }
}

pub(crate) fn products(range: RangeInclusive<usize>) -> Vec<Product> {
    range.map(product).collect()
}

pub(crate) fn page(
    range: RangeInclusive<usize>,
    count: i64,
    offset: i64,
    limit: i64,
) -> ProductPage {
    ProductPage {
        items: products(range),
        count,
        offset,
        limit,
    }
}

pub(crate) fn http_error(status: u16, body: &str) -> ShopfrontError {
    ShopfrontError::Api(shopfront_api::Error::HttpStatus {
        status,
        body: body.to_string(),
    })
}

pub(crate) fn transport_error() -> ShopfrontError {
    ShopfrontError::Api(shopfront_api::Error::RequestFailed)
}

/// Remote that replays queued responses and records every call.
#[derive(Default)]
pub(crate) struct ScriptedRemote {
    pages: Mutex<VecDeque<Result<ProductPage, ShopfrontError>>>,
    categories: Mutex<VecDeque<Result<Vec<CategoryGroup>, ShopfrontError>>>,
    shops: Mutex<VecDeque<Result<Vec<Shop>, ShopfrontError>>>,
    pub(crate) product_queries: Mutex<Vec<ProductQuery>>,
    pub(crate) category_calls: Mutex<Vec<String>>,
    pub(crate) shop_calls: Mutex<usize>,
    facet_delay: Option<Duration>,
}

impl ScriptedRemote {
    /// Makes every category request sleep for `delay` before answering.
    pub(crate) fn with_facet_delay(mut self, delay: Duration) -> Self {
        self.facet_delay = Some(delay);
        self
    }

    pub(crate) fn push_page(&self, page: Result<ProductPage, ShopfrontError>) -> &Self {
        self.pages.lock().unwrap().push_back(page);
        self
    }

    pub(crate) fn push_categories(&self, names: &[&str]) -> &Self {
        let groups = names
            .iter()
            .map(|n| CategoryGroup {
                category: n.to_string(),
            })
            .collect();
        self.categories.lock().unwrap().push_back(Ok(groups));
        self
    }

    pub(crate) fn push_categories_error(&self, err: ShopfrontError) -> &Self {
        self.categories.lock().unwrap().push_back(Err(err));
        self
    }

    pub(crate) fn push_shops(&self, shops: Result<Vec<Shop>, ShopfrontError>) -> &Self {
        self.shops.lock().unwrap().push_back(shops);
        self
    }

    pub(crate) fn product_calls(&self) -> usize {
        self.product_queries.lock().unwrap().len()
    }

    pub(crate) fn last_query(&self) -> ProductQuery {
        self.product_queries.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl RemoteService for ScriptedRemote {
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, ShopfrontError> {
        self.product_queries.lock().unwrap().push(query.clone());
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected product request")
    }

    async fn list_products_grouped_by_category(
        &self,
        shop: &str,
    ) -> Result<Vec<CategoryGroup>, ShopfrontError> {
        self.category_calls.lock().unwrap().push(shop.to_string());
        if let Some(delay) = self.facet_delay {
            tokio::time::sleep(delay).await;
        }
        self.categories
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected category request")
    }

    async fn list_shops(&self) -> Result<Vec<Shop>, ShopfrontError> {
        *self.shop_calls.lock().unwrap() += 1;
        self.shops
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected shop request")
    }
}
