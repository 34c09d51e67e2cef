use url::Url;

use super::{
    common::{PagedQuery, QueryCommon},
    Query,
};

/// Facet value that stands for "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Query for `/products/filter`: one shop's products, optionally narrowed to a category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub common: QueryCommon,
    pub shop: String,
    pub category: Option<String>,
}

impl PagedQuery for ProductQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl Query for ProductQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("criteria[shop]", self.shop.as_str());
        if let Some(category) = &self.category {
            url.query_pairs_mut()
                .append_pair("criteria[category]", category.as_str());
        };
        self.common.add_to_url(&url)
    }
}

impl ProductQuery {
    pub fn new(shop: &str) -> Self {
        Self {
            shop: shop.to_string(),
            ..Default::default()
        }
    }

    /// Narrows to a category. The synthetic `all` facet clears the filter.
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = if category == ALL_CATEGORIES {
            None
        } else {
            Some(category.to_string())
        };
        self
    }
}

/// Query for `/products/grouped-by-category`: the distinct categories of a shop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryGroupQuery {
    pub shop: String,
}

impl Query for CategoryGroupQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("shop", self.shop.as_str());
        url
    }
}

impl CategoryGroupQuery {
    pub fn new(shop: &str) -> Self {
        Self {
            shop: shop.to_string(),
        }
    }
}
