use serde::{Deserialize, Serialize};

pub type ProductID = String;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: ProductID,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One page of `/products/filter`.
///
/// `count` is the total number of products matching the filter, not the
/// length of this page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProductPage {
    #[serde(rename = "shopProducts")]
    pub items: Vec<Product>,
    pub count: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroups {
    #[serde(rename = "shopProducts")]
    pub groups: Vec<CategoryGroup>,
}
