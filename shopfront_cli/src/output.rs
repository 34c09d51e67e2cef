use anyhow::Result;
use serde::Serialize;
use shopfront_lib::types::{Product, Shop};
use shopfront_lib::{ErrorInfo, Facet, ListViewState};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ProductRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
}

#[derive(Tabled, Serialize)]
struct ShopRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    #[serde(rename = "Address")]
    address: String,
}

/// JSON document printed by `products --output json`.
#[derive(Serialize)]
pub struct ProductListing<'a> {
    pub products: &'a [Product],
    pub facets: Option<&'a [Facet]>,
    pub total_count: i64,
    pub offset: i64,
    pub limit: i64,
    pub exhausted: bool,
    pub error: Option<&'a ErrorInfo>,
}

impl<'a> ProductListing<'a> {
    pub fn from_state(state: &'a ListViewState) -> Self {
        Self {
            products: state.items.as_deref().unwrap_or(&[]),
            facets: state.facets.as_deref(),
            total_count: state.total_count,
            offset: state.offset,
            limit: state.limit,
            exhausted: state.exhausted,
            error: state.error.as_ref(),
        }
    }
}

// -- Row builders --

fn build_product_rows(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: p.id.clone(),
            name: p.name.clone(),
            category: p.category.clone().unwrap_or_default(),
            price: format_price(p.price),
        })
        .collect()
}

fn build_shop_rows(shops: &[Shop]) -> Vec<ShopRow> {
    shops
        .iter()
        .map(|s| ShopRow {
            id: s.id.clone(),
            name: s.name.clone(),
            address: s.address.clone().unwrap_or_default(),
        })
        .collect()
}

// -- Table output --

pub fn print_products_table(products: &[Product]) {
    println!("{}", Table::new(build_product_rows(products)));
}

pub fn print_shops_table(shops: &[Shop]) {
    println!("{}", Table::new(build_shop_rows(shops)));
}

// -- Markdown output --

pub fn print_products_markdown(products: &[Product]) {
    let mut table = Table::new(build_product_rows(products));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_shops_markdown(shops: &[Shop]) {
    let mut table = Table::new(build_shop_rows(shops));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_products_csv(products: &[Product]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_product_rows(products) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_shops_csv(shops: &[Shop]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_shop_rows(shops) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

// -- Facets --

pub fn print_facets_summary(facets: &[Facet]) {
    eprintln!("{}", facets_summary(facets));
}

fn facets_summary(facets: &[Facet]) -> String {
    if facets.is_empty() {
        return "Categories: (unavailable)".to_string();
    }
    let labels: Vec<&str> = facets.iter().map(|f| f.label.as_str()).collect();
    format!("Categories: {}", labels.join(", "))
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{:.2}", p),
        None => "-".to_string(),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
