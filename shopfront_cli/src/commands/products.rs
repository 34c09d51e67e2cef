use anyhow::{bail, Result};
use clap::Args;
use shopfront_lib::validation;
use shopfront_lib::{
    FetchOrchestrator, Localizer, PageRequest, Phase, ProductListStore, RemoteService,
};

use crate::output::{
    print_facets_summary, print_json, print_products_csv, print_products_markdown,
    print_products_table, OutputFormat, ProductListing,
};

#[derive(Args)]
pub struct ProductsArgs {
    /// Shop ID
    #[arg(long)]
    pub shop: String,

    /// Filter by category ("all" for every category)
    #[arg(long)]
    pub category: Option<String>,

    /// Results per page (defaults to SHOPFRONT_PAGE_SIZE)
    #[arg(long)]
    pub page_size: Option<i64>,

    /// Number of pages to load
    #[arg(long, default_value = "1")]
    pub pages: usize,

    /// Keep loading until every product is fetched
    #[arg(long, conflicts_with = "pages")]
    pub all: bool,

    /// Also fetch the shop's category facets
    #[arg(long)]
    pub facets: bool,
}

pub async fn run<R, L>(
    args: &ProductsArgs,
    orchestrator: &FetchOrchestrator<R, L>,
    default_page_size: i64,
    format: &OutputFormat,
) -> Result<()>
where
    R: RemoteService,
    L: Localizer,
{
    let shop = validation::validate_shop_id(&args.shop)?;
    let category = match &args.category {
        Some(category) => validation::validate_category(category)?,
        None => None,
    };
    let page_size = validation::validate_page_size(args.page_size.unwrap_or(default_page_size))?;

    let mut store = ProductListStore::new();
    let req = PageRequest::first_page(&shop)
        .with_category(category.as_deref())
        .with_limit(page_size)
        .with_facets(args.facets);
    store.load(orchestrator, req).await;

    let mut pages = 1;
    while args.all || pages < args.pages {
        let state = store.state();
        if state.phase != Phase::Loaded || state.is_complete() {
            break;
        }
        let before = state.item_count();
        store.load_more(orchestrator).await;
        pages += 1;
        // A page that adds nothing would otherwise loop forever under --all.
        if store.state().phase == Phase::Loaded && store.state().item_count() == before {
            break;
        }
    }

    let state = store.into_state();
    let items = state.items.clone().unwrap_or_default();

    if state.total_count >= 0 {
        eprintln!(
            "{} of {} products loaded ({} page{})",
            items.len(),
            state.total_count,
            pages,
            if pages == 1 { "" } else { "s" }
        );
    }

    match format {
        OutputFormat::Table => print_products_table(&items),
        OutputFormat::Json => print_json(&ProductListing::from_state(&state)),
        OutputFormat::Csv => print_products_csv(&items)?,
        OutputFormat::Markdown => print_products_markdown(&items),
    }
    if !matches!(format, OutputFormat::Json) {
        if let Some(facets) = &state.facets {
            print_facets_summary(facets);
        }
    }

    if let Some(error) = &state.error {
        bail!("{}", error.message);
    }
    Ok(())
}
