use anyhow::{bail, Result};
use shopfront_lib::{fetch_shops, reduce_shops, RemoteService, ShopsState};

use crate::output::{
    print_json, print_shops_csv, print_shops_markdown, print_shops_table, OutputFormat,
};

pub async fn run<R>(client: &R, format: &OutputFormat) -> Result<()>
where
    R: RemoteService,
{
    let mut state = ShopsState::default();
    fetch_shops(client, |event| {
        state = reduce_shops(std::mem::take(&mut state), event);
    })
    .await;

    if let Some(error) = state.error {
        bail!("{}", error.message);
    }

    let shops = state.shops.unwrap_or_default();
    eprintln!("{} shops", shops.len());

    match format {
        OutputFormat::Table => print_shops_table(&shops),
        OutputFormat::Json => print_json(&shops),
        OutputFormat::Csv => print_shops_csv(&shops)?,
        OutputFormat::Markdown => print_shops_markdown(&shops),
    }
    Ok(())
}
