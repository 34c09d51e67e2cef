//! Library layer for shopfront: the paginated catalog engine and its collaborators.
//!
//! Wraps the `shopfront_api` crate behind the [`RemoteService`] seam and
//! provides the fetch orchestrator, the pure list reducer, the shop
//! directory, localization, configuration, and input validation.

pub mod cache;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod localization;
pub mod remote;
pub mod shops;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use shopfront_api;
pub use shopfront_api::types;
pub use shopfront_api::{
    CategoryGroupQuery, PagedQuery, ProductQuery, Query, ALL_CATEGORIES, UNKNOWN,
};

pub use catalog::{
    reduce, Facet, FetchOrchestrator, ListEvent, ListViewState, LoadKind, PageRequest, Phase,
    ProductListStore,
};
pub use client::ShopClient;
pub use config::ClientConfig;
pub use error::{ErrorInfo, ErrorKind, ShopfrontError};
pub use localization::{Catalog, Localizer};
pub use remote::RemoteService;
pub use shops::{fetch_shops, reduce_shops, ShopsEvent, ShopsState};
