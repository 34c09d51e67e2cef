use serde::{Deserialize, Serialize};
use shopfront_api::types::Product;
use shopfront_api::UNKNOWN;

use crate::error::ErrorInfo;

/// A selectable category filter shown next to a product list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub label: String,
    pub value: String,
}

impl Facet {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Position in the list-view state machine.
///
/// Every phase moves to `Loading` on `Started` and back to `Idle` on
/// `Reset`. There is no terminal phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Exhausted,
    Errored,
}

/// Whether the last load replaced the list or appended to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadKind {
    Fresh,
    Incremental,
}

/// Everything a product list screen renders from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListViewState {
    pub is_loading: bool,
    pub load_kind: Option<LoadKind>,
    /// `None` until the first successful load and after a reset.
    pub items: Option<Vec<Product>>,
    pub facets: Option<Vec<Facet>>,
    /// Total matching items reported by the server, `UNKNOWN` before the first page.
    pub total_count: i64,
    /// Offset of the last page received.
    pub offset: i64,
    /// Limit of the last page received.
    pub limit: i64,
    pub exhausted: bool,
    pub error: Option<ErrorInfo>,
    pub phase: Phase,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            is_loading: false,
            load_kind: None,
            items: None,
            facets: None,
            total_count: UNKNOWN,
            offset: 0,
            limit: 0,
            exhausted: false,
            error: None,
            phase: Phase::Idle,
        }
    }
}

impl ListViewState {
    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    /// True once every item the server reported has been received.
    pub fn is_complete(&self) -> bool {
        self.total_count != UNKNOWN && self.item_count() as i64 >= self.total_count
    }
}
