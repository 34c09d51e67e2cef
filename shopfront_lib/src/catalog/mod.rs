//! Incremental, category-filtered product pagination.
//!
//! [`FetchOrchestrator::request_page`] turns a [`PageRequest`] into a
//! sequence of [`ListEvent`]s and [`reduce`] folds those events into a
//! [`ListViewState`]. [`ProductListStore`] wires the two together for a
//! single owner.

mod event;
mod orchestrator;
mod reducer;
mod request;
mod state;
mod store;

pub use self::event::ListEvent;
pub use self::orchestrator::FetchOrchestrator;
pub use self::reducer::reduce;
pub use self::request::PageRequest;
pub use self::state::{Facet, ListViewState, LoadKind, Phase};
pub use self::store::ProductListStore;
