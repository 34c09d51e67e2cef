//! Pure state transitions for a product list. No I/O, no side effects.

use super::event::ListEvent;
use super::state::{ListViewState, LoadKind, Phase};

/// Folds one event into the list state.
pub fn reduce(state: ListViewState, event: ListEvent) -> ListViewState {
    match event {
        ListEvent::Reset => ListViewState::default(),

        ListEvent::Started { carry_items } => ListViewState {
            is_loading: true,
            load_kind: Some(match carry_items {
                None => LoadKind::Fresh,
                Some(_) => LoadKind::Incremental,
            }),
            phase: Phase::Loading,
            ..state
        },

        ListEvent::NoMoreToFetch => ListViewState {
            is_loading: false,
            exhausted: true,
            phase: Phase::Exhausted,
            ..state
        },

        ListEvent::Succeeded {
            items,
            facets,
            total_count,
            offset,
            limit,
        } => ListViewState {
            is_loading: false,
            items: Some(items),
            facets: facets.or(state.facets),
            total_count,
            offset,
            limit,
            exhausted: false,
            phase: Phase::Loaded,
            ..state
        },

        ListEvent::Failed { error } => ListViewState {
            is_loading: false,
            error: Some(error),
            phase: Phase::Errored,
            ..state
        },

        ListEvent::Unrecognized => state,
    }
}
