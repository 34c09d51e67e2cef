use shopfront_api::{ALL_CATEGORIES, UNKNOWN};

use super::state::ListViewState;

/// What the caller wants loaded next.
///
/// `limit`, `offset` and `known_count` treat `None` and `UNKNOWN` alike.
/// `offset` and `limit` describe the *previous* page; the orchestrator
/// derives the next offset from them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub resource_id: String,
    pub category_filter: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Total items the server reported last time, if known.
    pub known_count: Option<i64>,
    pub reset_requested: bool,
    pub wants_facets: bool,
}

impl PageRequest {
    /// A fresh load: clears whatever was loaded before.
    pub fn first_page(resource_id: &str) -> Self {
        Self {
            resource_id: resource_id.to_string(),
            category_filter: None,
            limit: None,
            offset: None,
            known_count: None,
            reset_requested: true,
            wants_facets: false,
        }
    }

    /// A "load more" continuing from the last page recorded in `state`.
    pub fn next_page(state: &ListViewState, resource_id: &str) -> Self {
        Self {
            resource_id: resource_id.to_string(),
            category_filter: None,
            limit: Some(state.limit),
            offset: Some(state.offset),
            known_count: Some(state.total_count),
            reset_requested: false,
            wants_facets: false,
        }
    }

    /// Filters by category. The synthetic `all` facet clears the filter.
    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category_filter = category
            .filter(|c| *c != ALL_CATEGORIES)
            .map(str::to_string);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_facets(mut self, wants_facets: bool) -> Self {
        self.wants_facets = wants_facets;
        self
    }

    pub fn with_reset(mut self, reset_requested: bool) -> Self {
        self.reset_requested = reset_requested;
        self
    }

    pub(crate) fn known_limit(&self) -> Option<i64> {
        known(self.limit)
    }

    pub(crate) fn known_offset(&self) -> Option<i64> {
        known(self.offset)
    }

    pub(crate) fn known_total(&self) -> Option<i64> {
        known(self.known_count)
    }
}

fn known(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_resets() {
        let req = PageRequest::first_page("s1");
        assert!(req.reset_requested);
        assert_eq!(req.known_total(), None);
        assert_eq!(req.known_offset(), None);
    }

    #[test]
    fn next_page_continues_from_state() {
        let state = ListViewState {
            items: Some(vec![]),
            total_count: 57,
            offset: 20,
            limit: 20,
            ..Default::default()
        };
        let req = PageRequest::next_page(&state, "s1").with_category(Some("tea"));
        assert!(!req.reset_requested);
        assert_eq!(req.known_offset(), Some(20));
        assert_eq!(req.known_limit(), Some(20));
        assert_eq!(req.known_total(), Some(57));
        assert_eq!(req.category_filter.as_deref(), Some("tea"));
    }

    #[test]
    fn unknown_sentinels_are_unspecified() {
        let req = PageRequest::next_page(&ListViewState::default(), "s1").with_limit(UNKNOWN);
        assert_eq!(req.known_total(), None);
        assert_eq!(req.known_limit(), None);
        assert_eq!(req.known_offset(), Some(0));
    }

    #[test]
    fn all_category_is_no_filter() {
        let req = PageRequest::first_page("s1").with_category(Some("all"));
        assert_eq!(req.category_filter, None);
    }
}
