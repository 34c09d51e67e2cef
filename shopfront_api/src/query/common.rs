//! Shared query infrastructure: the [`Query`] and [`PagedQuery`] traits and the
//! [`QueryCommon`] paging fields.

use url::Url;

/// Sentinel the catalog API and its callers use for "not known / not set".
pub const UNKNOWN: i64 = -1;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Query builders for listings that page with limit/offset.
///
/// Implementors must write [`QueryCommon`] in their `add_to_url`.
pub trait PagedQuery: Query {
    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page size. `UNKNOWN` or a non-positive value leaves the server default.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = (limit > 0).then_some(limit);
        self
    }

    /// Sets the absolute offset of the first item. `UNKNOWN` clears it.
    fn with_offset(mut self, offset: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().offset = (offset != UNKNOWN).then_some(offset);
        self
    }
}

/// Paging fields shared by listing queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryCommon {
    /// Items per page. `None` uses the API default.
    pub limit: Option<i64>,
    /// Offset of the first item. `None` starts at the beginning.
    pub offset: Option<i64>,
}

impl QueryCommon {
    /// Appends `limit` and `offset` when set.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        if let Some(offset) = self.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        };
        url
    }
}
