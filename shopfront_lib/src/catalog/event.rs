use serde::{Deserialize, Serialize};
use shopfront_api::types::Product;

use super::state::Facet;
use crate::error::ErrorInfo;

/// Fetch lifecycle events consumed by [`super::reduce`].
///
/// Events serialize with a `type` tag. A tag this version does not know
/// decodes to [`ListEvent::Unrecognized`], which leaves state untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListEvent {
    /// Back to the initial state.
    Reset,
    /// A request is about to run. `carry_items` is `None` for a fresh load
    /// and holds the already-loaded items for a "load more".
    Started { carry_items: Option<Vec<Product>> },
    /// Every item is already loaded. No request was sent.
    NoMoreToFetch,
    /// The page arrived. `items` is the whole merged list.
    Succeeded {
        items: Vec<Product>,
        facets: Option<Vec<Facet>>,
        total_count: i64,
        offset: i64,
        limit: i64,
    },
    Failed { error: ErrorInfo },
    #[serde(other)]
    Unrecognized,
}

impl ListEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Started { carry_items: None } => "started",
            Self::Started { carry_items: Some(_) } => "started_incremental",
            Self::NoMoreToFetch => "no_more_to_fetch",
            Self::Succeeded { .. } => "succeeded",
            Self::Failed { .. } => "failed",
            Self::Unrecognized => "unrecognized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_decodes_to_unrecognized() {
        let event: ListEvent = serde_json::from_str(r#"{"type":"SOMETHING_NEW"}"#).unwrap();
        assert_eq!(event, ListEvent::Unrecognized);
    }

    #[test]
    fn known_tags_decode() {
        let event: ListEvent = serde_json::from_str(r#"{"type":"NO_MORE_TO_FETCH"}"#).unwrap();
        assert_eq!(event, ListEvent::NoMoreToFetch);

        let event: ListEvent =
            serde_json::from_str(r#"{"type":"STARTED","carry_items":null}"#).unwrap();
        assert_eq!(event, ListEvent::Started { carry_items: None });
    }

    #[test]
    fn failed_event_serializes_with_tag() {
        let event = ListEvent::Failed {
            error: crate::error::ErrorInfo::transport(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "FAILED");
        assert_eq!(value["error"]["kind"], "transport");
    }
}
