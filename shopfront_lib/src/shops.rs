//! Shop directory: the list of shops a user can browse into.

use serde::{Deserialize, Serialize};
use shopfront_api::types::Shop;

use crate::error::ErrorInfo;
use crate::remote::RemoteService;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopsState {
    pub is_loading: bool,
    pub shops: Option<Vec<Shop>>,
    pub error: Option<ErrorInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShopsEvent {
    Started,
    Succeeded { shops: Vec<Shop> },
    Failed { error: ErrorInfo },
    #[serde(other)]
    Unrecognized,
}

pub fn reduce_shops(state: ShopsState, event: ShopsEvent) -> ShopsState {
    match event {
        ShopsEvent::Started => ShopsState {
            is_loading: true,
            ..state
        },
        ShopsEvent::Succeeded { shops } => ShopsState {
            is_loading: false,
            shops: Some(shops),
            ..state
        },
        ShopsEvent::Failed { error } => ShopsState {
            is_loading: false,
            error: Some(error),
            ..state
        },
        ShopsEvent::Unrecognized => state,
    }
}

/// Fetches the shop list once, reporting progress through `emit`.
pub async fn fetch_shops<R, F>(remote: &R, mut emit: F)
where
    R: RemoteService + ?Sized,
    F: FnMut(ShopsEvent),
{
    emit(ShopsEvent::Started);
    match remote.list_shops().await {
        Ok(shops) => emit(ShopsEvent::Succeeded { shops }),
        Err(err) => {
            tracing::warn!("shop listing failed: {}", err);
            emit(ShopsEvent::Failed {
                error: ErrorInfo::from(&err),
            });
        }
    }
}
