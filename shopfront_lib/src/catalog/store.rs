use super::event::ListEvent;
use super::orchestrator::FetchOrchestrator;
use super::reducer::reduce;
use super::request::PageRequest;
use super::state::ListViewState;
use crate::localization::Localizer;
use crate::remote::RemoteService;

/// Owns one product list and applies events to it as they are emitted.
#[derive(Debug, Default)]
pub struct ProductListStore {
    state: ListViewState,
    last_request: Option<PageRequest>,
}

impl ProductListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListViewState {
        &self.state
    }

    pub fn into_state(self) -> ListViewState {
        self.state
    }

    pub fn dispatch(&mut self, event: ListEvent) {
        tracing::trace!("dispatch {}", event.name());
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    pub fn reset(&mut self) {
        self.last_request = None;
        self.dispatch(ListEvent::Reset);
    }

    /// Runs `req` and folds every resulting event into the store.
    ///
    /// Returns `false` without doing anything while a load is in flight.
    pub async fn load<R, L>(
        &mut self,
        orchestrator: &FetchOrchestrator<R, L>,
        req: PageRequest,
    ) -> bool
    where
        R: RemoteService,
        L: Localizer,
    {
        if self.state.is_loading {
            tracing::debug!("load ignored for shop {}: already loading", req.resource_id);
            return false;
        }
        let snapshot = self.state.clone();
        orchestrator
            .request_page(&snapshot, &req, |event| self.dispatch(event))
            .await;
        self.last_request = Some(req);
        true
    }

    /// Continues the last request with the next page.
    ///
    /// Returns `false` when nothing has been loaded yet or a load is in flight.
    pub async fn load_more<R, L>(&mut self, orchestrator: &FetchOrchestrator<R, L>) -> bool
    where
        R: RemoteService,
        L: Localizer,
    {
        let Some(last) = &self.last_request else {
            return false;
        };
        let req = PageRequest::next_page(&self.state, &last.resource_id)
            .with_category(last.category_filter.as_deref());
        self.load(orchestrator, req).await
    }
}
