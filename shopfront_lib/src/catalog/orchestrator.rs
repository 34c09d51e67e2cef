//! Decides what to fetch for a [`PageRequest`] and reports progress as [`ListEvent`]s.

use shopfront_api::{PagedQuery, ProductQuery, ALL_CATEGORIES};

use super::event::ListEvent;
use super::request::PageRequest;
use super::state::{Facet, ListViewState};
use crate::error::ErrorInfo;
use crate::localization::{Localizer, ALL_FACET_KEY};
use crate::remote::RemoteService;

/// Issues catalog requests and emits the lifecycle events describing them.
///
/// One call makes at most one product request and at most one category
/// request. Failures are reported, never retried. Overlapping calls are
/// not prevented here; callers gate on `is_loading`.
pub struct FetchOrchestrator<R, L> {
    remote: R,
    localizer: L,
}

impl<R, L> FetchOrchestrator<R, L>
where
    R: RemoteService,
    L: Localizer,
{
    pub fn new(remote: R, localizer: L) -> Self {
        Self { remote, localizer }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Loads the page described by `req` on top of `state`, passing every
    /// lifecycle event to `emit` in order.
    pub async fn request_page<F>(&self, state: &ListViewState, req: &PageRequest, mut emit: F)
    where
        F: FnMut(ListEvent),
    {
        if req.reset_requested {
            emit(ListEvent::Reset);
        }

        let carry_items = if req.reset_requested {
            None
        } else {
            state.items.clone()
        };
        emit(ListEvent::Started {
            carry_items: carry_items.clone(),
        });

        let current_count = carry_items.as_ref().map_or(0, Vec::len) as i64;
        if let Some(known_count) = req.known_total() {
            if current_count >= known_count && !req.reset_requested {
                tracing::debug!(
                    "shop {}: {} of {} products already loaded, skipping request",
                    req.resource_id,
                    current_count,
                    known_count
                );
                emit(ListEvent::NoMoreToFetch);
                return;
            }
        }

        let query = Self::build_query(req);
        tracing::debug!(
            "shop {}: requesting products (category {:?}, limit {:?}, offset {:?})",
            query.shop,
            query.category,
            query.common.limit,
            query.common.offset
        );

        // The product page is never held back by the category listing. If the
        // facets are still in flight when the page lands, the page is emitted
        // first and a second `Succeeded` follows once the facets arrive.
        let primary = self.remote.list_products(&query);
        tokio::pin!(primary);
        let facet_fetch = async {
            if req.wants_facets {
                Some(self.fetch_facets(&req.resource_id).await)
            } else {
                None
            }
        };
        tokio::pin!(facet_fetch);

        let mut ready_facets: Option<Option<Vec<Facet>>> = None;
        let result = loop {
            tokio::select! {
                biased;
                facets = &mut facet_fetch, if ready_facets.is_none() => {
                    ready_facets = Some(facets);
                }
                result = &mut primary => break result,
            }
        };

        match result {
            Ok(page) => {
                let items = match carry_items {
                    Some(mut items) => {
                        items.extend(page.items);
                        items
                    }
                    None => page.items,
                };
                match ready_facets {
                    Some(facets) => emit(ListEvent::Succeeded {
                        items,
                        facets,
                        total_count: page.count,
                        offset: page.offset,
                        limit: page.limit,
                    }),
                    None => {
                        tracing::debug!(
                            "shop {}: products arrived before categories",
                            req.resource_id
                        );
                        emit(ListEvent::Succeeded {
                            items: items.clone(),
                            facets: None,
                            total_count: page.count,
                            offset: page.offset,
                            limit: page.limit,
                        });
                        let facets = facet_fetch.await;
                        emit(ListEvent::Succeeded {
                            items,
                            facets,
                            total_count: page.count,
                            offset: page.offset,
                            limit: page.limit,
                        });
                    }
                }
            }
            Err(err) => {
                tracing::warn!("shop {}: product request failed: {}", req.resource_id, err);
                emit(ListEvent::Failed {
                    error: ErrorInfo::from(&err),
                });
            }
        }
    }

    /// Translates a request into API query parameters.
    ///
    /// The next offset is the previous page's offset plus the limit being
    /// sent, so a server-side change of page size stays consistent. The sum
    /// saturates at `i64::MAX`. A reset never sends an offset.
    pub fn build_query(req: &PageRequest) -> ProductQuery {
        let mut query = ProductQuery::new(&req.resource_id);
        if let Some(category) = &req.category_filter {
            query = query.with_category(category);
        }
        let limit = req.known_limit();
        if let Some(limit) = limit {
            query = query.with_limit(limit);
        }
        if !req.reset_requested {
            if let Some(offset) = req.known_offset() {
                query = query.with_offset(offset.saturating_add(limit.unwrap_or(0)));
            }
        }
        query
    }

    async fn fetch_facets(&self, shop: &str) -> Vec<Facet> {
        match self.remote.list_products_grouped_by_category(shop).await {
            Ok(groups) => {
                let mut facets = Vec::with_capacity(groups.len() + 1);
                facets.push(Facet::new(
                    &self.localizer.translate(ALL_FACET_KEY),
                    ALL_CATEGORIES,
                ));
                facets.extend(groups.into_iter().map(|g| Facet {
                    label: g.category.clone(),
                    value: g.category,
                }));
                facets
            }
            Err(err) => {
                tracing::warn!(
                    "shop {}: category listing failed, continuing without facets: {}",
                    shop,
                    err
                );
                Vec::new()
            }
        }
    }
}
