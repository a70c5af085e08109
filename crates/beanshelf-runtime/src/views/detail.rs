// Detail view state machine
//
//   enter(id, state)
//     ├─ state carries records containing id ──> WithContext
//     └─ otherwise ──> DeepLinkLoading ─┬─ no record ─────────────────> NotFound
//                                       └─ record + id list in ─┬─ list ok ─> DeepLinkLoaded
//                                                               └─ list err > Failed
//
// NotFound, Failed and both loaded states are terminal for the mount; only a
// new navigation re-enters the machine. A missing record settles NotFound
// whatever the id list does; otherwise DeepLinkLoading waits for both
// fetches, so the final state does not depend on which one resolves first.

use crate::effects::Effect;
use crate::navigation::step;
use crate::router::Navigation;
use beanshelf_types::{Bean, NavigationContext, Origin, position_of};
use std::sync::Arc;
use tracing::debug;

pub const LOADING_MESSAGE: &str = "Loading…";
pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const FAILED_MESSAGE: &str = "Failed to load";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    /// Record and neighbours taken from the carried collection
    WithContext { bean: Bean, context: NavigationContext },
    /// Waiting on the single-record fetch and, unless carried, the id list
    DeepLinkLoading {
        record: Option<Option<Bean>>,
        ids: Option<Result<Vec<String>, String>>,
    },
    /// Record fetched; neighbours located in the id list by direct match
    DeepLinkLoaded { bean: Bean, context: NavigationContext },
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct DetailView {
    id: String,
    origin: Option<Origin>,
    state: DetailState,
}

impl DetailView {
    /// Mount the view for `id` with whatever state the navigation carried.
    pub fn enter(id: impl Into<String>, carried: Option<NavigationContext>) -> (Self, Vec<Effect>) {
        let id = id.into().trim().to_string();
        let origin = carried.as_ref().and_then(|ctx| ctx.origin);

        if let Some(ctx) = carried.as_ref().filter(|ctx| ctx.has_records()) {
            if let Some(index) = position_of(&ctx.records, &id) {
                let context =
                    NavigationContext::from_records(Arc::clone(&ctx.records), index, ctx.origin);
                let bean = ctx.records[index].clone();
                debug!(id = %id, index, "detail opened from carried collection");
                let view = Self {
                    id,
                    origin,
                    state: DetailState::WithContext { bean, context },
                };
                return (view, Vec::new());
            }
            debug!(id = %id, "id missing from carried collection, loading as deep link");
        }

        let carried_ids = carried.map(|ctx| ctx.ids).filter(|ids| !ids.is_empty());

        let mut effects = vec![Effect::FetchSingle(id.clone())];
        if carried_ids.is_none() {
            effects.push(Effect::FetchIdentifierList);
        }

        let view = Self {
            id,
            origin,
            state: DetailState::DeepLinkLoading {
                record: None,
                ids: carried_ids.map(Ok),
            },
        };
        (view, effects)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn origin(&self) -> Option<Origin> {
        self.origin
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn on_record(&mut self, record: Option<Bean>) {
        if let DetailState::DeepLinkLoading { record: slot, .. } = &mut self.state {
            *slot = Some(record);
            self.settle();
        }
    }

    pub fn on_identifiers(&mut self, result: Result<Vec<String>, String>) {
        if let DetailState::DeepLinkLoading { ids: slot, .. } = &mut self.state {
            if let Err(err) = &result {
                debug!(id = %self.id, error = %err, "identifier list failed");
            }
            *slot = Some(result);
            self.settle();
        }
    }

    fn settle(&mut self) {
        let DetailState::DeepLinkLoading {
            record: Some(record),
            ids,
        } = &self.state
        else {
            return;
        };

        self.state = match (record, ids) {
            (None, _) => DetailState::NotFound,
            (Some(_), None) => return,
            (Some(_), Some(Err(err))) => DetailState::Failed(err.clone()),
            (Some(bean), Some(Ok(ids))) => {
                // An id absent from the list lands on the first entry
                let index = ids.iter().position(|candidate| *candidate == self.id).unwrap_or(0);
                DetailState::DeepLinkLoaded {
                    bean: bean.clone(),
                    context: NavigationContext::from_ids(ids.clone(), index, self.origin),
                }
            }
        };
        debug!(id = %self.id, state = ?self.state_name(), "deep link settled");
    }

    pub fn bean(&self) -> Option<&Bean> {
        match &self.state {
            DetailState::WithContext { bean, .. } | DetailState::DeepLinkLoaded { bean, .. } => {
                Some(bean)
            }
            _ => None,
        }
    }

    /// Navigation context backing prev/next, present once a record shows.
    pub fn context(&self) -> Option<&NavigationContext> {
        match &self.state {
            DetailState::WithContext { context, .. }
            | DetailState::DeepLinkLoaded { context, .. } => Some(context),
            _ => None,
        }
    }

    pub fn prev(&self) -> Option<Navigation> {
        step(self.context()?, -1)
    }

    pub fn next(&self) -> Option<Navigation> {
        step(self.context()?, 1)
    }

    pub fn has_prev(&self) -> bool {
        self.context().and_then(NavigationContext::prev_id).is_some()
    }

    pub fn has_next(&self) -> bool {
        self.context().and_then(NavigationContext::next_id).is_some()
    }

    /// Status text to show instead of a record, if any.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            DetailState::DeepLinkLoading { .. } => Some(LOADING_MESSAGE),
            DetailState::NotFound => Some(NOT_FOUND_MESSAGE),
            DetailState::Failed(_) => Some(FAILED_MESSAGE),
            DetailState::WithContext { .. } | DetailState::DeepLinkLoaded { .. } => None,
        }
    }

    pub fn state_name(&self) -> &'static str {
        match &self.state {
            DetailState::WithContext { .. } => "with_context",
            DetailState::DeepLinkLoading { .. } => "deep_link_loading",
            DetailState::DeepLinkLoaded { .. } => "deep_link_loaded",
            DetailState::NotFound => "not_found",
            DetailState::Failed(_) => "failed",
        }
    }
}
