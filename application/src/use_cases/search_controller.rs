//! Search Controller
//!
//! Owns the single [`AppState`] value and drives it through the search
//! lifecycle:
//!
//! ```text
//! Idle | Success | Error ──submit──▶ Loading ──▶ Success | Error
//! ```
//!
//! Each dispatched search is tagged with a generation number. When several
//! searches overlap, only the completion of the most recent one is applied;
//! older completions are dropped, whatever order they arrive in. In-flight
//! searches are never cancelled.
//!
//! State only changes on `&mut self` calls (`submit`, `retry`,
//! `next_completion`), so the value needs no locking.

use crate::ports::state_listener::{NoStateListener, StateListener};
use crate::use_cases::search_medical_info::SearchMedicalInfoUseCase;
use futures::FutureExt;
use medinfo_domain::{AppState, Query, SearchResult};
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::task::{self, JoinSet};
use tracing::{debug, info, warn};

/// Vertical offset the result area is scrolled to after a successful search.
pub const RESULT_SCROLL_OFFSET: u16 = 400;

/// Shown when a search fails without a message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "เกิดข้อผิดพลาดในการค้นหา";

/// What a dispatched search resolved to. `Err(None)` means the task died
/// without producing a message.
type Outcome = Result<SearchResult, Option<String>>;

/// Application state controller for the search page
pub struct SearchController {
    service: Arc<SearchMedicalInfoUseCase>,
    listener: Arc<dyn StateListener>,
    state: AppState,
    /// Last accepted query, resubmitted by `retry`
    query: Option<Query>,
    /// Generation of the most recent dispatch
    generation: u64,
    in_flight: JoinSet<(u64, Outcome)>,
    /// Generation of each in-flight task, so a task that fails to join can
    /// still be matched against the latest dispatch
    generations: HashMap<task::Id, u64>,
}

impl SearchController {
    pub fn new(service: Arc<SearchMedicalInfoUseCase>) -> Self {
        Self {
            service,
            listener: Arc::new(NoStateListener),
            state: AppState::Idle,
            query: None,
            generation: 0,
            in_flight: JoinSet::new(),
            generations: HashMap::new(),
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn StateListener>) -> Self {
        self.listener = listener;
        self
    }

    // ==================== Read-only accessors ====================

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The last accepted query, if any
    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Number of dispatched searches that have not completed yet
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    // ==================== Commands ====================

    /// Submit a query.
    ///
    /// Blank input is ignored: nothing is dispatched and state, query and
    /// last result stay as they were. Otherwise the state moves to
    /// `Loading` and the search runs in the background. Returns the
    /// generation of the dispatched search.
    pub fn submit(&mut self, input: &str) -> Option<u64> {
        let Ok(query) = Query::parse(input) else {
            debug!("Ignoring blank query");
            return None;
        };

        self.generation += 1;
        let generation = self.generation;
        info!(generation, "Submitting query: {}", query);

        self.query = Some(query.clone());
        self.transition(AppState::Loading);

        let service = Arc::clone(&self.service);
        let handle = self.in_flight.spawn(async move {
            let outcome = AssertUnwindSafe(service.fetch_result(&query))
                .catch_unwind()
                .await
                .map(|result| result.map_err(|e| Some(e.to_string())))
                .unwrap_or_else(|_| Err(None));
            (generation, outcome)
        });
        self.generations.insert(handle.id(), generation);

        Some(generation)
    }

    /// Resubmit the last accepted query. Same rules as [`submit`](Self::submit).
    pub fn retry(&mut self) -> Option<u64> {
        let query = self.query.clone()?;
        self.submit(query.as_str())
    }

    /// Wait for the next dispatched search to finish and apply it if it is
    /// still the most recent one.
    ///
    /// Returns `None` when nothing is in flight, otherwise whether the
    /// completion changed the state.
    pub async fn next_completion(&mut self) -> Option<bool> {
        let joined = self.in_flight.join_next_with_id().await?;

        let applied = match joined {
            Ok((id, (generation, outcome))) => {
                self.generations.remove(&id);
                self.apply(generation, outcome)
            }
            Err(e) => {
                warn!("Search task join error: {}", e);
                match self.generations.remove(&e.id()) {
                    Some(generation) => self.apply(generation, Err(None)),
                    None => false,
                }
            }
        };

        Some(applied)
    }

    /// Wait until the most recent search has resolved.
    pub async fn settle(&mut self) -> &AppState {
        while self.state.is_loading() {
            if self.next_completion().await.is_none() {
                break;
            }
        }
        &self.state
    }

    /// Submit and wait for the outcome.
    pub async fn submit_and_wait(&mut self, input: &str) -> &AppState {
        self.submit(input);
        self.settle().await
    }

    fn apply(&mut self, generation: u64, outcome: Outcome) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "Discarding stale search result"
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                self.transition(AppState::Success(result));
                self.listener.on_scroll_to_result(RESULT_SCROLL_OFFSET);
            }
            Err(message) => self.fail(message),
        }
        true
    }

    fn fail(&mut self, message: Option<String>) {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        self.transition(AppState::Error(message));
    }

    fn transition(&mut self, state: AppState) {
        debug!(from = %self.state, to = %state, "State transition");
        self.state = state;
        self.listener.on_transition(&self.state);
    }
}
