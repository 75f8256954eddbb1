//! Search orchestration.
//!
//! [`SearchOrchestrator`] sequences one lookup: validate the nickname, resolve
//! the identity, fetch profile and equipment concurrently, then hand the merged
//! result to the display surface. It owns the search state machine and the
//! loading indicator's lifecycle.
//!
//! # Overlapping searches
//!
//! Every search draws a generation number. Only the newest generation may
//! change the state machine or the surface; an older search that settles later
//! still returns its result to its own caller but is otherwise discarded.
//! In-flight requests are never cancelled.

use crate::api::CharacterSource;
use crate::app::state::{SearchResult, SearchState};
use crate::app::surface::DisplaySurface;
use crate::domain::date::local_today;
use crate::domain::{
    CharacterProfile, DateStamp, EquipmentRecord, LookupError, Resource, Result, SearchQuery,
};
use crate::ui::presenter;
use chrono::NaiveDate;
use futures_util::future::try_join;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Coordinates searches against a [`CharacterSource`] and renders onto a
/// [`DisplaySurface`].
///
/// # Example
///
/// ```no_run
/// use maplestat::api::{NexonClient, DEFAULT_BASE_URL};
/// use maplestat::app::SearchOrchestrator;
/// use maplestat::ui::TerminalSurface;
///
/// # async fn run() {
/// let client = NexonClient::new(DEFAULT_BASE_URL, "my-api-key");
/// let orchestrator = SearchOrchestrator::new(client, TerminalSurface::stdout());
/// let result = orchestrator.search("Alice").await;
/// if let Some(message) = result.message() {
///     eprintln!("{message}");
/// }
/// # }
/// ```
pub struct SearchOrchestrator<S, D> {
    source: S,
    surface: D,
    clock: fn() -> NaiveDate,
    generation: AtomicU64,
    state: Mutex<SearchState>,
}

impl<S, D> SearchOrchestrator<S, D>
where
    S: CharacterSource,
    D: DisplaySurface,
{
    /// Creates an idle orchestrator using the local wall clock.
    #[must_use]
    pub fn new(source: S, surface: D) -> Self {
        Self {
            source,
            surface,
            clock: local_today,
            generation: AtomicU64::new(0),
            state: Mutex::new(SearchState::Idle),
        }
    }

    /// Replaces the source of "today"; the snapshot date is the day before it.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.lock_state().clone()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Runs one search for the raw nickname `input`.
    ///
    /// Blank input fails immediately with [`LookupError::EmptyInput`] and makes
    /// no request. Otherwise the surface is switched to loading, the lookup
    /// runs, and the outcome is shown. The loading indicator is hidden on
    /// every exit, including when this future is dropped before completing.
    #[tracing::instrument(level = "info", skip(self), fields(generation = tracing::field::Empty))]
    pub async fn search(&self, input: &str) -> SearchResult {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::Span::current().record("generation", generation);

        let query = match SearchQuery::parse(input) {
            Ok(query) => query,
            Err(err) => {
                tracing::debug!("rejected blank nickname");
                let message = err.to_string();
                self.settle(generation, SearchState::Failed(message.clone()), |surface| {
                    surface.hide_loading();
                    surface.show_error(&message);
                });
                return SearchResult::Failure(err);
            }
        };

        self.settle(generation, SearchState::Loading { generation }, D::show_loading);
        let _loading = LoadingGuard {
            orchestrator: self,
            generation,
        };

        let result = SearchResult::from(self.lookup(&query).await);
        match &result {
            SearchResult::Success { profile, equipment } => {
                tracing::info!(
                    name = %profile.name,
                    level = profile.level,
                    items = equipment.len(),
                    "search succeeded"
                );
                let view = presenter::render(profile, equipment);
                self.settle(generation, SearchState::Displayed(view.clone()), |surface| {
                    surface.show_result(&view);
                });
            }
            SearchResult::Failure(err) => {
                tracing::warn!(error = %err, "search failed");
                let message = err.to_string();
                self.settle(generation, SearchState::Failed(message.clone()), |surface| {
                    surface.show_error(&message);
                });
            }
        }
        result
    }

    /// Identity first, then both fetches joined; the first fetch failure fails
    /// the whole lookup and the other fetch's data is dropped.
    async fn lookup(&self, query: &SearchQuery) -> Result<(CharacterProfile, EquipmentRecord)> {
        let identity = self.source.resolve_identity(query.nickname()).await?;
        let date = DateStamp::day_before((self.clock)());
        tracing::debug!(ocid = %identity, date = %date, "identity resolved, fetching details");

        let profile = async {
            self.source
                .fetch_profile(&identity, date)
                .await
                .map_err(|err| LookupError::partial(Resource::Profile, err))
        };
        let equipment = async {
            self.source
                .fetch_equipment(&identity, date)
                .await
                .map_err(|err| LookupError::partial(Resource::Equipment, err))
        };

        try_join(profile, equipment).await
    }

    /// Applies a transition if `generation` is still the newest search.
    ///
    /// The state lock is held while the surface is updated so two settling
    /// searches cannot interleave their surface calls.
    fn settle<F>(&self, generation: u64, next: SearchState, update: F)
    where
        F: FnOnce(&D),
    {
        let mut state = self.lock_state();
        if !self.is_current(generation) {
            tracing::debug!(generation, "discarding superseded search outcome");
            return;
        }
        *state = next;
        update(&self.surface);
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn lock_state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S, D> std::fmt::Debug for SearchOrchestrator<S, D>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchOrchestrator")
            .field("source", &self.source)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Hides the loading indicator when a search leaves `Loading`, however it leaves.
struct LoadingGuard<'a, S, D>
where
    S: CharacterSource,
    D: DisplaySurface,
{
    orchestrator: &'a SearchOrchestrator<S, D>,
    generation: u64,
}

impl<S, D> Drop for LoadingGuard<'_, S, D>
where
    S: CharacterSource,
    D: DisplaySurface,
{
    fn drop(&mut self) {
        let orchestrator = self.orchestrator;
        let mut state = orchestrator.lock_state();
        if !orchestrator.is_current(self.generation) {
            return;
        }
        if *state == (SearchState::Loading { generation: self.generation }) {
            tracing::debug!(generation = self.generation, "search abandoned while loading");
            *state = SearchState::Idle;
        }
        orchestrator.surface.hide_loading();
    }
}
