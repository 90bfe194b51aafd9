//! Profile dashboard assembly.
//!
//! Given an authenticated session, fetches the user record and journal
//! concurrently, derives the watch statistics, and resolves the selected
//! list's movie references into display summaries. List selection is
//! epoch-tagged so a late-arriving batch for a superseded selection is
//! discarded instead of overwriting the current preview.

use crate::error::{ProfileError, Result};
use crate::stats::{self, WatchStats};
use reel_core::types::{AuthSession, MovieId, MovieList, MovieSummary, UserRecord};
use reel_core::{JournalService, MovieService, UserService};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Assembled profile view data.
///
/// `load` produces one of these; selection changes mutate it in place
/// through the aggregator. The preview always corresponds exactly to the
/// movie references of the currently selected list.
#[derive(Debug, Clone)]
pub struct ProfileDashboard {
    user: UserRecord,
    stats: WatchStats,
    selected: usize,
    epoch: u64,
    preview: Vec<MovieSummary>,
}

impl ProfileDashboard {
    /// The user record.
    pub fn user(&self) -> &UserRecord {
        &self.user
    }

    /// Derived watch statistics.
    pub fn stats(&self) -> &WatchStats {
        &self.stats
    }

    /// Index of the currently selected list.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The currently selected list, if the index is in range.
    pub fn selected_list(&self) -> Option<&MovieList> {
        self.user.list_at(self.selected)
    }

    /// Resolved summaries for the selected list.
    pub fn preview(&self) -> &[MovieSummary] {
        &self.preview
    }
}

/// A selection change in flight.
///
/// Snapshots the target index, the list's movie ids, and the epoch at
/// issue time; applying it later is refused if the selection has moved
/// on.
#[derive(Debug, Clone)]
pub struct SelectionTicket {
    index: usize,
    epoch: u64,
    movie_ids: Vec<MovieId>,
}

impl SelectionTicket {
    /// The list index this ticket was issued for.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The movie ids snapshotted at issue time, in list order.
    pub fn movie_ids(&self) -> &[MovieId] {
        &self.movie_ids
    }
}

/// Assembles profile dashboards from the injected services.
pub struct ProfileAggregator {
    users: Arc<dyn UserService>,
    movies: Arc<dyn MovieService>,
    journal: Arc<dyn JournalService>,
}

impl ProfileAggregator {
    /// Create an aggregator over the given services.
    pub fn new(
        users: Arc<dyn UserService>,
        movies: Arc<dyn MovieService>,
        journal: Arc<dyn JournalService>,
    ) -> Self {
        Self {
            users,
            movies,
            journal,
        }
    }

    /// Load the dashboard for the session's user.
    ///
    /// The user record and journal entries are independent calls and are
    /// fetched concurrently; both must succeed for the view to render,
    /// so failure of either is fatal. The initial preview (list 0)
    /// degrades to empty on movie-batch failure.
    pub async fn load(&self, session: &AuthSession) -> Result<ProfileDashboard> {
        debug!(user_id = %session.user_id, "Loading profile dashboard");

        let (user, entries) = tokio::join!(
            self.users.get_user_data(&session.user_id),
            self.journal.get_journal_entries(session),
        );
        let user = user.map_err(ProfileError::NoData)?;
        let entries = entries.map_err(ProfileError::NoData)?;

        let stats = stats::calculate_stats(&entries);
        debug!(
            lists = user.lists.len(),
            watches = stats.total,
            "Profile data fetched"
        );

        let mut dashboard = ProfileDashboard {
            user,
            stats,
            selected: 0,
            epoch: 0,
            preview: Vec::new(),
        };

        let ticket = Self::begin_selection(&mut dashboard, 0);
        let summaries = self.resolve_selection(&ticket).await;
        Self::apply_selection(&mut dashboard, &ticket, summaries);

        Ok(dashboard)
    }

    /// Start a selection change: records the new index, invalidates the
    /// old preview, and issues a ticket for the fetch.
    pub fn begin_selection(dashboard: &mut ProfileDashboard, index: usize) -> SelectionTicket {
        dashboard.selected = index;
        dashboard.epoch += 1;
        // The old preview belongs to the previous list; drop it now so
        // nothing stale is shown while the batch is in flight.
        dashboard.preview.clear();

        let movie_ids = dashboard
            .user
            .list_at(index)
            .map(MovieList::movie_ids)
            .unwrap_or_default();

        SelectionTicket {
            index,
            epoch: dashboard.epoch,
            movie_ids,
        }
    }

    /// Resolve a ticket's movie ids into summaries, in list order.
    ///
    /// An empty batch resolves to an empty preview without a service
    /// call; a failed batch degrades to an empty preview rather than
    /// failing the view.
    pub async fn resolve_selection(&self, ticket: &SelectionTicket) -> Vec<MovieSummary> {
        if ticket.movie_ids.is_empty() {
            return Vec::new();
        }

        match self.movies.fetch_movies_by_ids(&ticket.movie_ids).await {
            Ok(summaries) => reorder_to_list(&ticket.movie_ids, summaries),
            Err(e) => {
                warn!(error = %e, index = ticket.index, "Movie batch failed, preview degraded to empty");
                Vec::new()
            }
        }
    }

    /// Install resolved summaries if the ticket is still current.
    ///
    /// Returns `false` (and leaves the dashboard untouched) when the
    /// selection has changed since the ticket was issued.
    pub fn apply_selection(
        dashboard: &mut ProfileDashboard,
        ticket: &SelectionTicket,
        summaries: Vec<MovieSummary>,
    ) -> bool {
        if ticket.epoch != dashboard.epoch {
            debug!(
                index = ticket.index,
                "Discarding stale movie batch for superseded selection"
            );
            return false;
        }
        dashboard.preview = summaries;
        true
    }

    /// Select a list by index and resolve its preview.
    ///
    /// Composed begin/resolve/apply path for callers without their own
    /// event loop.
    pub async fn select_list(&self, dashboard: &mut ProfileDashboard, index: usize) {
        let ticket = Self::begin_selection(dashboard, index);
        let summaries = self.resolve_selection(&ticket).await;
        Self::apply_selection(dashboard, &ticket, summaries);
    }

    /// Replace the user's profile image.
    ///
    /// The remote update runs first; the local record is mutated only
    /// after it succeeds. Only this view's copy is updated.
    pub async fn update_profile_image(
        &self,
        dashboard: &mut ProfileDashboard,
        image_ref: &str,
    ) -> Result<()> {
        self.users
            .update_profile_image(&dashboard.user.id, image_ref)
            .await
            .map_err(ProfileError::ImageUpdate)?;

        dashboard.user.profile_image = Some(image_ref.to_string());
        Ok(())
    }
}

/// Reorder a batch response to match the list's reference order.
///
/// The movie service makes no ordering promise; ids the service did not
/// return are skipped, and duplicate references resolve to the same
/// summary.
fn reorder_to_list(ids: &[MovieId], summaries: Vec<MovieSummary>) -> Vec<MovieSummary> {
    let by_id: HashMap<MovieId, MovieSummary> = summaries
        .into_iter()
        .map(|summary| (summary.id.clone(), summary))
        .collect();

    ids.iter()
        .filter_map(|id| by_id.get(id).cloned())
        .collect()
}
