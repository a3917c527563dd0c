//! Stars page state: what is loaded, which load is current, and the
//! render model derived from it.
//!
//! The page never performs I/O itself. Operations hand back request
//! values that the app executes on its runtime with [`execute_load`] /
//! [`execute_delete`]; the results are fed back through
//! [`StarsPage::apply`] and [`StarsPage::finish_delete`]. Each load carries
//! a sequence number and a cancellation token, so only the most recently
//! dispatched load can change the state. A delete is not a load: it leaves
//! the current load alone and only dispatches a reload once it succeeded.

use crate::api::StarsApi;
use crate::constants::PAGE_SIZE;
use crate::error::AppError;
use crate::flash::FlashStore;
use crate::types::{Star, StarPage, Universe};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Number of pages for a result count. Always reserves one page beyond the
/// last full one, so exact multiples of the page size yield a trailing
/// empty page.
pub fn max_pages(total_count: u64) -> u32 {
    u32::try_from(total_count / PAGE_SIZE + 1).unwrap_or(u32::MAX)
}

/// Everything the page shows, replaced field-wise by loads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub stars: Vec<Star>,
    pub universe: Option<Universe>,
    pub new_star: Option<Star>,
    pub page: u32,
    pub max_pages: u32,
    pub error: Option<String>,
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            stars: Vec::new(),
            universe: None,
            new_star: None,
            page: 1,
            max_pages: 1,
            error: None,
            loading: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadKind {
    /// Universe (when scoped) then stars, then the banner
    Full { new_star: Option<Star> },
    StarsOnly,
}

#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub seq: u64,
    pub universe_id: Option<u64>,
    pub page: u32,
    pub kind: LoadKind,
    pub token: CancellationToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRequest {
    pub star_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub star_id: u64,
    pub error: Option<AppError>,
}

#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub seq: u64,
    pub kind: LoadKind,
    pub universe: Option<Universe>,
    pub stars: Option<StarPage>,
    pub error: Option<AppError>,
}

impl LoadOutcome {
    fn empty(seq: u64, kind: LoadKind) -> Self {
        Self {
            seq,
            kind,
            universe: None,
            stars: None,
            error: None,
        }
    }
}

/// What [`StarsPage::apply`] did with an outcome
#[derive(Debug)]
pub enum Applied {
    /// Superseded or cancelled; nothing changed
    Discarded,
    Updated,
    /// The current page no longer exists. The page moved to the last one
    /// and this load fetches it.
    Reload(LoadRequest),
}

impl Applied {
    pub fn changed(&self) -> bool {
        !matches!(self, Applied::Discarded)
    }
}

/// One row of the stars table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRow {
    pub id: u64,
    pub name: String,
    pub universe_name: String,
    pub color: String,
}

/// Render model for the stars page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub header: String,
    pub banner: Option<String>,
    pub show_create: bool,
    pub show_delete: bool,
    pub rows: Vec<StarRow>,
    pub show_pagination: bool,
    pub page: u32,
    pub max_pages: u32,
    pub error: Option<String>,
    pub loading: bool,
}

pub struct StarsPage {
    scope: Option<u64>,
    state: ViewState,
    latest_seq: u64,
    in_flight: Option<CancellationToken>,
}

impl StarsPage {
    /// Fresh page bound to an optional universe
    pub fn new(scope: Option<u64>) -> Self {
        Self {
            scope,
            state: ViewState::default(),
            latest_seq: 0,
            in_flight: None,
        }
    }

    pub fn scope(&self) -> Option<u64> {
        self.scope
    }

    #[cfg(test)]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn dispatch(&mut self, kind: LoadKind) -> LoadRequest {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }
        self.latest_seq += 1;
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());
        self.state.loading = true;
        self.state.error = None;

        LoadRequest {
            seq: self.latest_seq,
            universe_id: self.scope,
            page: self.state.page,
            kind,
            token,
        }
    }

    /// Full load: universe, current page of stars, and the creation banner
    /// if the flash store holds one for this universe.
    pub fn load_data(&mut self, flash: &mut FlashStore) -> LoadRequest {
        let new_star = flash.take_star_created(self.scope);
        if let Some(star) = &new_star {
            debug!(id = star.id, "Picked up created star for banner");
        }
        self.dispatch(LoadKind::Full { new_star })
    }

    pub fn load_stars(&mut self) -> LoadRequest {
        self.dispatch(LoadKind::StarsOnly)
    }

    /// Move to `page`, clamped to the known range. `None` when the clamped
    /// page is already current.
    pub fn change_page(&mut self, page: u32) -> Option<LoadRequest> {
        let clamped = page.clamp(1, self.state.max_pages.max(1));
        if clamped != page {
            debug!(requested = page, clamped, "Clamped page");
        }
        if clamped == self.state.page {
            return None;
        }
        self.state.page = clamped;
        Some(self.load_stars())
    }

    /// Delete a star. Any load in flight keeps running; the list only
    /// changes through [`finish_delete`](Self::finish_delete).
    pub fn delete_star(&self, star_id: u64) -> DeleteRequest {
        info!(star_id, "Deleting star");
        DeleteRequest { star_id }
    }

    /// Fold in a finished delete. On success returns the full reload to run.
    /// It carries no banner, so a shown banner is dropped once it lands.
    /// On failure the list is left as it is and the error is shown.
    pub fn finish_delete(&mut self, outcome: DeleteOutcome) -> Option<LoadRequest> {
        match outcome.error {
            None => Some(self.dispatch(LoadKind::Full { new_star: None })),
            Some(e) => {
                warn!(star_id = outcome.star_id, error = %e, "Star was not deleted");
                self.state.error = Some(e.to_string());
                None
            }
        }
    }

    /// Apply a finished load. Errors stay until the next dispatch, so a
    /// failed delete is not hidden by a load that lands after it.
    pub fn apply(&mut self, outcome: LoadOutcome) -> Applied {
        if outcome.seq != self.latest_seq {
            debug!(seq = outcome.seq, latest = self.latest_seq, "Discarding stale load");
            return Applied::Discarded;
        }
        if matches!(outcome.error, Some(AppError::Cancelled)) {
            debug!(seq = outcome.seq, "Load cancelled");
            return Applied::Discarded;
        }

        self.state.loading = false;
        self.in_flight = None;

        if let Some(universe) = outcome.universe {
            self.state.universe = Some(universe);
        }
        let stars_loaded = outcome.stars.is_some();
        if let Some(page) = outcome.stars {
            self.state.max_pages = max_pages(page.total_count);
            self.state.stars = page.stars;
        }
        if let (LoadKind::Full { new_star }, true) = (outcome.kind, stars_loaded) {
            self.state.new_star = new_star;
        }

        if let Some(e) = outcome.error {
            warn!(error = %e, scope = ?self.scope, page = self.state.page, "Stars page load failed");
            self.state.error = Some(e.to_string());
        }

        if stars_loaded && self.state.page > self.state.max_pages {
            info!(
                page = self.state.page,
                max_pages = self.state.max_pages,
                "Current page is gone, moving to the last one"
            );
            self.state.page = self.state.max_pages;
            return Applied::Reload(self.load_stars());
        }
        Applied::Updated
    }

    pub fn dismiss_error(&mut self) {
        self.state.error = None;
    }

    pub fn view(&self) -> PageView {
        let state = &self.state;
        let scoped_name = state.universe.as_ref().map(|u| u.name.as_str());

        let header = match self.scope {
            Some(_) => format!("Stars of Universe {}", scoped_name.unwrap_or_default()),
            None => "Stars".to_string(),
        };

        let banner = state.new_star.as_ref().map(|star| {
            format!(
                "Star {} (ID: {}) was created successfully.",
                star.name, star.id
            )
        });

        let max_size = state.universe.as_ref().map(|u| u.max_size).unwrap_or(0);
        let show_create = self.scope.is_some() && state.stars.len() < max_size as usize;

        let rows = state
            .stars
            .iter()
            .map(|star| {
                let own = star
                    .universe
                    .as_ref()
                    .map(|u| u.name.as_str())
                    .filter(|n| !n.is_empty());
                StarRow {
                    id: star.id,
                    name: star.name.clone(),
                    universe_name: own.or(scoped_name).unwrap_or_default().to_string(),
                    color: star.color.clone(),
                }
            })
            .collect();

        PageView {
            header,
            banner,
            show_create,
            show_delete: self.scope.is_some(),
            rows,
            show_pagination: state.max_pages > 1,
            page: state.page,
            max_pages: state.max_pages,
            error: state.error.clone(),
            loading: state.loading,
        }
    }
}

async fn fetch(api: &dyn StarsApi, request: &LoadRequest, outcome: &mut LoadOutcome) {
    if let (LoadKind::Full { .. }, Some(id)) = (&request.kind, request.universe_id) {
        match api.get_universe(id).await {
            Ok(universe) => outcome.universe = Some(universe),
            Err(e) => {
                outcome.error = Some(e);
                return;
            }
        }
    }
    match api.get_stars(request.universe_id, request.page).await {
        Ok(page) => outcome.stars = Some(page),
        Err(e) => outcome.error = Some(e),
    }
}

/// Run a load against the API. A cancelled token wins over a response.
pub async fn execute_load(api: &dyn StarsApi, request: LoadRequest) -> LoadOutcome {
    let mut outcome = LoadOutcome::empty(request.seq, request.kind.clone());
    let mut cancelled = false;

    tokio::select! {
        biased;
        _ = request.token.cancelled() => cancelled = true,
        _ = fetch(api, &request, &mut outcome) => {}
    }

    if cancelled {
        return LoadOutcome {
            error: Some(AppError::Cancelled),
            ..LoadOutcome::empty(request.seq, request.kind)
        };
    }
    outcome
}

pub async fn execute_delete(api: &dyn StarsApi, request: DeleteRequest) -> DeleteOutcome {
    let DeleteRequest { star_id } = request;
    let error = match api.delete_star(star_id).await {
        Ok(()) => {
            info!(star_id, "Star deleted");
            None
        }
        Err(e) => {
            error!(star_id, error = %e, "Failed to delete star");
            Some(e)
        }
    };
    DeleteOutcome { star_id, error }
}
