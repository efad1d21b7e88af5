// Message types shared between the orchestrator and the TUI.
//
// The TUI sends `UserCommand`s; the orchestrator answers with `UiUpdate`
// snapshots. Neither side reaches into the other's state directly.

use crate::api::PlayerQuery;
use crate::model::{Owner, Player, Role, RunsEntry, StaffMember, Team, WicketsEntry};
use crate::routes::Route;

// ---------------------------------------------------------------------------
// Fetch status
// ---------------------------------------------------------------------------

/// Lifecycle of one view's data slot.
///
/// `Loading` re-entered after `Loaded` keeps the previous data on screen
/// until the replacement arrives. `Failed` carries the rendered error
/// message and is cleared by a retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch issued yet (view never visited).
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl FetchStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchStatus::Failed(_))
    }
}

/// One slot as the TUI sees it: status plus the last data received.
#[derive(Debug, Clone)]
pub struct ViewData<T> {
    pub status: FetchStatus,
    pub data: Option<T>,
}

// Not derived: derive would require `T: Default`, and the payload types
// have no meaningful default.
impl<T> Default for ViewData<T> {
    fn default() -> Self {
        ViewData {
            status: FetchStatus::default(),
            data: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Commands (TUI -> orchestrator)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Open a route; triggers that view's fetch-on-mount.
    Navigate(Route),
    /// Return to the previously shown route.
    Back,
    /// Full current text of the players search box (sent per edit).
    SearchInput(String),
    /// Players role filter changed.
    RoleFilter(Option<Role>),
    /// Players team filter changed (team id).
    TeamFilter(Option<String>),
    /// Staff view team filter changed.
    StaffTeamFilter(Option<String>),
    /// Owners view team filter changed.
    OwnersTeamFilter(Option<String>),
    /// Re-issue the failed fetches of the current route.
    Retry,
    Quit,
}

// ---------------------------------------------------------------------------
// Updates (orchestrator -> TUI)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// Full view snapshot; the TUI replaces its mirror wholesale.
    Snapshot(Box<ViewSnapshot>),
}

/// Everything the render loop needs for the current frame.
#[derive(Debug, Clone, Default)]
pub struct ViewSnapshot {
    pub route: RouteSnapshot,
    /// Team list: Home, Teams, and every team-filter dropdown read this.
    pub teams: ViewData<Vec<Team>>,
    pub team_detail: ViewData<Team>,
    pub players: ViewData<Vec<Player>>,
    pub player_detail: ViewData<Player>,
    pub staff: ViewData<Vec<StaffMember>>,
    pub owners: ViewData<Vec<Owner>>,
    pub top_runs: ViewData<Vec<RunsEntry>>,
    pub top_wickets: ViewData<Vec<WicketsEntry>>,
    /// Authoritative players filter state (echoed back to the filter bar).
    pub players_filter: PlayerQuery,
    pub staff_team: Option<String>,
    pub owners_team: Option<String>,
}

/// Current route, pre-split for rendering.
#[derive(Debug, Clone)]
pub struct RouteSnapshot {
    pub route: Route,
    /// Canonical path, shown in the header.
    pub path: String,
}

impl Default for RouteSnapshot {
    fn default() -> Self {
        let route = Route::Home;
        let path = route.path();
        RouteSnapshot { route, path }
    }
}

impl From<Route> for RouteSnapshot {
    fn from(route: Route) -> Self {
        let path = route.path();
        RouteSnapshot { route, path }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
