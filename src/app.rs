// Application state and orchestration logic.
//
// The orchestrator owns every data slot and is the only writer. It listens
// on two channels: user commands from the TUI and results from spawned
// fetch tasks. Each navigation or filter change marks the affected slots
// as loading and spawns one fetch task per endpoint; results are applied
// only if their generation still matches the slot, so a superseded request
// can never clobber a newer one regardless of arrival order. After every
// applied change a fresh `ViewSnapshot` is pushed to the TUI.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::{ApiBackend, PlayerQuery};
use crate::model::{Owner, Player, RunsEntry, StaffMember, Team, WicketsEntry};
use crate::protocol::{FetchStatus, UiUpdate, UserCommand, ViewData, ViewSnapshot};
use crate::routes::Route;

// ---------------------------------------------------------------------------
// Fetch results
// ---------------------------------------------------------------------------

/// Outcome of one spawned fetch task. Errors are already rendered to their
/// user-facing message; the generation identifies which request this answers.
#[derive(Debug)]
pub enum DataEvent {
    Teams {
        generation: u64,
        result: Result<Vec<Team>, String>,
    },
    TeamDetail {
        generation: u64,
        result: Result<Team, String>,
    },
    Players {
        generation: u64,
        result: Result<Vec<Player>, String>,
    },
    PlayerDetail {
        generation: u64,
        result: Result<Player, String>,
    },
    Staff {
        generation: u64,
        result: Result<Vec<StaffMember>, String>,
    },
    Owners {
        generation: u64,
        result: Result<Vec<Owner>, String>,
    },
    TopRuns {
        generation: u64,
        result: Result<Vec<RunsEntry>, String>,
    },
    TopWickets {
        generation: u64,
        result: Result<Vec<WicketsEntry>, String>,
    },
}

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// One view's data container: status, last data, and the generation of the
/// newest request issued against it.
///
/// u64 overflow is not a practical concern for a generation counter that
/// increments once per user-triggered fetch.
#[derive(Debug)]
pub struct Slot<T> {
    pub status: FetchStatus,
    pub data: Option<T>,
    generation: u64,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot {
            status: FetchStatus::Idle,
            data: None,
            generation: 0,
        }
    }
}

impl<T: Clone> Slot<T> {
    /// Mark the slot loading and brand a new request. Previously shown data
    /// is kept until the replacement arrives.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        self.generation
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when the
    /// generation no longer matches — a stale response from a superseded
    /// request.
    pub fn apply(&mut self, generation: u64, result: Result<T, String>) -> bool {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.status = FetchStatus::Loaded;
            }
            Err(message) => {
                self.status = FetchStatus::Failed(message);
            }
        }
        true
    }

    fn view(&self) -> ViewData<T> {
        ViewData {
            status: self.status.clone(),
            data: self.data.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    api: Arc<dyn ApiBackend>,
    data_tx: mpsc::Sender<DataEvent>,

    route: Route,
    history: Vec<Route>,

    teams: Slot<Vec<Team>>,
    team_detail: Slot<Team>,
    players: Slot<Vec<Player>>,
    player_detail: Slot<Player>,
    staff: Slot<Vec<StaffMember>>,
    owners: Slot<Vec<Owner>>,
    top_runs: Slot<Vec<RunsEntry>>,
    top_wickets: Slot<Vec<WicketsEntry>>,

    /// Id the team-detail slot currently belongs to. A navigation to the
    /// same id does not re-fetch.
    team_detail_id: Option<String>,
    player_detail_id: Option<String>,

    players_filter: PlayerQuery,
    staff_team: Option<String>,
    owners_team: Option<String>,
}

impl AppState {
    /// Create the state and mount the start route (fires its initial
    /// fetches).
    pub fn new(
        api: Arc<dyn ApiBackend>,
        data_tx: mpsc::Sender<DataEvent>,
        start_route: Route,
    ) -> Self {
        let mut state = AppState {
            api,
            data_tx,
            route: start_route.clone(),
            history: Vec::new(),
            teams: Slot::default(),
            team_detail: Slot::default(),
            players: Slot::default(),
            player_detail: Slot::default(),
            staff: Slot::default(),
            owners: Slot::default(),
            top_runs: Slot::default(),
            top_wickets: Slot::default(),
            team_detail_id: None,
            player_detail_id: None,
            players_filter: PlayerQuery::default(),
            staff_team: None,
            owners_team: None,
        };
        state.mount(&start_route);
        state
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Handle a user command. Returns `true` when the snapshot changed and
    /// should be pushed to the TUI.
    pub fn handle_command(&mut self, cmd: UserCommand) -> bool {
        match cmd {
            UserCommand::Navigate(route) => {
                self.navigate(route);
                true
            }
            UserCommand::Back => {
                if let Some(previous) = self.history.pop() {
                    info!(to = %previous, "navigating back");
                    self.route = previous.clone();
                    self.mount(&previous);
                    true
                } else {
                    false
                }
            }
            UserCommand::SearchInput(text) => {
                if text == self.players_filter.q {
                    return false;
                }
                self.players_filter.q = text;
                self.spawn_players();
                true
            }
            UserCommand::RoleFilter(role) => {
                if role == self.players_filter.role {
                    return false;
                }
                self.players_filter.role = role;
                self.spawn_players();
                true
            }
            UserCommand::TeamFilter(team) => {
                if team == self.players_filter.team {
                    return false;
                }
                self.players_filter.team = team;
                self.spawn_players();
                true
            }
            UserCommand::StaffTeamFilter(team) => {
                if team == self.staff_team {
                    return false;
                }
                self.staff_team = team;
                self.spawn_staff();
                true
            }
            UserCommand::OwnersTeamFilter(team) => {
                if team == self.owners_team {
                    return false;
                }
                self.owners_team = team;
                self.spawn_owners();
                true
            }
            UserCommand::Retry => {
                self.retry_current();
                true
            }
            UserCommand::Quit => false,
        }
    }

    /// Apply a fetch result to its slot. Returns `true` when the result was
    /// current and the snapshot should be pushed.
    pub fn apply_event(&mut self, event: DataEvent) -> bool {
        match event {
            DataEvent::Teams { generation, result } => self.teams.apply(generation, result),
            DataEvent::TeamDetail { generation, result } => {
                self.team_detail.apply(generation, result)
            }
            DataEvent::Players { generation, result } => self.players.apply(generation, result),
            DataEvent::PlayerDetail { generation, result } => {
                self.player_detail.apply(generation, result)
            }
            DataEvent::Staff { generation, result } => self.staff.apply(generation, result),
            DataEvent::Owners { generation, result } => self.owners.apply(generation, result),
            DataEvent::TopRuns { generation, result } => self.top_runs.apply(generation, result),
            DataEvent::TopWickets { generation, result } => {
                self.top_wickets.apply(generation, result)
            }
        }
    }

    /// Capture the current state for the render loop.
    pub fn build_snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            route: self.route.clone().into(),
            teams: self.teams.view(),
            team_detail: self.team_detail.view(),
            players: self.players.view(),
            player_detail: self.player_detail.view(),
            staff: self.staff.view(),
            owners: self.owners.view(),
            top_runs: self.top_runs.view(),
            top_wickets: self.top_wickets.view(),
            players_filter: self.players_filter.clone(),
            staff_team: self.staff_team.clone(),
            owners_team: self.owners_team.clone(),
        }
    }

    // -- Navigation ---------------------------------------------------------

    fn navigate(&mut self, route: Route) {
        if route != self.route {
            self.history.push(self.route.clone());
        }
        info!(to = %route, "navigating");
        self.route = route.clone();
        self.mount(&route);
    }

    /// Fetch-on-mount: fire the fetches the newly shown route depends on.
    /// List views re-fetch on every mount; detail views only when their id
    /// changed (or the previous attempt failed).
    fn mount(&mut self, route: &Route) {
        match route {
            Route::Home | Route::Teams => {
                self.spawn_teams();
            }
            Route::TeamDetail { team_id } => {
                let changed = self.team_detail_id.as_deref() != Some(team_id.as_str());
                if changed || matches!(self.team_detail.status, FetchStatus::Idle | FetchStatus::Failed(_))
                {
                    self.team_detail_id = Some(team_id.clone());
                    self.spawn_team_detail(team_id.clone());
                }
            }
            Route::Players => {
                // Team list feeds the team filter; both fetches run
                // concurrently and land in disjoint slots.
                self.spawn_teams();
                self.spawn_players();
            }
            Route::PlayerDetail { player_id } => {
                let changed = self.player_detail_id.as_deref() != Some(player_id.as_str());
                if changed
                    || matches!(self.player_detail.status, FetchStatus::Idle | FetchStatus::Failed(_))
                {
                    self.player_detail_id = Some(player_id.clone());
                    self.spawn_player_detail(player_id.clone());
                }
            }
            Route::Staff => {
                self.spawn_teams();
                self.spawn_staff();
            }
            Route::Owners => {
                self.spawn_teams();
                self.spawn_owners();
            }
            Route::Stats => {
                self.spawn_top_runs();
                self.spawn_top_wickets();
            }
            Route::NotFound { path } => {
                warn!(%path, "unmatched path");
            }
        }
    }

    /// Re-issue the failed fetches among the current route's slots.
    fn retry_current(&mut self) {
        match self.route.clone() {
            Route::Home | Route::Teams => {
                if self.teams.status.is_failed() {
                    self.spawn_teams();
                }
            }
            Route::TeamDetail { team_id } => {
                if self.team_detail.status.is_failed() {
                    self.spawn_team_detail(team_id);
                }
            }
            Route::Players => {
                if self.teams.status.is_failed() {
                    self.spawn_teams();
                }
                if self.players.status.is_failed() {
                    self.spawn_players();
                }
            }
            Route::PlayerDetail { player_id } => {
                if self.player_detail.status.is_failed() {
                    self.spawn_player_detail(player_id);
                }
            }
            Route::Staff => {
                if self.teams.status.is_failed() {
                    self.spawn_teams();
                }
                if self.staff.status.is_failed() {
                    self.spawn_staff();
                }
            }
            Route::Owners => {
                if self.teams.status.is_failed() {
                    self.spawn_teams();
                }
                if self.owners.status.is_failed() {
                    self.spawn_owners();
                }
            }
            Route::Stats => {
                if self.top_runs.status.is_failed() {
                    self.spawn_top_runs();
                }
                if self.top_wickets.status.is_failed() {
                    self.spawn_top_wickets();
                }
            }
            Route::NotFound { .. } => {}
        }
    }

    // -- Fetch task spawning ------------------------------------------------

    fn spawn_teams(&mut self) {
        let generation = self.teams.begin();
        let api = Arc::clone(&self.api);
        let tx = self.data_tx.clone();
        tokio::spawn(async move {
            let result = api.teams().await.map_err(|e| e.to_string());
            let _ = tx.send(DataEvent::Teams { generation, result }).await;
        });
    }

    fn spawn_team_detail(&mut self, team_id: String) {
        let generation = self.team_detail.begin();
        let api = Arc::clone(&self.api);
        let tx = self.data_tx.clone();
        tokio::spawn(async move {
            let result = api.team(&team_id).await.map_err(|e| e.to_string());
            let _ = tx
                .send(DataEvent::TeamDetail { generation, result })
                .await;
        });
    }

    fn spawn_players(&mut self) {
        let generation = self.players.begin();
        let query = self.players_filter.clone();
        let api = Arc::clone(&self.api);
        let tx = self.data_tx.clone();
        tokio::spawn(async move {
            let result = api.players(&query).await.map_err(|e| e.to_string());
            let _ = tx.send(DataEvent::Players { generation, result }).await;
        });
    }

    fn spawn_player_detail(&mut self, player_id: String) {
        let generation = self.player_detail.begin();
        let api = Arc::clone(&self.api);
        let tx = self.data_tx.clone();
        tokio::spawn(async move {
            let result = api.player(&player_id).await.map_err(|e| e.to_string());
            let _ = tx
                .send(DataEvent::PlayerDetail { generation, result })
                .await;
        });
    }

    fn spawn_staff(&mut self) {
        let generation = self.staff.begin();
        let team = self.staff_team.clone();
        let api = Arc::clone(&self.api);
        let tx = self.data_tx.clone();
        tokio::spawn(async move {
            let result = api.staff(team.as_deref()).await.map_err(|e| e.to_string());
            let _ = tx.send(DataEvent::Staff { generation, result }).await;
        });
    }

    fn spawn_owners(&mut self) {
        let generation = self.owners.begin();
        let team = self.owners_team.clone();
        let api = Arc::clone(&self.api);
        let tx = self.data_tx.clone();
        tokio::spawn(async move {
            let result = api.owners(team.as_deref()).await.map_err(|e| e.to_string());
            let _ = tx.send(DataEvent::Owners { generation, result }).await;
        });
    }

    fn spawn_top_runs(&mut self) {
        let generation = self.top_runs.begin();
        let api = Arc::clone(&self.api);
        let tx = self.data_tx.clone();
        tokio::spawn(async move {
            let result = api.top_runs().await.map_err(|e| e.to_string());
            let _ = tx.send(DataEvent::TopRuns { generation, result }).await;
        });
    }

    fn spawn_top_wickets(&mut self) {
        let generation = self.top_wickets.begin();
        let api = Arc::clone(&self.api);
        let tx = self.data_tx.clone();
        tokio::spawn(async move {
            let result = api.top_wickets().await.map_err(|e| e.to_string());
            let _ = tx
                .send(DataEvent::TopWickets { generation, result })
                .await;
        });
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the orchestrator loop.
///
/// Listens with `tokio::select!` on user commands from the TUI and results
/// from spawned fetch tasks, and pushes a snapshot through `ui_tx` after
/// every applied change. Returns when the TUI sends `Quit` or closes its
/// command channel.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    mut data_rx: mpsc::Receiver<DataEvent>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!(route = %state.route(), "orchestrator started");

    // Initial snapshot so the TUI has something to draw before the first
    // fetch resolves.
    let _ = ui_tx
        .send(UiUpdate::Snapshot(Box::new(state.build_snapshot())))
        .await;

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        if state.handle_command(cmd) {
                            let _ = ui_tx
                                .send(UiUpdate::Snapshot(Box::new(state.build_snapshot())))
                                .await;
                        }
                    }
                    None => {
                        info!("command channel closed, shutting down");
                        break;
                    }
                }
            }

            event = data_rx.recv() => {
                match event {
                    Some(event) => {
                        if state.apply_event(event) {
                            let _ = ui_tx
                                .send(UiUpdate::Snapshot(Box::new(state.build_snapshot())))
                                .await;
                        }
                    }
                    None => {
                        info!("data channel closed, shutting down");
                        break;
                    }
                }
            }
        }
    }

    info!("orchestrator exiting");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
