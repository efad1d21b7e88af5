// TUI: layout shell, input handling, and view rendering.
//
// The TUI owns a `ViewState` holding the latest snapshot pushed by the
// orchestrator plus purely local concerns (list selection, search-box
// editing). It re-renders on a fixed tick and forwards user commands over
// an mpsc channel.

pub mod input;
pub mod layout;
pub mod views;

use std::time::Duration;

use chrono::Datelike;
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::info;

use crate::model::roster_player_id;
use crate::protocol::{UiUpdate, UserCommand, ViewSnapshot};
use crate::routes::{Route, NAV_TABS};

use layout::build_layout;
use views::team_detail::roster_entries;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state: the latest orchestrator snapshot plus what only the
/// render loop cares about.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Latest snapshot from the orchestrator.
    pub snapshot: ViewSnapshot,
    /// Selected row in the current view's list.
    pub selected: usize,
    /// Whether the players search box is capturing keystrokes.
    pub search_mode: bool,
    /// Local edit buffer for the search box.
    pub search_input: String,
}

impl ViewState {
    /// Replace the snapshot. Selection resets when the route changed and is
    /// clamped when the current list shrank.
    pub fn apply_snapshot(&mut self, snapshot: ViewSnapshot) {
        let route_changed = snapshot.route.route != self.snapshot.route.route;
        self.snapshot = snapshot;
        if route_changed {
            self.selected = 0;
            self.search_mode = false;
            self.search_input = self.snapshot.players_filter.q.clone();
        } else {
            let len = self.current_list_len();
            if len == 0 {
                self.selected = 0;
            } else if self.selected >= len {
                self.selected = len - 1;
            }
        }
    }

    /// Number of selectable rows in the active view.
    pub fn current_list_len(&self) -> usize {
        let snapshot = &self.snapshot;
        match &snapshot.route.route {
            Route::Home | Route::Teams => {
                snapshot.teams.data.as_ref().map_or(0, Vec::len)
            }
            Route::Players => snapshot.players.data.as_ref().map_or(0, Vec::len),
            Route::TeamDetail { .. } => snapshot
                .team_detail
                .data
                .as_ref()
                .map_or(0, |team| roster_entries(&team.roster).len()),
            _ => 0,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.current_list_len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Route the selected row opens on Enter, when the active view has
    /// openable rows.
    pub fn selected_route(&self) -> Option<Route> {
        let snapshot = &self.snapshot;
        match &snapshot.route.route {
            Route::Home | Route::Teams => {
                let teams = snapshot.teams.data.as_ref()?;
                teams.get(self.selected).map(|team| Route::TeamDetail {
                    team_id: team.id.clone(),
                })
            }
            Route::Players => {
                let players = snapshot.players.data.as_ref()?;
                players.get(self.selected).map(|player| Route::PlayerDetail {
                    player_id: player.id.clone(),
                })
            }
            Route::TeamDetail { team_id } => {
                let team = snapshot.team_detail.data.as_ref()?;
                let entries = roster_entries(&team.roster);
                entries.get(self.selected).map(|name| Route::PlayerDetail {
                    player_id: roster_player_id(team_id, name),
                })
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render_frame(frame: &mut Frame, state: &ViewState) {
    let shell = build_layout(frame.area());

    render_header(frame, &shell, state);
    render_nav(frame, &shell, state);
    render_content(frame, &shell, state);
    render_footer(frame, &shell);
}

fn render_header(frame: &mut Frame, shell: &layout::AppLayout, state: &ViewState) {
    let line = Line::from(vec![
        Span::styled(
            " IPL Encyclopedia ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            state.snapshot.route.path.clone(),
            Style::default().fg(Color::Gray),
        ),
    ]);
    let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Blue));
    frame.render_widget(paragraph, shell.header);
}

fn render_nav(frame: &mut Frame, shell: &layout::AppLayout, state: &ViewState) {
    let active = state.snapshot.route.route.nav_index();
    let mut spans = Vec::new();
    for (i, (label, _)) in NAV_TABS.iter().enumerate() {
        let style = if active == Some(i) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, label), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), shell.nav);
}

fn render_content(frame: &mut Frame, shell: &layout::AppLayout, state: &ViewState) {
    let area = shell.content;
    match &state.snapshot.route.route {
        Route::Home => views::home::render(frame, area, state),
        Route::Teams => views::teams::render(frame, area, state),
        Route::TeamDetail { .. } => views::team_detail::render(frame, area, state),
        Route::Players => views::players::render(frame, area, state),
        Route::PlayerDetail { .. } => views::player_detail::render(frame, area, state),
        Route::Staff => views::staff::render(frame, area, state),
        Route::Owners => views::owners::render(frame, area, state),
        Route::Stats => views::stats::render(frame, area, state),
        Route::NotFound { .. } => views::not_found::render(frame, area, state),
    }
}

fn render_footer(frame: &mut Frame, shell: &layout::AppLayout) {
    let year = chrono::Utc::now().year();
    let text = format!(
        " (c) {year} Indian Premier League - educational fan project | j/k:Select Enter:Open Esc:Back r:Retry q:Quit"
    );
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, shell.footer);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal first.
/// 3. Select loop: snapshots from the orchestrator, keyboard input, render
///    ticks.
/// 4. Restores the terminal on exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    tick_millis: u64,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(tick_millis));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(UiUpdate::Snapshot(snapshot)) => {
                        view_state.apply_snapshot(*snapshot);
                    }
                    None => {
                        // Orchestrator gone; nothing left to render.
                        break;
                    }
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                info!("quit requested from TUI");
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events need no handling; the next
                        // tick redraws at the new size.
                    }
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{FetchStatus, ViewData};

    fn snapshot_with_teams(route: Route) -> ViewSnapshot {
        let teams = serde_json::from_value(serde_json::json!([
            { "id": "mi", "name": "Mumbai Indians" },
            { "id": "csk", "name": "Chennai Super Kings" },
            { "id": "rcb", "name": "Royal Challengers Bengaluru" },
        ]))
        .unwrap();
        ViewSnapshot {
            route: route.into(),
            teams: ViewData {
                status: FetchStatus::Loaded,
                data: Some(teams),
            },
            ..Default::default()
        }
    }

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert_eq!(state.snapshot.route.route, Route::Home);
        assert_eq!(state.selected, 0);
        assert!(!state.search_mode);
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn selection_moves_within_bounds() {
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot_with_teams(Route::Teams));

        assert_eq!(state.current_list_len(), 3);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2, "selection stops at the last row");
        state.select_prev();
        assert_eq!(state.selected, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn route_change_resets_selection() {
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot_with_teams(Route::Teams));
        state.selected = 2;

        state.apply_snapshot(snapshot_with_teams(Route::Players));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn shrinking_list_clamps_selection() {
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot_with_teams(Route::Teams));
        state.selected = 2;

        let mut smaller = snapshot_with_teams(Route::Teams);
        smaller.teams.data.as_mut().unwrap().truncate(1);
        state.apply_snapshot(smaller);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn selected_route_opens_team_detail() {
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot_with_teams(Route::Teams));
        state.selected = 1;
        assert_eq!(
            state.selected_route(),
            Some(Route::TeamDetail {
                team_id: "csk".into()
            })
        );
    }

    #[test]
    fn selected_route_on_roster_builds_player_id() {
        let mut state = ViewState::default();
        let team = serde_json::from_value(serde_json::json!({
            "id": "mi",
            "name": "Mumbai Indians",
            "roster": { "batsmen": ["Rohit Sharma"] }
        }))
        .unwrap();
        let snapshot = ViewSnapshot {
            route: Route::TeamDetail {
                team_id: "mi".into(),
            }
            .into(),
            team_detail: ViewData {
                status: FetchStatus::Loaded,
                data: Some(team),
            },
            ..Default::default()
        };
        state.apply_snapshot(snapshot);
        assert_eq!(
            state.selected_route(),
            Some(Route::PlayerDetail {
                player_id: "mi-rohit-sharma".into()
            })
        );
    }

    #[test]
    fn selected_route_none_without_data() {
        let mut state = ViewState::default();
        state.apply_snapshot(ViewSnapshot {
            route: Route::Stats.into(),
            ..Default::default()
        });
        assert_eq!(state.selected_route(), None);
        assert_eq!(state.current_list_len(), 0);
    }
}
