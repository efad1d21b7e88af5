// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into `UserCommand`s for the orchestrator,
// or into local `ViewState` mutations (selection movement, search-input
// editing). Search mode captures printable characters; every edit ships the
// full current text so the orchestrator re-issues the players fetch per
// keystroke.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Role, Team};
use crate::protocol::UserCommand;
use crate::routes::{Route, NAV_TABS};

use super::ViewState;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to
/// the orchestrator, `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both Press
    // and Release events for each physical keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits regardless of mode.
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.search_mode {
        return handle_search_mode(key_event, view_state);
    }

    let route = view_state.snapshot.route.route.clone();

    match key_event.code {
        // Nav tabs
        KeyCode::Char(c @ '1'..='6') => {
            let index = (c as usize) - ('1' as usize);
            let (_, path) = NAV_TABS[index];
            Some(UserCommand::Navigate(Route::parse(path)))
        }

        // Selection movement
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.select_prev();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view_state.select_next();
            None
        }

        // Open the selected entry
        KeyCode::Enter => view_state.selected_route().map(UserCommand::Navigate),

        // Search mode entry, only where a search box exists
        KeyCode::Char('/') => {
            if route == Route::Players {
                view_state.search_mode = true;
                view_state.search_input = view_state.snapshot.players_filter.q.clone();
            }
            None
        }

        // Role filter cycling (Players only)
        KeyCode::Char('f') => {
            if route == Route::Players {
                let next = next_role(view_state.snapshot.players_filter.role.as_ref());
                Some(UserCommand::RoleFilter(next))
            } else {
                None
            }
        }

        // Team filter cycling, scoped to the view it filters
        KeyCode::Char('t') => {
            let teams = view_state.snapshot.teams.data.as_deref();
            match route {
                Route::Players => {
                    let next =
                        next_team(teams, view_state.snapshot.players_filter.team.as_deref());
                    Some(UserCommand::TeamFilter(next))
                }
                Route::Staff => {
                    let next = next_team(teams, view_state.snapshot.staff_team.as_deref());
                    Some(UserCommand::StaffTeamFilter(next))
                }
                Route::Owners => {
                    let next = next_team(teams, view_state.snapshot.owners_team.as_deref());
                    Some(UserCommand::OwnersTeamFilter(next))
                }
                _ => None,
            }
        }

        // Back navigation
        KeyCode::Esc | KeyCode::Backspace => Some(UserCommand::Back),

        // Retry failed fetches of the current view
        KeyCode::Char('r') => Some(UserCommand::Retry),

        KeyCode::Char('q') => Some(UserCommand::Quit),

        _ => None,
    }
}

/// Handle key events while editing the players search box.
fn handle_search_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc | KeyCode::Enter => {
            view_state.search_mode = false;
            None
        }
        KeyCode::Backspace => {
            view_state.search_input.pop();
            Some(UserCommand::SearchInput(view_state.search_input.clone()))
        }
        KeyCode::Char(c) => {
            view_state.search_input.push(c);
            Some(UserCommand::SearchInput(view_state.search_input.clone()))
        }
        _ => None,
    }
}

/// Next role in the cycle: All -> Batsman -> Bowler -> All-rounder ->
/// Wicketkeeper -> All.
fn next_role(current: Option<&Role>) -> Option<Role> {
    match current {
        None => Some(Role::ALL[0].clone()),
        Some(role) => {
            let position = Role::ALL.iter().position(|r| r == role);
            match position {
                Some(i) if i + 1 < Role::ALL.len() => Some(Role::ALL[i + 1].clone()),
                _ => None,
            }
        }
    }
}

/// Next team id in the cycle: All -> each team in list order -> All.
/// With no team list loaded yet there is nothing to cycle through.
fn next_team(teams: Option<&[Team]>, current: Option<&str>) -> Option<String> {
    let teams = teams?;
    if teams.is_empty() {
        return None;
    }
    match current {
        None => Some(teams[0].id.clone()),
        Some(id) => {
            let position = teams.iter().position(|t| t.id == id);
            match position {
                Some(i) if i + 1 < teams.len() => Some(teams[i + 1].id.clone()),
                _ => None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
