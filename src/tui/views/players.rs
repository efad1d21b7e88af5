// Players list view: filter bar (search, role, team) over the result grid.
//
// The filter bar always renders; only the grid below it reflects the fetch
// status. An empty result is a valid state and draws as zero cards.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::model::{Player, Team};
use crate::tui::layout::split_filter_bar;
use crate::tui::ViewState;

use super::{render_failed, render_loading, row_style, slot_view, SlotView};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (bar_area, grid_area) = split_filter_bar(area);

    render_filter_bar(frame, bar_area, state);

    match slot_view(&state.snapshot.players) {
        SlotView::Ready(players) => render_grid(frame, grid_area, players, state.selected),
        SlotView::Loading => render_loading(frame, grid_area, "Players"),
        SlotView::Failed(message) => render_failed(frame, grid_area, "Players", message),
    }
}

fn render_filter_bar(frame: &mut Frame, area: Rect, state: &ViewState) {
    let query = &state.snapshot.players_filter;

    let search = if state.search_mode {
        // Trailing underscore stands in for the cursor while editing.
        Span::styled(
            format!("Search: {}_", state.search_input),
            Style::default().add_modifier(Modifier::BOLD),
        )
    } else if query.q.is_empty() {
        Span::styled(
            "Search: (press / to type)".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(format!("Search: {}", query.q))
    };

    let role = match &query.role {
        Some(role) => format!("Role: {role}"),
        None => "Role: All".to_string(),
    };
    let team = match &query.team {
        Some(id) => format!("Team: {}", team_label(state.snapshot.teams.data.as_deref(), id)),
        None => "Team: All".to_string(),
    };

    let line = Line::from(vec![
        search,
        Span::raw("   "),
        Span::raw(role),
        Span::raw("   "),
        Span::raw(team),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Filters (/: search, f: role, t: team)"),
    );
    frame.render_widget(paragraph, area);
}

fn render_grid(frame: &mut Frame, area: Rect, players: &[Player], selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Players ({})", players.len()));

    if players.is_empty() {
        let empty = Paragraph::new("No players match the current filters.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = players
        .iter()
        .enumerate()
        .map(|(i, player)| {
            ListItem::new(Line::from(player_card(player))).style(row_style(i == selected))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Card line: name plus "role • team" where known.
pub fn player_card(player: &Player) -> String {
    let mut card = player.name.clone();
    let detail = match (&player.role, &player.team_name) {
        (Some(role), Some(team)) => Some(format!("{role} • {team}")),
        (Some(role), None) => Some(role.to_string()),
        (None, Some(team)) => Some(team.clone()),
        (None, None) => None,
    };
    if let Some(detail) = detail {
        card.push_str(&format!("  -  {detail}"));
    }
    card
}

/// Label for the team filter: short name when the team list has resolved,
/// otherwise the raw id.
pub fn team_label(teams: Option<&[Team]>, team_id: &str) -> String {
    teams
        .and_then(|teams| teams.iter().find(|t| t.id == team_id))
        .map(|team| {
            team.short_name
                .clone()
                .unwrap_or_else(|| team.name.clone())
        })
        .unwrap_or_else(|| team_id.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
