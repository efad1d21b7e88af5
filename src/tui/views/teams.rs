// Teams list view: one card per team.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::model::Team;
use crate::tui::ViewState;

use super::{render_failed, render_loading, row_style, slot_view, SlotView};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    match slot_view(&state.snapshot.teams) {
        SlotView::Ready(teams) => render_list(frame, area, teams, state.selected),
        SlotView::Loading => render_loading(frame, area, "All Teams"),
        SlotView::Failed(message) => render_failed(frame, area, "All Teams", message),
    }
}

fn render_list(frame: &mut Frame, area: Rect, teams: &[Team], selected: usize) {
    let items: Vec<ListItem> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            ListItem::new(Line::from(team_card(team))).style(row_style(i == selected))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("All Teams ({})", teams.len())),
    );
    frame.render_widget(list, area);
}

/// Card line: name, short code subtitle, and home ground when known.
pub fn team_card(team: &Team) -> String {
    let mut card = team.name.clone();
    if let Some(code) = &team.short_name {
        card.push_str(&format!(" [{code}]"));
    }
    if let Some(ground) = &team.home_ground {
        card.push_str(&format!("  -  Home: {ground}"));
    }
    card
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
