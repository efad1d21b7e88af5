// Owners view: franchise owner cards, optionally scoped to a team.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::model::Owner;
use crate::tui::layout::split_filter_bar;
use crate::tui::ViewState;

use super::{render_failed, render_loading, slot_view, SlotView};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (bar_area, list_area) = split_filter_bar(area);

    let team = match &state.snapshot.owners_team {
        Some(id) => super::players::team_label(state.snapshot.teams.data.as_deref(), id),
        None => "All Teams".to_string(),
    };
    let bar = Paragraph::new(format!("Team: {team}")).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Filter (t: team)"),
    );
    frame.render_widget(bar, bar_area);

    match slot_view(&state.snapshot.owners) {
        SlotView::Ready(owners) => render_list(frame, list_area, owners),
        SlotView::Loading => render_loading(frame, list_area, "Owners"),
        SlotView::Failed(message) => render_failed(frame, list_area, "Owners", message),
    }
}

fn render_list(frame: &mut Frame, area: Rect, owners: &[Owner]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Owners ({})", owners.len()));

    if owners.is_empty() {
        let empty = Paragraph::new("No owner records.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = owners
        .iter()
        .map(|owner| ListItem::new(Line::from(owner_card(owner))))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// Card line: owner name plus the team it backs.
pub fn owner_card(owner: &Owner) -> String {
    match &owner.team_name {
        Some(team) => format!("{}  -  {team}", owner.name),
        None => owner.name.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
