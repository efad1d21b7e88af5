// Staff view: coaching and management cards, optionally scoped to a team.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::model::StaffMember;
use crate::tui::layout::split_filter_bar;
use crate::tui::ViewState;

use super::{render_failed, render_loading, slot_view, SlotView};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (bar_area, list_area) = split_filter_bar(area);

    let team = match &state.snapshot.staff_team {
        Some(id) => super::players::team_label(state.snapshot.teams.data.as_deref(), id),
        None => "All Teams".to_string(),
    };
    let bar = Paragraph::new(format!("Team: {team}")).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Filter (t: team)"),
    );
    frame.render_widget(bar, bar_area);

    match slot_view(&state.snapshot.staff) {
        SlotView::Ready(staff) => render_list(frame, list_area, staff),
        SlotView::Loading => render_loading(frame, list_area, "Coaching & Management"),
        SlotView::Failed(message) => {
            render_failed(frame, list_area, "Coaching & Management", message)
        }
    }
}

fn render_list(frame: &mut Frame, area: Rect, staff: &[StaffMember]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Coaching & Management ({})", staff.len()));

    if staff.is_empty() {
        let empty = Paragraph::new("No staff records.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = staff
        .iter()
        .map(|member| ListItem::new(Line::from(staff_card(member))))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// Card line: name plus "role • team" where known.
pub fn staff_card(member: &StaffMember) -> String {
    let mut card = member.name.clone();
    let detail = match (&member.role, &member.team_name) {
        (Some(role), Some(team)) => Some(format!("{role} • {team}")),
        (Some(role), None) => Some(role.clone()),
        (None, Some(team)) => Some(team.clone()),
        (None, None) => None,
    };
    if let Some(detail) = detail {
        card.push_str(&format!("  -  {detail}"));
    }
    card
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
