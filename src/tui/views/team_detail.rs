// Team detail view: franchise info, achievements, and the roster grouped by
// role. Roster entries are selectable; Enter opens the player's page.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::{Roster, Team};
use crate::tui::ViewState;

use super::{render_failed, render_loading, row_style, slot_view, SlotView};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    match slot_view(&state.snapshot.team_detail) {
        SlotView::Ready(team) => render_team(frame, area, team, state.selected),
        SlotView::Loading => render_loading(frame, area, "Team"),
        SlotView::Failed(message) => render_failed(frame, area, "Team", message),
    }
}

fn render_team(frame: &mut Frame, area: Rect, team: &Team, selected: usize) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        team.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if let Some(ground) = &team.home_ground {
        lines.push(Line::from(format!("Home ground: {ground}")));
    }
    lines.push(Line::from(badges(team)));
    if let Some(links) = links_line(team) {
        lines.push(Line::from(Span::styled(
            links,
            Style::default().fg(Color::Blue),
        )));
    }

    if !team.achievements.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Achievements",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
        for achievement in &team.achievements {
            lines.push(Line::from(format!("  * {achievement}")));
        }
    }

    // Roster sections: a category with no players still renders its header,
    // followed by an explicit empty marker.
    let mut index = 0usize;
    for (label, names) in team.roster.sections() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{label} ({})", names.len()),
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
        if names.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none)",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for name in names {
            lines.push(Line::from(Span::styled(
                format!("  {name}"),
                row_style(index == selected),
            )));
            index += 1;
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(team.name.clone()),
    );
    frame.render_widget(paragraph, area);
}

/// Captain / head coach / owner badges on one line.
pub fn badges(team: &Team) -> String {
    let mut parts = Vec::new();
    if let Some(captain) = &team.captain {
        parts.push(format!("Captain: {captain}"));
    }
    if let Some(coach) = &team.head_coach {
        parts.push(format!("Head Coach: {coach}"));
    }
    for owner in &team.owners {
        parts.push(owner.clone());
    }
    parts.join("  |  ")
}

/// Website and social links, when any exist.
pub fn links_line(team: &Team) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(website) = &team.website {
        parts.push(format!("Website: {website}"));
    }
    if let Some(social) = &team.social {
        if let Some(twitter) = &social.twitter {
            parts.push(format!("Twitter: {twitter}"));
        }
        if let Some(instagram) = &social.instagram {
            parts.push(format!("Instagram: {instagram}"));
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("  "))
    }
}

/// Roster names flattened in section order — the selectable entries, in the
/// order they are drawn.
pub fn roster_entries(roster: &Roster) -> Vec<&str> {
    roster
        .sections()
        .into_iter()
        .flat_map(|(_, names)| names.iter().map(String::as_str))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
