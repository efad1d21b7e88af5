// Home view: league blurb plus the team grid.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::Team;
use crate::tui::ViewState;

use super::{render_failed, render_loading, row_style, slot_view, SlotView};

const BLURB: &str = "The IPL is the world's premier T20 cricket league \
featuring top talent from India and around the globe. Explore teams, \
players, staff, owners, and stats - all in one place.";

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let hero = Paragraph::new(BLURB)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Indian Premier League"),
        )
        .style(Style::default().add_modifier(Modifier::ITALIC));
    frame.render_widget(hero, rows[0]);

    match slot_view(&state.snapshot.teams) {
        SlotView::Ready(teams) => render_team_grid(frame, rows[1], teams, state.selected),
        SlotView::Loading => render_loading(frame, rows[1], "Teams"),
        SlotView::Failed(message) => render_failed(frame, rows[1], "Teams", message),
    }
}

fn render_team_grid(frame: &mut Frame, area: Rect, teams: &[Team], selected: usize) {
    let items: Vec<ListItem> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            ListItem::new(Line::from(team_line(team))).style(row_style(i == selected))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Teams ({})", teams.len()))
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(list, area);
}

/// One grid entry: team name with its short code.
pub fn team_line(team: &Team) -> String {
    match team.short_name.as_deref() {
        Some(code) => format!("{}  [{code}]", team.name),
        None => team.name.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
