// Player detail view: identity line plus the four career stat tiles.
//
// Any missing stat renders as "-", never a crash or a stray "undefined".

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::{IplStats, Player};
use crate::tui::ViewState;

use super::{render_failed, render_loading, slot_view, SlotView};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    match slot_view(&state.snapshot.player_detail) {
        SlotView::Ready(player) => render_player(frame, area, player),
        SlotView::Loading => render_loading(frame, area, "Player"),
        SlotView::Failed(message) => render_failed(frame, area, "Player", message),
    }
}

fn render_player(frame: &mut Frame, area: Rect, player: &Player) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let mut lines = vec![Line::from(Span::styled(
        player.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    let mut detail_parts = Vec::new();
    if let Some(role) = &player.role {
        detail_parts.push(role.to_string());
    }
    if let Some(team) = &player.team_name {
        detail_parts.push(team.clone());
    }
    if !detail_parts.is_empty() {
        lines.push(Line::from(detail_parts.join(" • ")));
    }

    let identity = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(player.name.clone()),
    );
    frame.render_widget(identity, rows[0]);

    render_stat_tiles(frame, rows[1], player.ipl_stats.as_ref());
}

fn render_stat_tiles(frame: &mut Frame, area: Rect, stats: Option<&IplStats>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (i, (label, value)) in stat_tiles(stats).into_iter().enumerate() {
        let tile = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
        )))
        .block(Block::default().borders(Borders::ALL).title(label));
        frame.render_widget(tile, columns[i]);
    }
}

/// The four stat tiles in display order, values already formatted.
pub fn stat_tiles(stats: Option<&IplStats>) -> [(&'static str, String); 4] {
    [
        ("Matches", fmt_count(stats.and_then(|s| s.matches))),
        ("Runs", fmt_count(stats.and_then(|s| s.runs))),
        ("Wickets", fmt_count(stats.and_then(|s| s.wickets))),
        ("Strike Rate", fmt_rate(stats.and_then(|s| s.strike_rate))),
    ]
}

fn fmt_count(value: Option<u32>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => "-".to_string(),
    }
}

fn fmt_rate(value: Option<f64>) -> String {
    match value {
        Some(rate) => format!("{rate:.2}"),
        None => "-".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stats_missing_render_dashes() {
        let tiles = stat_tiles(None);
        for (_, value) in &tiles {
            assert_eq!(value, "-");
        }

        let empty = IplStats::default();
        for (_, value) in stat_tiles(Some(&empty)) {
            assert_eq!(value, "-");
        }
    }

    #[test]
    fn partial_stats_render_present_values_only() {
        let stats: IplStats = serde_json::from_value(serde_json::json!({
            "matches": 237,
            "runs": 7263,
        }))
        .unwrap();
        let tiles = stat_tiles(Some(&stats));
        assert_eq!(tiles[0], ("Matches", "237".to_string()));
        assert_eq!(tiles[1], ("Runs", "7263".to_string()));
        assert_eq!(tiles[2], ("Wickets", "-".to_string()));
        assert_eq!(tiles[3], ("Strike Rate", "-".to_string()));
    }

    #[test]
    fn strike_rate_renders_two_decimals() {
        let stats: IplStats =
            serde_json::from_value(serde_json::json!({ "strikeRate": 131.5 })).unwrap();
        assert_eq!(stat_tiles(Some(&stats))[3].1, "131.50");
    }

    #[test]
    fn no_tile_ever_says_undefined() {
        for tiles in [stat_tiles(None), stat_tiles(Some(&IplStats::default()))] {
            for (_, value) in tiles {
                assert!(!value.contains("undefined"));
            }
        }
    }
}
