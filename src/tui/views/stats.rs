// Stats view: the two server-ranked leaderboards side by side.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::model::{RunsEntry, WicketsEntry};
use crate::tui::layout::split_columns;
use crate::tui::ViewState;

use super::{render_failed, render_loading, slot_view, SlotView};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (left, right) = split_columns(area);

    match slot_view(&state.snapshot.top_runs) {
        SlotView::Ready(entries) => {
            let rows = runs_rows(entries);
            render_panel(frame, left, "Top Run Scorers", rows);
        }
        SlotView::Loading => render_loading(frame, left, "Top Run Scorers"),
        SlotView::Failed(message) => render_failed(frame, left, "Top Run Scorers", message),
    }

    match slot_view(&state.snapshot.top_wickets) {
        SlotView::Ready(entries) => {
            let rows = wickets_rows(entries);
            render_panel(frame, right, "Top Wicket Takers", rows);
        }
        SlotView::Loading => render_loading(frame, right, "Top Wicket Takers"),
        SlotView::Failed(message) => render_failed(frame, right, "Top Wicket Takers", message),
    }
}

fn render_panel(frame: &mut Frame, area: Rect, title: &str, rows: Vec<String>) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());

    if rows.is_empty() {
        let empty = Paragraph::new("No entries.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows.into_iter().map(|row| ListItem::new(Line::from(row))).collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// Ranked rows for the runs panel; server order is kept.
pub fn runs_rows(entries: &[RunsEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!("{:>2}. {}  {}", i + 1, entry.name, metric(entry.runs))
        })
        .collect()
}

/// Ranked rows for the wickets panel; server order is kept.
pub fn wickets_rows(entries: &[WicketsEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!("{:>2}. {}  {}", i + 1, entry.name, metric(entry.wickets))
        })
        .collect()
}

fn metric(value: Option<u64>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => "-".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
