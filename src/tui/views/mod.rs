// One renderer per route, plus the loading/failed panels every view shares.

pub mod home;
pub mod not_found;
pub mod owners;
pub mod player_detail;
pub mod players;
pub mod staff;
pub mod stats;
pub mod team_detail;
pub mod teams;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::protocol::{FetchStatus, ViewData};

/// How a slot should be drawn right now.
///
/// A slot that is reloading but still has data renders the data — stale rows
/// stay on screen until replaced. A failure always wins over old data so the
/// retry hint is visible.
pub enum SlotView<'a, T> {
    Ready(&'a T),
    Loading,
    Failed(&'a str),
}

pub fn slot_view<T>(slot: &ViewData<T>) -> SlotView<'_, T> {
    match (&slot.status, &slot.data) {
        (FetchStatus::Failed(message), _) => SlotView::Failed(message.as_str()),
        (_, Some(data)) => SlotView::Ready(data),
        _ => SlotView::Loading,
    }
}

/// Placeholder shown while a view has no data yet.
pub fn render_loading(frame: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(paragraph, area);
}

/// Error panel with the retry hint.
pub fn render_failed(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let text = format!("Could not load data.\n{message}\n\nPress r to retry.");
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(paragraph, area);
}

/// Row style for list items, highlighting the selected one.
pub fn row_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
