// Screen layout: the static shell wrapping every view.
//
// +--------------------------------------------------+
// | Header (1 row): app title + current path          |
// +--------------------------------------------------+
// | Nav (1 row): Home | Teams | Players | ...         |
// +--------------------------------------------------+
// | Content (fill): the active view                   |
// +--------------------------------------------------+
// | Footer (1 row): copyright + key hints             |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for the shell zones.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: app title and the canonical path of the current route.
    pub header: Rect,
    /// Second row: nav tabs.
    pub nav: Rect,
    /// Everything between nav and footer: the active view renders here.
    pub content: Rect,
    /// Bottom row: copyright line and keyboard hints.
    pub footer: Rect,
}

/// Build the shell layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // nav
            Constraint::Min(5),    // content
            Constraint::Length(1), // footer
        ])
        .split(area);

    AppLayout {
        header: vertical[0],
        nav: vertical[1],
        content: vertical[2],
        footer: vertical[3],
    }
}

/// Split the content area into a filter bar row and the list below it.
/// Used by the Players, Staff, and Owners views.
pub fn split_filter_bar(content: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(content);
    (rows[0], rows[1])
}

/// Split the content area into two equal columns. Used by the Stats view's
/// leaderboards and the team detail's roster sections.
pub fn split_columns(content: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content);
    (columns[0], columns[1])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
