// Not-found view for unmatched paths. Renders inside the layout shell so
// the nav stays usable.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::routes::Route;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let path = match &state.snapshot.route.route {
        Route::NotFound { path } => path.as_str(),
        _ => "",
    };
    let text = format!(
        "No page at `{path}`.\n\nPress 1-6 to open a section, or Esc to go back."
    );
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Not Found"));
    frame.render_widget(paragraph, area);
}
