//! Status bar widget — persistent one-line session context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// The authenticated username; empty before login.
    pub username: String,
    /// Full submit endpoint URL.
    pub endpoint: String,
}

/// Renders a one-line status bar with the logged-in user and the endpoint
/// records go to.
///
/// Renders nothing if `ctx.username` is empty (not authenticated).
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.username.is_empty() {
        return;
    }

    let cyan = Style::default().fg(Color::Cyan);
    let dim = Style::default().fg(Color::DarkGray);

    let spans = vec![
        Span::styled(ctx.username.clone(), cyan),
        Span::styled("  ->  ", dim),
        Span::styled(ctx.endpoint.clone(), dim),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
