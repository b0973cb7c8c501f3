//! Checkbox multi-select list, used for the province and district pickers.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Cursor state for a checkbox list overlay.
///
/// The picker only tracks the cursor; which rows are checked is the
/// caller's state and is passed to [`draw_picker`] at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    title: String,
    options: Vec<String>,
    cursor: usize,
}

impl PickerState {
    /// Creates a picker over the given options with the cursor on the first.
    pub fn new(title: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            options,
            cursor: 0,
        }
    }

    /// Returns the picker title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the options in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns the cursor index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the option under the cursor, or `None` for an empty picker.
    pub fn current(&self) -> Option<&str> {
        self.options.get(self.cursor).map(String::as_str)
    }

    /// Moves the cursor up one row, stopping at the top.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row, stopping at the bottom.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }
}

/// Renders the picker as a centered overlay.
///
/// `checked` must be the same length as the options; out-of-range rows
/// render unchecked.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_picker(state: &PickerState, checked: &[bool], frame: &mut Frame, area: Rect) {
    let width = area.width.min(44).max(20);
    let height = area.height.min(state.options.len() as u16 + 3);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", state.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let visible = inner.height as usize;
    // Keep the cursor on screen for long lists.
    let offset = state.cursor.saturating_sub(visible.saturating_sub(1));

    let lines: Vec<Line> = state
        .options
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, option)| {
            let mark = if checked.get(i).copied().unwrap_or(false) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if i == state.cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{mark} {option}"), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
