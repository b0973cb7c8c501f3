//! Reusable form widget for text input screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown on the field's border.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field must be non-empty on submit.
    pub required: bool,
    /// Whether the value renders as bullets (password entry).
    pub masked: bool,
}

impl FormField {
    /// Creates a new form field.
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            error: None,
            required,
            masked: false,
        }
    }

    /// Creates a field whose value renders masked.
    pub fn masked(label: impl Into<String>, required: bool) -> Self {
        Self {
            masked: true,
            ..Self::new(label, required)
        }
    }

    /// Creates a field pre-filled with a default value.
    pub fn with_value(label: impl Into<String>, required: bool, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new(label, required)
        }
    }
}

/// A multi-field text form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the given field index, if it exists.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Inserts a character at the end of the focused field.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(ch);
        }
    }

    /// Deletes the last character from the focused field.
    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Replaces the value of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Clears the value of the field at `index`.
    pub fn clear_value(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value.clear();
        }
    }

    /// Sets an error message on a field by index.
    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(error);
        }
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Resets all field values and errors.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.focus = 0;
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let shown = if field.masked {
            "\u{2022}".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        };
        let mut spans = vec![Span::raw(shown)];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Draw error below the field if there's space
        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            // Render error overlapping the bottom of the row area
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + row_height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form() -> Form {
        Form::new(vec![
            FormField::new("Project Name", true),
            FormField::new("Implementing Partner", false),
            FormField::new("Contact Info", false),
        ])
    }

    // --- Focus management ---

    #[test]
    fn focus_starts_at_zero() {
        let form = make_form();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_next_advances() {
        let mut form = make_form();
        form.focus_next();
        assert_eq!(form.focus(), 1);
        form.focus_next();
        assert_eq!(form.focus(), 2);
    }

    #[test]
    fn focus_next_wraps() {
        let mut form = make_form();
        form.focus_next();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_prev_wraps() {
        let mut form = make_form();
        form.focus_prev();
        assert_eq!(form.focus(), 2);
    }

    #[test]
    fn focus_next_empty_form_is_noop() {
        let mut form = Form::new(vec![]);
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_prev_empty_form_is_noop() {
        let mut form = Form::new(vec![]);
        form.focus_prev();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn set_focus_moves_to_index() {
        let mut form = make_form();
        form.set_focus(2);
        assert_eq!(form.focus(), 2);
    }

    #[test]
    fn set_focus_out_of_bounds_is_noop() {
        let mut form = make_form();
        form.set_focus(99);
        assert_eq!(form.focus(), 0);
    }

    // --- Character insert/delete ---

    #[test]
    fn insert_char_appends_to_focused() {
        let mut form = make_form();
        form.insert_char('M');
        form.insert_char('a');
        assert_eq!(form.value(0), "Ma");
        assert_eq!(form.value(1), "");
    }

    #[test]
    fn insert_char_on_different_focus() {
        let mut form = make_form();
        form.focus_next();
        form.insert_char('A');
        assert_eq!(form.value(0), "");
        assert_eq!(form.value(1), "A");
    }

    #[test]
    fn delete_char_removes_last() {
        let mut form = make_form();
        form.insert_char('A');
        form.insert_char('B');
        form.delete_char();
        assert_eq!(form.value(0), "A");
    }

    #[test]
    fn delete_char_on_empty_is_noop() {
        let mut form = make_form();
        form.delete_char();
        assert_eq!(form.value(0), "");
    }

    // --- Value management ---

    #[test]
    fn set_value_replaces_field() {
        let mut form = make_form();
        form.insert_char('x');
        form.set_value(0, "Maternal Health");
        assert_eq!(form.value(0), "Maternal Health");
    }

    #[test]
    fn set_value_out_of_bounds_is_noop() {
        let mut form = make_form();
        form.set_value(99, "nope");
        assert_eq!(form.value(0), "");
    }

    #[test]
    fn clear_value_empties_field() {
        let mut form = make_form();
        form.set_value(1, "UNICEF");
        form.clear_value(1);
        assert_eq!(form.value(1), "");
    }

    #[test]
    fn with_value_prefills() {
        let field = FormField::with_value("Year Started", false, "1990");
        assert_eq!(field.value, "1990");
        assert!(!field.masked);
    }

    #[test]
    fn value_out_of_bounds_returns_empty() {
        let form = make_form();
        assert_eq!(form.value(99), "");
    }

    // --- Error management ---

    #[test]
    fn set_error_on_field() {
        let mut form = make_form();
        form.set_error(0, "project name is required".into());
        assert!(form.has_errors());
        assert_eq!(
            form.fields()[0].error,
            Some("project name is required".into())
        );
    }

    #[test]
    fn clear_errors_removes_all() {
        let mut form = make_form();
        form.set_error(0, "err1".into());
        form.set_error(1, "err2".into());
        assert!(form.has_errors());
        form.clear_errors();
        assert!(!form.has_errors());
    }

    #[test]
    fn has_errors_false_when_clean() {
        let form = make_form();
        assert!(!form.has_errors());
    }

    #[test]
    fn set_error_out_of_bounds_is_noop() {
        let mut form = make_form();
        form.set_error(99, "nope".into());
        assert!(!form.has_errors());
    }

    // --- Reset ---

    #[test]
    fn reset_clears_values_errors_and_focus() {
        let mut form = make_form();
        form.insert_char('X');
        form.focus_next();
        form.set_error(0, "err".into());
        form.reset();
        assert_eq!(form.value(0), "");
        assert_eq!(form.focus(), 0);
        assert!(!form.has_errors());
    }

    // --- Fields accessor ---

    #[test]
    fn fields_returns_correct_labels() {
        let form = make_form();
        let labels: Vec<&str> = form.fields().iter().map(|f| f.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Project Name", "Implementing Partner", "Contact Info"]
        );
    }

    #[test]
    fn field_required_flags() {
        let form = make_form();
        assert!(form.fields()[0].required);
        assert!(!form.fields()[1].required);
        assert!(!form.fields()[2].required);
    }

    // --- Masked rendering ---

    mod masked {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render(form: &Form) -> String {
            let backend = TestBackend::new(40, 8);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_form(form, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn masked_field_hides_value() {
            let mut form = Form::new(vec![
                FormField::new("Username", true),
                FormField::masked("Password", true),
            ]);
            form.set_value(1, "hunter2");
            let output = render(&form);
            assert!(
                !output.contains("hunter2"),
                "raw password should not render"
            );
            assert!(
                output.contains("\u{2022}\u{2022}\u{2022}"),
                "bullets should render"
            );
        }

        #[test]
        fn unmasked_field_shows_value() {
            let mut form = Form::new(vec![FormField::new("Username", true)]);
            form.set_value(0, "admin");
            let output = render(&form);
            assert!(output.contains("admin"));
        }
    }
}
