//! Entry screen — the project record form and its cascading
//! province/district selector.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{
    Currency, FundingPartner, ProjectRecord, SelectionState, ValidationError, geo,
    parse_last_modified, parse_total_value, parse_year,
};
use crate::tui::action::Action;
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::tui::widgets::picker::{PickerState, draw_picker};

/// Field index for the project name.
const NAME: usize = 0;
/// Field index for the implementing partner.
const IMPLEMENTING_PARTNER: usize = 1;
/// Field index for the total project value.
const TOTAL_VALUE: usize = 2;
/// Field index for the starting year.
const YEAR_STARTED: usize = 3;
/// Field index for the estimated ending year.
const YEAR_ENDING: usize = 4;
/// Field index for free-text notes.
const NOTES: usize = 5;
/// Field index for the project URL.
const URL: usize = 6;
/// Field index for contact info.
const CONTACT: usize = 7;
/// Field index for the last-modified date.
const LAST_MODIFIED: usize = 8;

/// Outcome of the most recent submission, shown inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The record was accepted by the remote service.
    Success,
    /// The submission failed; the message is shown verbatim.
    Failed(String),
}

/// Which picker overlay is open, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Overlay {
    /// The province multi-select.
    Provinces(PickerState),
    /// The district cascade for one selected province.
    Districts {
        province: String,
        picker: PickerState,
    },
}

/// State for the entry screen.
#[derive(Debug, Clone)]
pub struct EntryState {
    form: Form,
    partner: FundingPartner,
    currency: Currency,
    selection: SelectionState,
    overlay: Option<Overlay>,
    general_error: Option<String>,
    status: Option<SubmitStatus>,
}

impl Default for EntryState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryState {
    /// Creates a fresh form: empty text fields, zero value, minimum years,
    /// today's date, nothing selected.
    pub fn new() -> Self {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        let form = Form::new(vec![
            FormField::new("Project Name", true),
            FormField::new("Implementing Partner", false),
            FormField::with_value("Total Value", false, "0.00"),
            FormField::with_value("Year Started", false, "1990"),
            FormField::with_value("Year Ending (Estimate)", false, "1990"),
            FormField::new("Notes", false),
            FormField::new("URL", false),
            FormField::new("Contact Info", false),
            FormField::with_value("Last Modified (YYYY-MM-DD)", false, today),
        ]);

        Self {
            form,
            partner: FundingPartner::default(),
            currency: Currency::default(),
            selection: SelectionState::new(),
            overlay: None,
            general_error: None,
            status: None,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.overlay.is_some() {
            self.handle_overlay_key(key);
            return Action::None;
        }

        // Alt+F/C cycle partner/currency forward; Shift+Alt reverses.
        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('f') => {
                    self.partner = cycle(FundingPartner::all(), self.partner, true);
                    return Action::None;
                }
                KeyCode::Char('c') => {
                    self.currency = cycle(Currency::all(), self.currency, true);
                    return Action::None;
                }
                KeyCode::Char('p') => {
                    self.open_province_picker();
                    return Action::None;
                }
                _ => {}
            }
        }
        const ALT_SHIFT: KeyModifiers = KeyModifiers::ALT.union(KeyModifiers::SHIFT);
        if key.modifiers == ALT_SHIFT {
            match key.code {
                KeyCode::Char('F') => {
                    self.partner = cycle(FundingPartner::all(), self.partner, false);
                    return Action::None;
                }
                KeyCode::Char('C') => {
                    self.currency = cycle(Currency::all(), self.currency, false);
                    return Action::None;
                }
                _ => {}
            }
        }
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('n') {
            return Action::ResetForm;
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Esc => Action::Logout,
            KeyCode::Enter => self.submit(),
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the chosen funding partner.
    pub fn partner(&self) -> FundingPartner {
        self.partner
    }

    /// Returns the chosen currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the province/district selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns the error not tied to any single field, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Returns the outcome of the last submission, if any.
    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }

    /// Records a submission outcome for display.
    ///
    /// Field values are left untouched either way; only an explicit reset
    /// clears the form.
    pub fn set_status(&mut self, status: SubmitStatus) {
        self.status = Some(status);
    }

    /// Returns `true` while a picker overlay is open.
    pub fn picker_open(&self) -> bool {
        self.overlay.is_some()
    }

    /// Resets everything to [`EntryState::new`]: every field back to its
    /// default and every province's sub-state discarded.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn open_province_picker(&mut self) {
        let options = geo::provinces().iter().map(|p| p.to_string()).collect();
        self.overlay = Some(Overlay::Provinces(PickerState::new("Provinces", options)));
    }

    fn open_district_picker(&mut self, province: &str) {
        let mut options = vec![format!("All districts in {province}")];
        options.extend(geo::districts_of(province).iter().map(|d| d.to_string()));
        self.overlay = Some(Overlay::Districts {
            province: province.to_string(),
            picker: PickerState::new(format!("Districts in {province}"), options),
        });
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };
        match overlay {
            Overlay::Provinces(picker) => match key.code {
                KeyCode::Up => picker.move_up(),
                KeyCode::Down => picker.move_down(),
                KeyCode::Char(' ') => {
                    if let Some(province) = picker.current().map(str::to_string) {
                        self.selection.toggle_province(&province);
                    }
                }
                KeyCode::Enter => {
                    if let Some(province) = picker.current().map(str::to_string)
                        && self.selection.is_selected(&province)
                    {
                        self.open_district_picker(&province);
                    }
                }
                KeyCode::Esc => self.overlay = None,
                _ => {}
            },
            Overlay::Districts { province, picker } => match key.code {
                KeyCode::Up => picker.move_up(),
                KeyCode::Down => picker.move_down(),
                KeyCode::Char(' ') => {
                    let province = province.clone();
                    if picker.cursor() == 0 {
                        self.selection.toggle_all_districts(&province);
                    } else if let Some(district) = picker.current().map(str::to_string) {
                        self.selection.toggle_district(&province, &district);
                    }
                }
                // Both return to the province list.
                KeyCode::Esc | KeyCode::Enter => self.open_province_picker(),
                _ => {}
            },
        }
    }

    /// Validates all fields and builds the submission snapshot.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.general_error = None;
        self.status = None;

        if self.form.value(NAME).is_empty() {
            self.form
                .set_error(NAME, ValidationError::EmptyName.to_string());
        }
        let total_value = parse_total_value(self.form.value(TOTAL_VALUE))
            .map_err(|e| self.form.set_error(TOTAL_VALUE, e.to_string()))
            .ok();
        let year_started = parse_year(self.form.value(YEAR_STARTED))
            .map_err(|e| self.form.set_error(YEAR_STARTED, e.to_string()))
            .ok();
        let year_ending = parse_year(self.form.value(YEAR_ENDING))
            .map_err(|e| self.form.set_error(YEAR_ENDING, e.to_string()))
            .ok();
        let last_modified = parse_last_modified(self.form.value(LAST_MODIFIED))
            .map_err(|e| self.form.set_error(LAST_MODIFIED, e.to_string()))
            .ok();
        if self.selection.is_empty() {
            self.general_error = Some(ValidationError::NoProvince.to_string());
        }

        if self.form.has_errors() || self.general_error.is_some() {
            return Action::None;
        }
        let (Some(total_value), Some(year_started), Some(year_ending), Some(last_modified)) =
            (total_value, year_started, year_ending, last_modified)
        else {
            return Action::None;
        };

        Action::Submit(ProjectRecord {
            name: self.form.value(NAME).to_string(),
            funding_partner: self.partner,
            implementing_partner: self.form.value(IMPLEMENTING_PARTNER).to_string(),
            currency: self.currency,
            total_value,
            year_started,
            year_ending,
            notes: self.form.value(NOTES).to_string(),
            url: self.form.value(URL).to_string(),
            contact: self.form.value(CONTACT).to_string(),
            last_modified,
            provinces: self.selection.selected_provinces().to_vec(),
            districts: self.selection.selected_districts(),
        })
    }
}

/// Cycles through a slice to find the next or previous element.
fn cycle<T: PartialEq + Copy>(items: &[T], current: T, forward: bool) -> T {
    let pos = items.iter().position(|&x| x == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}

/// Renders the entry screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_entry(state: &EntryState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Project Submission ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_area, form_area, summary_area, error_area, status_area, _spacer, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(27),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let header = Line::from(vec![
        Span::styled(
            format!("Funding Partner: {}", state.partner()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Currency: {}", state.currency()),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), header_area);

    draw_form(state.form(), frame, form_area);

    let provinces = state.selection().selected_provinces().join(", ");
    let districts = state.selection().selected_districts().join(", ");
    let summary = vec![
        Line::from(Span::styled(
            format!("Provinces: {provinces}"),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Districts: {districts}"),
            Style::default().fg(Color::White),
        )),
    ];
    frame.render_widget(Paragraph::new(summary), summary_area);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
        frame.render_widget(error, error_area);
    }

    match state.status() {
        Some(SubmitStatus::Success) => {
            let line = Paragraph::new(Span::styled(
                "Project submitted successfully. Ctrl+n to start another entry.",
                Style::default().fg(Color::Green),
            ));
            frame.render_widget(line, status_area);
        }
        Some(SubmitStatus::Failed(msg)) => {
            let line = Paragraph::new(Span::styled(
                msg.as_str(),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(line, status_area);
        }
        None => {}
    }

    let footer = Paragraph::new(Line::from(
        "Tab: next  Alt+f/c: partner/currency  Alt+p: provinces  Enter: submit  Ctrl+n: reset  Esc: log out",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    match &state.overlay {
        Some(Overlay::Provinces(picker)) => {
            let checked: Vec<bool> = picker
                .options()
                .iter()
                .map(|p| state.selection().is_selected(p))
                .collect();
            draw_picker(picker, &checked, frame, inner);
        }
        Some(Overlay::Districts { province, picker }) => {
            let checked: Vec<bool> = picker
                .options()
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    if i == 0 {
                        state.selection().all_districts_on(province)
                    } else {
                        state.selection().is_district_picked(province, option)
                    }
                })
                .collect();
            draw_picker(picker, &checked, frame, inner);
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn alt_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::ALT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn shift_alt_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::ALT | KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(state: &mut EntryState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn clear_field(state: &mut EntryState) {
        for _ in 0..12 {
            state.handle_key(press(KeyCode::Backspace));
        }
    }

    /// Types a name and selects Gaza so the form passes validation.
    fn fill_minimum(state: &mut EntryState) {
        type_string(state, "Maternal Health");
        state.handle_key(alt_press(KeyCode::Char('p')));
        move_cursor_to(state, "Gaza");
        state.handle_key(press(KeyCode::Char(' ')));
        state.handle_key(press(KeyCode::Esc));
    }

    /// Moves the open picker's cursor to the given option.
    fn move_cursor_to(state: &mut EntryState, target: &str) {
        for _ in 0..40 {
            let at_target = match &state.overlay {
                Some(Overlay::Provinces(p)) => p.current() == Some(target),
                Some(Overlay::Districts { picker, .. }) => picker.current() == Some(target),
                None => panic!("no picker open"),
            };
            if at_target {
                return;
            }
            state.handle_key(press(KeyCode::Down));
        }
        panic!("option {target} not found in picker");
    }

    mod construction {
        use super::*;

        #[test]
        fn defaults() {
            let state = EntryState::new();
            assert_eq!(state.form().value(NAME), "");
            assert_eq!(state.form().value(IMPLEMENTING_PARTNER), "");
            assert_eq!(state.form().value(TOTAL_VALUE), "0.00");
            assert_eq!(state.form().value(YEAR_STARTED), "1990");
            assert_eq!(state.form().value(YEAR_ENDING), "1990");
            assert_eq!(state.form().value(NOTES), "");
            assert_eq!(state.form().value(URL), "");
            assert_eq!(state.form().value(CONTACT), "");
            let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
            assert_eq!(state.form().value(LAST_MODIFIED), today);
            assert_eq!(state.partner(), FundingPartner::ArabBank);
            assert_eq!(state.currency(), Currency::Eur);
            assert!(state.selection().is_empty());
            assert!(!state.picker_open());
            assert_eq!(state.status(), None);
            assert_eq!(state.general_error(), None);
        }
    }

    mod typing {
        use super::*;

        #[test]
        fn chars_fill_focused_field() {
            let mut state = EntryState::new();
            type_string(&mut state, "Maternal Health");
            assert_eq!(state.form().value(NAME), "Maternal Health");
        }

        #[test]
        fn tab_cycles_through_all_fields() {
            let mut state = EntryState::new();
            for expected in [
                IMPLEMENTING_PARTNER,
                TOTAL_VALUE,
                YEAR_STARTED,
                YEAR_ENDING,
                NOTES,
                URL,
                CONTACT,
                LAST_MODIFIED,
                NAME,
            ] {
                state.handle_key(press(KeyCode::Tab));
                assert_eq!(state.form().focus(), expected);
            }
        }

        #[test]
        fn backtab_cycles_backward() {
            let mut state = EntryState::new();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.form().focus(), LAST_MODIFIED);
        }

        #[test]
        fn backspace_deletes() {
            let mut state = EntryState::new();
            type_string(&mut state, "ab");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.form().value(NAME), "a");
        }
    }

    mod cycling {
        use super::*;

        #[test]
        fn alt_f_cycles_partner_forward() {
            let mut state = EntryState::new();
            state.handle_key(alt_press(KeyCode::Char('f')));
            assert_eq!(state.partner(), FundingPartner::GatesFoundation);
        }

        #[test]
        fn shift_alt_f_cycles_partner_backward() {
            let mut state = EntryState::new();
            state.handle_key(shift_alt_press(KeyCode::Char('F')));
            assert_eq!(state.partner(), FundingPartner::WorldBank);
        }

        #[test]
        fn partner_wraps_forward() {
            let mut state = EntryState::new();
            for _ in 0..FundingPartner::all().len() {
                state.handle_key(alt_press(KeyCode::Char('f')));
            }
            assert_eq!(state.partner(), FundingPartner::ArabBank);
        }

        #[test]
        fn alt_c_cycles_currency_forward() {
            let mut state = EntryState::new();
            state.handle_key(alt_press(KeyCode::Char('c')));
            assert_eq!(state.currency(), Currency::Cad);
        }

        #[test]
        fn shift_alt_c_cycles_currency_backward() {
            let mut state = EntryState::new();
            state.handle_key(shift_alt_press(KeyCode::Char('C')));
            assert_eq!(state.currency(), Currency::Zar);
        }

        #[test]
        fn plain_f_and_c_type_into_fields() {
            let mut state = EntryState::new();
            type_string(&mut state, "fc");
            assert_eq!(state.form().value(NAME), "fc");
            assert_eq!(state.partner(), FundingPartner::ArabBank);
            assert_eq!(state.currency(), Currency::Eur);
        }
    }

    mod province_picker {
        use super::*;

        #[test]
        fn alt_p_opens_picker() {
            let mut state = EntryState::new();
            state.handle_key(alt_press(KeyCode::Char('p')));
            assert!(state.picker_open());
        }

        #[test]
        fn esc_closes_picker_without_logout() {
            let mut state = EntryState::new();
            state.handle_key(alt_press(KeyCode::Char('p')));
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::None);
            assert!(!state.picker_open());
        }

        #[test]
        fn space_toggles_province() {
            let mut state = EntryState::new();
            state.handle_key(alt_press(KeyCode::Char('p')));
            move_cursor_to(&mut state, "Gaza");
            state.handle_key(press(KeyCode::Char(' ')));
            assert!(state.selection().is_selected("Gaza"));
            state.handle_key(press(KeyCode::Char(' ')));
            assert!(!state.selection().is_selected("Gaza"));
        }

        #[test]
        fn typing_is_captured_by_open_picker() {
            let mut state = EntryState::new();
            state.handle_key(alt_press(KeyCode::Char('p')));
            state.handle_key(press(KeyCode::Char('x')));
            state.handle_key(press(KeyCode::Esc));
            assert_eq!(state.form().value(NAME), "");
        }

        #[test]
        fn enter_on_unselected_province_does_not_cascade() {
            let mut state = EntryState::new();
            state.handle_key(alt_press(KeyCode::Char('p')));
            move_cursor_to(&mut state, "Gaza");
            state.handle_key(press(KeyCode::Enter));
            assert!(matches!(state.overlay, Some(Overlay::Provinces(_))));
        }
    }

    mod district_picker {
        use super::*;

        fn open_gaza_districts(state: &mut EntryState) {
            state.handle_key(alt_press(KeyCode::Char('p')));
            move_cursor_to(state, "Gaza");
            state.handle_key(press(KeyCode::Char(' ')));
            state.handle_key(press(KeyCode::Enter));
        }

        #[test]
        fn enter_on_selected_province_opens_districts() {
            let mut state = EntryState::new();
            open_gaza_districts(&mut state);
            match &state.overlay {
                Some(Overlay::Districts { province, picker }) => {
                    assert_eq!(province, "Gaza");
                    assert_eq!(picker.options()[0], "All districts in Gaza");
                    assert_eq!(picker.options()[1], "Bilene");
                }
                other => panic!("expected district picker, got {other:?}"),
            }
        }

        #[test]
        fn space_on_first_row_toggles_all_districts() {
            let mut state = EntryState::new();
            open_gaza_districts(&mut state);
            state.handle_key(press(KeyCode::Char(' ')));
            assert!(state.selection().all_districts_on("Gaza"));
            state.handle_key(press(KeyCode::Char(' ')));
            assert!(!state.selection().all_districts_on("Gaza"));
        }

        #[test]
        fn space_on_district_row_toggles_pick() {
            let mut state = EntryState::new();
            open_gaza_districts(&mut state);
            move_cursor_to(&mut state, "Chibuto");
            state.handle_key(press(KeyCode::Char(' ')));
            assert!(state.selection().is_district_picked("Gaza", "Chibuto"));
            assert_eq!(state.selection().selected_districts(), ["Chibuto"]);
        }

        #[test]
        fn esc_returns_to_province_picker() {
            let mut state = EntryState::new();
            open_gaza_districts(&mut state);
            state.handle_key(press(KeyCode::Esc));
            assert!(matches!(state.overlay, Some(Overlay::Provinces(_))));
        }

        #[test]
        fn deselecting_province_in_picker_discards_picks() {
            let mut state = EntryState::new();
            open_gaza_districts(&mut state);
            move_cursor_to(&mut state, "Chibuto");
            state.handle_key(press(KeyCode::Char(' ')));
            state.handle_key(press(KeyCode::Esc));

            // Back in the province picker: deselect, reselect.
            move_cursor_to(&mut state, "Gaza");
            state.handle_key(press(KeyCode::Char(' ')));
            state.handle_key(press(KeyCode::Char(' ')));

            assert!(state.selection().is_selected("Gaza"));
            assert!(!state.selection().is_district_picked("Gaza", "Chibuto"));
            assert!(state.selection().selected_districts().is_empty());
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn valid_form_returns_submit_record() {
            let mut state = EntryState::new();
            fill_minimum(&mut state);

            // Total Value
            state.form.set_focus(TOTAL_VALUE);
            clear_field(&mut state);
            type_string(&mut state, "1000.50");
            // Years
            state.form.set_focus(YEAR_STARTED);
            clear_field(&mut state);
            type_string(&mut state, "2023");
            state.form.set_focus(YEAR_ENDING);
            clear_field(&mut state);
            type_string(&mut state, "2025");

            let action = state.handle_key(press(KeyCode::Enter));
            match action {
                Action::Submit(record) => {
                    assert_eq!(record.name, "Maternal Health");
                    assert_eq!(record.funding_partner, FundingPartner::ArabBank);
                    assert_eq!(record.currency, Currency::Eur);
                    assert_eq!(record.total_value, 1000.50);
                    assert_eq!(record.year_started, 2023);
                    assert_eq!(record.year_ending, 2025);
                    assert_eq!(record.provinces, ["Gaza"]);
                    assert!(record.districts.is_empty());
                    assert_eq!(
                        record.last_modified,
                        Local::now().date_naive()
                    );
                }
                other => panic!("expected Submit, got {other:?}"),
            }
        }

        #[test]
        fn picked_districts_flow_into_record() {
            let mut state = EntryState::new();
            type_string(&mut state, "Maternal Health");
            state.handle_key(alt_press(KeyCode::Char('p')));
            move_cursor_to(&mut state, "Gaza");
            state.handle_key(press(KeyCode::Char(' ')));
            state.handle_key(press(KeyCode::Enter));
            move_cursor_to(&mut state, "Chibuto");
            state.handle_key(press(KeyCode::Char(' ')));
            state.handle_key(press(KeyCode::Esc));
            state.handle_key(press(KeyCode::Esc));

            let action = state.handle_key(press(KeyCode::Enter));
            match action {
                Action::Submit(record) => {
                    assert_eq!(record.provinces, ["Gaza"]);
                    assert_eq!(record.districts, ["Chibuto"]);
                }
                other => panic!("expected Submit, got {other:?}"),
            }
        }

        #[test]
        fn empty_name_blocks_submit() {
            let mut state = EntryState::new();
            state.handle_key(alt_press(KeyCode::Char('p')));
            move_cursor_to(&mut state, "Gaza");
            state.handle_key(press(KeyCode::Char(' ')));
            state.handle_key(press(KeyCode::Esc));

            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert!(state.form().fields()[NAME].error.is_some());
        }

        #[test]
        fn no_province_blocks_submit() {
            let mut state = EntryState::new();
            type_string(&mut state, "Maternal Health");
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert_eq!(
                state.general_error(),
                Some("at least one province is required")
            );
        }

        #[test]
        fn bad_year_blocks_submit() {
            let mut state = EntryState::new();
            fill_minimum(&mut state);
            state.form.set_focus(YEAR_STARTED);
            clear_field(&mut state);
            type_string(&mut state, "1980");

            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert!(state.form().fields()[YEAR_STARTED].error.is_some());
        }

        #[test]
        fn negative_value_blocks_submit() {
            let mut state = EntryState::new();
            fill_minimum(&mut state);
            state.form.set_focus(TOTAL_VALUE);
            clear_field(&mut state);
            type_string(&mut state, "-5");

            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert!(state.form().fields()[TOTAL_VALUE].error.is_some());
        }

        #[test]
        fn bad_date_blocks_submit() {
            let mut state = EntryState::new();
            fill_minimum(&mut state);
            state.form.set_focus(LAST_MODIFIED);
            clear_field(&mut state);
            type_string(&mut state, "yesterday");

            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert!(state.form().fields()[LAST_MODIFIED].error.is_some());
        }

        #[test]
        fn errors_clear_on_successful_resubmit() {
            let mut state = EntryState::new();
            state.handle_key(press(KeyCode::Enter));
            assert!(state.form().has_errors());

            fill_minimum(&mut state);
            let action = state.handle_key(press(KeyCode::Enter));
            assert!(matches!(action, Action::Submit(_)));
            assert!(!state.form().has_errors());
            assert_eq!(state.general_error(), None);
        }

        #[test]
        fn submit_attempt_clears_previous_status() {
            let mut state = EntryState::new();
            state.set_status(SubmitStatus::Failed("submission rejected (422)".into()));
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.status(), None);
        }
    }

    mod status {
        use super::*;

        #[test]
        fn failure_leaves_fields_unchanged() {
            let mut state = EntryState::new();
            fill_minimum(&mut state);
            state.set_status(SubmitStatus::Failed(
                "submission rejected (422): bad request".into(),
            ));
            assert_eq!(state.form().value(NAME), "Maternal Health");
            assert_eq!(state.selection().selected_provinces(), ["Gaza"]);
            assert_eq!(
                state.status(),
                Some(&SubmitStatus::Failed(
                    "submission rejected (422): bad request".into()
                ))
            );
        }

        #[test]
        fn success_leaves_fields_for_explicit_reset() {
            let mut state = EntryState::new();
            fill_minimum(&mut state);
            state.set_status(SubmitStatus::Success);
            assert_eq!(state.form().value(NAME), "Maternal Health");
            assert_eq!(state.status(), Some(&SubmitStatus::Success));
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn ctrl_n_returns_reset_action() {
            let mut state = EntryState::new();
            let action = state.handle_key(ctrl_press(KeyCode::Char('n')));
            assert_eq!(action, Action::ResetForm);
        }

        #[test]
        fn reset_restores_every_default() {
            let mut state = EntryState::new();
            type_string(&mut state, "Maternal Health");
            state.handle_key(alt_press(KeyCode::Char('f')));
            state.handle_key(alt_press(KeyCode::Char('c')));
            state.handle_key(alt_press(KeyCode::Char('p')));
            move_cursor_to(&mut state, "Gaza");
            state.handle_key(press(KeyCode::Char(' ')));
            state.handle_key(press(KeyCode::Enter));
            state.handle_key(press(KeyCode::Char(' '))); // all districts on
            state.handle_key(press(KeyCode::Esc));
            state.handle_key(press(KeyCode::Esc));
            state.set_status(SubmitStatus::Success);

            state.reset();

            let fresh = EntryState::new();
            for i in [
                NAME,
                IMPLEMENTING_PARTNER,
                TOTAL_VALUE,
                YEAR_STARTED,
                YEAR_ENDING,
                NOTES,
                URL,
                CONTACT,
                LAST_MODIFIED,
            ] {
                assert_eq!(state.form().value(i), fresh.form().value(i));
            }
            assert_eq!(state.partner(), FundingPartner::ArabBank);
            assert_eq!(state.currency(), Currency::Eur);
            assert!(state.selection().is_empty());
            assert!(!state.selection().all_districts_on("Gaza"));
            assert_eq!(state.status(), None);
            assert_eq!(state.general_error(), None);
        }

        #[test]
        fn reset_then_reselect_has_no_stale_picks() {
            let mut state = EntryState::new();
            state.handle_key(alt_press(KeyCode::Char('p')));
            move_cursor_to(&mut state, "Gaza");
            state.handle_key(press(KeyCode::Char(' ')));
            state.handle_key(press(KeyCode::Enter));
            move_cursor_to(&mut state, "Chibuto");
            state.handle_key(press(KeyCode::Char(' ')));
            state.handle_key(press(KeyCode::Esc));
            state.handle_key(press(KeyCode::Esc));

            state.reset();

            state.handle_key(alt_press(KeyCode::Char('p')));
            move_cursor_to(&mut state, "Gaza");
            state.handle_key(press(KeyCode::Char(' ')));
            assert!(state.selection().selected_districts().is_empty());
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn esc_logs_out() {
            let mut state = EntryState::new();
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Logout);
        }

        #[test]
        fn logout_action_does_not_touch_fields() {
            let mut state = EntryState::new();
            type_string(&mut state, "Maternal Health");
            state.handle_key(press(KeyCode::Esc));
            assert_eq!(state.form().value(NAME), "Maternal Health");
        }
    }

    mod rendering {
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

        fn render(state: &EntryState) -> String {
            let backend = TestBackend::new(100, 45);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_entry(state, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn shows_fields_and_defaults() {
            let output = render(&EntryState::new());
            assert!(output.contains("Project Submission"));
            assert!(output.contains("Project Name"));
            assert!(output.contains("Year Ending (Estimate)"));
            assert!(output.contains("Funding Partner: Arab Bank"));
            assert!(output.contains("Currency: EUR"));
        }

        #[test]
        fn shows_selection_summary() {
            let mut state = EntryState::new();
            state.selection.add_province("Gaza");
            state.selection.toggle_district("Gaza", "Chibuto");
            let output = render(&state);
            assert!(output.contains("Provinces: Gaza"));
            assert!(output.contains("Districts: Chibuto"));
        }

        #[test]
        fn shows_success_banner() {
            let mut state = EntryState::new();
            state.set_status(SubmitStatus::Success);
            let output = render(&state);
            assert!(output.contains("submitted successfully"));
        }

        #[test]
        fn shows_failure_verbatim() {
            let mut state = EntryState::new();
            state.set_status(SubmitStatus::Failed(
                "submission rejected (422): bad request".into(),
            ));
            let output = render(&state);
            assert!(output.contains("submission rejected (422): bad request"));
        }

        #[test]
        fn open_picker_renders_on_top() {
            let mut state = EntryState::new();
            state.handle_key(alt_press(KeyCode::Char('p')));
            let output = render(&state);
            assert!(output.contains("[ ] Cabo Delgado"));
            assert!(output.contains("[ ] Zambezia"));
        }
    }
}
