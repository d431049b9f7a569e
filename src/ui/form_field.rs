//! Reusable form field widgets for the job-plan wizard.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use crate::model::parse_time;

/// A form field widget that can handle different input types
pub enum FormField {
    /// Single-line text input
    TextInput {
        value: String,
        cursor_pos: usize,
        placeholder: String,
    },
    /// Multi-line text input using tui-textarea
    TextArea {
        textarea: Box<TextArea<'static>>,
        placeholder: String,
    },
    /// Numeric input; integer-only when `integer` is set
    NumberInput {
        value: String,
        cursor_pos: usize,
        placeholder: String,
        integer: bool,
    },
    /// Time-of-day input (HH:MM)
    TimeInput { value: String, cursor_pos: usize },
    /// Date input (YYYY-MM-DD format)
    DateInput { value: String, cursor_pos: usize },
    /// Single choice from predefined options
    EnumSelect {
        options: Vec<String>,
        selected: usize,
        list_state: ListState,
    },
    /// Boolean toggle
    Toggle {
        value: bool,
        true_label: String,
        false_label: String,
    },
    /// Any-of selection from predefined options
    MultiSelect {
        options: Vec<String>,
        cursor: usize,
        selected: BTreeSet<usize>,
    },
    /// Week-number grid, weeks 1-26
    WeekSelect { cursor: u8, selected: BTreeSet<u8> },
}

impl FormField {
    pub fn text(placeholder: impl Into<String>) -> Self {
        FormField::TextInput {
            value: String::new(),
            cursor_pos: 0,
            placeholder: placeholder.into(),
        }
    }

    pub fn text_area(placeholder: impl Into<String>) -> Self {
        FormField::TextArea {
            textarea: Box::new(TextArea::default()),
            placeholder: placeholder.into(),
        }
    }

    pub fn number(placeholder: impl Into<String>) -> Self {
        FormField::NumberInput {
            value: String::new(),
            cursor_pos: 0,
            placeholder: placeholder.into(),
            integer: false,
        }
    }

    pub fn integer(placeholder: impl Into<String>) -> Self {
        FormField::NumberInput {
            value: String::new(),
            cursor_pos: 0,
            placeholder: placeholder.into(),
            integer: true,
        }
    }

    pub fn time() -> Self {
        FormField::TimeInput {
            value: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn date() -> Self {
        FormField::DateInput {
            value: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn select(options: Vec<String>, default_idx: usize) -> Self {
        let selected = default_idx.min(options.len().saturating_sub(1));
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        FormField::EnumSelect {
            options,
            selected,
            list_state,
        }
    }

    pub fn toggle(true_label: impl Into<String>, false_label: impl Into<String>) -> Self {
        FormField::Toggle {
            value: false,
            true_label: true_label.into(),
            false_label: false_label.into(),
        }
    }

    pub fn multi(options: Vec<String>) -> Self {
        FormField::MultiSelect {
            options,
            cursor: 0,
            selected: BTreeSet::new(),
        }
    }

    pub fn weeks() -> Self {
        FormField::WeekSelect {
            cursor: 1,
            selected: BTreeSet::new(),
        }
    }

    /// Get the current value as a string
    pub fn value(&self) -> String {
        match self {
            FormField::TextInput { value, .. }
            | FormField::NumberInput { value, .. }
            | FormField::TimeInput { value, .. }
            | FormField::DateInput { value, .. } => value.clone(),
            FormField::TextArea { textarea, .. } => textarea.lines().join("\n"),
            FormField::EnumSelect {
                options, selected, ..
            } => options.get(*selected).cloned().unwrap_or_default(),
            FormField::Toggle { value, .. } => value.to_string(),
            FormField::MultiSelect {
                options, selected, ..
            } => selected
                .iter()
                .filter_map(|i| options.get(*i).cloned())
                .collect::<Vec<_>>()
                .join(", "),
            FormField::WeekSelect { selected, .. } => selected
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Set the value from a string
    pub fn set_value(&mut self, new_value: &str) {
        match self {
            FormField::TextInput {
                value, cursor_pos, ..
            }
            | FormField::NumberInput {
                value, cursor_pos, ..
            }
            | FormField::TimeInput {
                value, cursor_pos, ..
            }
            | FormField::DateInput {
                value, cursor_pos, ..
            } => {
                *value = new_value.to_string();
                *cursor_pos = value.len();
            }
            FormField::TextArea { textarea, .. } => {
                textarea.select_all();
                textarea.cut();
                textarea.insert_str(new_value);
            }
            FormField::EnumSelect {
                options,
                selected,
                list_state,
            } => {
                if let Some(idx) = options.iter().position(|o| o == new_value) {
                    *selected = idx;
                    list_state.select(Some(idx));
                }
            }
            FormField::Toggle { value, .. } => {
                *value = new_value == "true" || new_value == "yes";
            }
            FormField::MultiSelect { .. } | FormField::WeekSelect { .. } => {}
        }
    }

    /// Typed accessors for the parse-on-read fields.
    pub fn number_value(&self) -> Option<f64> {
        match self {
            FormField::NumberInput { value, .. } => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn int_value(&self) -> Option<u32> {
        match self {
            FormField::NumberInput { value, .. } => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn time_value(&self) -> Option<NaiveTime> {
        match self {
            FormField::TimeInput { value, .. } => parse_time(value).ok(),
            _ => None,
        }
    }

    pub fn date_value(&self) -> Option<NaiveDate> {
        match self {
            FormField::DateInput { value, .. } => {
                NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
            }
            _ => None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            FormField::EnumSelect { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, FormField::Toggle { value: true, .. })
    }

    pub fn selected_options(&self) -> Vec<String> {
        match self {
            FormField::MultiSelect {
                options, selected, ..
            } => selected
                .iter()
                .filter_map(|i| options.get(*i).cloned())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn selected_weeks(&self) -> BTreeSet<u8> {
        match self {
            FormField::WeekSelect { selected, .. } => selected.clone(),
            _ => BTreeSet::new(),
        }
    }

    /// Check if the field value is valid (non-empty for required fields)
    pub fn is_valid(&self, required: bool) -> bool {
        if !required {
            return true;
        }
        match self {
            FormField::TextInput { value, .. } => !value.trim().is_empty(),
            FormField::TextArea { textarea, .. } => {
                !textarea.lines().iter().all(|l| l.trim().is_empty())
            }
            FormField::NumberInput { value, .. } => value.trim().parse::<f64>().is_ok(),
            FormField::TimeInput { .. } => self.time_value().is_some(),
            FormField::DateInput { .. } => self.date_value().is_some(),
            FormField::EnumSelect { options, .. } => !options.is_empty(),
            FormField::Toggle { .. } => true,
            FormField::MultiSelect { selected, .. } => !selected.is_empty(),
            FormField::WeekSelect { selected, .. } => !selected.is_empty(),
        }
    }

    /// Reset to the empty/default state.
    pub fn clear(&mut self) {
        match self {
            FormField::TextInput {
                value, cursor_pos, ..
            }
            | FormField::NumberInput {
                value, cursor_pos, ..
            }
            | FormField::TimeInput {
                value, cursor_pos, ..
            }
            | FormField::DateInput {
                value, cursor_pos, ..
            } => {
                value.clear();
                *cursor_pos = 0;
            }
            FormField::TextArea { textarea, .. } => {
                textarea.select_all();
                textarea.cut();
            }
            FormField::EnumSelect {
                selected,
                list_state,
                ..
            } => {
                *selected = 0;
                list_state.select(Some(0));
            }
            FormField::Toggle { value, .. } => *value = false,
            FormField::MultiSelect {
                cursor, selected, ..
            } => {
                *cursor = 0;
                selected.clear();
            }
            FormField::WeekSelect { cursor, selected } => {
                *cursor = 1;
                selected.clear();
            }
        }
    }

    /// Handle a key event, returns true if the key was consumed
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self {
            FormField::TextInput {
                value, cursor_pos, ..
            } => edit_line(value, cursor_pos, key, |_| true, None),
            FormField::TextArea { textarea, .. } => {
                // TextArea handles its own key events
                textarea.input(crossterm::event::KeyEvent::new(
                    key,
                    crossterm::event::KeyModifiers::NONE,
                ));
                true
            }
            FormField::NumberInput {
                value,
                cursor_pos,
                integer,
                ..
            } => {
                let allow_dot = !*integer;
                edit_line(
                    value,
                    cursor_pos,
                    key,
                    move |c| c.is_ascii_digit() || (allow_dot && c == '.'),
                    None,
                )
            }
            FormField::TimeInput { value, cursor_pos } => edit_line(
                value,
                cursor_pos,
                key,
                |c| c.is_ascii_digit() || c == ':',
                Some(5),
            ),
            FormField::DateInput { value, cursor_pos } => edit_line(
                value,
                cursor_pos,
                key,
                |c| c.is_ascii_digit() || c == '-',
                Some(10),
            ),
            FormField::EnumSelect {
                options,
                selected,
                list_state,
            } => match key {
                KeyCode::Up => {
                    if *selected > 0 {
                        *selected -= 1;
                        list_state.select(Some(*selected));
                    }
                    true
                }
                KeyCode::Down => {
                    if *selected < options.len().saturating_sub(1) {
                        *selected += 1;
                        list_state.select(Some(*selected));
                    }
                    true
                }
                _ => false,
            },
            FormField::Toggle { value, .. } => match key {
                KeyCode::Char(' ') => {
                    *value = !*value;
                    true
                }
                KeyCode::Left => {
                    *value = false;
                    true
                }
                KeyCode::Right => {
                    *value = true;
                    true
                }
                _ => false,
            },
            FormField::MultiSelect {
                options,
                cursor,
                selected,
            } => match key {
                KeyCode::Up => {
                    if *cursor > 0 {
                        *cursor -= 1;
                    }
                    true
                }
                KeyCode::Down => {
                    if *cursor < options.len().saturating_sub(1) {
                        *cursor += 1;
                    }
                    true
                }
                KeyCode::Char(' ') => {
                    if !selected.remove(cursor) {
                        selected.insert(*cursor);
                    }
                    true
                }
                _ => false,
            },
            FormField::WeekSelect { cursor, selected } => match key {
                KeyCode::Left => {
                    if *cursor > 1 {
                        *cursor -= 1;
                    }
                    true
                }
                KeyCode::Right => {
                    if *cursor < 26 {
                        *cursor += 1;
                    }
                    true
                }
                KeyCode::Up => {
                    if *cursor > 13 {
                        *cursor -= 13;
                    }
                    true
                }
                KeyCode::Down => {
                    if *cursor <= 13 {
                        *cursor = (*cursor + 13).min(26);
                    }
                    true
                }
                KeyCode::Char(' ') => {
                    if !selected.remove(cursor) {
                        selected.insert(*cursor);
                    }
                    true
                }
                _ => false,
            },
        }
    }

    /// Get the height needed to render this field
    pub fn render_height(&self) -> u16 {
        match self {
            FormField::TextInput { .. }
            | FormField::NumberInput { .. }
            | FormField::TimeInput { .. }
            | FormField::DateInput { .. }
            | FormField::Toggle { .. } => 1,
            FormField::TextArea { .. } => 4, // Multi-line gets more space
            FormField::EnumSelect { options, .. } => (options.len() as u16).min(5),
            FormField::MultiSelect { options, .. } => (options.len() as u16).min(6),
            FormField::WeekSelect { .. } => 2,
        }
    }

    /// Render the field
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        match self {
            FormField::TextInput {
                value,
                cursor_pos,
                placeholder,
            } => render_line(frame, area, value, *cursor_pos, placeholder, focused),
            FormField::NumberInput {
                value,
                cursor_pos,
                placeholder,
                ..
            } => render_line(frame, area, value, *cursor_pos, placeholder, focused),
            FormField::TimeInput { value, cursor_pos } => {
                render_line(frame, area, value, *cursor_pos, "HH:MM", focused);
            }
            FormField::DateInput { value, cursor_pos } => {
                render_line(frame, area, value, *cursor_pos, "YYYY-MM-DD", focused);
            }
            FormField::TextArea {
                textarea,
                placeholder,
            } => {
                textarea.set_cursor_line_style(Style::default());
                textarea.set_cursor_style(if focused {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                });
                if textarea.lines().iter().all(|l| l.is_empty()) && !focused {
                    textarea.set_placeholder_text(placeholder.clone());
                    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
                }
                frame.render_widget(&**textarea, area);
            }
            FormField::EnumSelect {
                options,
                selected,
                list_state,
            } => {
                let items: Vec<ListItem> = options
                    .iter()
                    .enumerate()
                    .map(|(i, opt)| {
                        let style = if i == *selected {
                            Style::default().add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::Gray)
                        };
                        ListItem::new(Span::styled(opt.clone(), style))
                    })
                    .collect();

                let list = List::new(items)
                    .highlight_style(
                        Style::default()
                            .add_modifier(Modifier::REVERSED)
                            .fg(Color::Cyan),
                    )
                    .highlight_symbol("> ");

                frame.render_stateful_widget(list, area, list_state);
            }
            FormField::Toggle {
                value,
                true_label,
                false_label,
            } => {
                let yes_style = if *value {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let no_style = if !*value {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                let line = Line::from(vec![
                    Span::styled(format!("[{true_label}]"), yes_style),
                    Span::raw(" / "),
                    Span::styled(format!("[{false_label}]"), no_style),
                ]);

                frame.render_widget(Paragraph::new(line), area);
            }
            FormField::MultiSelect {
                options,
                cursor,
                selected,
            } => {
                let items: Vec<ListItem> = options
                    .iter()
                    .enumerate()
                    .map(|(i, opt)| {
                        let marker = if selected.contains(&i) { "[x]" } else { "[ ]" };
                        let style = if focused && i == *cursor {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::Gray)
                        };
                        ListItem::new(Span::styled(format!("{marker} {opt}"), style))
                    })
                    .collect();

                frame.render_widget(List::new(items), area);
            }
            FormField::WeekSelect { cursor, selected } => {
                let mut lines = Vec::new();
                for row in [1u8..=13, 14u8..=26] {
                    let mut spans = Vec::new();
                    for week in row {
                        let style = if focused && week == *cursor {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::REVERSED)
                        } else if selected.contains(&week) {
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::DarkGray)
                        };
                        spans.push(Span::styled(format!("{week:>3}"), style));
                        spans.push(Span::raw(" "));
                    }
                    lines.push(Line::from(spans));
                }
                frame.render_widget(Paragraph::new(lines), area);
            }
        }
    }
}

/// Shared single-line editing: insert/delete at the cursor with a character
/// filter and an optional length cap.
fn edit_line(
    value: &mut String,
    cursor_pos: &mut usize,
    key: KeyCode,
    accepts: impl Fn(char) -> bool,
    max_length: Option<usize>,
) -> bool {
    match key {
        KeyCode::Char(c) if accepts(c) => {
            if max_length.map(|m| value.len() < m).unwrap_or(true) {
                value.insert(*cursor_pos, c);
                *cursor_pos += 1;
            }
            true
        }
        KeyCode::Backspace => {
            if *cursor_pos > 0 {
                *cursor_pos -= 1;
                value.remove(*cursor_pos);
            }
            true
        }
        KeyCode::Delete => {
            if *cursor_pos < value.len() {
                value.remove(*cursor_pos);
            }
            true
        }
        KeyCode::Left => {
            if *cursor_pos > 0 {
                *cursor_pos -= 1;
            }
            true
        }
        KeyCode::Right => {
            if *cursor_pos < value.len() {
                *cursor_pos += 1;
            }
            true
        }
        KeyCode::Home => {
            *cursor_pos = 0;
            true
        }
        KeyCode::End => {
            *cursor_pos = value.len();
            true
        }
        _ => false,
    }
}

fn render_line(
    frame: &mut Frame,
    area: Rect,
    value: &str,
    cursor_pos: usize,
    placeholder: &str,
    focused: bool,
) {
    let content = if value.is_empty() && !focused {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut text = value.to_string();
        if focused {
            // Show cursor position
            if cursor_pos < text.len() {
                text.insert(cursor_pos, '|');
            } else {
                text.push('|');
            }
        }
        Line::from(Span::raw(text))
    };

    let para = Paragraph::new(content).style(Style::default().fg(if focused {
        Color::White
    } else {
        Color::Gray
    }));
    frame.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_handles_chars() {
        let mut field = FormField::text("title");
        assert!(field.handle_key(KeyCode::Char('h')));
        assert!(field.handle_key(KeyCode::Char('i')));
        assert_eq!(field.value(), "hi");
    }

    #[test]
    fn test_number_input_rejects_letters() {
        let mut field = FormField::number("7.5");
        field.handle_key(KeyCode::Char('7'));
        field.handle_key(KeyCode::Char('x'));
        field.handle_key(KeyCode::Char('.'));
        field.handle_key(KeyCode::Char('5'));
        assert_eq!(field.number_value(), Some(7.5));
    }

    #[test]
    fn test_integer_input_rejects_dot() {
        let mut field = FormField::integer("10");
        field.handle_key(KeyCode::Char('1'));
        field.handle_key(KeyCode::Char('.'));
        field.handle_key(KeyCode::Char('0'));
        assert_eq!(field.int_value(), Some(10));
    }

    #[test]
    fn test_time_input_parses() {
        let mut field = FormField::time();
        for c in "20:00".chars() {
            field.handle_key(KeyCode::Char(c));
        }
        assert_eq!(field.time_value().unwrap().to_string(), "20:00:00");
    }

    #[test]
    fn test_time_input_caps_length() {
        let mut field = FormField::time();
        for c in "20:0000".chars() {
            field.handle_key(KeyCode::Char(c));
        }
        assert_eq!(field.value(), "20:00");
    }

    #[test]
    fn test_enum_select_navigation() {
        let mut field = FormField::select(
            vec!["DCC".to_string(), "SPA".to_string(), "Admin".to_string()],
            1,
        );
        assert_eq!(field.value(), "SPA");
        field.handle_key(KeyCode::Up);
        assert_eq!(field.value(), "DCC");
        field.handle_key(KeyCode::Down);
        field.handle_key(KeyCode::Down);
        assert_eq!(field.value(), "Admin");
    }

    #[test]
    fn test_multi_select_toggles() {
        let mut field = FormField::multi(vec!["Consultant".to_string(), "Clinical Fellow".to_string()]);
        field.handle_key(KeyCode::Char(' '));
        field.handle_key(KeyCode::Down);
        field.handle_key(KeyCode::Char(' '));
        assert_eq!(
            field.selected_options(),
            vec!["Consultant".to_string(), "Clinical Fellow".to_string()]
        );
        field.handle_key(KeyCode::Char(' '));
        assert_eq!(field.selected_options(), vec!["Consultant".to_string()]);
    }

    #[test]
    fn test_week_select_bounds() {
        let mut field = FormField::weeks();
        field.handle_key(KeyCode::Left); // already at week 1
        field.handle_key(KeyCode::Char(' '));
        field.handle_key(KeyCode::Down);
        field.handle_key(KeyCode::Char(' '));
        let weeks: Vec<u8> = field.selected_weeks().into_iter().collect();
        assert_eq!(weeks, vec![1, 14]);
    }

    #[test]
    fn test_clear_resets() {
        let mut field = FormField::text("x");
        field.set_value("something");
        field.clear();
        assert_eq!(field.value(), "");
        assert!(!field.is_valid(true));
    }

    #[test]
    fn test_required_validation() {
        let mut field = FormField::text("title");
        assert!(!field.is_valid(true));
        assert!(field.is_valid(false));
        field.set_value("  "); // whitespace only
        assert!(!field.is_valid(true));
        field.set_value("Outpatient clinic");
        assert!(field.is_valid(true));
    }
}
