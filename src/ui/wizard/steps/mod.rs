//! Per-step rendering for the wizard.

mod activities;
mod basic_info;
mod finish;
mod objectives;
mod resources;
mod summary;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::ActivityCategory;

use super::{WizardScreen, WizardStep};

/// Display color for a category chip. Presentation only.
pub(crate) fn category_color(category: ActivityCategory) -> Color {
    match category {
        ActivityCategory::Dcc => Color::Blue,
        ActivityCategory::Spa => Color::Green,
        ActivityCategory::Admin => Color::Magenta,
        ActivityCategory::Research => Color::LightRed,
        ActivityCategory::Teaching => Color::Yellow,
        ActivityCategory::Other => Color::Gray,
    }
}

/// Label + field rectangles for a scrolling vertical form. The focused row
/// is always kept inside the viewport.
pub(crate) fn form_rows(area: Rect, heights: &[u16], focused: usize) -> Vec<(usize, Rect, Rect)> {
    if heights.is_empty() || area.height < 2 {
        return Vec::new();
    }
    let focused = focused.min(heights.len() - 1);
    let row_height = |i: usize| heights[i] + 1;

    let mut start = 0;
    while start < focused {
        let total: u16 = (start..=focused).map(row_height).sum();
        if total <= area.height {
            break;
        }
        start += 1;
    }

    let mut rows = Vec::new();
    let mut y = area.y;
    for (i, height) in heights.iter().enumerate().skip(start) {
        if y + 1 + height > area.y + area.height {
            break;
        }
        let label_area = Rect::new(area.x, y, area.width, 1);
        let field_area = Rect::new(area.x + 2, y + 1, area.width.saturating_sub(2), *height);
        rows.push((i, label_area, field_area));
        y += height + 1;
    }
    rows
}

pub(crate) fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

impl WizardScreen {
    /// Draw the step chrome (title, step trail, key hints, messages) and
    /// return the body area.
    pub(crate) fn render_scaffold(&self, frame: &mut Frame, hints: &str) -> Rect {
        let block = Block::default()
            .title(" New Job Plan ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(frame.area());
        frame.render_widget(block, frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Step trail
                Constraint::Min(4),    // Step body
                Constraint::Length(2), // Hints + messages
            ])
            .split(inner);

        // Step trail: "Basic Info > Objectives > ..."
        let mut spans = Vec::new();
        for (i, step) in WizardStep::all().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
            }
            let style = if *step == self.step {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if step.index() < self.step.index() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(step.title(), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

        // Hints line plus any message
        let mut lines = vec![Line::from(Span::styled(
            hints.to_string(),
            Style::default().fg(Color::DarkGray),
        ))];
        if self.submitting() {
            lines.push(Line::from(Span::styled(
                "Submitting...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(ref message) = self.validation_message {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )));
        } else if let Some(ref message) = self.submit_error {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        frame.render_widget(Paragraph::new(lines), chunks[2]);

        chunks[1]
    }
}
