//! Activities step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::{category_color, form_rows, label_style};
use crate::model::Activity;
use crate::ui::wizard::{ActivityTab, WizardScreen};

impl WizardScreen {
    pub(crate) fn render_activities_step(&mut self, frame: &mut Frame) {
        let body = self.render_scaffold(
            frame,
            "[Ctrl+T] Tab  [Enter] Add  [Tab] Field  [Ctrl+J/K] Select  [Ctrl+D] Remove  [Ctrl+N] Next step  [Esc] Back",
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(4)])
            .split(body);

        // Entry tabs, active one highlighted
        let mut spans = Vec::new();
        for (i, tab) in ActivityTab::all().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            let style = if *tab == self.activity_tab {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(tab.label(), style));
        }
        if self.activity_tab == ActivityTab::Timetabled {
            // Live premium-hours figure for the entered window
            if let Some(hours) = self.activity_form.premium_preview() {
                spans.push(Span::raw("    "));
                spans.push(Span::styled(
                    format!("Premium hours: {hours:.2}"),
                    Style::default().fg(Color::Yellow),
                ));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        // Pending-activity form for the active tab
        let form_block = Block::default()
            .title(" Add New Activity ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let form_area = form_block.inner(columns[0]);
        frame.render_widget(form_block, columns[0]);

        let visible = self.activity_form.visible_fields(self.activity_tab);
        let heights: Vec<u16> = visible
            .iter()
            .map(|f| self.activity_form.field(*f).render_height())
            .collect();
        for (i, label_area, field_area) in form_rows(form_area, &heights, self.activity_form.focused)
        {
            let id = visible[i];
            let focused = i == self.activity_form.focused;
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(id.label(), label_style(focused)))),
                label_area,
            );
            self.activity_form
                .field_mut(id)
                .render(frame, field_area, focused);
        }

        // Activities owned by the active tab
        let (title, activities): (&str, &[Activity]) = match self.activity_tab {
            ActivityTab::Calendar => (" Calendar Activities ", &self.draft.calendar_activities),
            _ => (" Activities List ", &self.draft.activities),
        };
        let list_block = Block::default()
            .title(format!("{}({}) ", title, activities.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let list_area = list_block.inner(columns[1]);
        frame.render_widget(list_block, columns[1]);

        let items: Vec<ListItem> = activities
            .iter()
            .enumerate()
            .map(|(i, activity)| {
                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        format!("{}. {}", i + 1, activity.title),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        activity.category.label(),
                        Style::default().fg(category_color(activity.category)),
                    ),
                ])];
                let mut details = Vec::new();
                if let Some(date) = activity.date {
                    details.push(format!("Date: {date}"));
                }
                if let Some(time) = activity.time {
                    details.push(format!("Time: {}", time.format("%H:%M")));
                }
                if !activity.duration.is_empty() {
                    details.push(format!("Duration: {}", activity.duration));
                }
                if !activity.frequency.is_empty() {
                    details.push(format!("Frequency: {}", activity.frequency));
                }
                if activity.premium_hours > 0.0 {
                    details.push(format!("Premium: {:.2}h", activity.premium_hours));
                }
                if !details.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("   {}", details.join("  ")),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, list_area, &mut self.items_state);
    }
}
