//! Resources step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::{form_rows, label_style};
use crate::ui::wizard::forms::ResourceForm;
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_resources_step(&mut self, frame: &mut Frame) {
        let body = self.render_scaffold(
            frame,
            "[Enter] Add  [Tab] Field  [Ctrl+J/K] Select  [Ctrl+D] Remove  [Ctrl+N] Next step  [Esc] Back",
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body);

        // Pending-resource form
        let form_block = Block::default()
            .title(" Add New Resource ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let form_area = form_block.inner(columns[0]);
        frame.render_widget(form_block, columns[0]);

        let labels = ResourceForm::labels();
        let focused_index = self.resource_form.focused;
        let heights: Vec<u16> = {
            let fields = self.resource_form.fields_mut();
            fields.iter().map(|f| f.render_height()).collect()
        };
        for (i, label_area, field_area) in form_rows(form_area, &heights, focused_index) {
            let focused = i == focused_index;
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(labels[i], label_style(focused)))),
                label_area,
            );
            self.resource_form.fields_mut()[i].render(frame, field_area, focused);
        }

        // Current resources
        let list_block = Block::default()
            .title(format!(
                " Required Resources ({}) ",
                self.draft.resources.len()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let list_area = list_block.inner(columns[1]);
        frame.render_widget(list_block, columns[1]);

        let items: Vec<ListItem> = self
            .draft
            .resources
            .iter()
            .enumerate()
            .map(|(i, resource)| {
                let mut title = vec![Span::styled(
                    format!("{}. {}", i + 1, resource.name),
                    Style::default().add_modifier(Modifier::BOLD),
                )];
                if !resource.resource_type.is_empty() {
                    title.push(Span::styled(
                        format!("  [{}]", resource.resource_type),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                let mut lines = vec![Line::from(title)];
                if !resource.quantity.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("   Allocation: {}", resource.quantity),
                        Style::default().fg(Color::Green),
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
