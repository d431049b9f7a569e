//! Summary step rendering

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::category_color;
use crate::model::DraftSummary;
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_summary_step(&mut self, frame: &mut Frame) {
        let body = self.render_scaffold(frame, "[Enter]/[Ctrl+N] Continue  [Esc] Back");

        let summary = DraftSummary::of(&self.draft);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body);

        // Basic information
        let info_block = Block::default()
            .title(" Basic Information ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let info_area = info_block.inner(columns[0]);
        frame.render_widget(info_block, columns[0]);

        let not_specified = |s: &str| {
            if s.is_empty() {
                "Not specified".to_string()
            } else {
                s.to_string()
            }
        };
        let mut info_lines = vec![
            detail_line("Title", not_specified(&self.draft.title)),
            detail_line("Hospital/Trust", not_specified(&self.draft.hospital)),
            detail_line(
                "Total Sessions",
                self.draft
                    .total_sessions
                    .map_or_else(|| "0".to_string(), |n| n.to_string()),
            ),
            detail_line(
                "DCC Sessions",
                self.draft
                    .dcc_sessions
                    .map_or_else(|| "0".to_string(), |n| n.to_string()),
            ),
            detail_line(
                "SPA Sessions",
                self.draft
                    .spa_sessions
                    .map_or_else(|| "0".to_string(), |n| n.to_string()),
            ),
            detail_line(
                "Employment",
                self.draft.employment.employment_type.label().to_string(),
            ),
        ];
        if let Some(specialty) = self.draft.specialty {
            info_lines.push(detail_line("Specialty", specialty.label().to_string()));
            if !self.draft.special_interests.is_empty() {
                info_lines.push(detail_line(
                    "Special Interests",
                    self.draft
                        .special_interests
                        .iter()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", "),
                ));
            }
        }
        if !self.draft.description.is_empty() {
            info_lines.push(Line::from(""));
            info_lines.push(Line::from(Span::styled(
                self.draft.description.clone(),
                Style::default().fg(Color::Gray),
            )));
        }
        frame.render_widget(
            Paragraph::new(info_lines).wrap(Wrap { trim: true }),
            info_area,
        );

        // Statistics with the per-category tally
        let stats_block = Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let stats_area = stats_block.inner(columns[1]);
        frame.render_widget(stats_block, columns[1]);

        let mut stats_lines = vec![
            detail_line("Total Objectives", summary.objectives.to_string()),
            detail_line("Resources Required", summary.resources.to_string()),
            detail_line("Total Activities", summary.activities.to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Activities by Category",
                Style::default().fg(Color::Gray),
            )),
        ];
        for (category, count) in summary.category_counts() {
            stats_lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<9}", category.label()),
                    Style::default().fg(category_color(category)),
                ),
                Span::styled(
                    count.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        frame.render_widget(Paragraph::new(stats_lines), stats_area);
    }
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}
