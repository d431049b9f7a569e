//! Finish step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_finish_step(&mut self, frame: &mut Frame) {
        let body = self.render_scaffold(frame, "[Ctrl+S] Create Job Plan  [Esc] Back");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(1), // Comments label
                Constraint::Length(6), // Comments editor
                Constraint::Length(1), // Spacer
                Constraint::Min(4),    // What happens next
                Constraint::Length(1), // Submit line
            ])
            .split(body);

        let heading = vec![
            Line::from(Span::styled(
                "Almost Done!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Review your job plan and add any final comments",
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(heading).alignment(Alignment::Center),
            chunks[0],
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Additional Comments or Notes (Optional)",
                Style::default().fg(Color::Cyan),
            ))),
            chunks[1],
        );
        self.comments.render(frame, chunks[2], true);

        let next_steps = vec![
            Line::from(Span::styled(
                "What happens next?",
                Style::default().fg(Color::Blue),
            )),
            Line::from("  - Your job plan will be created and saved"),
            Line::from("  - You can review and edit it later if needed"),
            Line::from("  - The plan can be shared with relevant stakeholders"),
            Line::from("  - You'll be returned to the main dashboard"),
        ];
        frame.render_widget(Paragraph::new(next_steps), chunks[4]);

        let submit_line = if self.submitting() {
            Line::from(Span::styled(
                "Submitting...",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(Span::styled(
                " [Ctrl+S] Create Job Plan ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        };
        frame.render_widget(
            Paragraph::new(submit_line).alignment(Alignment::Center),
            chunks[5],
        );
    }
}
