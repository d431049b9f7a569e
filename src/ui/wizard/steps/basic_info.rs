//! Basic info step rendering

use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{form_rows, label_style};
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_basic_info_step(&mut self, frame: &mut Frame) {
        let body = self.render_scaffold(
            frame,
            "[Tab]/[Enter] Next field  [Shift+Tab] Previous  [Ctrl+N] Next step  [Esc] Cancel",
        );

        let visible = self.basic_form.visible_fields();
        let heights: Vec<u16> = visible
            .iter()
            .map(|f| self.basic_form.field(*f).render_height())
            .collect();

        for (i, label_area, field_area) in form_rows(body, &heights, self.basic_form.focused) {
            let id = visible[i];
            let focused = i == self.basic_form.focused;
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(id.label(), label_style(focused)))),
                label_area,
            );
            self.basic_form
                .field_mut(id)
                .render(frame, field_area, focused);
        }
    }
}
