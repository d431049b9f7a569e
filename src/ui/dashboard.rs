//! Main dashboard screen.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::panels::{
    render_stat_tiles, CompliancePanel, HeaderBar, OverviewPanel, SchedulePanel, StatTile,
    StatusBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Overview,
    Schedule,
}

pub struct Dashboard {
    pub stats: Vec<StatTile>,
    pub overview_panel: OverviewPanel,
    pub schedule_panel: SchedulePanel,
    pub compliance_panel: CompliancePanel,
    pub focused: FocusedPanel,
    /// One-line status shown under the key hints (e.g. submission results)
    pub status_message: Option<String>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            stats: StatTile::sample(),
            overview_panel: OverviewPanel::sample(),
            schedule_panel: SchedulePanel::sample(),
            compliance_panel: CompliancePanel::sample(),
            focused: FocusedPanel::Overview,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(5), // Stat tiles
                Constraint::Min(10),   // Main content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let header = HeaderBar {
            version: env!("CARGO_PKG_VERSION"),
        };
        header.render(frame, chunks[0]);

        render_stat_tiles(frame, chunks[1], &self.stats);

        // Main content - plans on the left, schedule and compliance stacked
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        self.overview_panel
            .render(frame, columns[0], self.focused == FocusedPanel::Overview);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        self.schedule_panel
            .render(frame, right[0], self.focused == FocusedPanel::Schedule);
        self.compliance_panel.render(frame, right[1], false);

        let status = StatusBar {
            message: self.status_message.as_deref(),
        };
        status.render(frame, chunks[3]);
    }

    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            FocusedPanel::Overview => FocusedPanel::Schedule,
            FocusedPanel::Schedule => FocusedPanel::Overview,
        };
    }

    pub fn select_next(&mut self) {
        match self.focused {
            FocusedPanel::Overview => {
                let len = self.overview_panel.plans.len();
                if len > 0 {
                    let i = self
                        .overview_panel
                        .state
                        .selected()
                        .map_or(0, |i| if i >= len - 1 { 0 } else { i + 1 });
                    self.overview_panel.state.select(Some(i));
                }
            }
            FocusedPanel::Schedule => {
                let len = self.schedule_panel.sessions.len();
                if len > 0 {
                    let i = self
                        .schedule_panel
                        .state
                        .selected()
                        .map_or(0, |i| if i >= len - 1 { 0 } else { i + 1 });
                    self.schedule_panel.state.select(Some(i));
                }
            }
        }
    }

    pub fn select_prev(&mut self) {
        match self.focused {
            FocusedPanel::Overview => {
                let len = self.overview_panel.plans.len();
                if len > 0 {
                    let i = self
                        .overview_panel
                        .state
                        .selected()
                        .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
                    self.overview_panel.state.select(Some(i));
                }
            }
            FocusedPanel::Schedule => {
                let len = self.schedule_panel.sessions.len();
                if len > 0 {
                    let i = self
                        .schedule_panel
                        .state
                        .selected()
                        .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
                    self.schedule_panel.state.select(Some(i));
                }
            }
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        let mut dashboard = Dashboard::new();
        assert_eq!(dashboard.focused, FocusedPanel::Overview);
        dashboard.focus_next();
        assert_eq!(dashboard.focused, FocusedPanel::Schedule);
        dashboard.focus_next();
        assert_eq!(dashboard.focused, FocusedPanel::Overview);
    }

    #[test]
    fn test_selection_wraps() {
        let mut dashboard = Dashboard::new();
        let len = dashboard.overview_panel.plans.len();
        for _ in 0..len {
            dashboard.select_next();
        }
        assert_eq!(dashboard.overview_panel.state.selected(), Some(len - 1));
        dashboard.select_next();
        assert_eq!(dashboard.overview_panel.state.selected(), Some(0));
        dashboard.select_prev();
        assert_eq!(dashboard.overview_panel.state.selected(), Some(len - 1));
    }
}
