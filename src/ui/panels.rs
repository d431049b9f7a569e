//! Dashboard panel widgets and their sample content.
//!
//! The dashboard is display-only: job plans, schedule and compliance come
//! from built-in sample records until a read API exists.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

// ─── Header / status ────────────────────────────────────────────────────────

pub struct HeaderBar<'a> {
    pub version: &'a str,
}

impl HeaderBar<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                "Job Planning Dashboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  v{}", self.version),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

pub struct StatusBar<'a> {
    pub message: Option<&'a str>,
}

impl StatusBar<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            "[N] New Job Plan  [Tab] Switch panel  [J/K] Select  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        ))];
        if let Some(message) = self.message {
            lines.push(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Yellow),
            )));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

// ─── Stat tiles ─────────────────────────────────────────────────────────────

pub struct StatTile {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    pub color: Color,
}

impl StatTile {
    pub fn sample() -> Vec<StatTile> {
        vec![
            StatTile {
                title: "Total Sessions This Week",
                value: "12",
                subtitle: "2 DCC, 10 SPA",
                color: Color::Blue,
            },
            StatTile {
                title: "Compliance Status",
                value: "94%",
                subtitle: "Appraisal due in 3 months",
                color: Color::Green,
            },
            StatTile {
                title: "Upcoming Deadlines",
                value: "3",
                subtitle: "CPD submission due",
                color: Color::LightRed,
            },
            StatTile {
                title: "Leave Remaining",
                value: "18",
                subtitle: "Study leave days",
                color: Color::Magenta,
            },
        ]
    }
}

pub fn render_stat_tiles(frame: &mut Frame, area: Rect, tiles: &[StatTile]) {
    let constraints: Vec<Constraint> = tiles
        .iter()
        .map(|_| Constraint::Ratio(1, tiles.len().max(1) as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (tile, chunk) in tiles.iter().zip(chunks.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(*chunk);
        frame.render_widget(block, *chunk);

        let lines = vec![
            Line::from(Span::styled(
                tile.title,
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                tile.value,
                Style::default()
                    .fg(tile.color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                tile.subtitle,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

// ─── Current job plans ──────────────────────────────────────────────────────

pub struct PlanCard {
    pub title: &'static str,
    pub hospital: &'static str,
    pub sessions: f64,
    pub dcc_sessions: f64,
    pub spa_sessions: f64,
    pub status: &'static str,
    pub last_updated: &'static str,
}

pub struct OverviewPanel {
    pub plans: Vec<PlanCard>,
    pub state: ListState,
}

impl OverviewPanel {
    pub fn sample() -> Self {
        Self {
            plans: vec![
                PlanCard {
                    title: "Main Consultant Post",
                    hospital: "Royal London Hospital",
                    sessions: 10.0,
                    dcc_sessions: 7.5,
                    spa_sessions: 2.5,
                    status: "Active",
                    last_updated: "2024-01-15",
                },
                PlanCard {
                    title: "Private Practice",
                    hospital: "London Bridge Hospital",
                    sessions: 2.0,
                    dcc_sessions: 0.0,
                    spa_sessions: 2.0,
                    status: "Active",
                    last_updated: "2024-01-10",
                },
                PlanCard {
                    title: "Research Fellowship",
                    hospital: "Imperial College",
                    sessions: 1.0,
                    dcc_sessions: 0.0,
                    spa_sessions: 1.0,
                    status: "Draft",
                    last_updated: "2024-01-08",
                },
            ],
            state: ListState::default(),
        }
    }

    fn status_color(status: &str) -> Color {
        match status {
            "Active" => Color::Green,
            "Draft" => Color::Yellow,
            _ => Color::Gray,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(" Current Job Plans ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items: Vec<ListItem> = self
            .plans
            .iter()
            .map(|plan| {
                let lines = vec![
                    Line::from(vec![
                        Span::styled(plan.title, Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw("  "),
                        Span::styled(
                            plan.status,
                            Style::default().fg(Self::status_color(plan.status)),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "  {}  {} sessions ({} DCC / {} SPA)",
                            plan.hospital, plan.sessions, plan.dcc_sessions, plan.spa_sessions
                        ),
                        Style::default().fg(Color::Gray),
                    )),
                    Line::from(Span::styled(
                        format!("  Last updated: {}", plan.last_updated),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, inner, &mut self.state);
    }
}

// ─── Upcoming schedule ──────────────────────────────────────────────────────

pub struct ScheduleSession {
    pub title: &'static str,
    pub session_type: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub patients: Option<u32>,
}

pub struct SchedulePanel {
    pub sessions: Vec<ScheduleSession>,
    pub state: ListState,
}

impl SchedulePanel {
    pub fn sample() -> Self {
        Self {
            sessions: vec![
                ScheduleSession {
                    title: "Outpatient Clinic",
                    session_type: "DCC",
                    date: "2024-06-05",
                    time: "09:00 - 17:00",
                    location: "Clinic Room 3A",
                    patients: Some(16),
                },
                ScheduleSession {
                    title: "Theatre List",
                    session_type: "DCC",
                    date: "2024-06-06",
                    time: "08:00 - 14:00",
                    location: "Theatre 2",
                    patients: Some(8),
                },
                ScheduleSession {
                    title: "Research Meeting",
                    session_type: "SPA",
                    date: "2024-06-06",
                    time: "15:00 - 17:00",
                    location: "Conference Room B",
                    patients: None,
                },
                ScheduleSession {
                    title: "MDT Meeting",
                    session_type: "DCC",
                    date: "2024-06-07",
                    time: "08:00 - 09:00",
                    location: "Meeting Room 1",
                    patients: None,
                },
                ScheduleSession {
                    title: "Teaching Session",
                    session_type: "SPA",
                    date: "2024-06-07",
                    time: "14:00 - 16:00",
                    location: "Lecture Theatre A",
                    patients: None,
                },
            ],
            state: ListState::default(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(" Upcoming Schedule ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items: Vec<ListItem> = self
            .sessions
            .iter()
            .map(|session| {
                let type_color = if session.session_type == "DCC" {
                    Color::Blue
                } else {
                    Color::Green
                };
                let mut detail = format!("  {}  {}  {}", session.date, session.time, session.location);
                if let Some(patients) = session.patients {
                    detail.push_str(&format!("  {patients} patients"));
                }
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            session.title,
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(session.session_type, Style::default().fg(type_color)),
                    ]),
                    Line::from(Span::styled(detail, Style::default().fg(Color::Gray))),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, inner, &mut self.state);
    }
}

// ─── Compliance tracker ─────────────────────────────────────────────────────

pub struct ComplianceItem {
    pub title: &'static str,
    pub status: &'static str,
    pub due_date: &'static str,
    pub progress: u16,
}

pub struct CompliancePanel {
    pub items: Vec<ComplianceItem>,
}

impl CompliancePanel {
    pub fn sample() -> Self {
        Self {
            items: vec![
                ComplianceItem {
                    title: "Annual Appraisal",
                    status: "Complete",
                    due_date: "2024-03-15",
                    progress: 100,
                },
                ComplianceItem {
                    title: "CPD Requirements",
                    status: "In Progress",
                    due_date: "2024-12-31",
                    progress: 65,
                },
                ComplianceItem {
                    title: "Revalidation",
                    status: "Upcoming",
                    due_date: "2025-06-30",
                    progress: 25,
                },
                ComplianceItem {
                    title: "Mandatory Training",
                    status: "Overdue",
                    due_date: "2024-01-31",
                    progress: 80,
                },
            ],
        }
    }

    fn status_color(status: &str) -> Color {
        match status {
            "Complete" => Color::Green,
            "In Progress" => Color::Blue,
            "Upcoming" => Color::Magenta,
            "Overdue" => Color::Red,
            _ => Color::Gray,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(" Compliance Tracker ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let constraints: Vec<Constraint> =
            self.items.iter().map(|_| Constraint::Length(2)).collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (item, row) in self.items.iter().zip(rows.iter()) {
            let halves = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(1)])
                .split(*row);

            let color = Self::status_color(item.status);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(item.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(item.status, Style::default().fg(color)),
                    Span::styled(
                        format!("  due {}", item.due_date),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
                halves[0],
            );
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(color))
                .percent(item.progress)
                .label(format!("{}%", item.progress));
            frame.render_widget(gauge, halves[1]);
        }
    }
}
