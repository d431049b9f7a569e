use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{HttpJobPlanApi, JobPlanApi};
use crate::config::Config;
use crate::ui::wizard::{SubmitOutcome, WizardResult, WizardScreen};
use crate::ui::Dashboard;

pub struct App {
    config: Config,
    dashboard: Dashboard,
    /// Wizard screen while a draft is being edited; owns the draft
    wizard: Option<WizardScreen>,
    api: Arc<dyn JobPlanApi>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let api: Arc<dyn JobPlanApi> = Arc::new(HttpJobPlanApi::new(
            config.api.base_url.clone(),
            config.api.timeout(),
        )?);

        Ok(Self {
            config,
            dashboard: Dashboard::new(),
            wizard: None,
            api,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);

        while !self.should_quit {
            terminal.draw(|f| {
                if let Some(ref mut wizard) = self.wizard {
                    wizard.render(f);
                } else {
                    self.dashboard.render(f);
                }
            })?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key).await;
                    }
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        if let Some(ref mut wizard) = self.wizard {
            match wizard.handle_key(key) {
                WizardResult::Continue => {}
                WizardResult::Cancel => {
                    // The draft is discarded with the wizard, nothing is sent
                    self.wizard = None;
                    self.dashboard.set_status("Job plan draft discarded");
                }
                WizardResult::Submit => self.submit_draft().await,
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.dashboard.status_message = None;
                self.wizard = Some(WizardScreen::new());
            }
            KeyCode::Tab => self.dashboard.focus_next(),
            KeyCode::Down | KeyCode::Char('j') => self.dashboard.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.dashboard.select_prev(),
            _ => {}
        }
    }

    /// Drive one guarded submission. On success the wizard (and draft) are
    /// dropped; on failure the wizard stays up with the error surfaced.
    async fn submit_draft(&mut self) {
        let Some(ref mut wizard) = self.wizard else {
            return;
        };
        let api = Arc::clone(&self.api);

        match wizard.submit(api.as_ref()).await {
            SubmitOutcome::Created(receipt) => {
                let message = match receipt.id {
                    Some(id) => format!("Job plan created ({id})"),
                    None => "Job plan created".to_string(),
                };
                self.wizard = None;
                self.dashboard.set_status(message);
            }
            SubmitOutcome::Failed | SubmitOutcome::AlreadyInFlight => {}
        }
    }
}
