//! The six-step job-plan wizard.
//!
//! `WizardScreen` is the sole owner of the in-progress draft. Step editors
//! mutate collections only through the draft's slice-replacement channel;
//! the step cursor moves strictly linearly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{widgets::ListState, Frame};
use uuid::Uuid;

pub mod forms;
pub mod steps;
pub mod types;

pub use types::*;

#[cfg(test)]
mod tests;

use crate::api::{JobPlanApi, SubmitReceipt};
use crate::model::{Activity, DraftUpdate, JobPlanDraft};
use crate::ui::form_field::FormField;
use forms::{ActivityForm, BasicInfoForm, ObjectiveForm, ResourceForm};

/// Outcome of a submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The endpoint accepted the draft; discard it and leave the wizard
    Created(SubmitReceipt),
    /// The call failed; the draft and step are untouched, retry allowed
    Failed,
    /// A submission is already in flight; the request was ignored
    AlreadyInFlight,
}

/// Wizard screen shown while drafting a new job plan.
pub struct WizardScreen {
    /// Current step in the wizard
    pub step: WizardStep,
    /// The draft being built; discarded on submit or cancel
    pub draft: JobPlanDraft,
    pub basic_form: BasicInfoForm,
    pub objective_form: ObjectiveForm,
    pub resource_form: ResourceForm,
    pub activity_form: ActivityForm,
    /// Active entry tab on the Activities step
    pub activity_tab: ActivityTab,
    /// Final-comments editor on the Finish step
    pub comments: FormField,
    /// Selection within the current step's item list
    pub items_state: ListState,
    /// Inline message from the last rejected add
    pub validation_message: Option<String>,
    /// Message from the last failed submission
    pub submit_error: Option<String>,
    submit_in_flight: bool,
}

impl WizardScreen {
    /// Fresh wizard: empty draft, cursor at the first step.
    pub fn new() -> Self {
        Self {
            step: WizardStep::BasicInfo,
            draft: JobPlanDraft::new(),
            basic_form: BasicInfoForm::new(),
            objective_form: ObjectiveForm::new(),
            resource_form: ResourceForm::new(),
            activity_form: ActivityForm::new(),
            activity_tab: ActivityTab::List,
            comments: FormField::text_area(
                "Add any additional comments, special requirements, or notes",
            ),
            items_state: ListState::default(),
            validation_message: None,
            submit_error: None,
            submit_in_flight: false,
        }
    }

    // ─── Step sequencing ────────────────────────────────────────────────────

    /// Move to the next step. No-op at the last step.
    pub fn advance(&mut self) {
        if self.step == WizardStep::BasicInfo {
            self.basic_form.commit(&mut self.draft);
        }
        self.step = self.step.next();
        self.validation_message = None;
        self.items_state.select(None);
    }

    /// Move to the previous step. No-op at the first step.
    pub fn retreat(&mut self) {
        self.step = self.step.prev();
        self.validation_message = None;
        self.items_state.select(None);
    }

    /// Proceed (Ctrl+N / confirm). At the final step this requests
    /// submission instead of moving the cursor.
    pub fn confirm(&mut self) -> WizardResult {
        if self.step == WizardStep::Finish {
            WizardResult::Submit
        } else {
            self.advance();
            WizardResult::Continue
        }
    }

    /// Go back (Esc). At the first step this cancels the wizard and the
    /// draft is discarded by the caller.
    pub fn go_back(&mut self) -> WizardResult {
        if self.step == WizardStep::BasicInfo {
            WizardResult::Cancel
        } else {
            self.retreat();
            WizardResult::Continue
        }
    }

    // ─── Item editing ───────────────────────────────────────────────────────

    /// Add the pending objective, or surface a validation message.
    pub fn add_objective(&mut self) {
        match self.objective_form.take() {
            Ok(objective) => {
                let mut items = self.draft.objectives.clone();
                items.push(objective);
                self.draft.apply(DraftUpdate::Objectives(items));
                self.validation_message = None;
            }
            Err(message) => self.validation_message = Some(message),
        }
    }

    pub fn remove_objective(&mut self, id: Uuid) {
        let items = self
            .draft
            .objectives
            .iter()
            .filter(|o| o.id != id)
            .cloned()
            .collect();
        self.draft.apply(DraftUpdate::Objectives(items));
    }

    /// Add the pending resource, or surface a validation message.
    pub fn add_resource(&mut self) {
        match self.resource_form.take() {
            Ok(resource) => {
                let mut items = self.draft.resources.clone();
                items.push(resource);
                self.draft.apply(DraftUpdate::Resources(items));
                self.validation_message = None;
            }
            Err(message) => self.validation_message = Some(message),
        }
    }

    pub fn remove_resource(&mut self, id: Uuid) {
        let items = self
            .draft
            .resources
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.draft.apply(DraftUpdate::Resources(items));
    }

    /// Add the pending activity to the collection owned by the active tab.
    pub fn add_activity(&mut self) {
        match self.activity_form.take(self.activity_tab) {
            Ok(activity) => {
                if self.activity_tab == ActivityTab::Calendar {
                    let mut items = self.draft.calendar_activities.clone();
                    items.push(activity);
                    self.draft.apply(DraftUpdate::CalendarActivities(items));
                } else {
                    let mut items = self.draft.activities.clone();
                    items.push(activity);
                    self.draft.apply(DraftUpdate::Activities(items));
                }
                self.validation_message = None;
            }
            Err(message) => self.validation_message = Some(message),
        }
    }

    pub fn remove_activity(&mut self, id: Uuid) {
        let items: Vec<Activity> = self
            .draft
            .activities
            .iter()
            .filter(|a| a.id != id)
            .cloned()
            .collect();
        self.draft.apply(DraftUpdate::Activities(items));
    }

    pub fn remove_calendar_activity(&mut self, id: Uuid) {
        let items: Vec<Activity> = self
            .draft
            .calendar_activities
            .iter()
            .filter(|a| a.id != id)
            .cloned()
            .collect();
        self.draft.apply(DraftUpdate::CalendarActivities(items));
    }

    /// Items listed on the current step (for selection and removal).
    fn current_item_count(&self) -> usize {
        match self.step {
            WizardStep::Objectives => self.draft.objectives.len(),
            WizardStep::Resources => self.draft.resources.len(),
            WizardStep::Activities => match self.activity_tab {
                ActivityTab::Calendar => self.draft.calendar_activities.len(),
                _ => self.draft.activities.len(),
            },
            _ => 0,
        }
    }

    pub fn select_next_item(&mut self) {
        let len = self.current_item_count();
        if len == 0 {
            return;
        }
        let i = self
            .items_state
            .selected()
            .map_or(0, |i| if i >= len - 1 { 0 } else { i + 1 });
        self.items_state.select(Some(i));
    }

    pub fn select_prev_item(&mut self) {
        let len = self.current_item_count();
        if len == 0 {
            return;
        }
        let i = self
            .items_state
            .selected()
            .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
        self.items_state.select(Some(i));
    }

    /// Remove the item selected in the current step's list. Immediate and
    /// irreversible within the session.
    pub fn remove_selected_item(&mut self) {
        let Some(index) = self.items_state.selected() else {
            return;
        };
        match self.step {
            WizardStep::Objectives => {
                if let Some(id) = self.draft.objectives.get(index).map(|o| o.id) {
                    self.remove_objective(id);
                }
            }
            WizardStep::Resources => {
                if let Some(id) = self.draft.resources.get(index).map(|r| r.id) {
                    self.remove_resource(id);
                }
            }
            WizardStep::Activities => match self.activity_tab {
                ActivityTab::Calendar => {
                    if let Some(id) = self.draft.calendar_activities.get(index).map(|a| a.id) {
                        self.remove_calendar_activity(id);
                    }
                }
                _ => {
                    if let Some(id) = self.draft.activities.get(index).map(|a| a.id) {
                        self.remove_activity(id);
                    }
                }
            },
            _ => {}
        }
        let len = self.current_item_count();
        if len == 0 {
            self.items_state.select(None);
        } else if index >= len {
            self.items_state.select(Some(len - 1));
        }
    }

    // ─── Submission ─────────────────────────────────────────────────────────

    /// Claim the in-flight slot. Returns false while a submission is
    /// already pending, so a second request cannot fire.
    pub fn begin_submit(&mut self) -> bool {
        if self.submit_in_flight {
            return false;
        }
        self.submit_in_flight = true;
        self.submit_error = None;
        true
    }

    pub fn submitting(&self) -> bool {
        self.submit_in_flight
    }

    /// Submit the draft. Exactly one call to the collaborator per accepted
    /// request; on failure the draft and step are left untouched.
    pub async fn submit(&mut self, api: &dyn JobPlanApi) -> SubmitOutcome {
        if !self.begin_submit() {
            return SubmitOutcome::AlreadyInFlight;
        }
        tracing::info!(title = %self.draft.title, "submitting job plan");
        let result = api.create_job_plan(&self.draft).await;
        self.submit_in_flight = false;

        match result {
            Ok(receipt) => {
                tracing::info!(id = ?receipt.id, "job plan created");
                SubmitOutcome::Created(receipt)
            }
            Err(err) => {
                tracing::warn!(%err, "job plan submission failed");
                self.submit_error = Some(err.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    // ─── Key routing ────────────────────────────────────────────────────────

    /// Route a key event to the active step.
    pub fn handle_key(&mut self, key: KeyEvent) -> WizardResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Step navigation works the same everywhere
        match key.code {
            KeyCode::Esc => return self.go_back(),
            KeyCode::Char('n') if ctrl => return self.confirm(),
            KeyCode::Char('s') if ctrl && self.step == WizardStep::Finish => {
                return WizardResult::Submit;
            }
            _ => {}
        }

        match self.step {
            WizardStep::BasicInfo => match key.code {
                KeyCode::Tab | KeyCode::Enter => self.basic_form.next_field(),
                KeyCode::BackTab => self.basic_form.prev_field(),
                code => {
                    self.basic_form.handle_key(code);
                }
            },
            WizardStep::Objectives => match key.code {
                KeyCode::Tab => self.objective_form.next_field(),
                KeyCode::BackTab => self.objective_form.prev_field(),
                KeyCode::Enter => self.add_objective(),
                KeyCode::Char('j') if ctrl => self.select_next_item(),
                KeyCode::Char('k') if ctrl => self.select_prev_item(),
                KeyCode::Char('d') if ctrl => self.remove_selected_item(),
                code => {
                    self.objective_form.handle_key(code);
                }
            },
            WizardStep::Resources => match key.code {
                KeyCode::Tab => self.resource_form.next_field(),
                KeyCode::BackTab => self.resource_form.prev_field(),
                KeyCode::Enter => self.add_resource(),
                KeyCode::Char('j') if ctrl => self.select_next_item(),
                KeyCode::Char('k') if ctrl => self.select_prev_item(),
                KeyCode::Char('d') if ctrl => self.remove_selected_item(),
                code => {
                    self.resource_form.handle_key(code);
                }
            },
            WizardStep::Activities => match key.code {
                KeyCode::Char('t') if ctrl => {
                    self.activity_tab = self.activity_tab.next();
                    self.activity_form.focused = 0;
                    self.items_state.select(None);
                }
                KeyCode::Tab => self.activity_form.next_field(self.activity_tab),
                KeyCode::BackTab => self.activity_form.prev_field(self.activity_tab),
                KeyCode::Enter => self.add_activity(),
                KeyCode::Char('j') if ctrl => self.select_next_item(),
                KeyCode::Char('k') if ctrl => self.select_prev_item(),
                KeyCode::Char('d') if ctrl => self.remove_selected_item(),
                code => {
                    self.activity_form.handle_key(self.activity_tab, code);
                }
            },
            WizardStep::Summary => {
                if key.code == KeyCode::Enter {
                    return self.confirm();
                }
            }
            WizardStep::Finish => {
                // Everything else edits the comments box; mirror it into the
                // draft through the slice channel on every change
                if self.comments.handle_key(key.code) {
                    self.draft
                        .apply(DraftUpdate::Comments(self.comments.value()));
                }
            }
        }
        WizardResult::Continue
    }

    /// Render the wizard screen
    pub fn render(&mut self, frame: &mut Frame) {
        match self.step {
            WizardStep::BasicInfo => self.render_basic_info_step(frame),
            WizardStep::Objectives => self.render_objectives_step(frame),
            WizardStep::Resources => self.render_resources_step(frame),
            WizardStep::Activities => self.render_activities_step(frame),
            WizardStep::Summary => self.render_summary_step(frame),
            WizardStep::Finish => self.render_finish_step(frame),
        }
    }
}

impl Default for WizardScreen {
    fn default() -> Self {
        Self::new()
    }
}
