//! End-to-end wizard flow through the public library API.

use std::sync::Mutex;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use jobplanner::api::{ApiError, JobPlanApi, SubmitReceipt};
use jobplanner::model::{Activity, JobPlanDraft};
use jobplanner::ui::wizard::{SubmitOutcome, WizardResult, WizardScreen, WizardStep};

/// Records every submitted draft; fails the first `fail_first` calls.
struct RecordingApi {
    submitted: Mutex<Vec<JobPlanDraft>>,
    fail_first: Mutex<usize>,
}

impl RecordingApi {
    fn new(fail_first: usize) -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            fail_first: Mutex::new(fail_first),
        }
    }

    fn submissions(&self) -> Vec<JobPlanDraft> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl JobPlanApi for RecordingApi {
    async fn create_job_plan(&self, draft: &JobPlanDraft) -> Result<SubmitReceipt, ApiError> {
        self.submitted.lock().unwrap().push(draft.clone());
        let mut fail_first = self.fail_first.lock().unwrap();
        if *fail_first > 0 {
            *fail_first -= 1;
            return Err(ApiError::network("connection reset"));
        }
        Ok(SubmitReceipt {
            id: Some("jp-100".to_string()),
            body: serde_json::json!({"id": "jp-100"}),
        })
    }

    async fn create_activity(&self, _activity: &Activity) -> Result<SubmitReceipt, ApiError> {
        Ok(SubmitReceipt {
            id: None,
            body: serde_json::json!({}),
        })
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(wizard: &mut WizardScreen, text: &str) {
    for c in text.chars() {
        wizard.handle_key(key(KeyCode::Char(c)));
    }
}

#[tokio::test]
async fn full_wizard_flow_submits_the_accumulated_draft() {
    let api = RecordingApi::new(0);
    let mut wizard = WizardScreen::new();

    // Basic info: title goes into the first field
    assert_eq!(wizard.step, WizardStep::BasicInfo);
    type_text(&mut wizard, "Main Consultant Post");
    assert_eq!(wizard.handle_key(ctrl('n')), WizardResult::Continue);

    // Objectives: one item added with Enter
    assert_eq!(wizard.step, WizardStep::Objectives);
    type_text(&mut wizard, "Improve patient satisfaction");
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(wizard.draft.objectives.len(), 1);
    wizard.handle_key(ctrl('n'));

    // Resources: one item
    assert_eq!(wizard.step, WizardStep::Resources);
    type_text(&mut wizard, "Clinic room");
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(wizard.draft.resources.len(), 1);
    wizard.handle_key(ctrl('n'));

    // Activities: one list activity
    assert_eq!(wizard.step, WizardStep::Activities);
    type_text(&mut wizard, "Outpatient clinic");
    wizard.handle_key(key(KeyCode::Enter));
    assert_eq!(wizard.draft.activities.len(), 1);
    wizard.handle_key(ctrl('n'));

    // Summary is read-only; Enter advances
    assert_eq!(wizard.step, WizardStep::Summary);
    wizard.handle_key(key(KeyCode::Enter));

    // Finish: comments mirror into the draft as they are typed
    assert_eq!(wizard.step, WizardStep::Finish);
    type_text(&mut wizard, "ready for review");
    assert_eq!(wizard.draft.comments, "ready for review");

    // Ctrl+S requests submission; the driver performs it
    assert_eq!(wizard.handle_key(ctrl('s')), WizardResult::Submit);
    match wizard.submit(&api).await {
        SubmitOutcome::Created(receipt) => assert_eq!(receipt.id.as_deref(), Some("jp-100")),
        other => panic!("expected Created, got {other:?}"),
    }

    let submissions = api.submissions();
    assert_eq!(submissions.len(), 1);
    let sent = &submissions[0];
    assert_eq!(sent.title, "Main Consultant Post");
    assert_eq!(sent.objectives.len(), 1);
    assert_eq!(sent.resources.len(), 1);
    assert_eq!(sent.activities.len(), 1);
    assert_eq!(sent.comments, "ready for review");
}

#[tokio::test]
async fn failed_submission_allows_retry_with_identical_draft() {
    let api = RecordingApi::new(1);
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Finish;
    type_text(&mut wizard, "second attempt should match");

    let before = wizard.draft.clone();
    match wizard.submit(&api).await {
        SubmitOutcome::Failed => {}
        other => panic!("expected Failed, got {other:?}"),
    }
    assert_eq!(wizard.step, WizardStep::Finish);
    assert_eq!(wizard.draft, before);
    assert!(wizard.submit_error.is_some());

    // Retry succeeds and sends the same content
    match wizard.submit(&api).await {
        SubmitOutcome::Created(_) => {}
        other => panic!("expected Created, got {other:?}"),
    }
    let submissions = api.submissions();
    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[0], submissions[1]);
}

#[test]
fn cancel_from_first_step_discards_without_network() {
    let mut wizard = WizardScreen::new();
    type_text(&mut wizard, "abandoned draft");
    assert_eq!(wizard.handle_key(key(KeyCode::Esc)), WizardResult::Cancel);
    // The caller drops the wizard; nothing was submitted (no api involved)
}
