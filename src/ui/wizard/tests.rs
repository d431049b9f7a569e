//! Tests for the job-plan wizard

use std::sync::atomic::{AtomicUsize, Ordering};

use crossterm::event::KeyCode;

use super::forms::ActivityField;
use super::types::*;
use super::{SubmitOutcome, WizardScreen};
use crate::api::{ApiError, JobPlanApi, SubmitReceipt};
use crate::model::{Activity, JobPlanDraft};

/// Endpoint stub that counts calls and fails on demand.
struct StubApi {
    fail: bool,
    calls: AtomicUsize,
}

impl StubApi {
    fn ok() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl JobPlanApi for StubApi {
    async fn create_job_plan(&self, _draft: &JobPlanDraft) -> Result<SubmitReceipt, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(ApiError::http(500, "Internal Server Error"))
        } else {
            Ok(SubmitReceipt {
                id: Some("jp-1".to_string()),
                body: serde_json::json!({"id": "jp-1"}),
            })
        }
    }

    async fn create_activity(&self, _activity: &Activity) -> Result<SubmitReceipt, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SubmitReceipt {
            id: None,
            body: serde_json::json!({}),
        })
    }
}

fn type_into_title(wizard: &mut WizardScreen, text: &str) {
    for c in text.chars() {
        wizard.objective_form.title.handle_key(KeyCode::Char(c));
    }
}

// ─── Step sequencing ────────────────────────────────────────────────────────

#[test]
fn test_new_wizard_starts_at_basic_info_with_empty_draft() {
    let wizard = WizardScreen::new();
    assert_eq!(wizard.step, WizardStep::BasicInfo);
    assert_eq!(wizard.draft, JobPlanDraft::new());
    assert!(!wizard.submitting());
}

#[test]
fn test_advance_walks_the_fixed_sequence() {
    let mut wizard = WizardScreen::new();
    let expected = [
        WizardStep::Objectives,
        WizardStep::Resources,
        WizardStep::Activities,
        WizardStep::Summary,
        WizardStep::Finish,
    ];
    for step in expected {
        wizard.advance();
        assert_eq!(wizard.step, step);
    }
}

#[test]
fn test_advance_is_noop_at_finish() {
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Finish;
    wizard.advance();
    assert_eq!(wizard.step, WizardStep::Finish);
}

#[test]
fn test_retreat_is_noop_at_basic_info() {
    let mut wizard = WizardScreen::new();
    wizard.retreat();
    assert_eq!(wizard.step, WizardStep::BasicInfo);
}

#[test]
fn test_confirm_at_finish_requests_submission() {
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Finish;
    assert_eq!(wizard.confirm(), WizardResult::Submit);
    // The cursor does not move
    assert_eq!(wizard.step, WizardStep::Finish);
}

#[test]
fn test_go_back_at_basic_info_cancels() {
    let mut wizard = WizardScreen::new();
    assert_eq!(wizard.go_back(), WizardResult::Cancel);
}

#[test]
fn test_go_back_retreats_elsewhere() {
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Resources;
    assert_eq!(wizard.go_back(), WizardResult::Continue);
    assert_eq!(wizard.step, WizardStep::Objectives);
}

// ─── Item editing ───────────────────────────────────────────────────────────

#[test]
fn test_add_objective_assigns_unique_ids_in_order() {
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Objectives;

    type_into_title(&mut wizard, "First");
    wizard.add_objective();
    type_into_title(&mut wizard, "Second");
    wizard.add_objective();
    type_into_title(&mut wizard, "Third");
    wizard.add_objective();

    let titles: Vec<_> = wizard
        .draft
        .objectives
        .iter()
        .map(|o| o.title.as_str())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);

    let mut ids: Vec<_> = wizard.draft.objectives.iter().map(|o| o.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_add_blank_objective_rejected_with_message() {
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Objectives;
    wizard.add_objective();
    assert!(wizard.draft.objectives.is_empty());
    assert!(wizard.validation_message.is_some());

    // A successful add clears the message
    type_into_title(&mut wizard, "Real objective");
    wizard.add_objective();
    assert!(wizard.validation_message.is_none());
}

#[test]
fn test_remove_objective_keeps_the_rest_in_order() {
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Objectives;
    for title in ["A", "B", "C"] {
        type_into_title(&mut wizard, title);
        wizard.add_objective();
    }

    let middle = wizard.draft.objectives[1].id;
    wizard.remove_objective(middle);

    let titles: Vec<_> = wizard
        .draft
        .objectives
        .iter()
        .map(|o| o.title.as_str())
        .collect();
    assert_eq!(titles, vec!["A", "C"]);
}

#[test]
fn test_remove_selected_item_via_list() {
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Objectives;
    for title in ["A", "B"] {
        type_into_title(&mut wizard, title);
        wizard.add_objective();
    }

    wizard.select_next_item(); // selects index 0
    wizard.remove_selected_item();
    assert_eq!(wizard.draft.objectives.len(), 1);
    assert_eq!(wizard.draft.objectives[0].title, "B");
}

#[test]
fn test_activity_tab_routes_to_owning_collection() {
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Activities;

    wizard
        .activity_form
        .field_mut(ActivityField::Title)
        .set_value("Ward round");
    wizard.add_activity();
    assert_eq!(wizard.draft.activities.len(), 1);
    assert!(wizard.draft.calendar_activities.is_empty());

    wizard.activity_tab = ActivityTab::Calendar;
    wizard
        .activity_form
        .field_mut(ActivityField::Title)
        .set_value("Theatre list");
    wizard
        .activity_form
        .field_mut(ActivityField::Date)
        .set_value("2025-06-06");
    wizard.add_activity();
    assert_eq!(wizard.draft.calendar_activities.len(), 1);
    assert_eq!(wizard.draft.activities.len(), 1);
}

// ─── Submission ─────────────────────────────────────────────────────────────

#[test]
fn test_begin_submit_rejects_second_request() {
    let mut wizard = WizardScreen::new();
    assert!(wizard.begin_submit());
    assert!(wizard.submitting());
    assert!(!wizard.begin_submit());
}

#[tokio::test]
async fn test_submit_success_makes_one_call() {
    let api = StubApi::ok();
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Finish;

    match wizard.submit(&api).await {
        SubmitOutcome::Created(receipt) => assert_eq!(receipt.id.as_deref(), Some("jp-1")),
        other => panic!("expected Created, got {other:?}"),
    }
    assert_eq!(api.call_count(), 1);
    assert!(!wizard.submitting());
}

#[tokio::test]
async fn test_submit_failure_preserves_draft_and_step() {
    let api = StubApi::failing();
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Objectives;
    type_into_title(&mut wizard, "Keep me");
    wizard.add_objective();
    wizard.step = WizardStep::Finish;

    let before = wizard.draft.clone();
    match wizard.submit(&api).await {
        SubmitOutcome::Failed => {}
        other => panic!("expected Failed, got {other:?}"),
    }

    assert_eq!(api.call_count(), 1);
    assert_eq!(wizard.draft, before);
    assert_eq!(wizard.step, WizardStep::Finish);
    assert!(wizard.submit_error.is_some());
    // The guard is released so the user can retry
    assert!(!wizard.submitting());
}

#[tokio::test]
async fn test_submit_while_in_flight_is_ignored() {
    let api = StubApi::ok();
    let mut wizard = WizardScreen::new();
    wizard.step = WizardStep::Finish;

    assert!(wizard.begin_submit());
    match wizard.submit(&api).await {
        SubmitOutcome::AlreadyInFlight => {}
        other => panic!("expected AlreadyInFlight, got {other:?}"),
    }
    assert_eq!(api.call_count(), 0);
}
