//! The in-progress job-plan draft edited across wizard steps.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::activity::Activity;
use super::objective::Objective;
use super::resource::Resource;
use super::specialty::Specialty;

/// Medical titles offered in the basic-info multi-select.
pub const MEDICAL_TITLES: &[&str] = &[
    "Consultant",
    "Associate Specialist",
    "Specialty Doctor",
    "Clinical Lecturer",
    "Clinical Fellow",
];

/// Consultant contract version the post is held under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractVersion {
    England2003,
    Wales2003,
    Scotland2004,
}

impl ContractVersion {
    pub fn all() -> &'static [ContractVersion] {
        &[
            ContractVersion::England2003,
            ContractVersion::Wales2003,
            ContractVersion::Scotland2004,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContractVersion::England2003 => "2003 (England)",
            ContractVersion::Wales2003 => "2003 (Wales)",
            ContractVersion::Scotland2004 => "2004 (Scotland)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
}

impl EmploymentType {
    pub fn all() -> &'static [EmploymentType] {
        &[EmploymentType::FullTime, EmploymentType::PartTime]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full time",
            EmploymentType::PartTime => "Part time",
        }
    }
}

/// Employment sub-fields of the draft.
///
/// `agreed_pas` is meaningful only while `employment_type` is part-time; the
/// wizard conceals it otherwise but the value is retained, not deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentDetails {
    pub contract_version: Option<ContractVersion>,
    pub employment_type: EmploymentType,
    /// Agreed programmed activities per week (part-time posts)
    pub agreed_pas: Option<f64>,
    #[serde(default)]
    pub usual_place_of_work: String,
    pub private_practice: bool,
    pub alternative_employer: bool,
    #[serde(default)]
    pub alternative_employer_name: String,
    #[serde(default)]
    pub medical_titles: BTreeSet<String>,
}

/// Availability sub-fields, clamped to their valid ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub available_weeks: u8,
    pub available_days: u8,
}

impl Availability {
    pub fn set_weeks(&mut self, weeks: u8) {
        self.available_weeks = weeks.min(52);
    }

    pub fn set_days(&mut self, days: u8) {
        self.available_days = days.min(6);
    }
}

/// Wholesale replacement of one named slice of the draft.
///
/// The single mutation channel for collection state: step editors validate,
/// build the full new sequence, and apply it here. No partial merges.
#[derive(Debug, Clone)]
pub enum DraftUpdate {
    Objectives(Vec<Objective>),
    Resources(Vec<Resource>),
    Activities(Vec<Activity>),
    CalendarActivities(Vec<Activity>),
    Comments(String),
}

/// The single mutable aggregate for one in-progress job plan.
///
/// Created empty when the wizard opens and discarded on submission or
/// cancellation; nothing is persisted locally between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPlanDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub hospital: String,
    pub total_sessions: Option<u32>,
    pub dcc_sessions: Option<f64>,
    pub spa_sessions: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub employment: EmploymentDetails,
    #[serde(default)]
    pub availability: Availability,
    pub specialty: Option<Specialty>,
    #[serde(default)]
    pub special_interests: BTreeSet<String>,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub calendar_activities: Vec<Activity>,
    #[serde(default)]
    pub comments: String,
}

impl JobPlanDraft {
    /// Fresh draft: all collections empty, all scalars empty/zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one named slice wholesale. No validation at this layer.
    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Objectives(items) => self.objectives = items,
            DraftUpdate::Resources(items) => self.resources = items,
            DraftUpdate::Activities(items) => self.activities = items,
            DraftUpdate::CalendarActivities(items) => self.calendar_activities = items,
            DraftUpdate::Comments(text) => self.comments = text,
        }
    }

    /// Change the specialty, clearing any chosen special interests.
    ///
    /// The interest catalog is keyed by specialty; stale selections would
    /// reference options no longer offered.
    pub fn set_specialty(&mut self, specialty: Option<Specialty>) {
        if self.specialty != specialty {
            self.special_interests.clear();
        }
        self.specialty = specialty;
    }

    /// Toggle a special interest. Interests not offered by the current
    /// specialty are rejected, preserving the subset invariant.
    pub fn toggle_special_interest(&mut self, interest: &str) -> bool {
        let Some(specialty) = self.specialty else {
            return false;
        };
        if !specialty.offers_interest(interest) {
            return false;
        }
        if !self.special_interests.remove(interest) {
            self.special_interests.insert(interest.to_string());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::activity::ActivityCategory;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = JobPlanDraft::new();
        assert!(draft.title.is_empty());
        assert!(draft.objectives.is_empty());
        assert!(draft.resources.is_empty());
        assert!(draft.activities.is_empty());
        assert!(draft.calendar_activities.is_empty());
        assert_eq!(draft.total_sessions, None);
    }

    #[test]
    fn test_apply_replaces_slice_wholesale() {
        let mut draft = JobPlanDraft::new();
        draft.apply(DraftUpdate::Objectives(vec![Objective::new("One")]));
        draft.apply(DraftUpdate::Objectives(vec![
            Objective::new("Two"),
            Objective::new("Three"),
        ]));
        let titles: Vec<_> = draft.objectives.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Two", "Three"]);
    }

    #[test]
    fn test_apply_calendar_activities() {
        let mut draft = JobPlanDraft::new();
        draft.apply(DraftUpdate::CalendarActivities(vec![Activity::new(
            "Theatre list",
            ActivityCategory::Dcc,
        )]));
        assert_eq!(draft.calendar_activities.len(), 1);
        assert!(draft.activities.is_empty());
    }

    #[test]
    fn test_changing_specialty_clears_interests() {
        let mut draft = JobPlanDraft::new();
        draft.set_specialty(Some(Specialty::Cardiology));
        assert!(draft.toggle_special_interest("Heart failure"));
        assert!(!draft.special_interests.is_empty());

        draft.set_specialty(Some(Specialty::Radiology));
        assert!(draft.special_interests.is_empty());
    }

    #[test]
    fn test_same_specialty_keeps_interests() {
        let mut draft = JobPlanDraft::new();
        draft.set_specialty(Some(Specialty::Cardiology));
        draft.toggle_special_interest("Heart failure");

        draft.set_specialty(Some(Specialty::Cardiology));
        assert!(draft.special_interests.contains("Heart failure"));
    }

    #[test]
    fn test_interest_from_other_specialty_rejected() {
        let mut draft = JobPlanDraft::new();
        draft.set_specialty(Some(Specialty::Cardiology));
        assert!(!draft.toggle_special_interest("Colorectal surgery"));
        assert!(draft.special_interests.is_empty());
    }

    #[test]
    fn test_availability_clamped() {
        let mut availability = Availability::default();
        availability.set_weeks(60);
        availability.set_days(9);
        assert_eq!(availability.available_weeks, 52);
        assert_eq!(availability.available_days, 6);
    }
}
