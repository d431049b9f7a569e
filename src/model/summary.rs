//! Read-only summary projection over a draft.

use std::collections::BTreeMap;

use super::activity::ActivityCategory;
use super::draft::JobPlanDraft;

/// Aggregate counts derived from a draft. Recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSummary {
    pub objectives: usize,
    pub resources: usize,
    /// Combined count across list and calendar activities
    pub activities: usize,
    by_category: BTreeMap<ActivityCategory, usize>,
}

impl DraftSummary {
    /// Tally the draft. The per-category map always carries all six
    /// categories, zero when unused.
    pub fn of(draft: &JobPlanDraft) -> Self {
        let mut by_category: BTreeMap<ActivityCategory, usize> =
            ActivityCategory::all().iter().map(|c| (*c, 0)).collect();

        for activity in draft.activities.iter().chain(&draft.calendar_activities) {
            *by_category.entry(activity.category).or_insert(0) += 1;
        }

        Self {
            objectives: draft.objectives.len(),
            resources: draft.resources.len(),
            activities: draft.activities.len() + draft.calendar_activities.len(),
            by_category,
        }
    }

    pub fn count(&self, category: ActivityCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    /// Category tallies in display order.
    pub fn category_counts(&self) -> impl Iterator<Item = (ActivityCategory, usize)> + '_ {
        ActivityCategory::all().iter().map(|c| (*c, self.count(*c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::activity::Activity;
    use crate::model::draft::DraftUpdate;

    #[test]
    fn test_empty_draft_summary() {
        let summary = DraftSummary::of(&JobPlanDraft::new());
        assert_eq!(summary.objectives, 0);
        assert_eq!(summary.resources, 0);
        assert_eq!(summary.activities, 0);
        for (_, count) in summary.category_counts() {
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_category_tally_spans_both_collections() {
        let mut draft = JobPlanDraft::new();
        draft.apply(DraftUpdate::Activities(vec![Activity::new(
            "Clinic",
            ActivityCategory::Dcc,
        )]));
        draft.apply(DraftUpdate::CalendarActivities(vec![
            Activity::new("Theatre", ActivityCategory::Dcc),
            Activity::new("Audit", ActivityCategory::Spa),
        ]));

        let summary = DraftSummary::of(&draft);
        assert_eq!(summary.activities, 3);
        assert_eq!(summary.count(ActivityCategory::Dcc), 2);
        assert_eq!(summary.count(ActivityCategory::Spa), 1);
        assert_eq!(summary.count(ActivityCategory::Admin), 0);
        assert_eq!(summary.count(ActivityCategory::Research), 0);
        assert_eq!(summary.count(ActivityCategory::Teaching), 0);
        assert_eq!(summary.count(ActivityCategory::Other), 0);
    }

    #[test]
    fn test_all_six_categories_always_present() {
        let summary = DraftSummary::of(&JobPlanDraft::new());
        assert_eq!(summary.category_counts().count(), 6);
    }
}
