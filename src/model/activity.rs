//! Activity records and the premium-hours derivation.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Session category an activity counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityCategory {
    #[serde(rename = "DCC")]
    Dcc,
    #[serde(rename = "SPA")]
    Spa,
    Admin,
    Research,
    Teaching,
    Other,
}

impl ActivityCategory {
    pub fn all() -> &'static [ActivityCategory] {
        &[
            ActivityCategory::Dcc,
            ActivityCategory::Spa,
            ActivityCategory::Admin,
            ActivityCategory::Research,
            ActivityCategory::Teaching,
            ActivityCategory::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Dcc => "DCC",
            ActivityCategory::Spa => "SPA",
            ActivityCategory::Admin => "Admin",
            ActivityCategory::Research => "Research",
            ActivityCategory::Teaching => "Teaching",
            ActivityCategory::Other => "Other",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityCategory::Dcc => "Direct Clinical Care",
            ActivityCategory::Spa => "Supporting Professional Activities",
            ActivityCategory::Admin => "Administrative duties",
            ActivityCategory::Research => "Research sessions",
            ActivityCategory::Teaching => "Teaching and training",
            ActivityCategory::Other => "Anything else",
        }
    }
}

/// Whether an activity sits in a fixed weekly timetable slot or floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityFormat {
    Timetabled,
    Flexible,
}

impl ActivityFormat {
    pub fn all() -> &'static [ActivityFormat] {
        &[ActivityFormat::Timetabled, ActivityFormat::Flexible]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityFormat::Timetabled => "Timetabled",
            ActivityFormat::Flexible => "Flexible",
        }
    }
}

/// Contractual classification of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    Core,
    #[serde(rename = "APA")]
    Apa,
    #[serde(rename = "ATC")]
    Atc,
}

impl ActivityType {
    pub fn all() -> &'static [ActivityType] {
        &[ActivityType::Core, ActivityType::Apa, ActivityType::Atc]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Core => "Core",
            ActivityType::Apa => "APA",
            ActivityType::Atc => "ATC",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityType::Core => "Core programmed activity",
            ActivityType::Apa => "Additional programmed activity",
            ActivityType::Atc => "Additional time commitment",
        }
    }
}

/// How a timetabled activity's frequency is entered.
///
/// The two methods are mutually exclusive per activity: `selected_weeks` is
/// semantically active under `Weekly`, `delivered_activities` under
/// `Annualised`. Both fields coexist in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryMethod {
    Weekly,
    Annualised,
}

impl EntryMethod {
    pub fn all() -> &'static [EntryMethod] {
        &[EntryMethod::Weekly, EntryMethod::Annualised]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryMethod::Weekly => "Weekly",
            EntryMethod::Annualised => "Annualised",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EntryMethod::Weekly => "Pick the weeks (1-26) this activity runs in",
            EntryMethod::Annualised => "Enter a delivered-activity count for the year",
        }
    }
}

/// Errors from parsing user-entered times of day.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("invalid time of day: {0:?} (expected HH:MM)")]
    Invalid(String),
}

/// Parse a user-entered "HH:MM" time of day.
pub fn parse_time(input: &str) -> Result<NaiveTime, TimeParseError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| TimeParseError::Invalid(input.to_string()))
}

const MINUTES_PER_DAY: i64 = 24 * 60;
/// Premium window opens at 19:00 on the reference day...
const PREMIUM_START_MIN: i64 = 19 * 60;
/// ...and closes at 06:00 the following day.
const PREMIUM_END_MIN: i64 = 30 * 60;

/// Hours of `[start, end)` falling inside the out-of-hours premium window
/// (19:00 reference day through 06:00 next day), rounded to two decimals.
///
/// Both times are times-of-day anchored to the reference day; an end at or
/// before the start means the activity runs into the next calendar day.
pub fn premium_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let start_min = i64::from(start.hour()) * 60 + i64::from(start.minute());
    let mut end_min = i64::from(end.hour()) * 60 + i64::from(end.minute());
    if end_min <= start_min {
        end_min += MINUTES_PER_DAY;
    }

    let overlap = (end_min.min(PREMIUM_END_MIN) - start_min.max(PREMIUM_START_MIN)).max(0);
    round2(overlap as f64 / 60.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A single job-plan activity.
///
/// Canonical superset of the quick list entry, the calendar-bound entry
/// (`date`/`time` set), and the fully timetabled entry
/// (`start_time`/`end_time`/`entry_method` set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier, assigned at creation and never reused
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free text, e.g. "3 hours"
    #[serde(default)]
    pub duration: String,
    /// Free text, e.g. "Weekly", "Twice per week"
    #[serde(default)]
    pub frequency: String,
    pub category: ActivityCategory,
    /// Calendar day for calendar-bound activities
    pub date: Option<NaiveDate>,
    /// Start time for calendar-bound activities
    pub time: Option<NaiveTime>,
    pub activity_format: ActivityFormat,
    pub activity_type: ActivityType,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// Derived from `start_time`/`end_time`; kept in sync by `set_times`
    pub premium_hours: f64,
    pub entry_method: EntryMethod,
    /// Weeks 1-26 the activity runs in (Weekly entry)
    pub selected_weeks: BTreeSet<u8>,
    /// Delivered-activity count for the year (Annualised entry)
    pub delivered_activities: Option<f64>,
    pub travel_time_linked: bool,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub from_location: String,
    #[serde(default)]
    pub to_location: String,
    #[serde(default)]
    pub personal_objective: String,
    #[serde(default)]
    pub employer: String,
    #[serde(default)]
    pub comment: String,
}

impl Activity {
    pub fn new(title: impl Into<String>, category: ActivityCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            duration: String::new(),
            frequency: String::new(),
            category,
            date: None,
            time: None,
            activity_format: ActivityFormat::Flexible,
            activity_type: ActivityType::Core,
            start_time: None,
            end_time: None,
            premium_hours: 0.0,
            entry_method: EntryMethod::Weekly,
            selected_weeks: BTreeSet::new(),
            delivered_activities: None,
            travel_time_linked: false,
            location: String::new(),
            from_location: String::new(),
            to_location: String::new(),
            personal_objective: String::new(),
            employer: String::new(),
            comment: String::new(),
        }
    }

    /// Set the timetabled window and refresh the derived premium hours.
    pub fn set_times(&mut self, start: Option<NaiveTime>, end: Option<NaiveTime>) {
        self.start_time = start;
        self.end_time = end;
        self.premium_hours = match (start, end) {
            (Some(s), Some(e)) => premium_hours(s, e),
            _ => 0.0,
        };
    }

    /// Replace the selected weeks, discarding anything outside 1-26.
    pub fn set_selected_weeks(&mut self, weeks: impl IntoIterator<Item = u8>) {
        self.selected_weeks = weeks.into_iter().filter(|w| (1..=26).contains(w)).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> NaiveTime {
        parse_time(s).unwrap()
    }

    #[test]
    fn test_premium_hours_crossing_midnight() {
        // 20:00-02:00 sits entirely inside the 19:00-06:00 window
        assert_eq!(premium_hours(time("20:00"), time("02:00")), 6.00);
    }

    #[test]
    fn test_premium_hours_daytime_is_zero() {
        assert_eq!(premium_hours(time("09:00"), time("17:00")), 0.00);
    }

    #[test]
    fn test_premium_hours_partial_overlap() {
        // 17:00-21:00 overlaps the window from 19:00
        assert_eq!(premium_hours(time("17:00"), time("21:00")), 2.00);
        // 22:30-07:00 overlaps until 06:00
        assert_eq!(premium_hours(time("22:30"), time("07:00")), 7.50);
    }

    #[test]
    fn test_premium_hours_equal_times_spans_full_day() {
        // end == start means a 24h span; window is 11h long
        assert_eq!(premium_hours(time("08:00"), time("08:00")), 11.00);
    }

    #[test]
    fn test_set_times_recomputes_premium_hours() {
        let mut act = Activity::new("On-call cover", ActivityCategory::Dcc);
        act.set_times(Some(time("20:00")), Some(time("02:00")));
        assert_eq!(act.premium_hours, 6.00);

        act.set_times(Some(time("09:00")), Some(time("17:00")));
        assert_eq!(act.premium_hours, 0.00);

        act.set_times(None, Some(time("17:00")));
        assert_eq!(act.premium_hours, 0.00);
    }

    #[test]
    fn test_selected_weeks_bounded_and_sorted() {
        let mut act = Activity::new("Clinic", ActivityCategory::Dcc);
        act.set_selected_weeks([12, 3, 26, 0, 27, 3]);
        assert_eq!(act.selected_weeks.iter().copied().collect::<Vec<_>>(), vec![3, 12, 26]);
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert!(parse_time("25:61").is_err());
        assert!(parse_time("noon").is_err());
        assert_eq!(parse_time(" 08:30 ").unwrap(), time("08:30"));
    }

    #[test]
    fn test_category_wire_labels() {
        let json = serde_json::to_string(&ActivityCategory::Dcc).unwrap();
        assert_eq!(json, "\"DCC\"");
        let json = serde_json::to_string(&ActivityCategory::Spa).unwrap();
        assert_eq!(json, "\"SPA\"");
    }
}
