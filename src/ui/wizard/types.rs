//! Type definitions for the job-plan wizard

/// Steps in the job-plan wizard, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Title, hospital, sessions, employment, availability, specialty
    BasicInfo,
    /// Personal and service objectives
    Objectives,
    /// Required resources
    Resources,
    /// List, calendar and timetabled activities
    Activities,
    /// Read-only review of the whole draft
    Summary,
    /// Final comments and submission
    Finish,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::BasicInfo,
            WizardStep::Objectives,
            WizardStep::Resources,
            WizardStep::Activities,
            WizardStep::Summary,
            WizardStep::Finish,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::Objectives => "Objectives",
            WizardStep::Resources => "Resources",
            WizardStep::Activities => "Activities",
            WizardStep::Summary => "Summary",
            WizardStep::Finish => "Finish",
        }
    }

    /// Next step in sequence; the last step is its own successor.
    pub fn next(&self) -> WizardStep {
        match self {
            WizardStep::BasicInfo => WizardStep::Objectives,
            WizardStep::Objectives => WizardStep::Resources,
            WizardStep::Resources => WizardStep::Activities,
            WizardStep::Activities => WizardStep::Summary,
            WizardStep::Summary => WizardStep::Finish,
            WizardStep::Finish => WizardStep::Finish,
        }
    }

    /// Previous step in sequence; the first step is its own predecessor.
    pub fn prev(&self) -> WizardStep {
        match self {
            WizardStep::BasicInfo => WizardStep::BasicInfo,
            WizardStep::Objectives => WizardStep::BasicInfo,
            WizardStep::Resources => WizardStep::Objectives,
            WizardStep::Activities => WizardStep::Resources,
            WizardStep::Summary => WizardStep::Activities,
            WizardStep::Finish => WizardStep::Summary,
        }
    }

    pub fn index(&self) -> usize {
        WizardStep::all().iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Result of wizard key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResult {
    /// Stay in the wizard
    Continue,
    /// Discard the draft and return to the dashboard
    Cancel,
    /// Submit the draft to the persistence endpoint
    Submit,
}

/// Entry tabs on the Activities step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTab {
    /// Quick list entry: title, duration, frequency, category
    List,
    /// Calendar-bound entry: a specific date and start time
    Calendar,
    /// Full timetable entry: window, entry method, travel, employer
    Timetabled,
}

impl ActivityTab {
    pub fn all() -> &'static [ActivityTab] {
        &[
            ActivityTab::List,
            ActivityTab::Calendar,
            ActivityTab::Timetabled,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityTab::List => "List",
            ActivityTab::Calendar => "Calendar",
            ActivityTab::Timetabled => "Timetabled",
        }
    }

    pub fn next(&self) -> ActivityTab {
        match self {
            ActivityTab::List => ActivityTab::Calendar,
            ActivityTab::Calendar => ActivityTab::Timetabled,
            ActivityTab::Timetabled => ActivityTab::List,
        }
    }
}
