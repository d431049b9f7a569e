//! Typed records for job-plan drafts.
//!
//! The draft is owned by the wizard screen and mutated only through the
//! slice-replacement channel on [`JobPlanDraft`]; entities are never edited
//! in place.

mod activity;
mod draft;
mod objective;
mod resource;
mod specialty;
mod summary;

pub use activity::{
    parse_time, premium_hours, Activity, ActivityCategory, ActivityFormat, ActivityType,
    EntryMethod, TimeParseError,
};
pub use draft::{
    Availability, ContractVersion, DraftUpdate, EmploymentDetails, EmploymentType, JobPlanDraft,
    MEDICAL_TITLES,
};
pub use objective::Objective;
pub use resource::Resource;
pub use specialty::Specialty;
pub use summary::DraftSummary;
