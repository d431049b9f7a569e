//! Pending-item forms for the wizard steps.
//!
//! Each step editor keeps one in-progress form. `take()` validates the
//! required field, builds the entity with a fresh id, and resets the form;
//! the caller appends the entity through the draft's slice channel.

use crossterm::event::KeyCode;

use crate::model::{
    premium_hours, Activity, ActivityCategory, ActivityFormat, ActivityType, ContractVersion,
    EmploymentType, EntryMethod, JobPlanDraft, Objective, Resource, Specialty, MEDICAL_TITLES,
};
use crate::ui::form_field::FormField;

use super::types::ActivityTab;

// ─── Basic Info ─────────────────────────────────────────────────────────────

/// Fields of the basic-info step, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicField {
    Title,
    Hospital,
    TotalSessions,
    DccSessions,
    SpaSessions,
    Description,
    ContractVersion,
    EmploymentType,
    AgreedPas,
    PlaceOfWork,
    PrivatePractice,
    AlternativeEmployer,
    AlternativeEmployerName,
    MedicalTitles,
    AvailableWeeks,
    AvailableDays,
    Specialty,
    SpecialInterests,
}

impl BasicField {
    pub fn label(&self) -> &'static str {
        match self {
            BasicField::Title => "Job Plan Title *",
            BasicField::Hospital => "Hospital/Trust *",
            BasicField::TotalSessions => "Total Sessions per Week",
            BasicField::DccSessions => "DCC Sessions",
            BasicField::SpaSessions => "SPA Sessions",
            BasicField::Description => "Job Description",
            BasicField::ContractVersion => "Contract Version",
            BasicField::EmploymentType => "Employment Type",
            BasicField::AgreedPas => "Agreed PAs per Week",
            BasicField::PlaceOfWork => "Usual Place of Work",
            BasicField::PrivatePractice => "Private Practice",
            BasicField::AlternativeEmployer => "Alternative Employer",
            BasicField::AlternativeEmployerName => "Alternative Employer Name",
            BasicField::MedicalTitles => "Medical Titles",
            BasicField::AvailableWeeks => "Available Weeks (0-52)",
            BasicField::AvailableDays => "Available Days (0-6)",
            BasicField::Specialty => "Specialty",
            BasicField::SpecialInterests => "Special Interests",
        }
    }
}

/// Controlled-field editor over the draft's scalar, employment,
/// availability and specialty fields.
pub struct BasicInfoForm {
    title: FormField,
    hospital: FormField,
    total_sessions: FormField,
    dcc_sessions: FormField,
    spa_sessions: FormField,
    description: FormField,
    contract_version: FormField,
    employment_type: FormField,
    agreed_pas: FormField,
    place_of_work: FormField,
    private_practice: FormField,
    alternative_employer: FormField,
    alternative_employer_name: FormField,
    medical_titles: FormField,
    available_weeks: FormField,
    available_days: FormField,
    specialty: FormField,
    special_interests: FormField,
    /// Index into `visible_fields()`
    pub focused: usize,
}

impl BasicInfoForm {
    pub fn new() -> Self {
        let mut specialty_options = vec!["(none)".to_string()];
        specialty_options.extend(Specialty::all().iter().map(|s| s.label().to_string()));

        Self {
            title: FormField::text("e.g., Main Consultant Post"),
            hospital: FormField::text("e.g., Royal London Hospital"),
            total_sessions: FormField::integer("10"),
            dcc_sessions: FormField::number("7.5"),
            spa_sessions: FormField::number("2.5"),
            description: FormField::text_area("Main responsibilities and duties for this job plan"),
            contract_version: FormField::select(
                ContractVersion::all()
                    .iter()
                    .map(|c| c.label().to_string())
                    .collect(),
                0,
            ),
            employment_type: FormField::select(
                EmploymentType::all()
                    .iter()
                    .map(|e| e.label().to_string())
                    .collect(),
                0,
            ),
            agreed_pas: FormField::number("e.g., 6"),
            place_of_work: FormField::text("e.g., City General Hospital"),
            private_practice: FormField::toggle("Yes", "No"),
            alternative_employer: FormField::toggle("Yes", "No"),
            alternative_employer_name: FormField::text("Employer name"),
            medical_titles: FormField::multi(
                MEDICAL_TITLES.iter().map(|t| (*t).to_string()).collect(),
            ),
            available_weeks: FormField::integer("42"),
            available_days: FormField::integer("5"),
            specialty: FormField::select(specialty_options, 0),
            special_interests: FormField::multi(Vec::new()),
            focused: 0,
        }
    }

    /// Fields currently shown. Agreed PAs only while part-time; the
    /// alternative-employer name only while the flag is on.
    pub fn visible_fields(&self) -> Vec<BasicField> {
        let mut fields = vec![
            BasicField::Title,
            BasicField::Hospital,
            BasicField::TotalSessions,
            BasicField::DccSessions,
            BasicField::SpaSessions,
            BasicField::Description,
            BasicField::ContractVersion,
            BasicField::EmploymentType,
        ];
        if self.selected_employment_type() == EmploymentType::PartTime {
            fields.push(BasicField::AgreedPas);
        }
        fields.push(BasicField::PlaceOfWork);
        fields.push(BasicField::PrivatePractice);
        fields.push(BasicField::AlternativeEmployer);
        if self.alternative_employer.is_on() {
            fields.push(BasicField::AlternativeEmployerName);
        }
        fields.extend([
            BasicField::MedicalTitles,
            BasicField::AvailableWeeks,
            BasicField::AvailableDays,
            BasicField::Specialty,
            BasicField::SpecialInterests,
        ]);
        fields
    }

    pub fn field(&self, id: BasicField) -> &FormField {
        match id {
            BasicField::Title => &self.title,
            BasicField::Hospital => &self.hospital,
            BasicField::TotalSessions => &self.total_sessions,
            BasicField::DccSessions => &self.dcc_sessions,
            BasicField::SpaSessions => &self.spa_sessions,
            BasicField::Description => &self.description,
            BasicField::ContractVersion => &self.contract_version,
            BasicField::EmploymentType => &self.employment_type,
            BasicField::AgreedPas => &self.agreed_pas,
            BasicField::PlaceOfWork => &self.place_of_work,
            BasicField::PrivatePractice => &self.private_practice,
            BasicField::AlternativeEmployer => &self.alternative_employer,
            BasicField::AlternativeEmployerName => &self.alternative_employer_name,
            BasicField::MedicalTitles => &self.medical_titles,
            BasicField::AvailableWeeks => &self.available_weeks,
            BasicField::AvailableDays => &self.available_days,
            BasicField::Specialty => &self.specialty,
            BasicField::SpecialInterests => &self.special_interests,
        }
    }

    pub fn field_mut(&mut self, id: BasicField) -> &mut FormField {
        match id {
            BasicField::Title => &mut self.title,
            BasicField::Hospital => &mut self.hospital,
            BasicField::TotalSessions => &mut self.total_sessions,
            BasicField::DccSessions => &mut self.dcc_sessions,
            BasicField::SpaSessions => &mut self.spa_sessions,
            BasicField::Description => &mut self.description,
            BasicField::ContractVersion => &mut self.contract_version,
            BasicField::EmploymentType => &mut self.employment_type,
            BasicField::AgreedPas => &mut self.agreed_pas,
            BasicField::PlaceOfWork => &mut self.place_of_work,
            BasicField::PrivatePractice => &mut self.private_practice,
            BasicField::AlternativeEmployer => &mut self.alternative_employer,
            BasicField::AlternativeEmployerName => &mut self.alternative_employer_name,
            BasicField::MedicalTitles => &mut self.medical_titles,
            BasicField::AvailableWeeks => &mut self.available_weeks,
            BasicField::AvailableDays => &mut self.available_days,
            BasicField::Specialty => &mut self.specialty,
            BasicField::SpecialInterests => &mut self.special_interests,
        }
    }

    pub fn focused_field(&self) -> BasicField {
        let visible = self.visible_fields();
        visible[self.focused.min(visible.len() - 1)]
    }

    pub fn next_field(&mut self) {
        let len = self.visible_fields().len();
        self.focused = (self.focused + 1) % len;
    }

    pub fn prev_field(&mut self) {
        let len = self.visible_fields().len();
        self.focused = if self.focused == 0 {
            len - 1
        } else {
            self.focused - 1
        };
    }

    pub fn selected_employment_type(&self) -> EmploymentType {
        self.employment_type
            .selected_index()
            .and_then(|i| EmploymentType::all().get(i).copied())
            .unwrap_or_default()
    }

    pub fn selected_contract_version(&self) -> Option<ContractVersion> {
        self.contract_version
            .selected_index()
            .and_then(|i| ContractVersion::all().get(i).copied())
    }

    /// Selected specialty; index 0 is "(none)".
    pub fn selected_specialty(&self) -> Option<Specialty> {
        match self.specialty.selected_index() {
            Some(0) | None => None,
            Some(i) => Specialty::all().get(i - 1).copied(),
        }
    }

    /// Route a key to the focused field. A specialty change rebuilds (and
    /// thereby clears) the special-interest options, which are keyed by
    /// specialty.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let specialty_before = self.selected_specialty();
        let field = self.focused_field();
        let consumed = self.field_mut(field).handle_key(key);

        if self.selected_specialty() != specialty_before {
            self.rebuild_interests();
        }
        // Visibility may have shrunk (employment type or employer toggle)
        let len = self.visible_fields().len();
        self.focused = self.focused.min(len - 1);

        consumed
    }

    fn rebuild_interests(&mut self) {
        let options = self
            .selected_specialty()
            .map(|s| s.interests().iter().map(|i| (*i).to_string()).collect())
            .unwrap_or_default();
        self.special_interests = FormField::multi(options);
    }

    /// Write the form into the draft. Validation here is presence-only and
    /// deferred to submission; availability values are clamped.
    pub fn commit(&self, draft: &mut JobPlanDraft) {
        draft.title = self.title.value();
        draft.hospital = self.hospital.value();
        draft.total_sessions = self.total_sessions.int_value();
        draft.dcc_sessions = self.dcc_sessions.number_value();
        draft.spa_sessions = self.spa_sessions.number_value();
        draft.description = self.description.value();

        draft.employment.contract_version = self.selected_contract_version();
        draft.employment.employment_type = self.selected_employment_type();
        // Retained even while concealed for full-time posts
        draft.employment.agreed_pas = self.agreed_pas.number_value();
        draft.employment.usual_place_of_work = self.place_of_work.value();
        draft.employment.private_practice = self.private_practice.is_on();
        draft.employment.alternative_employer = self.alternative_employer.is_on();
        draft.employment.alternative_employer_name = self.alternative_employer_name.value();
        draft.employment.medical_titles = self.medical_titles.selected_options().into_iter().collect();

        draft
            .availability
            .set_weeks(self.available_weeks.int_value().unwrap_or(0).min(255) as u8);
        draft
            .availability
            .set_days(self.available_days.int_value().unwrap_or(0).min(255) as u8);

        draft.set_specialty(self.selected_specialty());
        for interest in self.special_interests.selected_options() {
            draft.toggle_special_interest(&interest);
        }
    }
}

// ─── Objectives ─────────────────────────────────────────────────────────────

/// Pending new-objective form.
pub struct ObjectiveForm {
    pub title: FormField,
    pub description: FormField,
    pub target: FormField,
    pub focused: usize,
}

impl ObjectiveForm {
    pub fn new() -> Self {
        Self {
            title: FormField::text("e.g., Improve patient satisfaction scores"),
            description: FormField::text_area("Detailed description of the objective"),
            target: FormField::text("e.g., Achieve 95% satisfaction rate"),
            focused: 0,
        }
    }

    pub fn labels() -> [&'static str; 3] {
        ["Objective Title *", "Description", "Target/Measure"]
    }

    pub fn fields_mut(&mut self) -> [&mut FormField; 3] {
        [&mut self.title, &mut self.description, &mut self.target]
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % 3;
    }

    pub fn prev_field(&mut self) {
        self.focused = if self.focused == 0 { 2 } else { self.focused - 1 };
    }

    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let focused = self.focused;
        self.fields_mut()[focused].handle_key(key)
    }

    /// Validate, build the objective, and reset the form.
    pub fn take(&mut self) -> Result<Objective, String> {
        if !self.title.is_valid(true) {
            return Err("Objective title is required".to_string());
        }
        let mut objective = Objective::new(self.title.value());
        objective.description = self.description.value();
        objective.target = self.target.value();

        self.title.clear();
        self.description.clear();
        self.target.clear();
        self.focused = 0;
        Ok(objective)
    }
}

// ─── Resources ──────────────────────────────────────────────────────────────

/// Pending new-resource form. Structurally the objectives pattern.
pub struct ResourceForm {
    pub name: FormField,
    pub resource_type: FormField,
    pub description: FormField,
    pub quantity: FormField,
    pub focused: usize,
}

impl ResourceForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("e.g., Clinic room, Equipment"),
            resource_type: FormField::text("e.g., Physical space, Equipment, Staff"),
            description: FormField::text_area("Detailed description of the resource requirements"),
            quantity: FormField::text("e.g., 1 room, 2 hours per week"),
            focused: 0,
        }
    }

    pub fn labels() -> [&'static str; 4] {
        ["Resource Name *", "Type", "Description", "Quantity/Allocation"]
    }

    pub fn fields_mut(&mut self) -> [&mut FormField; 4] {
        [
            &mut self.name,
            &mut self.resource_type,
            &mut self.description,
            &mut self.quantity,
        ]
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % 4;
    }

    pub fn prev_field(&mut self) {
        self.focused = if self.focused == 0 { 3 } else { self.focused - 1 };
    }

    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let focused = self.focused;
        self.fields_mut()[focused].handle_key(key)
    }

    /// Validate, build the resource, and reset the form.
    pub fn take(&mut self) -> Result<Resource, String> {
        if !self.name.is_valid(true) {
            return Err("Resource name is required".to_string());
        }
        let mut resource = Resource::new(self.name.value());
        resource.resource_type = self.resource_type.value();
        resource.description = self.description.value();
        resource.quantity = self.quantity.value();

        self.name.clear();
        self.resource_type.clear();
        self.description.clear();
        self.quantity.clear();
        self.focused = 0;
        Ok(resource)
    }
}

// ─── Activities ─────────────────────────────────────────────────────────────

/// Fields of the activities step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityField {
    Title,
    Description,
    Duration,
    Frequency,
    Category,
    Date,
    Time,
    Format,
    ActivityType,
    StartTime,
    EndTime,
    EntryMethod,
    Weeks,
    Delivered,
    TravelLinked,
    Location,
    FromLocation,
    ToLocation,
    PersonalObjective,
    Employer,
    Comment,
}

impl ActivityField {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityField::Title => "Activity Title *",
            ActivityField::Description => "Description",
            ActivityField::Duration => "Duration",
            ActivityField::Frequency => "Frequency",
            ActivityField::Category => "Category",
            ActivityField::Date => "Date *",
            ActivityField::Time => "Time",
            ActivityField::Format => "Format",
            ActivityField::ActivityType => "Activity Type",
            ActivityField::StartTime => "Start Time",
            ActivityField::EndTime => "End Time",
            ActivityField::EntryMethod => "Entry Method",
            ActivityField::Weeks => "Weeks (1-26)",
            ActivityField::Delivered => "Delivered Activities",
            ActivityField::TravelLinked => "Travel Time Linked",
            ActivityField::Location => "Location",
            ActivityField::FromLocation => "Travel From",
            ActivityField::ToLocation => "Travel To",
            ActivityField::PersonalObjective => "Personal Objective",
            ActivityField::Employer => "Employer",
            ActivityField::Comment => "Comment",
        }
    }
}

/// Pending new-activity form, shared across the three entry tabs.
pub struct ActivityForm {
    title: FormField,
    description: FormField,
    duration: FormField,
    frequency: FormField,
    category: FormField,
    date: FormField,
    time: FormField,
    format: FormField,
    activity_type: FormField,
    start_time: FormField,
    end_time: FormField,
    entry_method: FormField,
    weeks: FormField,
    delivered: FormField,
    travel_linked: FormField,
    location: FormField,
    from_location: FormField,
    to_location: FormField,
    personal_objective: FormField,
    employer: FormField,
    comment: FormField,
    /// Index into `visible_fields(tab)`
    pub focused: usize,
}

impl ActivityForm {
    pub fn new() -> Self {
        Self {
            title: FormField::text("e.g., Outpatient clinic"),
            description: FormField::text_area("Detailed description of the activity"),
            duration: FormField::text("e.g., 3 hours"),
            frequency: FormField::text("e.g., Weekly, Twice per week"),
            category: FormField::select(
                ActivityCategory::all()
                    .iter()
                    .map(|c| c.label().to_string())
                    .collect(),
                0,
            ),
            date: FormField::date(),
            time: FormField::time(),
            format: FormField::select(
                ActivityFormat::all()
                    .iter()
                    .map(|f| f.label().to_string())
                    .collect(),
                0,
            ),
            activity_type: FormField::select(
                ActivityType::all()
                    .iter()
                    .map(|t| t.label().to_string())
                    .collect(),
                0,
            ),
            start_time: FormField::time(),
            end_time: FormField::time(),
            entry_method: FormField::select(
                EntryMethod::all()
                    .iter()
                    .map(|m| m.label().to_string())
                    .collect(),
                0,
            ),
            weeks: FormField::weeks(),
            delivered: FormField::number("e.g., 42"),
            travel_linked: FormField::toggle("Yes", "No"),
            location: FormField::text("e.g., Clinic Room 3A"),
            from_location: FormField::text("e.g., Home"),
            to_location: FormField::text("e.g., City General"),
            personal_objective: FormField::text("Linked personal objective"),
            employer: FormField::text("e.g., City General NHS Trust"),
            comment: FormField::text("Anything else worth noting"),
            focused: 0,
        }
    }

    /// Fields shown on the given tab, respecting the entry method and
    /// travel-linked conditionals.
    pub fn visible_fields(&self, tab: ActivityTab) -> Vec<ActivityField> {
        match tab {
            ActivityTab::List => vec![
                ActivityField::Title,
                ActivityField::Description,
                ActivityField::Duration,
                ActivityField::Frequency,
                ActivityField::Category,
                ActivityField::Location,
            ],
            ActivityTab::Calendar => vec![
                ActivityField::Title,
                ActivityField::Date,
                ActivityField::Time,
                ActivityField::Duration,
                ActivityField::Category,
            ],
            ActivityTab::Timetabled => {
                let mut fields = vec![
                    ActivityField::Title,
                    ActivityField::Category,
                    ActivityField::Format,
                    ActivityField::ActivityType,
                    ActivityField::StartTime,
                    ActivityField::EndTime,
                    ActivityField::EntryMethod,
                ];
                match self.selected_entry_method() {
                    EntryMethod::Weekly => fields.push(ActivityField::Weeks),
                    EntryMethod::Annualised => fields.push(ActivityField::Delivered),
                }
                fields.push(ActivityField::TravelLinked);
                if self.travel_linked.is_on() {
                    fields.push(ActivityField::FromLocation);
                    fields.push(ActivityField::ToLocation);
                } else {
                    fields.push(ActivityField::Location);
                }
                fields.extend([
                    ActivityField::PersonalObjective,
                    ActivityField::Employer,
                    ActivityField::Comment,
                ]);
                fields
            }
        }
    }

    pub fn field(&self, id: ActivityField) -> &FormField {
        match id {
            ActivityField::Title => &self.title,
            ActivityField::Description => &self.description,
            ActivityField::Duration => &self.duration,
            ActivityField::Frequency => &self.frequency,
            ActivityField::Category => &self.category,
            ActivityField::Date => &self.date,
            ActivityField::Time => &self.time,
            ActivityField::Format => &self.format,
            ActivityField::ActivityType => &self.activity_type,
            ActivityField::StartTime => &self.start_time,
            ActivityField::EndTime => &self.end_time,
            ActivityField::EntryMethod => &self.entry_method,
            ActivityField::Weeks => &self.weeks,
            ActivityField::Delivered => &self.delivered,
            ActivityField::TravelLinked => &self.travel_linked,
            ActivityField::Location => &self.location,
            ActivityField::FromLocation => &self.from_location,
            ActivityField::ToLocation => &self.to_location,
            ActivityField::PersonalObjective => &self.personal_objective,
            ActivityField::Employer => &self.employer,
            ActivityField::Comment => &self.comment,
        }
    }

    pub fn field_mut(&mut self, id: ActivityField) -> &mut FormField {
        match id {
            ActivityField::Title => &mut self.title,
            ActivityField::Description => &mut self.description,
            ActivityField::Duration => &mut self.duration,
            ActivityField::Frequency => &mut self.frequency,
            ActivityField::Category => &mut self.category,
            ActivityField::Date => &mut self.date,
            ActivityField::Time => &mut self.time,
            ActivityField::Format => &mut self.format,
            ActivityField::ActivityType => &mut self.activity_type,
            ActivityField::StartTime => &mut self.start_time,
            ActivityField::EndTime => &mut self.end_time,
            ActivityField::EntryMethod => &mut self.entry_method,
            ActivityField::Weeks => &mut self.weeks,
            ActivityField::Delivered => &mut self.delivered,
            ActivityField::TravelLinked => &mut self.travel_linked,
            ActivityField::Location => &mut self.location,
            ActivityField::FromLocation => &mut self.from_location,
            ActivityField::ToLocation => &mut self.to_location,
            ActivityField::PersonalObjective => &mut self.personal_objective,
            ActivityField::Employer => &mut self.employer,
            ActivityField::Comment => &mut self.comment,
        }
    }

    pub fn focused_field(&self, tab: ActivityTab) -> ActivityField {
        let visible = self.visible_fields(tab);
        visible[self.focused.min(visible.len() - 1)]
    }

    pub fn next_field(&mut self, tab: ActivityTab) {
        let len = self.visible_fields(tab).len();
        self.focused = (self.focused + 1) % len;
    }

    pub fn prev_field(&mut self, tab: ActivityTab) {
        let len = self.visible_fields(tab).len();
        self.focused = if self.focused == 0 {
            len - 1
        } else {
            self.focused - 1
        };
    }

    pub fn handle_key(&mut self, tab: ActivityTab, key: KeyCode) -> bool {
        let field = self.focused_field(tab);
        let consumed = self.field_mut(field).handle_key(key);
        // Entry method and travel toggles change which fields exist
        let len = self.visible_fields(tab).len();
        self.focused = self.focused.min(len - 1);
        consumed
    }

    pub fn selected_category(&self) -> ActivityCategory {
        self.category
            .selected_index()
            .and_then(|i| ActivityCategory::all().get(i).copied())
            .unwrap_or(ActivityCategory::Other)
    }

    pub fn selected_entry_method(&self) -> EntryMethod {
        self.entry_method
            .selected_index()
            .and_then(|i| EntryMethod::all().get(i).copied())
            .unwrap_or(EntryMethod::Weekly)
    }

    fn selected_format(&self) -> ActivityFormat {
        self.format
            .selected_index()
            .and_then(|i| ActivityFormat::all().get(i).copied())
            .unwrap_or(ActivityFormat::Flexible)
    }

    fn selected_activity_type(&self) -> ActivityType {
        self.activity_type
            .selected_index()
            .and_then(|i| ActivityType::all().get(i).copied())
            .unwrap_or(ActivityType::Core)
    }

    /// Premium hours for the currently entered window. Recomputed from the
    /// live field values, so it tracks every start/end edit.
    pub fn premium_preview(&self) -> Option<f64> {
        match (self.start_time.time_value(), self.end_time.time_value()) {
            (Some(start), Some(end)) => Some(premium_hours(start, end)),
            _ => None,
        }
    }

    /// Validate, build the activity for the given tab, and reset the form.
    pub fn take(&mut self, tab: ActivityTab) -> Result<Activity, String> {
        if !self.title.is_valid(true) {
            return Err("Activity title is required".to_string());
        }
        if tab == ActivityTab::Calendar && self.date.date_value().is_none() {
            return Err("Calendar activities need a date (YYYY-MM-DD)".to_string());
        }

        let mut activity = Activity::new(self.title.value(), self.selected_category());
        activity.description = self.description.value();
        activity.duration = self.duration.value();
        activity.frequency = self.frequency.value();

        match tab {
            ActivityTab::List => {
                activity.location = self.location.value();
            }
            ActivityTab::Calendar => {
                activity.date = self.date.date_value();
                activity.time = self.time.time_value();
            }
            ActivityTab::Timetabled => {
                activity.activity_format = self.selected_format();
                activity.activity_type = self.selected_activity_type();
                activity.set_times(self.start_time.time_value(), self.end_time.time_value());
                activity.entry_method = self.selected_entry_method();
                // The two entry methods are mutually exclusive per activity
                match activity.entry_method {
                    EntryMethod::Weekly => {
                        activity.set_selected_weeks(self.weeks.selected_weeks());
                        activity.delivered_activities = None;
                    }
                    EntryMethod::Annualised => {
                        activity.delivered_activities = self.delivered.number_value();
                    }
                }
                activity.travel_time_linked = self.travel_linked.is_on();
                if activity.travel_time_linked {
                    activity.from_location = self.from_location.value();
                    activity.to_location = self.to_location.value();
                } else {
                    activity.location = self.location.value();
                }
                activity.personal_objective = self.personal_objective.value();
                activity.employer = self.employer.value();
                activity.comment = self.comment.value();
            }
        }

        self.reset();
        Ok(activity)
    }

    fn reset(&mut self) {
        *self = ActivityForm::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DraftUpdate;

    fn type_text(form_field: &mut FormField, text: &str) {
        for c in text.chars() {
            form_field.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_objective_take_requires_title() {
        let mut form = ObjectiveForm::new();
        assert!(form.take().is_err());

        type_text(&mut form.title, "Reduce waiting times");
        let objective = form.take().unwrap();
        assert_eq!(objective.title, "Reduce waiting times");
        // Form resets after a successful take
        assert!(form.take().is_err());
    }

    #[test]
    fn test_resource_take_requires_name() {
        let mut form = ResourceForm::new();
        type_text(&mut form.name, "   ");
        assert!(form.take().is_err());
    }

    #[test]
    fn test_activity_calendar_requires_date() {
        let mut form = ActivityForm::new();
        type_text(form.field_mut(ActivityField::Title), "Theatre list");
        assert!(form.take(ActivityTab::Calendar).is_err());

        form.field_mut(ActivityField::Date).set_value("2025-03-14");
        let activity = form.take(ActivityTab::Calendar).unwrap();
        assert!(activity.date.is_some());
    }

    #[test]
    fn test_activity_entry_methods_mutually_exclusive() {
        let mut form = ActivityForm::new();
        type_text(form.field_mut(ActivityField::Title), "On-call");
        // Weekly entry with some weeks picked
        form.field_mut(ActivityField::Weeks).handle_key(KeyCode::Char(' '));
        type_text(form.field_mut(ActivityField::Delivered), "40");

        let activity = form.take(ActivityTab::Timetabled).unwrap();
        assert_eq!(activity.entry_method, EntryMethod::Weekly);
        assert!(!activity.selected_weeks.is_empty());
        assert_eq!(activity.delivered_activities, None);
    }

    #[test]
    fn test_activity_premium_preview_tracks_times() {
        let mut form = ActivityForm::new();
        assert_eq!(form.premium_preview(), None);
        form.field_mut(ActivityField::StartTime).set_value("20:00");
        form.field_mut(ActivityField::EndTime).set_value("02:00");
        assert_eq!(form.premium_preview(), Some(6.00));
        form.field_mut(ActivityField::EndTime).set_value("21:00");
        assert_eq!(form.premium_preview(), Some(1.00));
    }

    #[test]
    fn test_basic_form_specialty_change_clears_interests() {
        let mut form = BasicInfoForm::new();
        // Focus the specialty field and pick Cardiology
        let idx = form
            .visible_fields()
            .iter()
            .position(|f| *f == BasicField::Specialty)
            .unwrap();
        form.focused = idx;
        form.handle_key(KeyCode::Down); // (none) -> Anaesthetics
        form.handle_key(KeyCode::Down); // -> Cardiology
        assert_eq!(form.selected_specialty(), Some(Specialty::Cardiology));

        // Pick an interest
        let idx = form
            .visible_fields()
            .iter()
            .position(|f| *f == BasicField::SpecialInterests)
            .unwrap();
        form.focused = idx;
        form.handle_key(KeyCode::Char(' '));
        assert!(!form.field(BasicField::SpecialInterests).selected_options().is_empty());

        // Change specialty again: interests must be cleared
        let idx = form
            .visible_fields()
            .iter()
            .position(|f| *f == BasicField::Specialty)
            .unwrap();
        form.focused = idx;
        form.handle_key(KeyCode::Down);
        assert!(form.field(BasicField::SpecialInterests).selected_options().is_empty());
    }

    #[test]
    fn test_basic_form_agreed_pas_conditional() {
        let mut form = BasicInfoForm::new();
        assert!(!form.visible_fields().contains(&BasicField::AgreedPas));

        let idx = form
            .visible_fields()
            .iter()
            .position(|f| *f == BasicField::EmploymentType)
            .unwrap();
        form.focused = idx;
        form.handle_key(KeyCode::Down); // Full time -> Part time
        assert!(form.visible_fields().contains(&BasicField::AgreedPas));
    }

    #[test]
    fn test_basic_commit_round_trip() {
        let mut form = BasicInfoForm::new();
        type_text(form.field_mut(BasicField::Title), "Main Consultant Post");
        type_text(form.field_mut(BasicField::Hospital), "Royal London Hospital");
        type_text(form.field_mut(BasicField::TotalSessions), "10");
        type_text(form.field_mut(BasicField::DccSessions), "7.5");
        type_text(form.field_mut(BasicField::AvailableWeeks), "99");

        let mut draft = JobPlanDraft::new();
        form.commit(&mut draft);
        assert_eq!(draft.title, "Main Consultant Post");
        assert_eq!(draft.total_sessions, Some(10));
        assert_eq!(draft.dcc_sessions, Some(7.5));
        // Clamped to the valid range
        assert_eq!(draft.availability.available_weeks, 52);

        // Slice channel untouched by basic-info commit
        draft.apply(DraftUpdate::Comments("done".to_string()));
        assert_eq!(draft.comments, "done");
    }
}
