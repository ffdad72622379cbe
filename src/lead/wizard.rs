//! Step machine behind the lead form.
//!
//! `Step(0)..=Step(4)` walk the fields in [`FIELDS`] order; `ThankYou` is
//! reached only by a successful submission and has no way back.

use thiserror::Error;

use super::fields::{validate_all, validate_field, FieldDescriptor, LeadField, LeadFormData, ValidationErrors, FIELDS, FIELD_COUNT};

pub const LAST_STEP: usize = FIELD_COUNT - 1;

/// How long the thank-you screen stays up before returning to the host page.
pub const THANK_YOU_DELAY_MS: u32 = 3_000;

pub const GENERIC_SUBMIT_ERROR: &str = "We couldn't send your details. Please check your connection and try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardState {
    Step(usize),
    ThankYou,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("could not encode lead: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("lead endpoint answered with status {0}")]
    Status(u16),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRejected {
    /// A request is already in flight.
    Busy,
    Invalid(ValidationErrors),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadWizard {
    data: LeadFormData,
    errors: ValidationErrors,
    state: WizardState,
    submitting: bool,
    submit_error: Option<String>,
}

impl Default for LeadWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadWizard {
    pub fn new() -> Self {
        Self {
            data: LeadFormData::default(),
            errors: ValidationErrors::new(),
            state: WizardState::Step(0),
            submitting: false,
            submit_error: None,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn data(&self) -> &LeadFormData {
        &self.data
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: LeadField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_last_step(&self) -> bool {
        self.state == WizardState::Step(LAST_STEP)
    }

    /// Descriptor of the field on screen, `None` once thanked.
    pub fn current_field(&self) -> Option<&'static FieldDescriptor> {
        match self.state {
            WizardState::Step(i) => FIELDS.get(i),
            WizardState::ThankYou => None,
        }
    }

    /// Stores a new value. A field already flagged is re-checked so the
    /// message goes away as soon as the input becomes valid.
    pub fn set_value(&mut self, field: LeadField, value: String) {
        if self.errors.contains_key(&field) {
            match validate_field(field, &value) {
                Some(err) => {
                    self.errors.insert(field, err);
                }
                None => {
                    self.errors.remove(&field);
                }
            }
        }
        self.data.set(field, value);
    }

    /// Returns whether the step index moved.
    pub fn advance(&mut self) -> bool {
        let WizardState::Step(step) = self.state else {
            return false;
        };
        let field = FIELDS[step].field;
        if let Some(err) = validate_field(field, self.data.get(field)) {
            self.errors.insert(field, err);
            return false;
        }
        self.errors.remove(&field);
        let next = (step + 1).min(LAST_STEP);
        self.state = WizardState::Step(next);
        next != step
    }

    pub fn retreat(&mut self) -> bool {
        let WizardState::Step(step) = self.state else {
            return false;
        };
        self.state = WizardState::Step(step.saturating_sub(1));
        step != 0
    }

    /// Validates everything and, if clean, marks a submission in flight and
    /// hands back the payload to POST. Exactly one caller gets the payload
    /// until [`LeadWizard::finish_submit`] runs.
    pub fn begin_submit(&mut self) -> Result<LeadFormData, SubmitRejected> {
        if self.submitting || self.state == WizardState::ThankYou {
            return Err(SubmitRejected::Busy);
        }
        let errors = validate_all(&self.data);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitRejected::Invalid(errors));
        }
        self.errors.clear();
        self.submit_error = None;
        self.submitting = true;
        Ok(self.data.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.state = WizardState::ThankYou;
                self.submit_error = None;
            }
            Err(_) => {
                self.submit_error = Some(GENERIC_SUBMIT_ERROR.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_and_advance(wizard: &mut LeadWizard, field: LeadField, value: &str) {
        wizard.set_value(field, value.to_string());
        wizard.advance();
    }

    #[test]
    fn starts_on_first_step() {
        let wizard = LeadWizard::new();
        assert_eq!(wizard.state(), WizardState::Step(0));
        assert_eq!(wizard.current_field().map(|d| d.field), Some(LeadField::Name));
    }

    #[test]
    fn invalid_field_blocks_advance_and_records_error() {
        let mut wizard = LeadWizard::new();
        assert!(!wizard.advance());
        assert_eq!(wizard.state(), WizardState::Step(0));
        assert_eq!(wizard.error_for(LeadField::Name), Some("Name is required"));

        wizard.set_value(LeadField::Name, "A".into());
        assert_eq!(wizard.error_for(LeadField::Name), None);
        assert!(wizard.advance());
        assert_eq!(wizard.state(), WizardState::Step(1));
    }

    #[test]
    fn editing_a_flagged_field_updates_its_message() {
        let mut wizard = LeadWizard::new();
        wizard.set_value(LeadField::Name, "A".into());
        wizard.advance();
        wizard.set_value(LeadField::Email, "nope".into());
        wizard.advance();
        assert_eq!(wizard.error_for(LeadField::Email), Some("Please enter a valid email address"));
        wizard.set_value(LeadField::Email, "".into());
        assert_eq!(wizard.error_for(LeadField::Email), Some("Email is required"));
    }

    #[test]
    fn advance_clamps_at_last_step_and_retreat_at_first() {
        let mut wizard = LeadWizard::new();
        assert!(!wizard.retreat());
        assert_eq!(wizard.state(), WizardState::Step(0));

        fill_and_advance(&mut wizard, LeadField::Name, "A");
        fill_and_advance(&mut wizard, LeadField::Email, "a@b.com");
        fill_and_advance(&mut wizard, LeadField::Mobile, "9876543210");
        fill_and_advance(&mut wizard, LeadField::CompanyName, "C");
        assert!(wizard.is_last_step());
        wizard.set_value(LeadField::Location, "L".into());
        assert!(!wizard.advance());
        assert_eq!(wizard.state(), WizardState::Step(LAST_STEP));

        assert!(wizard.retreat());
        assert_eq!(wizard.state(), WizardState::Step(LAST_STEP - 1));
    }

    #[test]
    fn submit_with_missing_fields_surfaces_all_errors() {
        let mut wizard = LeadWizard::new();
        wizard.set_value(LeadField::Name, "A".into());
        match wizard.begin_submit() {
            Err(SubmitRejected::Invalid(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(wizard.errors().len(), 4);
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.state(), WizardState::Step(0));
    }

    #[test]
    fn full_walkthrough_submits_once_and_thanks() {
        let mut wizard = LeadWizard::new();
        fill_and_advance(&mut wizard, LeadField::Name, "A");
        fill_and_advance(&mut wizard, LeadField::Email, "a@b.com");
        fill_and_advance(&mut wizard, LeadField::Mobile, "9876543210");
        fill_and_advance(&mut wizard, LeadField::CompanyName, "C");
        wizard.set_value(LeadField::Location, "L".into());
        assert_eq!(wizard.state(), WizardState::Step(4));

        let payload = wizard.begin_submit().expect("valid form");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "mobile": "9876543210",
                "companyName": "C",
                "location": "L",
            })
        );
        assert!(wizard.is_submitting());
        assert_eq!(wizard.begin_submit(), Err(SubmitRejected::Busy));

        wizard.finish_submit(Ok(()));
        assert_eq!(wizard.state(), WizardState::ThankYou);
        assert!(wizard.current_field().is_none());
        assert!(!wizard.advance());
        assert!(!wizard.retreat());
    }

    #[test]
    fn padded_mobile_never_reaches_the_payload() {
        let mut wizard = LeadWizard::new();
        fill_and_advance(&mut wizard, LeadField::Name, "A");
        fill_and_advance(&mut wizard, LeadField::Email, " a@b.com ");
        assert_eq!(wizard.state(), WizardState::Step(1));
        fill_and_advance(&mut wizard, LeadField::Email, "a@b.com");
        fill_and_advance(&mut wizard, LeadField::Mobile, " 9876543210 ");
        assert_eq!(wizard.state(), WizardState::Step(2));
        assert!(wizard.error_for(LeadField::Mobile).is_some());

        wizard.data.set(LeadField::CompanyName, "C".into());
        wizard.data.set(LeadField::Location, "L".into());
        match wizard.begin_submit() {
            Err(SubmitRejected::Invalid(errors)) => {
                assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![LeadField::Mobile]);
            }
            other => panic!("unexpected {:?}", other),
        }

        wizard.set_value(LeadField::Mobile, "9876543210".into());
        let payload = wizard.begin_submit().expect("valid form");
        assert_eq!(payload.mobile, "9876543210");
        assert_eq!(payload.email, "a@b.com");
    }

    #[test]
    fn failed_submission_stays_on_step_with_generic_error() {
        let mut wizard = LeadWizard::new();
        for d in FIELDS.iter() {
            let value = match d.field {
                LeadField::Email => "a@b.com",
                LeadField::Mobile => "9876543210",
                _ => "x",
            };
            fill_and_advance(&mut wizard, d.field, value);
        }
        wizard.begin_submit().expect("valid form");
        wizard.finish_submit(Err(SubmitError::Status(500)));
        assert_eq!(wizard.state(), WizardState::Step(LAST_STEP));
        assert_eq!(wizard.submit_error(), Some(GENERIC_SUBMIT_ERROR));
        assert!(!wizard.is_submitting());

        // manual retry is allowed
        assert!(wizard.begin_submit().is_ok());
        assert_eq!(wizard.submit_error(), None);
    }
}
