use serde::Serialize;

use crate::contact::sink::SubmitError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Phone)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone Number",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Required fields left empty. Any content counts, formats are not checked.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Submitted,
    Failed { reason: String },
}

impl SubmissionStatus {
    /// Inputs accept edits and the submit button is enabled.
    pub fn is_editable(&self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Failed { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    MissingFields(Vec<FormField>),
    /// A submission is in flight or its confirmation is still showing.
    Busy,
}

/// The contact form's fields together with where its submission stands.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactFlow {
    form: ContactForm,
    status: SubmissionStatus,
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFlow {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Applies an input change. Ignored while the form is frozen.
    pub fn edit(&mut self, field: FormField, value: String) -> bool {
        if !self.status.is_editable() {
            return false;
        }
        self.form.set(field, value);
        true
    }

    /// Moves to `Submitting` and hands back the values to deliver.
    pub fn submit(&mut self) -> Result<ContactForm, Rejection> {
        if !self.status.is_editable() {
            return Err(Rejection::Busy);
        }
        let missing = self.form.missing_required();
        if !missing.is_empty() {
            return Err(Rejection::MissingFields(missing));
        }
        self.status = SubmissionStatus::Submitting;
        Ok(self.form.clone())
    }

    /// Records the sink's answer. Only meaningful while submitting.
    pub fn resolve(&mut self, result: Result<(), SubmitError>) -> bool {
        if self.status != SubmissionStatus::Submitting {
            return false;
        }
        self.status = match result {
            Ok(()) => SubmissionStatus::Submitted,
            Err(err) => SubmissionStatus::Failed {
                reason: err.to_string(),
            },
        };
        true
    }

    /// The confirmation has been on screen long enough; start over empty.
    pub fn confirmation_elapsed(&mut self) -> bool {
        if self.status != SubmissionStatus::Submitted {
            return false;
        }
        self.form = ContactForm::default();
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Back to editing after a failure, keeping what was typed.
    pub fn dismiss_failure(&mut self) -> bool {
        if !matches!(self.status, SubmissionStatus::Failed { .. }) {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFlow {
        let mut flow = ContactFlow::new();
        flow.edit(FormField::Name, "Jane Doe".into());
        flow.edit(FormField::Email, "jane@x.com".into());
        flow.edit(FormField::Subject, "Inquiry".into());
        flow.edit(FormField::Message, "Hi".into());
        flow
    }

    #[test]
    fn starts_idle_and_empty() {
        let flow = ContactFlow::new();
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
        assert_eq!(flow.form(), &ContactForm::default());
    }

    #[test]
    fn phone_is_the_only_optional_field() {
        let required: Vec<FormField> = FormField::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(
            required,
            vec![FormField::Name, FormField::Email, FormField::Subject, FormField::Message]
        );
    }

    #[test]
    fn submit_moves_to_submitting_immediately() {
        let mut flow = filled();
        let sent = flow.submit().unwrap();
        assert_eq!(flow.status(), &SubmissionStatus::Submitting);
        assert_eq!(sent.name, "Jane Doe");
        assert_eq!(sent.phone, "");
    }

    #[test]
    fn no_second_submission_while_one_is_in_flight() {
        let mut flow = filled();
        flow.submit().unwrap();
        assert_eq!(flow.submit(), Err(Rejection::Busy));
        assert!(!flow.edit(FormField::Name, "Someone Else".into()));
        assert_eq!(flow.form().name, "Jane Doe");
    }

    #[test]
    fn any_missing_required_field_keeps_the_form_idle() {
        for field in [FormField::Name, FormField::Email, FormField::Subject, FormField::Message] {
            let mut flow = filled();
            flow.edit(field, String::new());
            assert_eq!(flow.submit(), Err(Rejection::MissingFields(vec![field])));
            assert_eq!(flow.status(), &SubmissionStatus::Idle);
        }
    }

    #[test]
    fn whitespace_counts_as_filled_in() {
        let mut flow = filled();
        flow.edit(FormField::Name, " ".into());
        let sent = flow.submit().unwrap();
        assert_eq!(sent.name, " ");
        assert_eq!(flow.status(), &SubmissionStatus::Submitting);
    }

    #[test]
    fn email_shape_is_not_validated() {
        let mut flow = filled();
        flow.edit(FormField::Email, "not-an-email".into());
        assert!(flow.submit().is_ok());
    }

    #[test]
    fn successful_round_trip_clears_the_form() {
        let mut flow = filled();
        flow.submit().unwrap();
        assert!(flow.resolve(Ok(())));
        assert_eq!(flow.status(), &SubmissionStatus::Submitted);
        assert_eq!(flow.form().name, "Jane Doe");

        assert!(flow.confirmation_elapsed());
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
        for field in FormField::ALL {
            assert_eq!(flow.form().get(field), "");
        }
    }

    #[test]
    fn failure_keeps_fields_and_allows_retry() {
        let mut flow = filled();
        flow.submit().unwrap();
        flow.resolve(Err(SubmitError::Rejected { status: 503, message: "down".into() }));
        assert!(matches!(flow.status(), SubmissionStatus::Failed { .. }));
        assert_eq!(flow.form().message, "Hi");

        assert!(flow.edit(FormField::Message, "Hi again".into()));
        let retried = flow.submit().unwrap();
        assert_eq!(retried.message, "Hi again");
        assert_eq!(flow.status(), &SubmissionStatus::Submitting);
    }

    #[test]
    fn dismissing_a_failure_returns_to_idle() {
        let mut flow = filled();
        flow.submit().unwrap();
        flow.resolve(Err(SubmitError::Network("offline".into())));
        assert!(flow.dismiss_failure());
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
        assert_eq!(flow.form().email, "jane@x.com");
    }

    #[test]
    fn stray_events_are_ignored() {
        let mut flow = filled();
        assert!(!flow.resolve(Ok(())));
        assert!(!flow.confirmation_elapsed());
        assert!(!flow.dismiss_failure());
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn serialized_form_omits_empty_phone() {
        let mut flow = filled();
        let body = serde_json::to_value(flow.submit().unwrap()).unwrap();
        assert_eq!(body["name"], "Jane Doe");
        assert!(body.get("phone").is_none());
    }
}
