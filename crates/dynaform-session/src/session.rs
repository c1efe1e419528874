//! The form session state machine

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use dynaform_schema::{FieldDescriptor, FormType, FormValues, SchemaCatalog};
use dynaform_store::{Record, RecordId};
use dynaform_validation::{
    FieldResult, ValidationReport, is_blank, validate_field, validate_form, validate_value,
};

use crate::context::EditContext;
use crate::progress::completion_progress;
use crate::{Error, Result};

/// Lifecycle state of a form session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No form selected
    #[default]
    Idle,
    /// A form is selected and accepting input
    Editing,
}

/// Whether a submit created a new record or revised an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Disposition {
    Created,
    Updated(RecordId),
}

/// Outcome of a successful submit, ready for the host to store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Form type the values were captured under
    pub form_type: FormType,
    /// Values normalized to exactly the declared field names
    pub data: FormValues,
    /// Create-vs-update reconciliation result
    pub disposition: Disposition,
}

impl Submission {
    /// Split into the disposition and a storable record
    #[must_use]
    pub fn into_record(self) -> (Disposition, Record) {
        (self.disposition, Record::new(self.form_type, self.data))
    }
}

/// Point-in-time view of the session, everything a renderer needs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub form_type: Option<FormType>,
    pub fields: Vec<FieldDescriptor>,
    pub values: FormValues,
    pub errors: ValidationReport,
    pub progress: f64,
    pub editing: Option<RecordId>,
}

/// One user's walk through a form: type selection, field edits, submit.
///
/// The session owns its values, per-field errors, and progress; it never
/// touches the record store. Hosts apply the returned [`Submission`] to a
/// store and translate errors into user-facing messages.
#[derive(Debug)]
pub struct FormSession {
    catalog: Arc<SchemaCatalog>,
    state: SessionState,
    form_type: Option<FormType>,
    fields: Vec<FieldDescriptor>,
    values: FormValues,
    errors: ValidationReport,
    progress: f64,
    edit: Option<EditContext>,
}

impl FormSession {
    /// Create an idle session over a shared catalog
    #[must_use]
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        Self {
            catalog,
            state: SessionState::Idle,
            form_type: None,
            fields: Vec::new(),
            values: FormValues::new(),
            errors: ValidationReport::new(),
            progress: 0.0,
            edit: None,
        }
    }

    /// Select the form type to fill out.
    ///
    /// Values, errors, and progress reset; an active edit context is kept, so
    /// switching type mid-edit still revises the same record on submit.
    ///
    /// # Errors
    ///
    /// Fails with a schema error when the type is not in the catalog; the
    /// session is left untouched.
    pub fn select_type(&mut self, form_type: FormType) -> Result<()> {
        let fields = self.catalog.lookup(form_type)?.to_vec();
        debug!("Form type selected: {}", form_type);
        self.form_type = Some(form_type);
        self.fields = fields;
        self.values.clear();
        self.errors.clear();
        self.progress = 0.0;
        self.state = SessionState::Editing;
        Ok(())
    }

    /// Load a stored record's values for revision.
    ///
    /// The field list comes fresh from the catalog and every field is
    /// revalidated, so a date that expired since the record was stored
    /// resurfaces as an error here. Data keys with no descriptor are kept in
    /// the value map but not validated.
    ///
    /// # Errors
    ///
    /// Fails with a schema error when the context's type is not in the
    /// catalog; the session is left untouched.
    pub fn load_for_edit(&mut self, context: EditContext) -> Result<()> {
        let fields = self.catalog.lookup(context.form_type)?.to_vec();
        debug!("Editing record {} ({})", context.id, context.form_type);
        self.form_type = Some(context.form_type);
        self.fields = fields;
        self.values = context.data.clone();
        self.errors = validate_form(&self.fields, &self.values);
        self.progress = completion_progress(&self.fields, &self.values);
        self.state = SessionState::Editing;
        self.edit = Some(context);
        Ok(())
    }

    /// Record a keystroke: store the raw value, revalidate that one field,
    /// and refresh progress.
    pub fn change_field(&mut self, name: &str, raw_value: &str) {
        self.values.insert(name.to_string(), raw_value.to_string());
        let result = match self.fields.iter().find(|f| f.name == name) {
            Some(field) => validate_field(field, raw_value),
            // No descriptor: only content rules can apply
            None if is_blank(raw_value) => FieldResult::valid(),
            None => validate_value(name, raw_value),
        };
        self.errors.record(name, result);
        self.progress = completion_progress(&self.fields, &self.values);
        trace!("Field {} changed, progress {:.0}%", name, self.progress);
    }

    /// Validate everything and hand the values to the host.
    ///
    /// On success the session returns to idle and the edit context, if any,
    /// is consumed into an `Updated` disposition. The data snapshot carries
    /// exactly the declared field names; untouched fields submit as empty
    /// strings and stray keys drop out.
    ///
    /// # Errors
    ///
    /// `EmptySubmission` when no type is selected or every declared field is
    /// blank; `ValidationFailed` with the full report when any rule fails.
    /// Both leave the form as it was so the user can keep typing.
    pub fn submit(&mut self) -> Result<Submission> {
        let Some(form_type) = self.form_type else {
            return Err(Error::EmptySubmission);
        };

        let untouched = self
            .fields
            .iter()
            .all(|field| self.values.get(&field.name).is_none_or(|v| is_blank(v)));
        if untouched {
            return Err(Error::EmptySubmission);
        }

        let report = validate_form(&self.fields, &self.values);
        if report.has_errors() {
            debug!("Submit blocked: {} field errors", report.len());
            self.errors = report.clone();
            return Err(Error::ValidationFailed(report));
        }

        let data: FormValues = self
            .fields
            .iter()
            .map(|field| {
                let value = self.values.get(&field.name).cloned().unwrap_or_default();
                (field.name.clone(), value)
            })
            .collect();

        let disposition = match self.edit.take() {
            Some(context) => Disposition::Updated(context.id),
            None => Disposition::Created,
        };
        debug!("Form {} submitted: {:?}", form_type, disposition);

        self.clear_form();
        Ok(Submission {
            form_type,
            data,
            disposition,
        })
    }

    /// Abandon the current form and any edit context
    pub fn reset(&mut self) {
        debug!("Session reset");
        self.edit = None;
        self.clear_form();
    }

    fn clear_form(&mut self) {
        self.form_type = None;
        self.fields.clear();
        self.values.clear();
        self.errors.clear();
        self.progress = 0.0;
        self.state = SessionState::Idle;
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Selected form type, if any
    #[must_use]
    pub fn form_type(&self) -> Option<FormType> {
        self.form_type
    }

    /// Descriptors of the active form, in declaration order
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Raw values as typed so far
    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Per-field errors as of the latest change
    #[must_use]
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    /// Completion percentage over required fields
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// The edit context, when revising a stored record
    #[must_use]
    pub fn editing(&self) -> Option<&EditContext> {
        self.edit.as_ref()
    }

    /// Clone out everything a renderer needs
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            form_type: self.form_type,
            fields: self.fields.clone(),
            values: self.values.clone(),
            errors: self.errors.clone(),
            progress: self.progress,
            editing: self.edit.as_ref().map(|context| context.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_session() -> FormSession {
        FormSession::new(Arc::new(SchemaCatalog::builtin()))
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = create_test_session();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.form_type().is_none());
        assert!(session.fields().is_empty());
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_select_type_enters_editing() {
        let mut session = create_test_session();
        session.select_type(FormType::UserInfo).unwrap();

        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(session.form_type(), Some(FormType::UserInfo));
        assert_eq!(session.fields().len(), 3);
        assert!(session.values().is_empty());
    }

    #[test]
    fn test_select_type_clears_previous_input() {
        let mut session = create_test_session();
        session.select_type(FormType::UserInfo).unwrap();
        session.change_field("firstName", "Ann");
        session.change_field("age", "999");
        assert!(session.errors().has_errors());

        session.select_type(FormType::Address).unwrap();
        assert!(session.values().is_empty());
        assert!(!session.errors().has_errors());
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_select_type_fails_on_empty_catalog() {
        let mut session = FormSession::new(Arc::new(SchemaCatalog::new()));
        let err = session.select_type(FormType::Payment).unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_change_field_records_error_then_clears_it() {
        let mut session = create_test_session();
        session.select_type(FormType::UserInfo).unwrap();

        session.change_field("age", "500");
        assert_eq!(
            session.errors().get("age"),
            Some("age must be between 1 and 120.")
        );

        session.change_field("age", "50");
        assert_eq!(session.errors().get("age"), None);
    }

    #[test]
    fn test_change_field_blank_required_reports_required() {
        let mut session = create_test_session();
        session.select_type(FormType::UserInfo).unwrap();

        session.change_field("firstName", "Ann");
        session.change_field("firstName", "");
        assert_eq!(
            session.errors().get("firstName"),
            Some("firstName is required.")
        );
    }

    #[test]
    fn test_change_field_tracks_progress() {
        let mut session = create_test_session();
        session.select_type(FormType::UserInfo).unwrap();
        assert_eq!(session.progress(), 0.0);

        session.change_field("firstName", "Ann");
        let after_one = session.progress();
        assert!(after_one > 0.0 && after_one < 100.0);

        session.change_field("lastName", "Lee");
        assert!(session.progress() > after_one);

        session.change_field("age", "30");
        assert_eq!(session.progress(), 100.0);

        // Clearing a required field pulls the figure back down
        session.change_field("lastName", "");
        assert!(session.progress() < 100.0);
    }

    #[test]
    fn test_change_field_unknown_name_uses_content_rules_only() {
        let mut session = create_test_session();
        session.select_type(FormType::UserInfo).unwrap();

        // Not declared for userInfo: blank is fine, but content rules still bite
        session.change_field("legacyNote", "");
        assert_eq!(session.errors().get("legacyNote"), None);

        session.change_field("zipCode", "12");
        assert_eq!(
            session.errors().get("zipCode"),
            Some("zipCode must be a 6-digit number.")
        );
    }

    #[test]
    fn test_submit_without_selection_is_empty_submission() {
        let mut session = create_test_session();
        let err = session.submit().unwrap_err();
        assert!(matches!(err, Error::EmptySubmission));
    }

    #[test]
    fn test_submit_empty_form_fails_and_keeps_editing() {
        let mut session = create_test_session();
        session.select_type(FormType::UserInfo).unwrap();

        let err = session.submit().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot submit an empty form. Please fill out the required fields."
        );
        assert_eq!(session.state(), SessionState::Editing);
    }

    #[test]
    fn test_submit_whitespace_only_counts_as_empty() {
        let mut session = create_test_session();
        session.select_type(FormType::UserInfo).unwrap();
        session.change_field("firstName", "   ");

        assert!(matches!(session.submit().unwrap_err(), Error::EmptySubmission));
    }

    #[test]
    fn test_submit_validation_failure_reports_untouched_fields_too() {
        let mut session = create_test_session();
        session.select_type(FormType::UserInfo).unwrap();
        session.change_field("firstName", "Ann");

        let err = session.submit().unwrap_err();
        let Error::ValidationFailed(report) = err else {
            panic!("expected validation failure");
        };
        assert_eq!(report.get("lastName"), Some("lastName is required."));
        assert_eq!(report.get("age"), Some("age is required."));

        // Session still editing, errors visible, values intact
        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(session.errors().len(), 2);
        assert_eq!(session.values().get("firstName").unwrap(), "Ann");
    }

    #[test]
    fn test_submit_success_resets_to_idle() {
        let mut session = create_test_session();
        session.select_type(FormType::UserInfo).unwrap();
        session.change_field("firstName", "Ann");
        session.change_field("lastName", "Lee");
        session.change_field("age", "30");

        let submission = session.submit().unwrap();
        assert_eq!(submission.form_type, FormType::UserInfo);
        assert_eq!(submission.disposition, Disposition::Created);
        assert_eq!(submission.data.get("firstName").unwrap(), "Ann");
        assert_eq!(submission.data.get("age").unwrap(), "30");

        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.form_type().is_none());
        assert!(session.values().is_empty());
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_submit_normalizes_to_declared_fields() {
        let mut catalog = SchemaCatalog::new();
        catalog
            .register(
                FormType::UserInfo,
                vec![
                    FieldDescriptor::text("firstName", "First Name").required(),
                    FieldDescriptor::text("nickname", "Nickname"),
                ],
            )
            .unwrap();

        let mut session = FormSession::new(Arc::new(catalog));
        session.select_type(FormType::UserInfo).unwrap();
        session.change_field("firstName", "Ann");
        session.change_field("strayKey", "whatever");

        let submission = session.submit().unwrap();
        assert_eq!(submission.data.len(), 2);
        assert_eq!(submission.data.get("firstName").unwrap(), "Ann");
        // Untouched optional field submits as an empty string
        assert_eq!(submission.data.get("nickname").unwrap(), "");
        assert!(!submission.data.contains_key("strayKey"));
    }

    #[test]
    fn test_reset_clears_edit_context() {
        let mut session = create_test_session();
        let mut data = FormValues::new();
        data.insert("firstName".to_string(), "Ann".to_string());
        data.insert("lastName".to_string(), "Lee".to_string());
        data.insert("age".to_string(), "30".to_string());

        let mut store = dynaform_store::RecordStore::new();
        let id = store.append(Record::new(FormType::UserInfo, data));
        session
            .load_for_edit(EditContext::for_record(id, store.get(id).unwrap()))
            .unwrap();
        assert!(session.editing().is_some());

        session.reset();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.editing().is_none());

        // A fresh submit after reset creates rather than updates
        session.select_type(FormType::UserInfo).unwrap();
        session.change_field("firstName", "Ben");
        session.change_field("lastName", "Ray");
        session.change_field("age", "41");
        let submission = session.submit().unwrap();
        assert_eq!(submission.disposition, Disposition::Created);
    }

    #[test]
    fn test_snapshot_mirrors_session_state() {
        let mut session = create_test_session();
        session.select_type(FormType::Address).unwrap();
        session.change_field("city", "Austin");
        session.change_field("zipCode", "12");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, SessionState::Editing);
        assert_eq!(snapshot.form_type, Some(FormType::Address));
        assert_eq!(snapshot.fields.len(), 4);
        assert_eq!(snapshot.values.get("city").unwrap(), "Austin");
        assert!(snapshot.errors.get("zipCode").is_some());
        assert!(snapshot.editing.is_none());

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"formType\":\"address\""));
        assert!(json.contains("\"state\":\"editing\""));
    }
}
