use std::collections::HashMap;

use crate::event::{Action, CheckboxField, FieldChange, FileField, TextField};
use crate::state::FormState;
use crate::validate::{validate_text, ValidationError};
use crate::Field;

/// Last validation outcome per field. Fields never touched have no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorMap {
    entries: HashMap<Field, Option<ValidationError>>,
}

impl ErrorMap {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.entries.get(&field).copied().flatten()
    }

    /// Overwrites `field` only; every other entry keeps its previous outcome.
    pub fn set(&mut self, field: Field, outcome: Result<(), ValidationError>) {
        self.entries.insert(field, outcome.err());
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registration<F> {
    pub form: FormState<F>,
    pub errors: ErrorMap,
    pub submitted: bool,
}

impl<F> Default for Registration<F> {
    fn default() -> Self {
        Registration {
            form: FormState::default(),
            errors: ErrorMap::default(),
            submitted: false,
        }
    }
}

impl<F> Registration<F> {
    pub fn reduce(self, action: Action<F>) -> Self {
        match action {
            Action::Change(change) => self.apply(change),
            Action::Submit => self.submit(),
        }
    }

    /// Stores one new value and re-validates that field alone.
    ///
    /// Other fields keep their old messages even when the change affects
    /// them: editing the password does not re-check an existing confirmation.
    pub fn apply(mut self, change: FieldChange<F>) -> Self {
        if self.submitted {
            log::debug!("Ignoring change to {} after submission", change.field());
            return self;
        }

        let field = change.field();
        let outcome = match &change {
            FieldChange::Text { field, value } => validate_text(*field, value, &self.form),
            FieldChange::Checkbox { .. } | FieldChange::File { .. } => Ok(()),
        };
        log::debug!("Validated {field}: {}", if outcome.is_ok() { "ok" } else { "error" });

        match change {
            FieldChange::Text { field, value } => match field {
                TextField::Name            => self.form.name = value,
                TextField::Email           => self.form.email = value,
                TextField::Password        => self.form.password = value,
                TextField::ConfirmPassword => self.form.confirm_password = value,
            },
            FieldChange::Checkbox { field: CheckboxField::Terms, checked } => self.form.terms = checked,
            FieldChange::File { field: FileField::Image, handle } => self.form.image = handle,
        }
        self.errors.set(field, outcome);
        self
    }

    /// Moves to the success state if the whole form is valid. Once submitted,
    /// further submits change nothing.
    pub fn submit(mut self) -> Self {
        if self.submitted {
            return self;
        }
        if self.form.is_valid() {
            log::info!("Registration submitted for {}", self.form.name);
            self.submitted = true;
        } else {
            log::warn!("Submit ignored, form is not valid");
        }
        self
    }

    pub fn can_submit(&self) -> bool {
        !self.submitted && self.form.is_valid()
    }

    pub fn greeting(&self) -> Option<String> {
        self.submitted.then(|| format!("Welcome, {}!", self.form.name))
    }
}
