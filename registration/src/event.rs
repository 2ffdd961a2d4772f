use crate::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckboxField {
    Terms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileField {
    Image,
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Name            => Field::Name,
            TextField::Email           => Field::Email,
            TextField::Password        => Field::Password,
            TextField::ConfirmPassword => Field::ConfirmPassword,
        }
    }
}

impl From<CheckboxField> for Field {
    fn from(field: CheckboxField) -> Self {
        match field {
            CheckboxField::Terms => Field::Terms,
        }
    }
}

impl From<FileField> for Field {
    fn from(field: FileField) -> Self {
        match field {
            FileField::Image => Field::Image,
        }
    }
}

/// One edit made by the user, already decoded from whatever input produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange<F> {
    Text { field: TextField, value: String },
    Checkbox { field: CheckboxField, checked: bool },
    /// `handle` is `None` when the picker was cleared.
    File { field: FileField, handle: Option<F> },
}

impl<F> FieldChange<F> {
    pub fn field(&self) -> Field {
        match self {
            FieldChange::Text { field, .. } => (*field).into(),
            FieldChange::Checkbox { field, .. } => (*field).into(),
            FieldChange::File { field, .. } => (*field).into(),
        }
    }

    /// Builds a change from the raw pieces an input element exposes: its
    /// `name` attribute plus whichever of value/checked/file applies.
    pub fn from_input(name: &str, value: String, checked: bool, file: Option<F>) -> Result<Self, String> {
        let change = match Field::try_from(name)? {
            Field::Name            => FieldChange::Text { field: TextField::Name, value },
            Field::Email           => FieldChange::Text { field: TextField::Email, value },
            Field::Password        => FieldChange::Text { field: TextField::Password, value },
            Field::ConfirmPassword => FieldChange::Text { field: TextField::ConfirmPassword, value },
            Field::Terms           => FieldChange::Checkbox { field: CheckboxField::Terms, checked },
            Field::Image           => FieldChange::File { field: FileField::Image, handle: file },
        };
        Ok(change)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action<F> {
    Change(FieldChange<F>),
    Submit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_pieces_pick_the_matching_variant() {
        let text = FieldChange::<()>::from_input("confirmPassword", "abc".to_owned(), false, None);
        assert_eq!(text, Ok(FieldChange::Text { field: TextField::ConfirmPassword, value: "abc".to_owned() }));

        let checkbox = FieldChange::<()>::from_input("terms", "on".to_owned(), true, None);
        assert_eq!(checkbox, Ok(FieldChange::Checkbox { field: CheckboxField::Terms, checked: true }));

        let file = FieldChange::from_input("image", String::new(), false, Some(7u8));
        assert_eq!(file, Ok(FieldChange::File { field: FileField::Image, handle: Some(7) }));
    }

    #[test]
    fn unknown_input_is_an_error() {
        assert!(FieldChange::<()>::from_input("nickname", "x".to_owned(), false, None).is_err());
    }

    #[test]
    fn change_reports_its_field() {
        let change = FieldChange::<()>::Checkbox { field: CheckboxField::Terms, checked: false };
        assert_eq!(change.field(), Field::Terms);
    }
}
