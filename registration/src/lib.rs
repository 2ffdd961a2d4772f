pub mod event;
pub mod reducer;
pub mod rules;
pub mod state;
pub mod strength;
pub mod validate;

pub use event::{Action, CheckboxField, FieldChange, FileField, TextField};
pub use reducer::{ErrorMap, Registration};
pub use state::FormState;
pub use strength::PasswordStrength;
pub use validate::ValidationError;

use std::fmt;

/// Every input of the registration form, named the way the markup names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Terms,
    Image,
}

impl Field {
    #[cfg(test)]
    pub(crate) const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Terms,
        Field::Image,
    ];

    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name            => "name",
            Field::Email           => "email",
            Field::Password        => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Terms           => "terms",
            Field::Image           => "image",
        }
    }
}

impl TryFrom<&str> for Field {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "name"            => Ok(Field::Name),
            "email"           => Ok(Field::Email),
            "password"        => Ok(Field::Password),
            "confirmPassword" => Ok(Field::ConfirmPassword),
            "terms"           => Ok(Field::Terms),
            "image"           => Ok(Field::Image),
            other             => Err(format!("Unknown form field: {other}")),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_name())
    }
}

#[cfg(test)]
mod tests {
    use super::Field;

    #[test]
    fn input_names_parse_back_to_their_field() {
        for field in Field::ALL {
            assert_eq!(Field::try_from(field.input_name()), Ok(field));
        }
    }

    #[test]
    fn unknown_input_name_is_rejected() {
        let err = Field::try_from("confirm_password").unwrap_err();
        assert_eq!(err, "Unknown form field: confirm_password");
    }
}
