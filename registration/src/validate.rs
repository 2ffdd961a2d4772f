use thiserror::Error;

use crate::event::TextField;
use crate::rules::{email_ok, name_ok, password_ok, passwords_match};
use crate::state::FormState;

/// A message shown under a single input. Fixed by editing that input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Checks a candidate value for one text input.
///
/// `form` is the state *before* the change is applied; only `confirmPassword`
/// looks at it, comparing against the password currently held there.
pub fn validate_text<F>(field: TextField, value: &str, form: &FormState<F>) -> Result<(), ValidationError> {
    match field {
        TextField::Name if !name_ok(value) => Err(ValidationError::NameTooShort),
        TextField::Email if !email_ok(value) => Err(ValidationError::InvalidEmail),
        TextField::Password if !password_ok(value) => Err(ValidationError::PasswordTooShort),
        TextField::ConfirmPassword if !passwords_match(&form.password, value) => Err(ValidationError::PasswordMismatch),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> FormState<()> {
        FormState::default()
    }

    #[test]
    fn name_needs_two_characters() {
        for short in ["", "A"] {
            assert_eq!(validate_text(TextField::Name, short, &empty()), Err(ValidationError::NameTooShort));
        }
        for long in ["Al", "Alice", "  "] {
            assert_eq!(validate_text(TextField::Name, long, &empty()), Ok(()));
        }
    }

    #[test]
    fn email_follows_the_pattern() {
        assert_eq!(validate_text(TextField::Email, "a@b.co", &empty()), Ok(()));
        assert_eq!(validate_text(TextField::Email, "a@b", &empty()), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_text(TextField::Email, "a b@c.d", &empty()), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn password_needs_eight_characters() {
        assert_eq!(validate_text(TextField::Password, "short1", &empty()), Err(ValidationError::PasswordTooShort));
        assert_eq!(validate_text(TextField::Password, "longenough1", &empty()), Ok(()));
        assert_eq!(validate_text(TextField::Password, "12345678", &empty()), Ok(()));
    }

    #[test]
    fn confirmation_is_compared_case_sensitively() {
        let form = FormState::<()> { password: "Secret12".to_owned(), ..FormState::default() };
        assert_eq!(validate_text(TextField::ConfirmPassword, "Secret12", &form), Ok(()));
        assert_eq!(validate_text(TextField::ConfirmPassword, "secret12", &form), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn messages_match_what_the_user_reads() {
        assert_eq!(ValidationError::NameTooShort.to_string(), "Name must be at least 2 characters.");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email format.");
        assert_eq!(ValidationError::PasswordTooShort.to_string(), "Password must be at least 8 characters.");
        assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords do not match.");
    }
}
