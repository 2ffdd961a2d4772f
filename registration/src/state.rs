use crate::rules::{email_ok, name_ok, password_ok, passwords_match};

/// Everything the user has entered so far.
///
/// `F` is whatever handle the rendering surface gives for a picked file; the
/// form only stores it so a preview can be made later.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F> {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
    pub image: Option<F>,
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        FormState {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            terms: false,
            image: None,
        }
    }
}

impl<F> FormState<F> {
    /// Whole-form readiness. Computed from the values alone, so it stays
    /// correct even where the per-field messages have gone stale.
    pub fn is_valid(&self) -> bool {
        name_ok(&self.name)
            && email_ok(&self.email)
            && password_ok(&self.password)
            && passwords_match(&self.password, &self.confirm_password)
            && self.terms
    }
}
