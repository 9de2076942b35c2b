use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::models::User;

/// Check that a user carries a usable e-mail address.
///
/// A blank address (empty or only whitespace) is reported with code `blank`.
/// Anything else that is not a syntactically valid address is reported with
/// code `email`. Length and uniqueness are left to storage; names are not
/// checked at all.
pub fn validate_user(user: &User) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if user.email.trim().is_empty() {
        errors.add("email", field_error("blank", "E-mail address must not be empty"));
    } else if !user.email.validate_email() {
        errors.add("email", field_error("email", "User must have valid email address"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_user(self)
    }
}
