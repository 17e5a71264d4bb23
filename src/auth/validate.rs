use thiserror::Error;

use crate::models::SignupForm;

/// The first rule a signup form violates. Checks run in a fixed order and
/// stop at the first failure, so only one error surfaces at a time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("Password must contain at least one uppercase letter, one lowercase letter, and one number")]
    PasswordTooWeak,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Validate a signup form. Order matters: name, email presence, email shape,
/// password length, password character classes, confirmation.
pub fn validate(form: &SignupForm) -> Result<(), SignupError> {
    if form.name.trim().is_empty() {
        return Err(SignupError::NameRequired);
    }
    if form.email.trim().is_empty() {
        return Err(SignupError::EmailRequired);
    }
    if !email_shape_ok(form.email.trim()) {
        return Err(SignupError::EmailInvalid);
    }
    if form.password.len() < 6 {
        return Err(SignupError::PasswordTooShort);
    }
    if !has_required_classes(&form.password) {
        return Err(SignupError::PasswordTooWeak);
    }
    if form.password != form.confirm_password {
        return Err(SignupError::PasswordMismatch);
    }
    Ok(())
}

/// local-part@domain-with-a-dot, no whitespace anywhere, exactly one `@`,
/// and the domain's dot must be interior (not its first or last character).
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// At least one lowercase letter, one uppercase letter, and one digit, in
/// any order.
fn has_required_classes(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SignupForm {
        SignupForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abc12345".to_string(),
            confirm_password: "Abc12345".to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_signup() {
        assert_eq!(validate(&form()), Ok(()));
    }

    #[test]
    fn whitespace_only_name_is_rejected_first() {
        let mut f = form();
        f.name = "   ".to_string();
        f.email = String::new(); // later rule also violated
        assert_eq!(validate(&f), Err(SignupError::NameRequired));
    }

    #[test]
    fn empty_email_precedes_shape_check() {
        let mut f = form();
        f.email = "  ".to_string();
        assert_eq!(validate(&f), Err(SignupError::EmailRequired));
    }

    #[test]
    fn email_shape_requires_interior_dot_in_domain() {
        for bad in ["ada@example", "ada@.com", "ada@com.", "ada example@x.com", "@x.com", "a@b@c.com"] {
            let mut f = form();
            f.email = bad.to_string();
            assert_eq!(validate(&f), Err(SignupError::EmailInvalid), "{bad}");
        }
        for good in ["a@b.c", "first.last@sub.domain.org"] {
            let mut f = form();
            f.email = good.to_string();
            assert_eq!(validate(&f), Ok(()), "{good}");
        }
    }

    #[test]
    fn short_password_fails_before_class_check() {
        let mut f = form();
        f.password = "Ab1".to_string();
        f.confirm_password = "Ab1".to_string();
        assert_eq!(validate(&f), Err(SignupError::PasswordTooShort));
    }

    #[test]
    fn password_without_uppercase_is_too_weak() {
        let mut f = form();
        f.password = "abc12345".to_string();
        f.confirm_password = "abc12345".to_string();
        assert_eq!(validate(&f), Err(SignupError::PasswordTooWeak));
    }

    #[test]
    fn strong_password_passes_class_check() {
        let mut f = form();
        f.password = "Abc12345".to_string();
        f.confirm_password = "Abc12345".to_string();
        assert_eq!(validate(&f), Ok(()));
    }

    #[test]
    fn mismatched_confirmation_fails_last() {
        let mut f = form();
        f.confirm_password = "Abc12346".to_string();
        assert_eq!(validate(&f), Err(SignupError::PasswordMismatch));
    }
}
