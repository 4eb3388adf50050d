use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !email.contains('@') {
        return Err(ValidationError::MalformedEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::ShortPassword);
    }
    Ok(())
}

pub fn validate_body(body: &str) -> Result<(), ValidationError> {
    if body.trim().is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    Ok(())
}
