use cricconnect_types::api::SendMessageRequest;

use crate::error::ApiError;

pub const USERNAME_MAX_CHARS: usize = 50;
pub const MESSAGE_MAX_CHARS: usize = 500;

/// A message that passed validation, with trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub username: String,
    pub message: String,
    pub is_own: bool,
}

/// Check a candidate message before it reaches the store. Every problem is
/// reported, not just the first.
pub fn validate_message(req: SendMessageRequest) -> Result<NewMessage, ApiError> {
    let mut errors = Vec::new();

    let username = check_field(req.username, "Username", USERNAME_MAX_CHARS, &mut errors);
    let message = check_field(req.message, "Message", MESSAGE_MAX_CHARS, &mut errors);

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    Ok(NewMessage {
        username,
        message,
        is_own: req.is_own.unwrap_or(false),
    })
}

fn check_field(
    value: Option<String>,
    label: &str,
    max_chars: usize,
    errors: &mut Vec<String>,
) -> String {
    let trimmed = value.as_deref().map(str::trim).unwrap_or_default();

    if trimmed.is_empty() {
        errors.push(format!("{} is required", label));
    } else if trimmed.chars().count() > max_chars {
        errors.push(format!("{} cannot exceed {} characters", label, max_chars));
    }

    trimmed.to_string()
}
