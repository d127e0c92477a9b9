//! Input validation for registration and profile updates.
//!
//! Every check returns `AppError::BadRequest` with a message naming the offending field.

use url::Url;

use crate::server::error::AppError;

pub const MAX_EMAIL_LEN: usize = 254;
pub const MIN_NICKNAME_LEN: usize = 3;
pub const MAX_NICKNAME_LEN: usize = 30;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MAX_URL_LEN: usize = 2048;
pub const MAX_COINS: i64 = 999_999;

const PASSWORD_SPECIAL_CHARS: &str = "@#$%^&+=!";

/// Validates an email address.
///
/// Accepts `local@domain` where the local part uses letters, digits and `._%+-`,
/// and the domain is at least two dot-separated labels of letters, digits and hyphens
/// ending in an alphabetic top-level label of two or more characters.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let invalid = || AppError::BadRequest("Invalid email format".to_string());

    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return Err(AppError::BadRequest(format!(
            "Email must be between 1 and {} characters",
            MAX_EMAIL_LEN
        )));
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    if !local_ok {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid());
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    if !labels_ok || !tld_ok {
        return Err(invalid());
    }

    Ok(())
}

/// Validates a nickname: 3 to 30 characters of letters, digits, `_` or `-`.
pub fn validate_nickname(nickname: &str) -> Result<(), AppError> {
    let len = nickname.chars().count();
    if !(MIN_NICKNAME_LEN..=MAX_NICKNAME_LEN).contains(&len) {
        return Err(AppError::BadRequest(format!(
            "Nickname must be between {} and {} characters",
            MIN_NICKNAME_LEN, MAX_NICKNAME_LEN
        )));
    }

    if !nickname
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::BadRequest(
            "Nickname can only contain letters, numbers, underscores and hyphens".to_string(),
        ));
    }

    Ok(())
}

/// Validates password length and complexity.
///
/// Requires 8 to 128 characters including an uppercase letter, a lowercase letter,
/// a digit and one of `@#$%^&+=!`.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        return Err(AppError::BadRequest(format!(
            "Password must be between {} and {} characters",
            MIN_PASSWORD_LEN, MAX_PASSWORD_LEN
        )));
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if !(has_upper && has_lower && has_digit && has_special) {
        return Err(AppError::BadRequest(format!(
            "Password must contain an uppercase letter, a lowercase letter, a digit and one of {}",
            PASSWORD_SPECIAL_CHARS
        )));
    }

    Ok(())
}

/// Validates an absolute http or https URL of at most 2048 characters.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - URL to validate
pub fn validate_url(field: &str, value: &str) -> Result<(), AppError> {
    if value.len() > MAX_URL_LEN {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, MAX_URL_LEN
        )));
    }

    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        _ => Err(AppError::BadRequest(format!(
            "{} must be a valid http or https URL",
            field
        ))),
    }
}

/// Validates an optional URL; `None` is always accepted.
pub fn validate_optional_url(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(value) => validate_url(field, value),
        None => Ok(()),
    }
}

/// Computes the balance after adding `amount` coins.
///
/// # Returns
/// - `Ok(i32)` - New balance
/// - `Err(AppError::BadRequest)` - Amount is below 1 or the result would exceed 999,999
pub fn checked_coin_total(current: i32, amount: i64) -> Result<i32, AppError> {
    if amount < 1 {
        return Err(AppError::BadRequest(
            "Amount of coins must be at least 1".to_string(),
        ));
    }

    let total = i64::from(current).saturating_add(amount);
    if total > MAX_COINS {
        return Err(AppError::BadRequest(format!(
            "Coin balance cannot exceed {}",
            MAX_COINS
        )));
    }

    Ok(total as i32)
}
