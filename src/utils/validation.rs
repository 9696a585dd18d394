use crate::utils::error::{MailcheckError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Whole-string address grammar: dot-separated atoms, one `@`, then at least
/// two hostname labels ending in an alphabetic top-level segment.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \A
        [A-Za-z0-9_%+-]+ (?: \. [A-Za-z0-9_%+-]+ )*
        @
        (?: [A-Za-z0-9] (?: [A-Za-z0-9-]* [A-Za-z0-9] )? \. )+
        [A-Za-z]{2,}
        \z",
    )
    .expect("email pattern is a valid regex")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Returns `true` when `candidate` is a syntactically well-formed address.
///
/// No deliverability, DNS or length checks are made, and the input is never
/// normalized: surrounding whitespace makes the address invalid.
pub fn is_email_valid(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if is_email_valid(value) {
        Ok(())
    } else {
        Err(MailcheckError::InvalidAddressError {
            field: field_name.to_string(),
            value: value.to_string(),
        })
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MailcheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MailcheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MailcheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
