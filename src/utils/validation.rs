use crate::utils::error::{GreetError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 負數的重複次數視為 0
pub fn normalize_repeat_count(raw: i64) -> usize {
    if raw < 0 {
        tracing::warn!("Negative repeat count {} clamped to 0", raw);
        return 0;
    }
    usize::try_from(raw).unwrap_or(usize::MAX)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GreetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GreetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_printable(field_name: &str, value: &str) -> Result<()> {
    if value.chars().any(|c| c.is_control() && !c.is_whitespace()) {
        return Err(GreetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: "Control characters are not allowed".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_repeat_count() {
        assert_eq!(normalize_repeat_count(3), 3);
        assert_eq!(normalize_repeat_count(0), 0);
        assert_eq!(normalize_repeat_count(-1), 0);
        assert_eq!(normalize_repeat_count(i64::MIN), 0);
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "greetkit.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_printable() {
        assert!(validate_printable("greeting.name", "Ada Lovelace").is_ok());
        assert!(validate_printable("greeting.name", "tab\tand\nnewline").is_ok());
        assert!(validate_printable("greeting.name", "bell\u{7}").is_err());
    }
}
