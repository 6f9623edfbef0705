//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0)
//! - Check header names and media types are usable on the wire
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FrameConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use reqwest::header::{HeaderName, HeaderValue};

use crate::config::schema::FrameConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &FrameConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let transport = &config.transport;

    if transport.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "transport.request_timeout_secs",
            "must be greater than 0",
        ));
    }
    if transport.connect_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "transport.connect_timeout_secs",
            "must be greater than 0",
        ));
    } else if transport.connect_timeout_secs > transport.request_timeout_secs {
        errors.push(ValidationError::new(
            "transport.connect_timeout_secs",
            "must not exceed request_timeout_secs",
        ));
    }
    if HeaderName::from_bytes(transport.correlation_header.as_bytes()).is_err() {
        errors.push(ValidationError::new(
            "transport.correlation_header",
            format!("'{}' is not a valid header name", transport.correlation_header),
        ));
    }
    if HeaderValue::from_str(&transport.user_agent).is_err() {
        errors.push(ValidationError::new(
            "transport.user_agent",
            "contains characters not allowed in a header value",
        ));
    }

    let media_type = config.retrieval.default_media_type.trim();
    if media_type.is_empty() {
        errors.push(ValidationError::new(
            "retrieval.default_media_type",
            "must not be empty",
        ));
    } else if HeaderValue::from_str(media_type).is_err() {
        errors.push(ValidationError::new(
            "retrieval.default_media_type",
            "contains characters not allowed in a header value",
        ));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&FrameConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = FrameConfig::default();
        config.transport.request_timeout_secs = 0;
        config.transport.correlation_header = "bad header".to_string();
        config.retrieval.default_media_type = "  ".to_string();
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "transport.request_timeout_secs",
                "transport.connect_timeout_secs",
                "transport.correlation_header",
                "retrieval.default_media_type",
                "observability.log_level",
            ]
        );
    }

    #[test]
    fn test_connect_timeout_zero() {
        let mut config = FrameConfig::default();
        config.transport.connect_timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "transport.connect_timeout_secs: must be greater than 0");
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = FrameConfig::default();
        config.observability.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
