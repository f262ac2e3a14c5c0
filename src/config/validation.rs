//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (attempt counts, delays, timeouts)
//! - Check the endpoint parses as a URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: SdkConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the SDK

use url::Url;

use super::schema::SdkConfig;

/// A single semantic violation in a config.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Offending field name.
    pub field: &'static str,
    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &SdkConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let endpoint = config.effective_endpoint();
    if let Err(e) = endpoint.parse::<Url>() {
        errors.push(ValidationError {
            field: "endpoint_url",
            message: format!("'{endpoint}' is not a valid URL: {e}"),
        });
    }

    if config.max_attempts < 1 {
        errors.push(ValidationError {
            field: "max_attempts",
            message: "must be at least 1".to_string(),
        });
    }

    if !config.retry_delay_secs.is_finite() || config.retry_delay_secs < 0.0 {
        errors.push(ValidationError {
            field: "retry_delay_secs",
            message: format!("must be a non-negative finite number, got {}", config.retry_delay_secs),
        });
    }

    if !config.event_poll_interval_secs.is_finite() || config.event_poll_interval_secs < 0.0 {
        errors.push(ValidationError {
            field: "event_poll_interval_secs",
            message: format!(
                "must be a non-negative finite number, got {}",
                config.event_poll_interval_secs
            ),
        });
    }

    if config.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "request_timeout_secs",
            message: "must be positive".to_string(),
        });
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
    fn test_default_config_is_valid() {
        assert!(validate_config(&SdkConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = SdkConfig {
            max_attempts: 0,
            ..SdkConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "max_attempts");
    }

    #[test]
    fn test_negative_delay_rejected() {
        let config = SdkConfig {
            retry_delay_secs: -1.0,
            ..SdkConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "retry_delay_secs");
    }

    #[test]
    fn test_nan_poll_interval_rejected() {
        let config = SdkConfig {
            event_poll_interval_secs: f64::NAN,
            ..SdkConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = SdkConfig {
            endpoint_url: "not a url".to_string(),
            ..SdkConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "endpoint_url");
    }

    #[test]
    fn test_all_violations_collected() {
        let config = SdkConfig {
            endpoint_url: "not a url".to_string(),
            max_attempts: 0,
            retry_delay_secs: f64::INFINITY,
            request_timeout_secs: 0,
            ..SdkConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
