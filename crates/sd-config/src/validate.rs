//! Semantic validation for dashboard configuration.

use thiserror::Error;

use crate::dashboard::DashboardConfig;

/// A configuration that parses but cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("domestic_warn_min ({warn}) must not exceed domestic_ok_min ({ok})")]
    DomesticBandsInverted { warn: u64, ok: u64 },

    #[error("{field} must be within [0, 1], got {value}")]
    RateOutOfRange { field: &'static str, value: f64 },

    #[error("trends.window_weeks must be at least 1")]
    EmptyTrendWindow,

    #[error("roles entry has an empty email")]
    EmptyRoleEmail,
}

/// Result of validating a config: all problems, not just the first.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Check cross-field constraints a JSON schema alone cannot express.
pub fn validate_config(config: &DashboardConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let t = &config.thresholds;

    if t.domestic_warn_min > t.domestic_ok_min {
        errors.push(ValidationError::DomesticBandsInverted {
            warn: t.domestic_warn_min,
            ok: t.domestic_ok_min,
        });
    }

    for (field, value) in [
        ("thresholds.lead_to_appointment_min", t.lead_to_appointment_min),
        (
            "thresholds.rep_min_appointment_to_sale",
            t.rep_min_appointment_to_sale,
        ),
    ] {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ValidationError::RateOutOfRange { field, value });
        }
    }

    if config.trends.window_weeks == 0 {
        errors.push(ValidationError::EmptyTrendWindow);
    }

    if config.roles.0.keys().any(|email| email.trim().is_empty()) {
        errors.push(ValidationError::EmptyRoleEmail);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
