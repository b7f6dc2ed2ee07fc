//! Error types for impact assessment.
//!
//! Validation problems are reported before any physics stage runs.
//! Computation failures are only produced at the aggregation boundary,
//! after every stage has run, so callers can tell the two apart.

#[derive(thiserror::Error, Debug)]
pub enum ImpactError {
    #[error("invalid parameter {field} = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("computation produced non-finite {quantity} ({value})")]
    ComputationFailure { quantity: &'static str, value: f64 },

    #[error("malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Problems with a settings file, kept apart from request errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting {field} = {value}: {reason}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ImpactError {
    /// Returns true if the caller supplied an out-of-range value.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, ImpactError::InvalidParameter { .. })
    }

    /// Returns true if the physics pipeline produced a non-finite output.
    pub fn is_computation_failure(&self) -> bool {
        matches!(self, ImpactError::ComputationFailure { .. })
    }

    /// Returns true if the settings, not the request, were at fault.
    pub fn is_config(&self) -> bool {
        matches!(self, ImpactError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = ImpactError::InvalidParameter {
            field: "angle_deg",
            value: 95.0,
            reason: "must be between 0 and 90 degrees",
        };
        let msg = err.to_string();
        assert!(msg.contains("angle_deg"), "got {msg}");
        assert!(msg.contains("95"), "got {msg}");
        assert!(err.is_invalid_parameter());
        assert!(!err.is_computation_failure());
    }

    #[test]
    fn test_malformed_request_from_serde() {
        let serde_err = serde_json::from_str::<f64>("\"not a number\"").unwrap_err();
        let err: ImpactError = serde_err.into();
        assert!(matches!(err, ImpactError::MalformedRequest(_)));
        assert!(!err.is_invalid_parameter());
        assert!(!err.is_config());
    }

    #[test]
    fn test_config_error_kept_apart() {
        let parse_err = serde_json::from_str::<f64>("{").unwrap_err();
        let err: ImpactError = ConfigError::from(parse_err).into();
        assert!(err.is_config());
        assert!(!matches!(err, ImpactError::MalformedRequest(_)));
        assert!(err.to_string().starts_with("config error"), "got {err}");
    }
}
