use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("interval value must be positive (got {0})")]
    NonPositiveInterval(u32),
    #[error("interval upper bound {max} must be greater than {value}")]
    InvalidIntervalRange { value: u32, max: u32 },
    #[error("unknown time unit: {0}")]
    UnknownIntervalUnit(String),
    #[error("cannot parse interval: {0}")]
    UnparseableInterval(String),
    #[error("unknown lesion type: {0}")]
    UnknownLesionKind(String),
    #[error("unknown risk category: {0}")]
    UnknownRiskCategory(String),
    #[error("invalid {field}: {message}")]
    InvalidRiskFactor {
        field: &'static str,
        message: String,
    },
    #[error("invalid follow-up status transition: {from} -> {to}")]
    InvalidStatusTransition { from: String, to: String },
    #[error("unknown follow-up status: {0}")]
    UnknownFollowUpStatus(String),
    #[error("unknown {axis} code: {code}")]
    UnknownStageCode { axis: &'static str, code: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
