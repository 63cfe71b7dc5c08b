use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unknown test type: {name}")]
    UnknownTestType { name: String },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid seconds '{value}': {source}")]
    InvalidSecondsNumber {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Invalid seconds '{value}': {source}")]
    InvalidSeconds {
        value: String,
        #[source]
        source: std::time::TryFromFloatSecsError,
    },
}
