use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::error::ValidationError;

/// Load pattern selected with `--type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestType {
    Simple,
    Stress,
    Spike,
    Endurance,
    RampUp,
}

impl TestType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Stress => "stress",
            Self::Spike => "spike",
            Self::Endurance => "endurance",
            Self::RampUp => "ramp_up",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TestType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "simple" => Ok(Self::Simple),
            "stress" => Ok(Self::Stress),
            "spike" => Ok(Self::Spike),
            "endurance" => Ok(Self::Endurance),
            "ramp_up" | "ramp-up" | "rampup" => Ok(Self::RampUp),
            _ => Err(ValidationError::UnknownTestType { name: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveUsize(NonZeroUsize);

impl PositiveUsize {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    #[must_use]
    pub const fn as_non_zero(self) -> NonZeroUsize {
        self.0
    }
}

impl TryFrom<usize> for PositiveUsize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value)
            .map(PositiveUsize)
            .ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}

impl std::str::FromStr for PositiveUsize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        PositiveUsize::try_from(value)
    }
}

/// Non-negative, finite span given in fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seconds(Duration);

impl Seconds {
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }
}

impl TryFrom<f64> for Seconds {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Duration::try_from_secs_f64(value)
            .map(Seconds)
            .map_err(|err| ValidationError::InvalidSeconds {
                value: value.to_string(),
                source: err,
            })
    }
}

impl std::str::FromStr for Seconds {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 =
            s.trim()
                .parse()
                .map_err(|err| ValidationError::InvalidSecondsNumber {
                    value: s.to_owned(),
                    source: err,
                })?;
        Seconds::try_from(value)
    }
}
