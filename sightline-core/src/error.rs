//! Common error types.

use std::{error, fmt};

/// The error type for a root margin that isn't valid CSS margin syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum MarginError {
    /// The margin string contained no values.
    Empty,
    /// More than four values were given.
    TooManyValues(usize),
    /// A value was not a finite number followed by `px` or `%`.
    InvalidLength(String),
}

impl fmt::Display for MarginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            MarginError::Empty => f.pad("root margin is empty"),
            MarginError::TooManyValues(count) => {
                write!(f, "root margin takes at most 4 values, got {count}")
            },
            MarginError::InvalidLength(value) => {
                write!(f, "root margin value `{value}` must be in pixels or percent")
            },
        }
    }
}

impl error::Error for MarginError {}

/// The error type for a threshold outside of `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdError {
    OutOfRange(f64),
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ThresholdError::OutOfRange(value) => {
                write!(f, "threshold {value} is outside of the range [0, 1]")
            },
        }
    }
}

impl error::Error for ThresholdError {}

/// An error in a watcher configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Margin(MarginError),
    Threshold(ThresholdError),
}

impl From<MarginError> for ConfigError {
    fn from(value: MarginError) -> Self {
        Self::Margin(value)
    }
}

impl From<ThresholdError> for ConfigError {
    fn from(value: ThresholdError) -> Self {
        Self::Threshold(value)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ConfigError::Margin(err) => err.fmt(f),
            ConfigError::Threshold(err) => err.fmt(f),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ConfigError::Margin(err) => Some(err),
            ConfigError::Threshold(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            MarginError::InvalidLength("10em".into()).to_string(),
            "root margin value `10em` must be in pixels or percent"
        );
        assert_eq!(MarginError::TooManyValues(5).to_string(), "root margin takes at most 4 values, got 5");
        assert_eq!(
            ThresholdError::OutOfRange(1.5).to_string(),
            "threshold 1.5 is outside of the range [0, 1]"
        );
    }

    #[test]
    fn config_error_exposes_source() {
        let err = ConfigError::from(MarginError::Empty);
        assert_eq!(err.to_string(), "root margin is empty");
        assert!(err.source().is_some());
    }
}
