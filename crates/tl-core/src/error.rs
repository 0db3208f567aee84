//! Error type shared by every operation in the crate.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors produced by duration, calendar and wall-clock operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A wall-clock field or total falls outside a single day.
    #[error("time out of bounds: {reason}")]
    TimeOutOfBounds { reason: String },

    /// An unrecognized unit, style or format tag.
    #[error("invalid {kind}: {value:?}")]
    InvalidArgument { kind: &'static str, value: String },

    /// Text did not match any accepted pattern.
    #[error("cannot parse {input:?} as {expected}")]
    Parse {
        input: String,
        expected: &'static str,
    },

    /// `until` was asked about a moment that is not in the future.
    #[error("{target} is in the past")]
    TimeIsInThePast { target: NaiveDateTime },

    /// `since` was asked about a moment that is not in the past.
    #[error("{target} is in the future")]
    TimeIsInTheFuture { target: NaiveDateTime },

    /// The result cannot be represented by the underlying date-time type.
    #[error("result out of representable range: {reason}")]
    OutOfRange { reason: &'static str },
}

impl Error {
    pub(crate) fn out_of_bounds(reason: impl Into<String>) -> Self {
        Self::TimeOutOfBounds {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn parse(input: impl Into<String>, expected: &'static str) -> Self {
        Self::Parse {
            input: input.into(),
            expected,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            Error::invalid("style", "huge").to_string(),
            "invalid style: \"huge\""
        );
        assert_eq!(
            Error::parse("25h", "wall-clock time").to_string(),
            "cannot parse \"25h\" as wall-clock time"
        );
        assert_eq!(
            Error::out_of_bounds("hour 24 not in 0..=23").to_string(),
            "time out of bounds: hour 24 not in 0..=23"
        );
    }
}
