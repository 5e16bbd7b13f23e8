use alloc::string::String;

use core::fmt;

use thiserror::Error;

/// Identifies which of the two paired samples a value or an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The first sample, plotted on the horizontal axis
    X,
    /// The second sample, plotted on the vertical axis
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

/// Why a sample was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// No values were supplied at all
    #[error("no values were supplied")]
    Empty,
    /// A token could not be read as a number
    #[error("value #{} ({token:?}) is not a number", .index + 1)]
    Unparseable {
        /// Zero-based position of the token
        index: usize,
        /// The offending token, trimmed
        token: String,
    },
    /// A value is NaN or infinite
    #[error("value #{} is not a finite number", .index + 1)]
    NonFinite {
        /// Zero-based position of the value
        index: usize,
    },
}

/// Errors raised while validating or computing paired statistics
///
/// Every variant is detected before any statistic is published; there is no
/// partially successful result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The two samples hold a different number of values
    #[error("the number of X values ({x_len}) must equal the number of Y values ({y_len})")]
    LengthMismatch {
        /// Number of X values
        x_len: usize,
        /// Number of Y values
        y_len: usize,
    },
    /// One of the samples is empty or holds a value that is not a finite number
    #[error("invalid {axis} values: {reason}")]
    InvalidValue {
        /// The sample holding the invalid value
        axis: Axis,
        /// What is wrong with it
        reason: InvalidReason,
    },
    /// The accumulated sums left the representable floating-point range
    #[error("the sums over the paired samples overflowed the floating-point range")]
    NumericOverflow,
}

impl StatsError {
    pub(crate) const fn empty(axis: Axis) -> Self {
        Self::InvalidValue {
            axis,
            reason: InvalidReason::Empty,
        }
    }

    pub(crate) const fn non_finite(axis: Axis, index: usize) -> Self {
        Self::InvalidValue {
            axis,
            reason: InvalidReason::NonFinite { index },
        }
    }

    /// Returns `true` if this is a [`StatsError::LengthMismatch`]
    pub const fn is_length_mismatch(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. })
    }

    /// Returns the sample the error refers to, if it refers to a single one
    pub const fn axis(&self) -> Option<Axis> {
        match self {
            Self::InvalidValue { axis, .. } => Some(*axis),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn length_mismatch_message_names_both_counts() {
        let err = StatsError::LengthMismatch { x_len: 3, y_len: 4 };
        assert_eq!(
            err.to_string(),
            "the number of X values (3) must equal the number of Y values (4)"
        );
        assert!(err.is_length_mismatch());
        assert_eq!(err.axis(), None);
    }

    #[test]
    fn invalid_value_message_is_one_based() {
        let err = StatsError::InvalidValue {
            axis: Axis::Y,
            reason: InvalidReason::Unparseable {
                index: 1,
                token: "abc".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid Y values: value #2 (\"abc\") is not a number"
        );
        assert_eq!(err.axis(), Some(Axis::Y));
    }

    #[test]
    fn empty_and_non_finite_messages() {
        assert_eq!(
            StatsError::empty(Axis::X).to_string(),
            "invalid X values: no values were supplied"
        );
        assert_eq!(
            StatsError::non_finite(Axis::X, 0).to_string(),
            "invalid X values: value #1 is not a finite number"
        );
    }
}
