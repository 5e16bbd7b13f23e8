use core::fmt;

/// Why a computed statistic has no numeric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Undefined {
    /// The mean is zero, so the coefficient of variation divides by zero
    ZeroMean,
    /// A standard deviation is zero, so the correlation divides by zero
    ZeroDeviation,
}

impl fmt::Display for Undefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Undefined::ZeroMean => f.write_str("undefined (zero mean)"),
            Undefined::ZeroDeviation => f.write_str("undefined (zero standard deviation)"),
        }
    }
}

/// A statistic that was computed but may be mathematically undefined
///
/// Degenerate but valid input, such as a sample whose mean is zero, is not an
/// error: the statistics that do exist are still reported, and the ones that
/// divide by zero are marked [`Measure::Undefined`] instead of carrying a
/// `NaN` or an infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Measure<T> {
    /// The statistic has a value
    Value(T),
    /// The statistic is undefined for this input
    Undefined(Undefined),
}

impl<T: Copy> Measure<T> {
    /// Returns the value, or `None` if the statistic is undefined
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The value if defined
    #[inline]
    pub const fn value(&self) -> Option<T> {
        match self {
            Measure::Value(v) => Some(*v),
            Measure::Undefined(_) => None,
        }
    }

    /// Returns `true` if the statistic has a value
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Measure::Value(_))
    }

    /// Returns the reason the statistic is undefined, if it is
    #[inline]
    pub const fn undefined(&self) -> Option<Undefined> {
        match self {
            Measure::Value(_) => None,
            Measure::Undefined(why) => Some(*why),
        }
    }

    /// Maps a defined value, keeping the undefined reason untouched
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Measure<U> {
        match self {
            Measure::Value(v) => Measure::Value(f(v)),
            Measure::Undefined(why) => Measure::Undefined(why),
        }
    }
}

impl<T: num_traits::Float> Measure<T> {
    /// Divides `numerator` by `denominator`, marking the result undefined
    /// with `why` when the denominator is zero
    pub(crate) fn ratio(numerator: T, denominator: T, why: Undefined) -> Self {
        if denominator.is_zero() {
            Measure::Undefined(why)
        } else {
            Measure::Value(numerator / denominator)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Measure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Value(v) => v.fmt(f),
            Measure::Undefined(_) => f.write_str("undefined"),
        }
    }
}
