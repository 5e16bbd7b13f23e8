use alloc::vec::Vec;

use num_traits::Float;

use crate::{Axis, StatsError};

/// Two validated, index-aligned samples
///
/// A `PairedSample` can only be built through validation, so holding one
/// guarantees that both samples are non-empty, of equal length and made of
/// finite numbers. Element `i` of X pairs with element `i` of Y.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PairedSample<T> {
    x: Vec<T>,
    y: Vec<T>,
}

impl<T: Float> PairedSample<T> {
    /// Validates and takes ownership of two samples
    ///
    /// Checks run in order, and the first failing one is reported:
    ///
    /// 1. X then Y is non-empty, else [`StatsError::InvalidValue`] with
    ///    [`InvalidReason::Empty`](crate::InvalidReason::Empty)
    /// 2. both have the same length, else [`StatsError::LengthMismatch`]
    /// 3. every X then every Y value is finite, else
    ///    [`StatsError::InvalidValue`] with
    ///    [`InvalidReason::NonFinite`](crate::InvalidReason::NonFinite)
    ///
    /// # Examples
    ///
    /// ```
    /// use paired_statistics::{PairedSample, StatsError};
    ///
    /// let sample = PairedSample::new(vec![2.0, 3.0], vec![4.0, 8.0]).unwrap();
    /// assert_eq!(sample.len(), 2);
    ///
    /// let err = PairedSample::new(vec![2.0, 3.0, 5.0], vec![4.0]).unwrap_err();
    /// assert_eq!(err, StatsError::LengthMismatch { x_len: 3, y_len: 1 });
    /// ```
    pub fn new(x: Vec<T>, y: Vec<T>) -> Result<Self, StatsError> {
        if x.is_empty() {
            return Err(StatsError::empty(Axis::X));
        }
        if y.is_empty() {
            return Err(StatsError::empty(Axis::Y));
        }
        if x.len() != y.len() {
            return Err(StatsError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        check_finite(Axis::X, &x)?;
        check_finite(Axis::Y, &y)?;

        Ok(Self { x, y })
    }

    /// Validates two borrowed samples, copying them on success
    pub fn from_slices(x: &[T], y: &[T]) -> Result<Self, StatsError> {
        Self::new(x.to_vec(), y.to_vec())
    }

    /// Returns the X sample
    #[inline]
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Returns the Y sample
    #[inline]
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Returns the sample for `axis`
    #[inline]
    pub fn axis(&self, axis: Axis) -> &[T] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Returns the number of pairs, always at least one
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns an iterator over the `(x, y)` pairs in input order
    ///
    /// These are the coordinates of the scatter plot.
    pub fn pairs(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Splits the sample back into its X and Y vectors
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.x, self.y)
    }
}

fn check_finite<T: Float>(axis: Axis, values: &[T]) -> Result<(), StatsError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(StatsError::non_finite(axis, index)),
        None => Ok(()),
    }
}
