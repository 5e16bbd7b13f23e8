use alloc::vec::Vec;

use crate::{Axis, Measure, PairedSample};

/// Per-element values behind the worked-example table
///
/// All three vectors have the length of the input and are index-aligned with
/// it. Values are kept at full precision; rounding is left to the
/// [`Report`](crate::Report).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DerivedArrays<T> {
    /// `x[i] * y[i]`
    pub xy: Vec<T>,
    /// `x[i]²`
    pub x_squared: Vec<T>,
    /// `y[i]²`
    pub y_squared: Vec<T>,
}

impl<T> DerivedArrays<T> {
    /// Returns the number of elements in each array
    pub fn len(&self) -> usize {
        self.xy.len()
    }

    /// Returns the squared values of `axis`
    pub fn squared(&self, axis: Axis) -> &[T] {
        match axis {
            Axis::X => &self.x_squared,
            Axis::Y => &self.y_squared,
        }
    }
}

/// Descriptive statistics of one sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleSummary<T> {
    /// Sum of the values
    pub sum: T,
    /// Sum of the squared values
    pub sum_sq: T,
    /// Arithmetic mean
    pub mean: T,
    /// Population variance, never negative
    pub variance: T,
    /// Population standard deviation
    pub stddev: T,
    /// Coefficient of variation, undefined when the mean is zero
    pub cv: Measure<T>,
}

/// Scalar results of a paired sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScalarResult<T> {
    /// Number of pairs
    pub n: usize,
    /// Statistics of the X sample
    pub x: SampleSummary<T>,
    /// Statistics of the Y sample
    pub y: SampleSummary<T>,
    /// Sum of the pairwise products
    pub sum_xy: T,
    /// Population covariance
    pub covariance: T,
    /// Pearson correlation, undefined when either sample is constant
    pub correlation: Measure<T>,
}

impl<T> ScalarResult<T> {
    /// Returns the statistics of `axis`
    pub fn axis(&self, axis: Axis) -> &SampleSummary<T> {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Everything computed from one paired sample
///
/// A `Summary` is an immutable value: a new input produces a new `Summary`
/// through [`compute`](crate::compute), never an in-place update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary<T> {
    pub(crate) sample: PairedSample<T>,
    pub(crate) derived: DerivedArrays<T>,
    pub(crate) scalars: ScalarResult<T>,
}

impl<T> Summary<T> {
    /// Returns the validated input
    pub fn sample(&self) -> &PairedSample<T> {
        &self.sample
    }

    /// Returns the per-element products and squares
    pub fn derived(&self) -> &DerivedArrays<T> {
        &self.derived
    }

    /// Returns the scalar statistics
    pub fn scalars(&self) -> &ScalarResult<T> {
        &self.scalars
    }
}
