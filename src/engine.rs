use alloc::vec::Vec;

use log::debug;
use num_traits::Float;

use crate::{
    DerivedArrays, PairedMoments, PairedSample, SampleSummary, ScalarResult, StatsError, Summary,
};

/// Validates two samples and computes their descriptive and bivariate statistics
///
/// This is the whole statistics engine: a pure function from two slices to a
/// [`Summary`]. All validation happens before any arithmetic (see
/// [`PairedSample::new`] for the order of the checks).
///
/// Arithmetic is carried out at full precision throughout. Products and squares
/// are never rounded before being summed, and sums are accumulated left to
/// right with compensated summation, so the same input always yields the same
/// bits. Variances and covariance use the population divisor `n`.
///
/// # Arguments
///
/// * `x` - The X sample
/// * `y` - The Y sample, index-aligned with `x`
///
/// # Returns
///
/// * `Result<Summary<T>, StatsError>` - The statistics, or the first validation failure
///
/// # Examples
///
/// ```
/// use paired_statistics::compute;
/// use assert_approx_eq::assert_approx_eq;
///
/// let summary = compute::<f64>(&[2.0, 3.0, 5.0, 1.0], &[4.0, 8.0, 3.0, 4.0]).unwrap();
/// let scalars = summary.scalars();
///
/// assert_eq!(scalars.x.mean, 2.75);
/// assert_eq!(scalars.y.variance, 3.6875);
/// assert_approx_eq!(scalars.x.stddev, 1.47902, 1e-5);
/// assert_approx_eq!(scalars.covariance, -0.3125, 1e-12);
/// assert_approx_eq!(scalars.correlation.value().unwrap(), -0.11003, 1e-5);
/// assert_eq!(summary.derived().xy, vec![8.0, 24.0, 15.0, 4.0]);
/// ```
pub fn compute<T>(x: &[T], y: &[T]) -> Result<Summary<T>, StatsError>
where
    T: Default + Clone + Float,
{
    let sample = PairedSample::from_slices(x, y).inspect_err(|err| {
        debug!("rejected paired sample: {err}");
    })?;
    summarize(sample)
}

/// Computes the statistics of an already validated sample
///
/// # Returns
///
/// * `Result<Summary<T>, StatsError>` - The statistics, or [`StatsError::NumericOverflow`]
///   if a sum left the floating-point range
pub fn summarize<T>(sample: PairedSample<T>) -> Result<Summary<T>, StatsError>
where
    T: Default + Clone + Float,
{
    let n = sample.len();
    debug!("computing paired statistics over {n} pairs");

    let mut moments = PairedMoments::new();
    let mut derived = DerivedArrays {
        xy: Vec::with_capacity(n),
        x_squared: Vec::with_capacity(n),
        y_squared: Vec::with_capacity(n),
    };
    for (x, y) in sample.pairs() {
        derived.xy.push(x * y);
        derived.x_squared.push(x * x);
        derived.y_squared.push(y * y);
        moments.next((x, y));
    }

    let scalars = scalars(&moments).ok_or(StatsError::NumericOverflow)?;
    debug!("paired statistics ready for {n} pairs");

    Ok(Summary {
        sample,
        derived,
        scalars,
    })
}

// `None` when the moments are empty or a raw sum is no longer finite
fn scalars<T>(moments: &PairedMoments<T>) -> Option<ScalarResult<T>>
where
    T: Default + Clone + Float,
{
    let (sum_x, sum_y) = moments.sum()?;
    let (sum_sq_x, sum_sq_y) = moments.sum_sq()?;
    let sum_xy = moments.sum_prod()?;
    if ![sum_x, sum_y, sum_sq_x, sum_sq_y, sum_xy]
        .iter()
        .all(|s| s.is_finite())
    {
        debug!("paired sums overflowed after {} pairs", moments.count());
        return None;
    }

    let (mean_x, mean_y) = moments.mean()?;
    let (var_x, var_y) = moments.variance()?;
    let (stddev_x, stddev_y) = moments.stddev()?;
    let (cv_x, cv_y) = moments.cv()?;
    let covariance = moments.cov()?;
    let correlation = moments.corr()?;
    if ![mean_x, mean_y, var_x, var_y, covariance]
        .iter()
        .all(|s| s.is_finite())
    {
        return None;
    }

    Some(ScalarResult {
        n: moments.count(),
        x: SampleSummary {
            sum: sum_x,
            sum_sq: sum_sq_x,
            mean: mean_x,
            variance: var_x,
            stddev: stddev_x,
            cv: cv_x,
        },
        y: SampleSummary {
            sum: sum_y,
            sum_sq: sum_sq_y,
            mean: mean_y,
            variance: var_y,
            stddev: stddev_y,
            cv: cv_y,
        },
        sum_xy,
        covariance,
        correlation,
    })
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::{Axis, InvalidReason, Measure, Undefined};

    #[test]
    fn worked_example() {
        let summary = compute(&[2.0, 3.0, 5.0, 1.0], &[4.0, 8.0, 3.0, 4.0]).unwrap();
        let s = summary.scalars();

        assert_eq!(s.n, 4);
        assert_eq!(s.x.sum, 11.0);
        assert_eq!(s.y.sum, 19.0);
        assert_eq!(s.x.sum_sq, 39.0);
        assert_eq!(s.y.sum_sq, 105.0);
        assert_eq!(s.sum_xy, 51.0);
        assert_eq!(s.x.mean, 2.75);
        assert_eq!(s.y.mean, 4.75);
        assert_eq!(s.x.variance, 2.1875);
        assert_eq!(s.y.variance, 3.6875);
        assert_approx_eq!(s.x.stddev, 1.479019945774904, 1e-12);
        assert_approx_eq!(s.y.stddev, 1.920286436967152, 1e-12);
        assert_approx_eq!(s.covariance, -0.3125, 1e-12);
        assert_approx_eq!(s.correlation.value().unwrap(), -0.11002971203391539, 1e-12);
        assert_approx_eq!(s.x.cv.value().unwrap(), 0.5378254348272379, 1e-12);
        assert_approx_eq!(s.y.cv.value().unwrap(), 0.4042708288351899, 1e-12);
    }

    #[test]
    fn derived_arrays_are_index_aligned() {
        let summary = compute(&[2.0, 3.0, 5.0, 1.0], &[4.0, 8.0, 3.0, 4.0]).unwrap();
        let derived = summary.derived();

        assert_eq!(derived.len(), 4);
        assert_eq!(derived.xy, vec![8.0, 24.0, 15.0, 4.0]);
        assert_eq!(derived.x_squared, vec![4.0, 9.0, 25.0, 1.0]);
        assert_eq!(derived.squared(Axis::Y), &[16.0, 64.0, 9.0, 16.0]);
    }

    #[test]
    fn derived_arrays_keep_full_precision() {
        let summary = compute(&[1.2345], &[2.0001]).unwrap();
        assert_eq!(summary.derived().xy, vec![1.2345 * 2.0001]);
        assert_eq!(summary.derived().x_squared, vec![1.2345 * 1.2345]);
        assert_eq!(summary.scalars().sum_xy, 1.2345 * 2.0001);
    }

    #[test]
    fn zero_mean_sample_has_undefined_cv() {
        let summary = compute(&[0.0, 0.0, 0.0], &[1.0, 2.0, 6.0]).unwrap();
        let s = summary.scalars();

        assert_eq!(s.x.mean, 0.0);
        assert_eq!(s.x.cv, Measure::Undefined(Undefined::ZeroMean));
        assert!(s.y.cv.is_defined());
        assert_eq!(s.correlation, Measure::Undefined(Undefined::ZeroDeviation));
        assert_eq!(s.covariance, 0.0);
    }

    #[test]
    fn single_pair_has_zero_spread_and_no_correlation() {
        let summary = compute(&[3.7], &[-1.9]).unwrap();
        let s = summary.scalars();

        assert_eq!(s.x.variance, 0.0);
        assert_eq!(s.y.variance, 0.0);
        assert_eq!(s.x.stddev, 0.0);
        assert_eq!(s.y.stddev, 0.0);
        assert_eq!(s.correlation, Measure::Undefined(Undefined::ZeroDeviation));
        assert_eq!(s.x.cv, Measure::Value(0.0));
    }

    #[test]
    fn repeated_value_sample_has_no_correlation() {
        let summary = compute(&[0.7; 6], &[1.0, 4.0, 2.0, 8.0, 5.0, 7.0]).unwrap();
        let s = summary.scalars();

        assert_eq!(s.x.variance, 0.0);
        assert_eq!(s.x.stddev, 0.0);
        assert_eq!(s.x.cv, Measure::Value(0.0));
        assert_eq!(s.correlation, Measure::Undefined(Undefined::ZeroDeviation));
    }

    #[test]
    fn perfect_linear_relationship() {
        let summary = compute(&[1.0, 2.0, 3.0, 4.0], &[-2.0, -4.0, -6.0, -8.0]).unwrap();
        assert_approx_eq!(summary.scalars().correlation.value().unwrap(), -1.0, 1e-12);
    }

    #[test]
    fn validation_happens_before_arithmetic() {
        let err = compute(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(err, StatsError::LengthMismatch { x_len: 3, y_len: 4 });

        let err = compute::<f64>(&[], &[]).unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidValue {
                axis: Axis::X,
                reason: InvalidReason::Empty
            }
        );

        let err = compute(&[1.0, f64::NAN], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidValue {
                axis: Axis::X,
                reason: InvalidReason::NonFinite { index: 1 }
            }
        );
    }

    #[test]
    fn overflowing_squares_are_reported() {
        let err = compute(&[1e200, 2e200], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, StatsError::NumericOverflow);
    }

    #[test]
    fn summary_keeps_the_input() {
        let summary = compute(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
        assert_eq!(summary.sample().x(), &[1.0, 2.0]);
        assert_eq!(summary.sample().y(), &[3.0, 4.0]);
    }
}
