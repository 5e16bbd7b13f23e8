use num_traits::Float;

use crate::{Kbn, Measure, Undefined};

/// Accumulates the raw moments of a paired sample, one `(x, y)` pair at a time.
///
/// `PairedMoments<T>` keeps compensated sums of `x`, `y`, `x²`, `y²` and `xy`
/// and derives population statistics from them on demand: means, variances,
/// standard deviations, coefficients of variation, covariance and Pearson
/// correlation.
///
/// Pairs are folded in strictly in the order they are pushed, using the
/// Kahan-Babuska-Neumaier algorithm, so identical input order always yields
/// bit-identical results. Every accessor returns `None` until at least one
/// pair has been pushed.
///
/// The minimum and maximum of each sample are tracked alongside the sums, so
/// a sample whose values are all equal reports a variance of exactly zero
/// rather than the cancellation residue of `E[X²] - E[X]²`.
#[derive(Debug, Clone)]
pub struct PairedMoments<T> {
    /// Number of pairs folded in
    count: usize,
    /// Sum of inputs
    sum: (Kbn<T>, Kbn<T>),
    /// Sum of squares
    sum_sq: (Kbn<T>, Kbn<T>),
    /// Sum of products
    sum_prod: Kbn<T>,
    /// Smallest x and y seen
    min: Option<(T, T)>,
    /// Largest x and y seen
    max: Option<(T, T)>,
}

impl<T> Default for PairedMoments<T>
where
    T: Default + Clone + Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PairedMoments<T>
where
    T: Default + Clone + Float,
{
    /// Creates an empty `PairedMoments` accumulator
    ///
    /// # Returns
    ///
    /// * `Self` - The `PairedMoments` instance
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: Default::default(),
            sum_sq: Default::default(),
            sum_prod: Default::default(),
            min: None,
            max: None,
        }
    }

    /// Resets the accumulator
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The accumulator
    pub fn reset(&mut self) -> &mut Self {
        self.count = 0;
        self.sum = Default::default();
        self.sum_sq = Default::default();
        self.sum_prod = Default::default();
        self.min = None;
        self.max = None;
        self
    }

    /// Folds a new value pair into the sums
    ///
    /// # Arguments
    ///
    /// * `value` - A tuple containing the paired values (x, y)
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The updated accumulator for method chaining
    pub fn next(&mut self, (x, y): (T, T)) -> &mut Self {
        self.count += 1;

        self.sum.0 += x;
        self.sum.1 += y;
        self.sum_sq.0 += x * x;
        self.sum_sq.1 += y * y;
        self.sum_prod += x * y;

        self.min = Some(match self.min {
            None => (x, y),
            Some((min_x, min_y)) => (min_x.min(x), min_y.min(y)),
        });
        self.max = Some(match self.max {
            None => (x, y),
            Some((max_x, max_y)) => (max_x.max(x), max_y.max(y)),
        });

        self
    }

    /// Returns the smallest x and y values pushed so far
    #[inline]
    pub const fn min(&self) -> Option<(T, T)> {
        self.min
    }

    /// Returns the largest x and y values pushed so far
    #[inline]
    pub const fn max(&self) -> Option<(T, T)> {
        self.max
    }

    /// Returns the number of pairs folded in
    #[inline]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if no pair has been pushed yet
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn n(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            T::from(self.count)
        }
    }

    /// Returns the sums of the x and y values
    ///
    /// # Returns
    ///
    /// * `Option<(T, T)>` - `(Σx, Σy)`, or `None` if nothing was pushed
    pub fn sum(&self) -> Option<(T, T)> {
        (!self.is_empty()).then(|| (self.sum.0.total(), self.sum.1.total()))
    }

    /// Returns the sums of the squared x and y values
    ///
    /// # Returns
    ///
    /// * `Option<(T, T)>` - `(Σx², Σy²)`, or `None` if nothing was pushed
    pub fn sum_sq(&self) -> Option<(T, T)> {
        (!self.is_empty()).then(|| (self.sum_sq.0.total(), self.sum_sq.1.total()))
    }

    /// Returns the sum of the pairwise products
    ///
    /// # Returns
    ///
    /// * `Option<T>` - `Σxy`, or `None` if nothing was pushed
    pub fn sum_prod(&self) -> Option<T> {
        (!self.is_empty()).then(|| self.sum_prod.total())
    }

    /// Returns the means of the x and y values
    ///
    /// # Examples
    ///
    /// ```
    /// use paired_statistics::PairedMoments;
    ///
    /// let mut moments = PairedMoments::<f64>::new();
    /// [(2.0, 4.0), (3.0, 8.0), (5.0, 3.0), (1.0, 4.0)].into_iter().for_each(|p| {
    ///     moments.next(p);
    /// });
    ///
    /// assert_eq!(moments.mean(), Some((2.75, 4.75)));
    /// ```
    pub fn mean(&self) -> Option<(T, T)> {
        self.sum()
            .zip(self.n())
            .map(|(s, n)| (s.0 / n, s.1 / n))
    }

    /// Returns the means of the squared x and y values
    pub fn mean_sq(&self) -> Option<(T, T)> {
        self.sum_sq()
            .zip(self.n())
            .map(|(s, n)| (s.0 / n, s.1 / n))
    }

    /// Returns the mean of the pairwise products
    pub fn mean_prod(&self) -> Option<T> {
        self.sum_prod().zip(self.n()).map(|(s, n)| s / n)
    }

    /// Returns the population variances of the x and y values
    ///
    /// Computed as `E[X²] - E[X]²`. Cancellation can push that difference a
    /// hair below zero for near-constant samples, so it is clamped at zero. A
    /// sample whose values are all equal has a variance of exactly zero.
    ///
    /// # Returns
    ///
    /// * `Option<(T, T)>` - The variances, never negative, or `None` if nothing was pushed
    ///
    /// # Examples
    ///
    /// ```
    /// use paired_statistics::PairedMoments;
    ///
    /// let mut moments = PairedMoments::<f64>::new();
    /// moments.next((2.0, 4.0)).next((3.0, 8.0)).next((5.0, 3.0)).next((1.0, 4.0));
    ///
    /// assert_eq!(moments.variance(), Some((2.1875, 3.6875)));
    /// ```
    pub fn variance(&self) -> Option<(T, T)> {
        let (mean, mean_sq) = self.mean().zip(self.mean_sq())?;
        let (min, max) = self.min.zip(self.max)?;

        let spread = |mean: T, mean_sq: T, lo: T, hi: T| {
            if lo == hi {
                T::zero()
            } else {
                (mean_sq - mean * mean).max(T::zero())
            }
        };

        Some((
            spread(mean.0, mean_sq.0, min.0, max.0),
            spread(mean.1, mean_sq.1, min.1, max.1),
        ))
    }

    /// Returns the population standard deviations of the x and y values
    pub fn stddev(&self) -> Option<(T, T)> {
        self.variance().map(|var| (var.0.sqrt(), var.1.sqrt()))
    }

    /// Returns the population covariance of the pairs
    ///
    /// Covariance measures how the two samples move together: positive when
    /// large x values pair with large y values, negative when they pair with
    /// small ones.
    ///
    /// # Returns
    ///
    /// * `Option<T>` - `E[XY] - E[X]E[Y]`, or `None` if nothing was pushed
    ///
    /// # Examples
    ///
    /// ```
    /// use paired_statistics::PairedMoments;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let mut moments = PairedMoments::<f64>::new();
    /// moments.next((2.0, 4.0)).next((3.0, 8.0)).next((5.0, 3.0)).next((1.0, 4.0));
    ///
    /// assert_approx_eq!(moments.cov().unwrap(), -0.3125, 1e-12);
    /// ```
    pub fn cov(&self) -> Option<T> {
        let (mean_x, mean_y) = self.mean()?;
        let mean_xy = self.mean_prod()?;

        Some(mean_xy - mean_x * mean_y)
    }

    /// Returns the Pearson correlation coefficient of the pairs
    ///
    /// Correlation normalizes covariance by the product of the standard
    /// deviations, giving a scale-free measure of linear association in
    /// `[-1, 1]`. It is undefined when either sample is constant. Rounding in
    /// nearly degenerate samples can overshoot the bounds, so the coefficient
    /// is clamped to them.
    ///
    /// # Returns
    ///
    /// * `Option<Measure<T>>` - The coefficient, or `None` if nothing was pushed
    ///
    /// # Examples
    ///
    /// ```
    /// use paired_statistics::{Measure, PairedMoments, Undefined};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let mut moments = PairedMoments::<f64>::new();
    /// moments.next((1.0, 2.0)).next((2.0, 4.0)).next((3.0, 5.0)).next((4.0, 4.0)).next((5.0, 5.0));
    /// assert_approx_eq!(moments.corr().unwrap().value().unwrap(), 0.7745966692414834, 1e-9);
    ///
    /// moments.reset().next((1.0, 7.0)).next((2.0, 7.0));
    /// assert_eq!(moments.corr(), Some(Measure::Undefined(Undefined::ZeroDeviation)));
    /// ```
    pub fn corr(&self) -> Option<Measure<T>> {
        let cov = self.cov()?;
        let (stddev_x, stddev_y) = self.stddev()?;

        Some(
            Measure::ratio(cov, stddev_x * stddev_y, Undefined::ZeroDeviation)
                .map(|r| r.max(-T::one()).min(T::one())),
        )
    }

    /// Returns the coefficients of variation of the x and y values
    ///
    /// Each is the standard deviation divided by the mean, and is undefined
    /// when that mean is zero.
    pub fn cv(&self) -> Option<(Measure<T>, Measure<T>)> {
        let (mean_x, mean_y) = self.mean()?;
        let (stddev_x, stddev_y) = self.stddev()?;

        Some((
            Measure::ratio(stddev_x, mean_x, Undefined::ZeroMean),
            Measure::ratio(stddev_y, mean_y, Undefined::ZeroMean),
        ))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn moments_of(x: &[f64], y: &[f64]) -> PairedMoments<f64> {
        let mut moments = PairedMoments::new();
        x.iter().zip(y).for_each(|(x, y)| {
            moments.next((*x, *y));
        });
        moments
    }

    #[test]
    fn empty_accumulator_has_no_statistics() {
        let moments: PairedMoments<f64> = PairedMoments::new();
        assert!(moments.is_empty());
        assert_eq!(moments.sum(), None);
        assert_eq!(moments.mean(), None);
        assert_eq!(moments.variance(), None);
        assert_eq!(moments.cov(), None);
        assert_eq!(moments.corr(), None);
        assert_eq!(moments.cv(), None);
    }

    #[test]
    fn sums_work() {
        let moments = moments_of(&[2.0, 3.0, 5.0, 1.0], &[4.0, 8.0, 3.0, 4.0]);
        assert_eq!(moments.count(), 4);
        assert_eq!(moments.sum(), Some((11.0, 19.0)));
        assert_eq!(moments.sum_sq(), Some((39.0, 105.0)));
        assert_eq!(moments.sum_prod(), Some(51.0));
        assert_eq!(moments.mean_prod(), Some(12.75));
    }

    #[test]
    fn compensated_sum_keeps_small_terms() {
        let moments = moments_of(&[1e16, 1.0, -1e16], &[0.0, 0.0, 0.0]);
        assert_eq!(moments.sum().map(|s| s.0), Some(1.0));
    }

    #[test]
    fn stddev_works() {
        let moments = moments_of(&[2.0, 3.0, 5.0, 1.0], &[4.0, 8.0, 3.0, 4.0]);
        let (sd_x, sd_y) = moments.stddev().unwrap();
        assert_approx_eq!(sd_x, 1.479019945774904, 1e-12);
        assert_approx_eq!(sd_y, 1.920286436967152, 1e-12);
    }

    #[test]
    fn corr_works() {
        let moments = moments_of(&[2.0, 3.0, 5.0, 1.0], &[4.0, 8.0, 3.0, 4.0]);
        let corr = moments.corr().unwrap().value().unwrap();
        assert_approx_eq!(corr, -0.11002971203391539, 1e-12);
    }

    #[test]
    fn cv_works() {
        let moments = moments_of(&[2.0, 3.0, 5.0, 1.0], &[4.0, 8.0, 3.0, 4.0]);
        let (cv_x, cv_y) = moments.cv().unwrap();
        assert_approx_eq!(cv_x.value().unwrap(), 0.5378254348272379, 1e-12);
        assert_approx_eq!(cv_y.value().unwrap(), 0.4042708288351899, 1e-12);
    }

    #[test]
    fn cv_is_undefined_for_zero_mean() {
        let moments = moments_of(&[-1.0, 1.0], &[3.0, 5.0]);
        let (cv_x, cv_y) = moments.cv().unwrap();
        assert_eq!(cv_x, Measure::Undefined(Undefined::ZeroMean));
        assert!(cv_y.is_defined());
    }

    #[test]
    fn single_pair_has_zero_spread() {
        let moments = moments_of(&[0.1], &[7.3]);
        assert_eq!(moments.variance(), Some((0.0, 0.0)));
        assert_eq!(moments.stddev(), Some((0.0, 0.0)));
        assert_eq!(
            moments.corr(),
            Some(Measure::Undefined(Undefined::ZeroDeviation))
        );
    }

    #[test]
    fn variance_is_clamped_at_zero() {
        let moments = moments_of(
            &[0.1, 0.1, 0.100000000000001],
            &[1e8 + 0.1, 1e8 + 0.1, 1e8 + 0.10000001],
        );
        let (var_x, var_y) = moments.variance().unwrap();
        assert!(var_x >= 0.0);
        assert!(var_y >= 0.0);
        assert!(!moments.stddev().unwrap().1.is_nan());
    }

    #[test]
    fn constant_samples_have_exactly_zero_variance() {
        for (c, n) in [(0.3, 3), (0.7, 6), (0.1, 10), (-123.456, 7), (1e8 + 0.1, 3)] {
            let x = vec![c; n];
            let y: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let moments = moments_of(&x, &y);

            assert_eq!(moments.variance().unwrap().0, 0.0, "c={c} n={n}");
            assert_eq!(moments.stddev().unwrap().0, 0.0, "c={c} n={n}");
            assert_eq!(moments.cv().unwrap().0, Measure::Value(0.0), "c={c} n={n}");
            assert_eq!(
                moments.corr(),
                Some(Measure::Undefined(Undefined::ZeroDeviation)),
                "c={c} n={n}"
            );
        }
    }

    #[test]
    fn min_and_max_track_each_axis() {
        let moments = moments_of(&[2.0, 3.0, 5.0, 1.0], &[4.0, 8.0, 3.0, 4.0]);
        assert_eq!(moments.min(), Some((1.0, 3.0)));
        assert_eq!(moments.max(), Some((5.0, 8.0)));
    }

    #[test]
    fn corr_stays_within_bounds_for_nearly_constant_samples() {
        let x = [500.0, 500.0000001, 500.0, 500.0000001];
        let moments = moments_of(&x, &x);
        let r = moments.corr().unwrap();
        if let Measure::Value(r) = r {
            assert!((-1.0..=1.0).contains(&r), "r={r}");
        }
    }

    #[test]
    fn reset_works() {
        let mut moments = moments_of(&[1.0, 2.0], &[3.0, 4.0]);
        moments.reset();
        assert!(moments.is_empty());
        assert_eq!(moments.sum(), None);
        assert_eq!(moments.min(), None);
        moments.next((5.0, 6.0));
        assert_eq!(moments.sum(), Some((5.0, 6.0)));
    }

    #[test]
    fn works_with_f32() {
        let mut moments: PairedMoments<f32> = PairedMoments::new();
        moments.next((1.0, 2.0)).next((3.0, 6.0));
        assert_eq!(moments.mean(), Some((2.0, 4.0)));
        assert_approx_eq!(moments.corr().unwrap().value().unwrap(), 1.0f32, 1e-6);
    }
}
