use num_traits::Float;

/// Rounds `value` to `decimals` places after the decimal point
///
/// Halfway cases round away from zero. A result that rounds to zero is
/// returned as positive zero, so tiny negative values never display as `-0`.
/// If scaling by `10^decimals` leaves the finite range, `value` is returned
/// unchanged since it already carries fewer significant decimals.
///
/// # Arguments
///
/// * `value` - The value to round
/// * `decimals` - The number of decimal places to keep
///
/// # Returns
///
/// * `T` - The rounded value
#[inline]
pub fn round_to<T: Float>(value: T, decimals: u32) -> T {
    let Some(ten) = T::from(10) else {
        return value;
    };
    let factor = ten.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    let rounded = scaled.round() / factor;
    if rounded.is_zero() { T::zero() } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_places() {
        assert_eq!(round_to(1.479019945774904, 5), 1.47902);
        assert_eq!(round_to(-0.11002971203391539, 5), -0.11003);
        assert_eq!(round_to(0.5378254348272379, 5), 0.53783);
        assert_eq!(round_to(1.2345678, 3), 1.235);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn negative_zero_becomes_zero() {
        let rounded = round_to(-0.000001, 5);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn huge_values_pass_through() {
        assert_eq!(round_to(1e300, 20), 1e300);
        assert_eq!(round_to(0.1, 400), 0.1);
    }

    #[test]
    fn works_with_f32() {
        assert_eq!(round_to(1.23456f32, 2), 1.23);
    }
}
