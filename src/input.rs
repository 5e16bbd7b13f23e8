//! Reads paired samples from comma-separated text.
//!
//! This is the boundary between free-form user input (a form field, a CLI
//! argument, a request body) and the statistics engine. Each sample is a list
//! of numbers separated by commas, such as `"2, 3, 5, 1"`; whitespace around a
//! number is ignored.

use alloc::{string::ToString, vec::Vec};

use core::str::FromStr;

use log::debug;
use num_traits::Float;

use crate::{Axis, InvalidReason, PairedSample, StatsError, Summary, engine::summarize};

/// Splits `text` into trimmed tokens, or `None` if it is blank
fn tokens(text: &str) -> Option<Vec<&str>> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.split(',').map(str::trim).collect())
    }
}

fn parse_tokens<T>(axis: Axis, tokens: &[&str]) -> Result<Vec<T>, StatsError>
where
    T: Float + FromStr,
{
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let value = token.parse::<T>().map_err(|_| StatsError::InvalidValue {
                axis,
                reason: InvalidReason::Unparseable {
                    index,
                    token: token.to_string(),
                },
            })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(StatsError::non_finite(axis, index))
            }
        })
        .collect()
}

/// Parses one comma-separated sample
///
/// # Arguments
///
/// * `axis` - The sample being parsed, used to label errors
/// * `text` - The raw text
///
/// # Returns
///
/// * `Result<Vec<T>, StatsError>` - The values, or [`StatsError::InvalidValue`] if
///   the text is blank, a token is not a number (an empty token between two
///   commas included), or a token is NaN or infinite
///
/// # Examples
///
/// ```
/// use paired_statistics::{Axis, InvalidReason, StatsError, parse_sample};
///
/// let x: Vec<f64> = parse_sample(Axis::X, " 2, 3,5 ,1").unwrap();
/// assert_eq!(x, vec![2.0, 3.0, 5.0, 1.0]);
///
/// let err = parse_sample::<f64>(Axis::Y, "4,,3").unwrap_err();
/// assert!(matches!(
///     err,
///     StatsError::InvalidValue { axis: Axis::Y, reason: InvalidReason::Unparseable { index: 1, .. } }
/// ));
/// ```
pub fn parse_sample<T>(axis: Axis, text: &str) -> Result<Vec<T>, StatsError>
where
    T: Float + FromStr,
{
    let tokens = tokens(text).ok_or(StatsError::empty(axis))?;
    parse_tokens(axis, &tokens)
}

/// Parses both samples and validates them as a pair
///
/// Blank input is reported first (X before Y). The number of tokens is then
/// compared before any token is parsed, so a count mismatch is always reported
/// as [`StatsError::LengthMismatch`], whatever the tokens contain.
///
/// # Examples
///
/// ```
/// use paired_statistics::{StatsError, parse_pair};
///
/// let sample = parse_pair::<f64>("2,3,5,1", "4,8,3,4").unwrap();
/// assert_eq!(sample.len(), 4);
///
/// let err = parse_pair::<f64>("1,2,3", "1,2,x,4").unwrap_err();
/// assert_eq!(err, StatsError::LengthMismatch { x_len: 3, y_len: 4 });
/// ```
pub fn parse_pair<T>(x_text: &str, y_text: &str) -> Result<PairedSample<T>, StatsError>
where
    T: Float + FromStr,
{
    let x_tokens = tokens(x_text).ok_or(StatsError::empty(Axis::X))?;
    let y_tokens = tokens(y_text).ok_or(StatsError::empty(Axis::Y))?;
    if x_tokens.len() != y_tokens.len() {
        return Err(StatsError::LengthMismatch {
            x_len: x_tokens.len(),
            y_len: y_tokens.len(),
        });
    }

    let x = parse_tokens(Axis::X, &x_tokens)?;
    let y = parse_tokens(Axis::Y, &y_tokens)?;
    PairedSample::new(x, y)
}

/// Parses both samples and computes their statistics
///
/// # Examples
///
/// ```
/// use paired_statistics::analyze;
///
/// let summary = analyze::<f64>("2, 3, 5, 1", "4, 8, 3, 4").unwrap();
/// assert_eq!(summary.scalars().x.mean, 2.75);
/// ```
pub fn analyze<T>(x_text: &str, y_text: &str) -> Result<Summary<T>, StatsError>
where
    T: Default + Clone + Float + FromStr,
{
    let sample = parse_pair(x_text, y_text).inspect_err(|err| {
        debug!("rejected paired input: {err}");
    })?;
    summarize(sample)
}
