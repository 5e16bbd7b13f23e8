//! Display-ready view of a [`Summary`].
//!
//! The engine keeps every value at full precision. This module is the only
//! place where rounding happens: scalar statistics are rounded to
//! [`ReportConfig::scalar_decimals`] places and the products and squares of the
//! worked-example table to [`ReportConfig::term_decimals`] places.

use alloc::vec::Vec;

use core::fmt;

use num_traits::Float;

use crate::{Axis, Measure, Summary, helper::round_to};

/// Display precision of a [`Report`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportConfig {
    /// Decimal places of the scalar statistics
    scalar_decimals: u32,
    /// Decimal places of the per-element products and squares
    term_decimals: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportConfig {
    /// Decimal places of scalar statistics unless configured otherwise
    pub const DEFAULT_SCALAR_DECIMALS: u32 = 5;
    /// Decimal places of table terms unless configured otherwise
    pub const DEFAULT_TERM_DECIMALS: u32 = 3;

    /// Creates a config with 5 decimals for scalars and 3 for table terms
    pub const fn new() -> Self {
        Self {
            scalar_decimals: Self::DEFAULT_SCALAR_DECIMALS,
            term_decimals: Self::DEFAULT_TERM_DECIMALS,
        }
    }

    /// Returns the decimal places of the scalar statistics
    pub const fn scalar_decimals(&self) -> u32 {
        self.scalar_decimals
    }

    /// Sets the decimal places of the scalar statistics
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The config
    pub const fn set_scalar_decimals(&mut self, decimals: u32) -> &mut Self {
        self.scalar_decimals = decimals;
        self
    }

    /// Returns the decimal places of the table terms
    pub const fn term_decimals(&self) -> u32 {
        self.term_decimals
    }

    /// Sets the decimal places of the table terms
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The config
    pub const fn set_term_decimals(&mut self, decimals: u32) -> &mut Self {
        self.term_decimals = decimals;
        self
    }
}

/// Row of the worked-example table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Row {
    /// The X values
    X,
    /// The Y values
    Y,
    /// The squared X values
    XSquared,
    /// The squared Y values
    YSquared,
    /// The pairwise products
    Xy,
}

impl Row {
    /// All rows, in table order
    pub const ALL: [Row; 5] = [Row::X, Row::Y, Row::XSquared, Row::YSquared, Row::Xy];

    /// Returns the row heading
    pub const fn label(&self) -> &'static str {
        match self {
            Row::X => "X",
            Row::Y => "Y",
            Row::XSquared => "X²",
            Row::YSquared => "Y²",
            Row::Xy => "XY",
        }
    }
}

/// Scalar statistic listed in a [`Report`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statistic {
    /// Mean of a sample
    Mean(Axis),
    /// Population variance of a sample
    Variance(Axis),
    /// Population standard deviation of a sample
    StdDev(Axis),
    /// Coefficient of variation of a sample
    Cv(Axis),
    /// Population covariance
    Covariance,
    /// Pearson correlation
    Correlation,
}

impl Statistic {
    /// All statistics, in report order
    pub const ALL: [Statistic; 10] = [
        Statistic::Mean(Axis::X),
        Statistic::Mean(Axis::Y),
        Statistic::Variance(Axis::X),
        Statistic::Variance(Axis::Y),
        Statistic::StdDev(Axis::X),
        Statistic::StdDev(Axis::Y),
        Statistic::Cv(Axis::X),
        Statistic::Cv(Axis::Y),
        Statistic::Covariance,
        Statistic::Correlation,
    ];
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Mean(axis) => write!(f, "Mean {axis}"),
            Statistic::Variance(axis) => write!(f, "Variance {axis}"),
            Statistic::StdDev(axis) => write!(f, "Std dev {axis}"),
            Statistic::Cv(Axis::X) => f.write_str("CVx"),
            Statistic::Cv(Axis::Y) => f.write_str("CVy"),
            Statistic::Covariance => f.write_str("Covariance"),
            Statistic::Correlation => f.write_str("Correlation"),
        }
    }
}

/// Rounded, labelled view of a [`Summary`] for tabular and scatter-plot output
///
/// # Examples
///
/// ```
/// use paired_statistics::{Measure, ReportConfig, Row, Statistic, compute};
///
/// let summary = compute(&[2.0, 3.0, 5.0, 1.0], &[4.0, 8.0, 3.0, 4.0]).unwrap();
/// let report = summary.report(&ReportConfig::default());
///
/// assert_eq!(report.row(Row::Xy), &[8.0, 24.0, 15.0, 4.0]);
/// assert_eq!(report.get(Statistic::Correlation), Some(Measure::Value(-0.11003)));
/// assert_eq!(report.points()[0], (2.0, 4.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report<T> {
    config: ReportConfig,
    rows: Vec<(Row, Vec<T>)>,
    scalars: Vec<(Statistic, Measure<T>)>,
    points: Vec<(T, T)>,
}

impl<T: Float> Report<T> {
    /// Builds the report of `summary` at the precision of `config`
    pub fn new(summary: &Summary<T>, config: &ReportConfig) -> Self {
        let terms = |values: &[T]| -> Vec<T> {
            values
                .iter()
                .map(|v| round_to(*v, config.term_decimals))
                .collect()
        };
        let sample = summary.sample();
        let derived = summary.derived();
        let rows = vec![
            (Row::X, sample.x().to_vec()),
            (Row::Y, sample.y().to_vec()),
            (Row::XSquared, terms(&derived.x_squared)),
            (Row::YSquared, terms(&derived.y_squared)),
            (Row::Xy, terms(&derived.xy)),
        ];

        let s = summary.scalars();
        let scalars = Statistic::ALL
            .iter()
            .map(|stat| {
                let measure = match *stat {
                    Statistic::Mean(axis) => Measure::Value(s.axis(axis).mean),
                    Statistic::Variance(axis) => Measure::Value(s.axis(axis).variance),
                    Statistic::StdDev(axis) => Measure::Value(s.axis(axis).stddev),
                    Statistic::Cv(axis) => s.axis(axis).cv,
                    Statistic::Covariance => Measure::Value(s.covariance),
                    Statistic::Correlation => s.correlation,
                };
                (*stat, measure.map(|v| round_to(v, config.scalar_decimals)))
            })
            .collect();

        Self {
            config: *config,
            rows,
            scalars,
            points: sample.pairs().collect(),
        }
    }

    /// Returns the config the report was built with
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Returns the table rows in order X, Y, X², Y², XY
    pub fn rows(&self) -> &[(Row, Vec<T>)] {
        &self.rows
    }

    /// Returns the values of one table row
    pub fn row(&self, row: Row) -> &[T] {
        self.rows
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default()
    }

    /// Returns the rounded scalar statistics in report order
    pub fn scalars(&self) -> &[(Statistic, Measure<T>)] {
        &self.scalars
    }

    /// Returns one rounded scalar statistic
    pub fn get(&self, stat: Statistic) -> Option<Measure<T>> {
        self.scalars
            .iter()
            .find(|(s, _)| *s == stat)
            .map(|(_, m)| *m)
    }

    /// Returns the scatter-plot coordinates, one `(x, y)` per input pair
    pub fn points(&self) -> &[(T, T)] {
        &self.points
    }
}

impl<T: Float> Summary<T> {
    /// Builds the display-ready [`Report`] of this summary
    pub fn report(&self, config: &ReportConfig) -> Report<T> {
        Report::new(self, config)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, values) in &self.rows {
            write!(f, "{:<3}", row.label())?;
            for v in values {
                write!(f, " | {v}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        for (stat, measure) in &self.scalars {
            writeln!(f, "{stat}: {measure}")?;
        }
        Ok(())
    }
}
