use core::str::FromStr;

use log::trace;
use num_traits::Float;

use crate::{Report, ReportConfig, StatsError, Summary, analyze};

/// Outcome of the latest submission to a [`Worksheet`]
///
/// Keeps "nothing computed yet" apart from "input rejected" and from a
/// computed [`Summary`], whose own undefined statistics are carried by
/// [`Measure`](crate::Measure).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Analysis<T> {
    /// No input has been submitted
    #[default]
    Pending,
    /// The last input failed validation
    Rejected(StatsError),
    /// The last input was valid
    Ready(Summary<T>),
}

impl<T> Analysis<T>
where
    T: Default + Clone + Float + FromStr,
{
    /// Parses and analyzes two comma-separated samples
    pub fn from_text(x_text: &str, y_text: &str) -> Self {
        match analyze(x_text, y_text) {
            Ok(summary) => Analysis::Ready(summary),
            Err(err) => Analysis::Rejected(err),
        }
    }
}

impl<T> Analysis<T> {
    /// Returns `true` if nothing has been submitted yet
    pub const fn is_pending(&self) -> bool {
        matches!(self, Analysis::Pending)
    }

    /// Returns the summary of a valid submission
    pub const fn summary(&self) -> Option<&Summary<T>> {
        match self {
            Analysis::Ready(summary) => Some(summary),
            _ => None,
        }
    }

    /// Returns the error of a rejected submission
    pub const fn error(&self) -> Option<&StatsError> {
        match self {
            Analysis::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

/// Interactive front of the calculator: the latest pair of inputs and what
/// they produced
///
/// Every submission replaces the previous [`Analysis`] with one computed from
/// scratch, so a rejected input never leaves statistics of an older input
/// behind.
///
/// # Examples
///
/// ```
/// use paired_statistics::{StatsError, Worksheet};
///
/// let mut sheet = Worksheet::<f64>::default();
/// assert!(sheet.analysis().is_pending());
///
/// sheet.submit("2,3,5,1", "4,8,3,4");
/// assert!(sheet.report().is_some());
///
/// sheet.submit("2,3,5", "4,8,3,4");
/// assert_eq!(sheet.error(), Some(&StatsError::LengthMismatch { x_len: 3, y_len: 4 }));
/// assert!(sheet.report().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Worksheet<T> {
    config: ReportConfig,
    analysis: Analysis<T>,
}

impl<T> Worksheet<T>
where
    T: Default + Clone + Float + FromStr,
{
    /// Creates an empty worksheet reporting at the precision of `config`
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            analysis: Analysis::Pending,
        }
    }

    /// Submits a new pair of inputs
    ///
    /// # Returns
    ///
    /// * `&Analysis<T>` - The analysis of this submission
    pub fn submit(&mut self, x_text: &str, y_text: &str) -> &Analysis<T> {
        self.analysis = Analysis::from_text(x_text, y_text);
        match &self.analysis {
            Analysis::Ready(summary) => {
                trace!("worksheet ready with {} pairs", summary.scalars().n)
            }
            Analysis::Rejected(err) => trace!("worksheet rejected input: {err}"),
            Analysis::Pending => {}
        }
        &self.analysis
    }

    /// Discards the current analysis
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The worksheet
    pub fn clear(&mut self) -> &mut Self {
        self.analysis = Analysis::Pending;
        self
    }

    /// Returns the current analysis
    pub const fn analysis(&self) -> &Analysis<T> {
        &self.analysis
    }

    /// Returns the error of the last submission, if it was rejected
    pub const fn error(&self) -> Option<&StatsError> {
        self.analysis.error()
    }

    /// Returns the display config
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Replaces the display config; the analysis itself is unaffected
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The worksheet
    pub fn set_config(&mut self, config: ReportConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Returns the report of the last submission, if it was valid
    pub fn report(&self) -> Option<Report<T>> {
        self.analysis
            .summary()
            .map(|summary| summary.report(&self.config))
    }
}
