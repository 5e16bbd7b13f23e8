#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod error;
pub use error::{Axis, InvalidReason, StatsError};

mod measure;
pub use measure::{Measure, Undefined};

mod paired_moments;
pub use paired_moments::PairedMoments;

mod sample;
pub use sample::PairedSample;

mod summary;
pub use summary::{DerivedArrays, SampleSummary, ScalarResult, Summary};

mod engine;
pub use engine::{compute, summarize};

mod input;
pub use input::{analyze, parse_pair, parse_sample};

mod report;
pub use report::{Report, ReportConfig, Row, Statistic};

mod worksheet;
pub use worksheet::{Analysis, Worksheet};
