//! meanstd – mean and sample standard deviation of a column of numbers.
//!
//! The crate reads one `f64` per line from a text file and reports the
//! arithmetic mean and the (Bessel-corrected) sample standard deviation,
//! both with two fractional digits.
//!
//! ## Modules
//! * [`sequence`] – [`sequence::Sequence`], an append-only container with
//!   `map`, `filter` and a strict left-fold `reduce`.
//! * [`statistics`] – the two-pass computation producing a
//!   [`statistics::Summary`].
//! * [`input`] – reading and parsing the line-oriented source.
//! * [`report`] – two-line console rendering with a configurable decimal
//!   separator.
//! * [`settings`] – layered configuration (defaults, `meanstd.toml`,
//!   `MEANSTD_*` environment variables).
//! * [`error`] – the crate error type.
//!
//! ## Degenerate input
//! Empty and single-value inputs are not errors. They resolve through
//! IEEE 754 arithmetic and surface as `NaN` in the report.
//!
//! ## Quick Start
//! ```
//! use meanstd::{sequence::Sequence, statistics, report};
//! let data: Sequence<f64> = (1..=10).map(|n| n as f64 * 10.0).collect();
//! let summary = statistics::summarize(&data);
//! assert_eq!(
//!     report::render(&summary, ','),
//!     "Mean: 55,00\nStandard Deviation: 30,28\n"
//! );
//! ```

pub mod error;
pub mod input;
pub mod report;
pub mod sequence;
pub mod settings;
pub mod statistics;
