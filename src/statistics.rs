//! Mean and sample standard deviation over a numeric [`Sequence`].
//!
//! The computation is the plain two-pass formula: one fold for the sum
//! behind the mean, one fold over the squared deviations behind the
//! variance. Degenerate inputs are left to IEEE 754 arithmetic: an empty
//! sequence gives a NaN mean which carries into the standard deviation,
//! and a single element gives a NaN standard deviation (0.0 / 0.0).
//! Nothing here ever fails.

use std::fmt;

use tracing::trace;

use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    mean: f64,
    standard_deviation: f64,
}

impl Summary {
    pub fn new(mean: f64, standard_deviation: f64) -> Self {
        Self {
            mean,
            standard_deviation,
        }
    }
    pub fn mean(&self) -> f64 {
        self.mean
    }
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "mean {} / sd {}", self.mean, self.standard_deviation)
    }
}

/// First pass: sum divided by count.
pub fn mean(dataset: &Sequence<f64>) -> f64 {
    dataset.reduce(0.0, |sum, x| sum + x) / dataset.size() as f64
}

/// Second pass: squared deviations from `mean`, summed, divided by
/// `size - 1`. A NaN mean yields a NaN variance; otherwise an empty
/// dataset would fold to 0.0 / -1.0 and report a negative zero.
pub fn sample_variance(dataset: &Sequence<f64>, mean: f64) -> f64 {
    if mean.is_nan() {
        return f64::NAN;
    }
    let squared_deviations = dataset.map(|x| (x - mean).powi(2));
    squared_deviations.reduce(0.0, |sum, d| sum + d) / (dataset.size() as f64 - 1.0)
}

pub fn summarize(dataset: &Sequence<f64>) -> Summary {
    let mean = mean(dataset);
    let standard_deviation = sample_variance(dataset, mean).sqrt();
    trace!(size = dataset.size(), mean, standard_deviation, "summarized dataset");
    Summary::new(mean, standard_deviation)
}
