//! Series layer: measurement datasets + validated in-memory structures.
//!
//! This module is intentionally separate from model building and rendering.
//! It owns:
//! - Series/Point types (one dataset per parallel approach)
//! - the built-in benchmark numbers
//! - the optional measurement-file override parser

pub mod builtin;
pub mod parse;

pub use builtin::builtin_series;

use anyhow::bail;

/// One measured run: how many workers, how long the crack took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub workers: u32,
    pub elapsed_secs: f64,
}

/// One named measurement series for one parallel approach.
#[derive(Debug, Clone)]
pub struct Series {
    /// Label rendered in the chart legend and summary ("OpenMP", "MPI", ...).
    pub name: String,

    /// What a worker is called for this approach ("thread" or "process").
    pub noun: String,

    /// Ordered by ascending worker count; first entry is the baseline.
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: &str, noun: &str, points: Vec<Point>) -> Self {
        Series {
            name: name.to_string(),
            noun: noun.to_string(),
            points,
        }
    }

    /// Strict sanity checks before any arithmetic happens downstream.
    /// Speedup divides by the baseline time, so a zero or negative
    /// measurement is rejected here instead of surfacing as inf/NaN.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.points.is_empty() {
            bail!("series '{}' has no measurements", self.name);
        }
        for p in &self.points {
            if p.workers == 0 {
                bail!("series '{}' has a zero worker count", self.name);
            }
            if !(p.elapsed_secs > 0.0) {
                bail!(
                    "series '{}' has a non-positive elapsed time at {} workers: {}",
                    self.name,
                    p.workers,
                    p.elapsed_secs
                );
            }
        }
        for w in self.points.windows(2) {
            if w[1].workers <= w[0].workers {
                bail!(
                    "series '{}' worker counts must be strictly ascending ({} then {})",
                    self.name,
                    w[0].workers,
                    w[1].workers
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pt(workers: u32, elapsed_secs: f64) -> Point {
        Point {
            workers,
            elapsed_secs,
        }
    }

    #[test]
    fn builtin_series_are_valid() {
        let all = builtin_series();
        assert_eq!(all.len(), 3);
        for s in &all {
            s.validate().unwrap();
        }
    }

    #[test]
    fn rejects_zero_elapsed_time() {
        let s = Series::new("X", "thread", vec![pt(1, 1.0), pt(2, 0.0)]);
        let err = s.validate().unwrap_err().to_string();
        assert!(err.contains("non-positive elapsed time"), "{}", err);
    }

    #[test]
    fn rejects_negative_elapsed_time() {
        let s = Series::new("X", "thread", vec![pt(1, -0.5)]);
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_unsorted_and_duplicate_worker_counts() {
        let unsorted = Series::new("X", "thread", vec![pt(4, 0.3), pt(2, 0.5)]);
        assert!(unsorted.validate().is_err());

        let dup = Series::new("X", "thread", vec![pt(2, 0.5), pt(2, 0.4)]);
        assert!(dup.validate().is_err());
    }

    #[test]
    fn rejects_empty_series() {
        let s = Series::new("X", "thread", vec![]);
        assert!(s.validate().is_err());
    }
}
