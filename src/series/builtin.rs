//! Built-in benchmark numbers.
//!
//! Measured on the password-cracking benchmark (target password "oshan"):
//! an OpenMP thread build, an MPI process build, and a CUDA kernel launched
//! with a growing thread count. Each row is (workers, wall seconds).

use crate::series::{Point, Series};

const OPENMP: &[(u32, f64)] = &[
    (1, 1.276),
    (2, 0.772),
    (4, 0.421),
    (8, 0.290),
    (16, 0.289),
];

const MPI: &[(u32, f64)] = &[
    (1, 0.5799),
    (2, 0.2922),
    (4, 0.1607),
    (8, 0.1013),
    (16, 0.0598),
];

const CUDA: &[(u32, f64)] = &[
    (1, 0.059),
    (2, 0.030),
    (4, 0.016),
    (8, 0.008),
    (16, 0.005),
    (32, 0.003),
    (64, 0.003),
    (128, 0.003),
];

fn to_points(rows: &[(u32, f64)]) -> Vec<Point> {
    rows.iter()
        .map(|&(workers, elapsed_secs)| Point {
            workers,
            elapsed_secs,
        })
        .collect()
}

/// The three series, in chart/summary order.
pub fn builtin_series() -> Vec<Series> {
    vec![
        Series::new("OpenMP", "thread", to_points(OPENMP)),
        Series::new("MPI", "process", to_points(MPI)),
        Series::new("CUDA", "thread", to_points(CUDA)),
    ]
}
