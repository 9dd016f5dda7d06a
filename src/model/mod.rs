//! Report model: turn validated measurement series into derived views.

use crate::Result;
use crate::series::Series;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PointView {
    pub workers: u32,
    pub elapsed_secs: f64,
    pub speedup: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesView {
    pub name: String,
    pub noun: String,
    pub points: Vec<PointView>,

    /// Best observed speedup and where it happened. On ties the smallest
    /// worker count wins (a flat tail means the extra workers bought nothing).
    pub max_speedup: f64,
    pub max_speedup_workers: u32,

    /// (max_speedup / max_speedup_workers) * 100. Not clamped; values above
    /// 100 mean superlinear scaling and are reported as measured.
    pub efficiency_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub series: Vec<SeriesView>,
}

/// Speedup relative to the first (baseline) measurement of the same series.
pub fn compute_speedup(elapsed_secs: &[f64]) -> Vec<f64> {
    let baseline = elapsed_secs[0];
    elapsed_secs.iter().map(|&t| baseline / t).collect()
}

/// Build report data. Validates every series first, so downstream rendering
/// never sees an empty, unsorted, or non-positive dataset.
pub fn build_report_data(series: &[Series]) -> Result<ReportData> {
    let mut views = Vec::with_capacity(series.len());

    for s in series {
        s.validate()?;

        let times: Vec<f64> = s.points.iter().map(|p| p.elapsed_secs).collect();
        let speedups = compute_speedup(&times);

        let mut best = 0usize;
        for (i, &sp) in speedups.iter().enumerate() {
            if sp > speedups[best] {
                best = i;
            }
        }

        let max_speedup = speedups[best];
        let max_speedup_workers = s.points[best].workers;
        let efficiency_pct = (max_speedup / max_speedup_workers as f64) * 100.0;

        if efficiency_pct > 100.0 {
            eprintln!(
                "WARN: series '{}' reports superlinear efficiency ({:.1}%) at {} workers",
                s.name, efficiency_pct, max_speedup_workers
            );
        }

        let points = s
            .points
            .iter()
            .zip(&speedups)
            .map(|(p, &speedup)| PointView {
                workers: p.workers,
                elapsed_secs: p.elapsed_secs,
                speedup,
            })
            .collect();

        views.push(SeriesView {
            name: s.name.clone(),
            noun: s.noun.clone(),
            points,
            max_speedup,
            max_speedup_workers,
            efficiency_pct,
        });
    }

    Ok(ReportData { series: views })
}
