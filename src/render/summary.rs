//! Fixed-format console summary.
//!
//! Built as a string and handed back to the caller to print, so the exact
//! byte layout is testable without capturing stdout.

use crate::Result;
use crate::model::ReportData;
use crate::render::pluralize;
use std::fmt::Write;

const BANNER: &str = "============================================================";

pub fn render_summary(data: &ReportData) -> Result<String> {
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "SPEEDUP ANALYSIS SUMMARY")?;
    writeln!(out, "{BANNER}")?;

    for view in &data.series {
        writeln!(out)?;
        writeln!(out, "{}:", view.name)?;

        for (i, p) in view.points.iter().enumerate() {
            let tag = if i == 0 {
                " (baseline)"
            } else if p.workers == view.max_speedup_workers {
                " (max)"
            } else {
                ""
            };
            writeln!(
                out,
                "  {} {}: {:.2}x{}",
                p.workers,
                pluralize(&view.noun, p.workers),
                p.speedup,
                tag
            )?;
        }

        writeln!(
            out,
            "  Efficiency at {} {}: {:.1}%",
            view.max_speedup_workers,
            pluralize(&view.noun, view.max_speedup_workers),
            view.efficiency_pct
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Scalability Comparison:")?;
    for view in &data.series {
        writeln!(
            out,
            "  {} scales up to: {:.2}x",
            view.name, view.max_speedup
        )?;
    }
    writeln!(out, "{BANNER}")?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_report_data;
    use crate::series::builtin_series;
    use pretty_assertions::assert_eq;

    fn summary() -> String {
        let data = build_report_data(&builtin_series()).unwrap();
        render_summary(&data).unwrap()
    }

    #[test]
    fn openmp_block_matches_expected_layout() {
        let text = summary();
        let expected = "\
OpenMP:
  1 thread: 1.00x (baseline)
  2 threads: 1.65x
  4 threads: 3.03x
  8 threads: 4.40x
  16 threads: 4.42x (max)
  Efficiency at 16 threads: 27.6%
";
        assert!(text.contains(expected), "summary was:\n{}", text);
    }

    #[test]
    fn cuda_block_marks_max_at_32_not_last() {
        let text = summary();
        assert!(text.contains("  32 threads: 19.67x (max)\n"));
        assert!(text.contains("  64 threads: 19.67x\n"));
        assert!(text.contains("  128 threads: 19.67x\n"));
        assert!(text.contains("  Efficiency at 32 threads: 61.5%\n"));
    }

    #[test]
    fn mpi_block_uses_process_noun() {
        let text = summary();
        assert!(text.contains("  1 process: 1.00x (baseline)\n"));
        assert!(text.contains("  16 processes: 9.70x (max)\n"));
        assert!(text.contains("  Efficiency at 16 processes: 60.6%\n"));
    }

    #[test]
    fn banners_and_comparison_block() {
        let text = summary();
        assert!(text.starts_with(&format!("\n{BANNER}\nSPEEDUP ANALYSIS SUMMARY\n{BANNER}\n")));
        assert!(text.ends_with(&format!(
            "Scalability Comparison:\n  \
             OpenMP scales up to: 4.42x\n  \
             MPI scales up to: 9.70x\n  \
             CUDA scales up to: 19.67x\n{BANNER}\n"
        )));
        assert_eq!(BANNER.len(), 60);
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        assert_eq!(summary(), summary());
    }
}
