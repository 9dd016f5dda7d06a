use crate::series::{Point, Series};
use anyhow::{Context, bail};
use regex::Regex;
use std::fs;

/// Parse a measurement override file and apply it to the given series.
///
/// Expected columns (whitespace-separated):
/// series_name  workers  elapsed_secs
///
/// Example:
/// OpenMP   4   0.421
///
/// Lines starting with '#' and blank lines are skipped. A series named in
/// the file has its built-in points replaced wholesale; series not named
/// keep their built-in data.
pub fn apply_measurement_file(path: &str, series: &mut [Series]) -> anyhow::Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("read measurement file {}", path))?;

    // Capture:
    // 1) series name (no whitespace)
    // 2) workers: integer
    // 3) elapsed seconds: float/integer
    let re = Regex::new(r"^\s*(\S+)\s+(\d+)\s+([0-9]+(?:\.[0-9]+)?)\s*$")?;

    // Collected rows per series, in file order.
    let mut replacements: Vec<(usize, Vec<Point>)> =
        series.iter().enumerate().map(|(i, _)| (i, Vec::new())).collect();

    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let line = line.trim_end();

        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let caps = match re.captures(line) {
            Some(c) => c,
            None => {
                bail!(
                    "measurement parse error at {}:{}: cannot parse line: {:?}",
                    path,
                    lno,
                    line
                );
            }
        };

        let name = caps.get(1).unwrap().as_str();
        let workers: u32 = caps.get(2).unwrap().as_str().parse()?;
        let elapsed_secs: f64 = caps.get(3).unwrap().as_str().parse()?;

        let idx = match series.iter().position(|s| s.name == name) {
            Some(i) => i,
            None => {
                bail!(
                    "unknown series {:?} at {}:{} (expected one of: {})",
                    name,
                    path,
                    lno,
                    series
                        .iter()
                        .map(|s| s.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        };

        let rows = &mut replacements[idx].1;
        if rows.iter().any(|p| p.workers == workers) {
            bail!(
                "duplicate measurement for {} at {} workers ({}:{})",
                name,
                workers,
                path,
                lno
            );
        }
        rows.push(Point {
            workers,
            elapsed_secs,
        });
    }

    for (idx, mut rows) in replacements {
        if rows.is_empty() {
            continue;
        }
        rows.sort_by_key(|p| p.workers);
        series[idx].points = rows;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::builtin_series;
    use pretty_assertions::assert_eq;

    fn write_temp(contents: &str) -> tempfile_path::TempPath {
        tempfile_path::write(contents)
    }

    // Tiny on-disk fixture helper; tests clean up after themselves.
    mod tempfile_path {
        use std::io::Write;

        pub struct TempPath(pub String);

        impl Drop for TempPath {
            fn drop(&mut self) {
                let _ = std::fs::remove_file(&self.0);
            }
        }

        pub fn write(contents: &str) -> TempPath {
            use std::sync::atomic::{AtomicUsize, Ordering};
            static NEXT: AtomicUsize = AtomicUsize::new(0);
            let path = std::env::temp_dir().join(format!(
                "speedup-report-test-{}-{}.txt",
                std::process::id(),
                NEXT.fetch_add(1, Ordering::Relaxed)
            ));
            let path = path.to_string_lossy().into_owned();
            let mut f = std::fs::File::create(&path).unwrap();
            f.write_all(contents.as_bytes()).unwrap();
            TempPath(path)
        }
    }

    #[test]
    fn replaces_named_series_and_keeps_others() {
        let file = write_temp(
            "# fresh OpenMP run\n\
             OpenMP 1 2.0\n\
             OpenMP 2 1.0\n",
        );
        let mut series = builtin_series();
        apply_measurement_file(&file.0, &mut series).unwrap();

        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[0].points[1].workers, 2);
        assert_eq!(series[0].points[1].elapsed_secs, 1.0);
        // MPI untouched.
        assert_eq!(series[1].points.len(), 5);
    }

    #[test]
    fn sorts_rows_by_worker_count() {
        let file = write_temp("MPI 8 0.1\nMPI 1 0.6\nMPI 2 0.3\n");
        let mut series = builtin_series();
        apply_measurement_file(&file.0, &mut series).unwrap();

        let workers: Vec<u32> = series[1].points.iter().map(|p| p.workers).collect();
        assert_eq!(workers, vec![1, 2, 8]);
    }

    #[test]
    fn rejects_unknown_series() {
        let file = write_temp("Pthreads 1 1.0\n");
        let mut series = builtin_series();
        let err = apply_measurement_file(&file.0, &mut series)
            .unwrap_err()
            .to_string();
        assert!(err.contains("unknown series"), "{}", err);
    }

    #[test]
    fn rejects_duplicate_rows() {
        let file = write_temp("CUDA 4 0.02\nCUDA 4 0.01\n");
        let mut series = builtin_series();
        let err = apply_measurement_file(&file.0, &mut series)
            .unwrap_err()
            .to_string();
        assert!(err.contains("duplicate measurement"), "{}", err);
    }

    #[test]
    fn rejects_malformed_line() {
        let file = write_temp("OpenMP two 1.0\n");
        let mut series = builtin_series();
        let err = apply_measurement_file(&file.0, &mut series)
            .unwrap_err()
            .to_string();
        assert!(err.contains("cannot parse line"), "{}", err);
    }
}
