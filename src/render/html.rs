use crate::model::ReportData;
use crate::render::{chart, pluralize};

/// Render a self-contained HTML page around the chart SVG (report data
/// embedded as JSON for anyone who wants to script against the artifact).
///
/// Template substitution instead of `format!()`: the page contains literal
/// `{}` in its CSS, which would conflict with Rust formatting.
pub fn render_html_page(data: &ReportData, svg: &str) -> anyhow::Result<String> {
    let json = serde_json::to_string(data)?; // embedded as a JS object literal

    let mut pills = String::new();
    for view in &data.series {
        pills.push_str(&format!(
            r#"<span class="pill">{}: <b>{:.2}x</b> at {} {}</span>"#,
            html_escape(&view.name),
            view.max_speedup,
            view.max_speedup_workers,
            pluralize(&view.noun, view.max_speedup_workers),
        ));
        pills.push('\n');
    }

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Password Cracking Speedup Report</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }
  .chart { max-width: __WIDTH__px; margin: 16px auto; padding: 0 16px; }
  svg { width: 100%; height: auto; }
</style>
</head>
<body>
<header>
  <div class="summary">
__PILLS__
  </div>
</header>

<div class="chart">
__CHART__
</div>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;
</script>
</body>
</html>
"#;

    Ok(TEMPLATE
        .replace("__WIDTH__", &format!("{}", chart::WIDTH))
        .replace("__PILLS__", pills.trim_end())
        .replace("__CHART__", svg)
        .replace("__DATA__", &json))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_report_data;
    use crate::render::chart::render_chart_svg;
    use crate::series::builtin_series;

    #[test]
    fn page_embeds_chart_pills_and_data() {
        let data = build_report_data(&builtin_series()).unwrap();
        let svg = render_chart_svg(&data).unwrap();
        let html = render_html_page(&data, &svg).unwrap();

        assert!(html.contains("<svg"));
        assert!(html.contains("CUDA: <b>19.67x</b> at 32 threads"));
        assert!(html.contains("MPI: <b>9.70x</b> at 16 processes"));
        assert!(html.contains(r#""max_speedup_workers":16"#));
        assert!(!html.contains("__CHART__"));
        assert!(!html.contains("__DATA__"));
    }
}
