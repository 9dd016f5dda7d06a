//! Speedup chart rendered as deterministic SVG markup.
//!
//! Three marked line series over a log2 worker axis, a dashed ideal-linear
//! reference, and one arrow annotation per series at its best point. All
//! layout values are named constants so the geometry is adjustable and
//! testable without touching the drawing code.

use crate::Result;
use crate::model::{ReportData, SeriesView};
use std::fmt::Write;

pub const WIDTH: f64 = 980.0;
pub const HEIGHT: f64 = 520.0;

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 28.0;
const MARGIN_TOP: f64 = 64.0;
const MARGIN_BOTTOM: f64 = 56.0;

/// Horizontal window: a fixed padding band around [1, 128] workers.
pub const X_MIN_WORKERS: f64 = 0.8;
pub const X_MAX_WORKERS: f64 = 140.0;
pub const X_TICKS: [u32; 8] = [1, 2, 4, 8, 16, 32, 64, 128];

/// Vertical axis runs from 0 to the best observed speedup plus this headroom.
pub const Y_HEADROOM: f64 = 3.0;
const Y_TICK_STEP: f64 = 2.0;

/// Ideal linear reference is drawn only up to 16 workers for clarity.
pub const IDEAL_MAX_WORKERS: u32 = 16;

const TITLE: &str = "Password Cracking Speedup Comparison";
const SUBTITLE: &str = "(Password: \"oshan\")";
const X_LABEL: &str = "Number of Threads/Processes";
const Y_LABEL: &str = "Speedup";

const GRID_COLOR: &str = "#ddd";
const TICK_COLOR: &str = "#444";
const AXIS_COLOR: &str = "#333";
const TEXT_COLOR: &str = "#222";
const TITLE_COLOR: &str = "#111";
const LEGEND_BORDER_COLOR: &str = "#ccc";

struct SeriesStyle {
    color: &'static str,
    marker: Marker,
}

enum Marker {
    Circle,
    Square,
    Triangle,
}

/// Per-series styles, cycled in series order.
static STYLES: [SeriesStyle; 3] = [
    SeriesStyle {
        color: "#ef4444",
        marker: Marker::Circle,
    },
    SeriesStyle {
        color: "#3b82f6",
        marker: Marker::Square,
    },
    SeriesStyle {
        color: "#10b981",
        marker: Marker::Triangle,
    },
];

/// Annotation label anchors per series: (label x in workers, vertical offset
/// in speedup units relative to the series' max speedup).
const ANNOTATION_ANCHORS: [(f64, f64); 3] = [(22.0, -1.5), (22.0, 1.5), (50.0, 1.0)];

const MARKER_SIZE: f64 = 5.0;
const LEGEND_X: f64 = MARGIN_LEFT + 14.0;
const LEGEND_Y: f64 = MARGIN_TOP + 14.0;
const LEGEND_ROW_H: f64 = 20.0;

/// Data-to-pixel mapping for the plot area.
pub(crate) struct ChartGeometry {
    pub y_max: f64,
}

impl ChartGeometry {
    pub fn new(data: &ReportData) -> Self {
        let best = data
            .series
            .iter()
            .map(|s| s.max_speedup)
            .fold(0.0f64, f64::max);
        ChartGeometry {
            y_max: best + Y_HEADROOM,
        }
    }

    pub fn x(&self, workers: f64) -> f64 {
        let lo = X_MIN_WORKERS.log2();
        let hi = X_MAX_WORKERS.log2();
        let frac = (workers.log2() - lo) / (hi - lo);
        MARGIN_LEFT + frac * (WIDTH - MARGIN_LEFT - MARGIN_RIGHT)
    }

    pub fn y(&self, speedup: f64) -> f64 {
        let frac = speedup / self.y_max;
        HEIGHT - MARGIN_BOTTOM - frac * (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM)
    }
}

/// Render the whole chart to an SVG string. Pure; byte-identical for
/// identical report data.
pub fn render_chart_svg(data: &ReportData) -> Result<String> {
    let geo = ChartGeometry::new(data);
    let mut svg = String::new();

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="system-ui, sans-serif">"#
    )?;
    writeln!(svg, r#"<rect width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#)?;

    write_arrow_defs(&mut svg, data)?;
    write_grid_and_axes(&mut svg, &geo)?;
    write_ideal_line(&mut svg, &geo)?;
    for (i, view) in data.series.iter().enumerate() {
        write_series(&mut svg, &geo, view, i)?;
    }
    write_legend(&mut svg, data)?;
    for (i, view) in data.series.iter().enumerate() {
        write_annotation(&mut svg, &geo, view, i)?;
    }
    write_titles(&mut svg)?;

    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn style_for(i: usize) -> &'static SeriesStyle {
    &STYLES[i % STYLES.len()]
}

fn anchor_for(i: usize) -> (f64, f64) {
    ANNOTATION_ANCHORS[i % ANNOTATION_ANCHORS.len()]
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn write_arrow_defs(svg: &mut String, data: &ReportData) -> Result<()> {
    writeln!(svg, "<defs>")?;
    for (i, _) in data.series.iter().enumerate() {
        let color = style_for(i).color;
        writeln!(
            svg,
            r#"<marker id="arrow-{i}" viewBox="0 0 10 10" refX="9" refY="5" markerWidth="7" markerHeight="7" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="{color}"/></marker>"#
        )?;
    }
    writeln!(svg, "</defs>")?;
    Ok(())
}

fn write_grid_and_axes(svg: &mut String, geo: &ChartGeometry) -> Result<()> {
    let x0 = MARGIN_LEFT;
    let x1 = WIDTH - MARGIN_RIGHT;
    let y0 = HEIGHT - MARGIN_BOTTOM;
    let y1 = MARGIN_TOP;

    // Horizontal gridlines + y tick labels.
    let mut tick = Y_TICK_STEP;
    while tick < geo.y_max {
        let y = geo.y(tick);
        writeln!(
            svg,
            r#"<line x1="{x0:.1}" y1="{y:.1}" x2="{x1:.1}" y2="{y:.1}" stroke="{GRID_COLOR}" stroke-width="0.8" stroke-dasharray="4 4"/>"#
        )?;
        writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12" fill="{TICK_COLOR}">{}</text>"#,
            x0 - 8.0,
            y + 4.0,
            tick as u32
        )?;
        tick += Y_TICK_STEP;
    }

    // Vertical gridlines + x tick labels at the power-of-two worker counts.
    for &w in &X_TICKS {
        let x = geo.x(w as f64);
        writeln!(
            svg,
            r#"<line x1="{x:.1}" y1="{y0:.1}" x2="{x:.1}" y2="{y1:.1}" stroke="{GRID_COLOR}" stroke-width="0.8" stroke-dasharray="4 4"/>"#
        )?;
        writeln!(
            svg,
            r#"<text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{TICK_COLOR}">{w}</text>"#,
            y0 + 18.0
        )?;
    }

    // Axis lines.
    writeln!(
        svg,
        r#"<line x1="{x0:.1}" y1="{y0:.1}" x2="{x1:.1}" y2="{y0:.1}" stroke="{AXIS_COLOR}" stroke-width="1.2"/>"#
    )?;
    writeln!(
        svg,
        r#"<line x1="{x0:.1}" y1="{y0:.1}" x2="{x0:.1}" y2="{y1:.1}" stroke="{AXIS_COLOR}" stroke-width="1.2"/>"#
    )?;

    // Axis labels.
    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13" font-weight="bold" fill="{TEXT_COLOR}">{X_LABEL}</text>"#,
        (x0 + x1) / 2.0,
        HEIGHT - 14.0
    )?;
    writeln!(
        svg,
        r#"<text x="18" y="{:.1}" text-anchor="middle" font-size="13" font-weight="bold" fill="{TEXT_COLOR}" transform="rotate(-90 18 {:.1})">{Y_LABEL}</text>"#,
        (y0 + y1) / 2.0,
        (y0 + y1) / 2.0
    )?;

    Ok(())
}

fn write_ideal_line(svg: &mut String, geo: &ChartGeometry) -> Result<()> {
    // Segments between the integer worker counts; y = x is not a straight
    // line on a log2 axis.
    let mut points = String::new();
    for w in 1..=IDEAL_MAX_WORKERS {
        let x = geo.x(w as f64);
        let y = geo.y(w as f64);
        write!(points, "{x:.1},{y:.1} ")?;
    }
    writeln!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="gray" stroke-width="2" stroke-dasharray="8 5" opacity="0.6"/>"#,
        points.trim_end()
    )?;
    Ok(())
}

fn write_series(svg: &mut String, geo: &ChartGeometry, view: &SeriesView, i: usize) -> Result<()> {
    let style = style_for(i);

    let mut points = String::new();
    for p in &view.points {
        let x = geo.x(p.workers as f64);
        let y = geo.y(p.speedup);
        write!(points, "{x:.1},{y:.1} ")?;
    }
    writeln!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2.5"/>"#,
        points.trim_end(),
        style.color
    )?;

    for p in &view.points {
        let x = geo.x(p.workers as f64);
        let y = geo.y(p.speedup);
        write_marker(svg, &style.marker, style.color, x, y)?;
    }
    Ok(())
}

fn write_marker(svg: &mut String, marker: &Marker, color: &str, x: f64, y: f64) -> Result<()> {
    let r = MARKER_SIZE;
    match marker {
        Marker::Circle => writeln!(
            svg,
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="{r}" fill="{color}"/>"#
        )?,
        Marker::Square => writeln!(
            svg,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{color}"/>"#,
            x - r,
            y - r,
            2.0 * r,
            2.0 * r
        )?,
        Marker::Triangle => writeln!(
            svg,
            r#"<path d="M {x:.1} {:.1} L {:.1} {:.1} L {:.1} {:.1} z" fill="{color}"/>"#,
            y - r - 1.0,
            x - r - 1.0,
            y + r,
            x + r + 1.0,
            y + r
        )?,
    }
    Ok(())
}

fn write_legend(svg: &mut String, data: &ReportData) -> Result<()> {
    let rows = data.series.len() + 1; // plus the ideal reference
    writeln!(
        svg,
        r#"<rect x="{:.1}" y="{:.1}" width="190" height="{:.1}" fill="white" stroke="{LEGEND_BORDER_COLOR}" rx="6" opacity="0.95"/>"#,
        LEGEND_X,
        LEGEND_Y,
        rows as f64 * LEGEND_ROW_H + 12.0
    )?;

    for (i, view) in data.series.iter().enumerate() {
        let style = style_for(i);
        let y = LEGEND_Y + 16.0 + i as f64 * LEGEND_ROW_H;
        writeln!(
            svg,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2.5"/>"#,
            LEGEND_X + 10.0,
            y,
            LEGEND_X + 38.0,
            y,
            style.color
        )?;
        write_marker(svg, &style.marker, style.color, LEGEND_X + 24.0, y)?;
        writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="12" fill="{TEXT_COLOR}">{}</text>"#,
            LEGEND_X + 46.0,
            y + 4.0,
            xml_escape(&view.name)
        )?;
    }

    let y = LEGEND_Y + 16.0 + data.series.len() as f64 * LEGEND_ROW_H;
    writeln!(
        svg,
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="gray" stroke-width="2" stroke-dasharray="6 4" opacity="0.6"/>"#,
        LEGEND_X + 10.0,
        y,
        LEGEND_X + 38.0,
        y
    )?;
    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" font-size="12" fill="{TEXT_COLOR}">Ideal Linear Speedup</text>"#,
        LEGEND_X + 46.0,
        y + 4.0
    )?;
    Ok(())
}

fn write_annotation(
    svg: &mut String,
    geo: &ChartGeometry,
    view: &SeriesView,
    i: usize,
) -> Result<()> {
    let color = style_for(i).color;
    let (label_workers, dy) = anchor_for(i);

    let tip_x = geo.x(view.max_speedup_workers as f64);
    let tip_y = geo.y(view.max_speedup);
    let label_x = geo.x(label_workers);
    let label_y = geo.y(view.max_speedup + dy);

    let text = format!("{:.2}x", view.max_speedup);
    let box_w = text.len() as f64 * 7.5 + 12.0;
    let box_h = 20.0;

    writeln!(
        svg,
        r#"<line x1="{label_x:.1}" y1="{label_y:.1}" x2="{tip_x:.1}" y2="{tip_y:.1}" stroke="{color}" stroke-width="2" marker-end="url(#arrow-{i})"/>"#
    )?;
    writeln!(
        svg,
        r#"<rect x="{:.1}" y="{:.1}" width="{box_w:.1}" height="{box_h}" fill="white" stroke="{color}" rx="5" opacity="0.85"/>"#,
        label_x - box_w / 2.0,
        label_y - box_h / 2.0
    )?;
    writeln!(
        svg,
        r#"<text x="{label_x:.1}" y="{:.1}" text-anchor="middle" font-size="11" font-weight="bold" fill="{color}">{text}</text>"#,
        label_y + 4.0
    )?;
    Ok(())
}

fn write_titles(svg: &mut String) -> Result<()> {
    let cx = WIDTH / 2.0;
    writeln!(
        svg,
        r#"<text x="{cx:.1}" y="26" text-anchor="middle" font-size="16" font-weight="bold" fill="{TITLE_COLOR}">{TITLE}</text>"#
    )?;
    writeln!(
        svg,
        r#"<text x="{cx:.1}" y="46" text-anchor="middle" font-size="13" fill="{TICK_COLOR}">{}</text>"#,
        xml_escape(SUBTITLE)
    )?;
    Ok(())
}
