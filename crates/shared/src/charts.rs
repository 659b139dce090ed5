//! SVG geometry for the dashboard's charts.
//!
//! Every builder returns markup for the inside of an `<svg>` element whose
//! `viewBox` is `0 0 {width} {height}`; the frontend wraps and injects it.

use std::borrow::Cow;
use std::f64::consts::PI;
use std::fmt::Write;

use crate::models::{PerformancePoint, SkillScore};

/// Radius of the accuracy gauge inside its 100x100 viewBox.
pub const GAUGE_RADIUS: f64 = 40.0;

const CHART_PAD_LEFT: f64 = 32.0;
const CHART_PAD_RIGHT: f64 = 12.0;
const CHART_PAD_TOP: f64 = 12.0;
const CHART_PAD_BOTTOM: f64 = 24.0;

const STROKE: &str = "#8884d8";

/// Escape text for an SVG text node or attribute value.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub fn gauge_circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Stroke dash offset that leaves `percent` of the ring visible.
/// Percent is clamped to 0-100.
pub fn gauge_dash_offset(percent: f64, radius: f64) -> f64 {
    let pct = if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 };
    gauge_circumference(radius) * (1.0 - pct / 100.0)
}

/// Upper bound of the y axis: the series max rounded up to the next ten.
pub fn axis_max(values: impl IntoIterator<Item = f64>) -> f64 {
    let max = values.into_iter().fold(0.0_f64, f64::max);
    ((max / 10.0).ceil() * 10.0).max(10.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    fn inner_w(&self) -> f64 {
        (self.width - CHART_PAD_LEFT - CHART_PAD_RIGHT).max(0.0)
    }

    fn inner_h(&self) -> f64 {
        (self.height - CHART_PAD_TOP - CHART_PAD_BOTTOM).max(0.0)
    }

    fn y_for(&self, value: f64, y_max: f64) -> f64 {
        CHART_PAD_TOP + self.inner_h() * (1.0 - value / y_max)
    }
}

/// Pixel positions of each point of a line chart, evenly spaced along x.
pub fn line_points(points: &[PerformancePoint], area: PlotArea) -> Vec<(f64, f64)> {
    let y_max = axis_max(points.iter().map(|p| p.score));
    let step = if points.len() > 1 {
        area.inner_w() / (points.len() - 1) as f64
    } else {
        0.0
    };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (CHART_PAD_LEFT + step * i as f64, area.y_for(p.score, y_max)))
        .collect()
}

fn build_axes(svg: &mut String, area: PlotArea, y_max: f64) {
    let x0 = CHART_PAD_LEFT;
    let y0 = area.height - CHART_PAD_BOTTOM;
    let x1 = area.width - CHART_PAD_RIGHT;
    let _ = write!(
        svg,
        r#"<line x1="{x0}" y1="{CHART_PAD_TOP}" x2="{x0}" y2="{y0}" stroke="rgba(255,255,255,0.3)"/>"#
    );
    let _ = write!(
        svg,
        r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y0}" stroke="rgba(255,255,255,0.3)"/>"#
    );
    for tick in [0.0, y_max / 2.0, y_max] {
        let y = area.y_for(tick, y_max);
        let _ = write!(
            svg,
            r#"<text x="{}" y="{y}" fill="rgba(255,255,255,0.6)" font-size="10" text-anchor="end" dominant-baseline="central">{tick}</text>"#,
            x0 - 4.0
        );
    }
}

fn build_x_labels(svg: &mut String, labels: impl Iterator<Item = (f64, String)>, area: PlotArea) {
    let y = area.height - CHART_PAD_BOTTOM / 2.0;
    for (x, label) in labels {
        let label = escape_xml(&label);
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{y}" fill="rgba(255,255,255,0.6)" font-size="10" text-anchor="middle" dominant-baseline="central">{label}</text>"#
        );
    }
}

pub fn line_chart_svg(points: &[PerformancePoint], area: PlotArea) -> String {
    let mut svg = String::with_capacity(2048);
    if points.is_empty() {
        return svg;
    }
    let y_max = axis_max(points.iter().map(|p| p.score));
    build_axes(&mut svg, area, y_max);

    let coords = line_points(points, area);
    let path: Vec<String> = coords.iter().map(|(x, y)| format!("{x},{y}")).collect();
    let _ = write!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="{STROKE}" stroke-width="2"/>"#,
        path.join(" ")
    );
    for (i, (x, y)) in coords.iter().enumerate() {
        let score = points[i].score;
        let _ = write!(
            svg,
            r#"<circle cx="{x}" cy="{y}" r="3" fill="{STROKE}"><title>{score}</title></circle>"#
        );
    }
    build_x_labels(
        &mut svg,
        coords.iter().zip(points).map(|(&(x, _), p)| (x, p.date.clone())),
        area,
    );
    svg
}

pub fn bar_chart_svg(points: &[PerformancePoint], area: PlotArea) -> String {
    let mut svg = String::with_capacity(2048);
    if points.is_empty() {
        return svg;
    }
    let y_max = axis_max(points.iter().map(|p| p.score));
    build_axes(&mut svg, area, y_max);

    svg.push_str(
        r##"<defs><linearGradient id="barGradient" x1="0" y1="0" x2="0" y2="1"><stop offset="5%" stop-color="#8884d8" stop-opacity="0.8"/><stop offset="95%" stop-color="#8884d8" stop-opacity="0.2"/></linearGradient></defs>"##,
    );

    let slot = area.inner_w() / points.len() as f64;
    let bar_w = slot * 0.6;
    let base = area.height - CHART_PAD_BOTTOM;
    let mut centers = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let cx = CHART_PAD_LEFT + slot * (i as f64 + 0.5);
        let top = area.y_for(p.score, y_max);
        let h = (base - top).max(0.0);
        let x = cx - bar_w / 2.0;
        let _ = write!(
            svg,
            r#"<rect x="{x}" y="{top}" width="{bar_w}" height="{h}" rx="4" fill="url(#barGradient)"><title>{}</title></rect>"#,
            p.score
        );
        centers.push((cx, p.date.clone()));
    }
    build_x_labels(&mut svg, centers.into_iter(), area);
    svg
}

/// Vertex of a radar chart spoke. Spoke 0 points straight up.
pub fn radar_vertex(index: usize, count: usize, value: f64, center: f64, radius: f64) -> (f64, f64) {
    let angle = -PI / 2.0 + 2.0 * PI * index as f64 / count as f64;
    let r = radius * (value.clamp(0.0, 100.0) / 100.0);
    (center + r * angle.cos(), center + r * angle.sin())
}

fn polygon_points(vertices: &[(f64, f64)]) -> String {
    vertices
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Radar chart in a `size` x `size` square.
pub fn radar_chart_svg(scores: &[SkillScore], size: f64) -> String {
    let mut svg = String::with_capacity(2048);
    let n = scores.len();
    if n < 3 {
        return svg;
    }
    let center = size / 2.0;
    let radius = size * 0.36;

    for ring in [25.0, 50.0, 75.0, 100.0] {
        let ring_pts: Vec<(f64, f64)> = (0..n)
            .map(|i| radar_vertex(i, n, ring, center, radius))
            .collect();
        let _ = write!(
            svg,
            r##"<polygon points="{}" fill="none" stroke="#e0e0e0" stroke-opacity="0.3"/>"##,
            polygon_points(&ring_pts)
        );
    }

    let values: Vec<(f64, f64)> = scores
        .iter()
        .enumerate()
        .map(|(i, s)| radar_vertex(i, n, s.value, center, radius))
        .collect();
    let _ = write!(
        svg,
        r#"<polygon points="{}" fill="{STROKE}" fill-opacity="0.6" stroke="{STROKE}"/>"#,
        polygon_points(&values)
    );

    for (i, s) in scores.iter().enumerate() {
        let (lx, ly) = radar_vertex(i, n, 100.0, center, radius + 14.0);
        let _ = write!(
            svg,
            r#"<text x="{lx:.2}" y="{ly:.2}" fill="rgba(255,255,255,0.8)" font-size="11" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            escape_xml(&s.subject)
        );
    }
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data;

    const AREA: PlotArea = PlotArea {
        width: 400.0,
        height: 200.0,
    };

    #[test]
    fn test_gauge_circumference() {
        assert!((gauge_circumference(GAUGE_RADIUS) - 251.327_412_287).abs() < 1e-6);
    }

    #[test]
    fn test_gauge_offset_full_and_empty() {
        assert!(gauge_dash_offset(100.0, GAUGE_RADIUS).abs() < 1e-9);
        let full = gauge_circumference(GAUGE_RADIUS);
        assert!((gauge_dash_offset(0.0, GAUGE_RADIUS) - full).abs() < 1e-9);
    }

    #[test]
    fn test_gauge_offset_78_percent() {
        let expected = gauge_circumference(GAUGE_RADIUS) * 0.22;
        assert!((gauge_dash_offset(78.0, GAUGE_RADIUS) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_gauge_offset_clamps() {
        assert_eq!(gauge_dash_offset(150.0, GAUGE_RADIUS), gauge_dash_offset(100.0, GAUGE_RADIUS));
        assert_eq!(gauge_dash_offset(-5.0, GAUGE_RADIUS), gauge_dash_offset(0.0, GAUGE_RADIUS));
        assert_eq!(gauge_dash_offset(f64::NAN, GAUGE_RADIUS), gauge_dash_offset(0.0, GAUGE_RADIUS));
    }

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max([45.0, 72.0, 38.0]), 80.0);
        assert_eq!(axis_max([80.0]), 80.0);
        assert_eq!(axis_max([0.0, 0.0]), 10.0);
        assert_eq!(axis_max(std::iter::empty::<f64>()), 10.0);
    }

    #[test]
    fn test_line_points_span_plot_width() {
        let pts = line_points(&sample_data::player_stats().recent_performance, AREA);
        assert_eq!(pts.len(), 5);
        assert!((pts[0].0 - CHART_PAD_LEFT).abs() < 1e-9);
        assert!((pts[4].0 - (AREA.width - CHART_PAD_RIGHT)).abs() < 1e-9);
        // higher score sits higher on screen
        assert!(pts[4].1 < pts[2].1);
    }

    #[test]
    fn test_line_chart_has_one_dot_per_point() {
        let svg = line_chart_svg(&sample_data::player_stats().recent_performance, AREA);
        assert_eq!(svg.matches("<circle").count(), 5);
        assert!(svg.contains(">May</text>"));
    }

    #[test]
    fn test_bar_chart_has_one_bar_per_point() {
        let svg = bar_chart_svg(&sample_data::player_stats().recent_performance, AREA);
        assert_eq!(svg.matches("<rect").count(), 5);
        assert!(svg.contains("barGradient"));
    }

    #[test]
    fn test_empty_series_empty_chart() {
        assert!(line_chart_svg(&[], AREA).is_empty());
        assert!(bar_chart_svg(&[], AREA).is_empty());
    }

    #[test]
    fn test_radar_vertex_first_spoke_points_up() {
        let (x, y) = radar_vertex(0, 5, 100.0, 50.0, 40.0);
        assert!((x - 50.0).abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_radar_chart_rings_and_labels() {
        let svg = radar_chart_svg(&sample_data::radar_scores(), 300.0);
        // four grid rings plus the value polygon
        assert_eq!(svg.matches("<polygon").count(), 5);
        assert!(svg.contains(">Placement</text>"));
    }

    #[test]
    fn test_radar_needs_three_spokes() {
        let two = &sample_data::radar_scores()[..2];
        assert!(radar_chart_svg(two, 300.0).is_empty());
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Mar"), "Mar");
        assert!(matches!(escape_xml("Mar"), Cow::Borrowed(_)));
        assert_eq!(escape_xml(r#"<b>"Q&A"</b>"#), "&lt;b&gt;&quot;Q&amp;A&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_labels_are_escaped_in_markup() {
        let points = vec![
            PerformancePoint { date: "<script>".to_string(), score: 40.0 },
            PerformancePoint { date: "W&L".to_string(), score: 60.0 },
        ];
        for svg in [line_chart_svg(&points, AREA), bar_chart_svg(&points, AREA)] {
            assert!(!svg.contains("<script>"));
            assert!(svg.contains("&lt;script&gt;"));
            assert!(svg.contains("W&amp;L"));
        }

        let scores: Vec<SkillScore> = ["a<b", "c\"d", "e&f"]
            .iter()
            .map(|s| SkillScore { subject: s.to_string(), value: 50.0 })
            .collect();
        let svg = radar_chart_svg(&scores, 300.0);
        assert!(svg.contains("a&lt;b"));
        assert!(svg.contains("c&quot;d"));
        assert!(svg.contains("e&amp;f"));
    }
}
