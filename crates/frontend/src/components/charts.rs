use cricket_shared::charts::{self, PlotArea, GAUGE_RADIUS};
use cricket_shared::models::{PerformancePoint, SkillScore};
use dioxus::prelude::*;

fn wrap_svg(width: f64, height: f64, body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" preserveAspectRatio="xMidYMid meet" style="width:100%;height:100%;">{body}</svg>"#
    )
}

#[component]
pub fn LineChart(points: Vec<PerformancePoint>, height: f64) -> Element {
    let area = PlotArea { width: 400.0, height };
    let svg = wrap_svg(area.width, area.height, &charts::line_chart_svg(&points, area));
    rsx! {
        div { class: "chart", style: "height: {height}px;", dangerous_inner_html: "{svg}" }
    }
}

#[component]
pub fn BarChart(points: Vec<PerformancePoint>, height: f64) -> Element {
    let area = PlotArea { width: 600.0, height };
    let svg = wrap_svg(area.width, area.height, &charts::bar_chart_svg(&points, area));
    rsx! {
        div { class: "chart", style: "height: {height}px;", dangerous_inner_html: "{svg}" }
    }
}

#[component]
pub fn RadarChart(scores: Vec<SkillScore>, size: f64) -> Element {
    let svg = wrap_svg(size, size, &charts::radar_chart_svg(&scores, size));
    rsx! {
        div { class: "chart", style: "height: {size}px;", dangerous_inner_html: "{svg}" }
    }
}

/// Circular progress ring with the percentage in the middle.
#[component]
pub fn RadialGauge(percent: f64) -> Element {
    let circumference = charts::gauge_circumference(GAUGE_RADIUS);
    let offset = charts::gauge_dash_offset(percent, GAUGE_RADIUS);
    rsx! {
        div { class: "gauge pop-in",
            svg { view_box: "0 0 100 100",
                circle {
                    class: "gauge-track",
                    stroke_width: "10",
                    fill: "transparent",
                    r: "{GAUGE_RADIUS}",
                    cx: "50",
                    cy: "50",
                }
                circle {
                    class: "gauge-value",
                    stroke_width: "10",
                    stroke_linecap: "round",
                    fill: "transparent",
                    r: "{GAUGE_RADIUS}",
                    cx: "50",
                    cy: "50",
                    style: "stroke-dasharray: {circumference}; stroke-dashoffset: {offset}; transform: rotate(-90deg); transform-origin: 50% 50%;",
                }
            }
            div { class: "gauge-label", "{percent}%" }
        }
    }
}
