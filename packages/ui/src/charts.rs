//! Minimal SVG charts for the analytics screens.
//!
//! Geometry is computed by [`bar_layout`], which is plain arithmetic and
//! tested on its own; [`BarChart`] only renders the rectangles.

use dioxus::prelude::*;

/// One labelled value on a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A bar rectangle in SVG user units, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out one bar per value across `width`, scaled so the largest value
/// fills `height`. Negative and non-finite values are drawn as zero.
pub fn bar_layout(values: &[f64], width: f64, height: f64, gap: f64) -> Vec<Bar> {
    if values.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let n = values.len() as f64;
    let gap = gap.max(0.0);
    let bar_width = ((width - gap * (n - 1.0)) / n).max(0.0);
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let v = if v.is_finite() { v.max(0.0) } else { 0.0 };
            let h = if max > 0.0 { v / max * height } else { 0.0 };
            Bar {
                x: i as f64 * (bar_width + gap),
                y: height - h,
                width: bar_width,
                height: h,
            }
        })
        .collect()
}

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;

#[component]
pub fn BarChart(title: String, points: Vec<ChartPoint>, #[props(default)] class: String) -> Element {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let bars = bar_layout(&values, CHART_WIDTH, CHART_HEIGHT, 4.0);

    rsx! {
        figure {
            class: "chart {class}",
            figcaption { "{title}" }
            svg {
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                preserve_aspect_ratio: "none",
                width: "100%",
                height: "{CHART_HEIGHT}",
                for (bar, point) in bars.into_iter().zip(points.iter()) {
                    rect {
                        key: "{point.label}",
                        class: "chart-bar",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                    }
                }
            }
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                div {
                    class: "chart-axis",
                    span { "{first.label}" }
                    span { "{last.label}" }
                }
            }
        }
    }
}

/// A single headline number with its caption.
#[component]
pub fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tallest_bar_fills_height() {
        let bars = bar_layout(&[5.0, 10.0], 100.0, 50.0, 0.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].width, 50.0);
        assert_eq!(bars[1].x, 50.0);
        assert_eq!(bars[1].height, 50.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 25.0);
        assert_eq!(bars[0].y, 25.0);
    }

    #[test]
    fn test_gaps_between_bars() {
        let bars = bar_layout(&[1.0, 1.0, 1.0], 100.0, 10.0, 5.0);
        assert_eq!(bars[0].width, 30.0);
        assert_eq!(bars[1].x, 35.0);
        assert_eq!(bars[2].x, 70.0);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(bar_layout(&[], 100.0, 10.0, 0.0).is_empty());
        let flat = bar_layout(&[0.0, -3.0, f64::NAN], 90.0, 10.0, 0.0);
        assert!(flat.iter().all(|b| b.height == 0.0 && b.y == 10.0));
    }
}
