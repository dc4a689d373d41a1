//! SVG geometry for the chart panels.
//!
//! Angles are in degrees, measured clockwise from twelve o'clock.

use std::f64::consts::PI;

/// Sweeps are capped just below a full turn so SVG arcs never collapse.
const MAX_SWEEP: f64 = 359.99;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn polar(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0) * PI / 180.0;
    Point {
        x: cx + radius * rad.cos(),
        y: cy + radius * rad.sin(),
    }
}

/// Path for a pie slice (`inner == 0`) or a donut segment.
pub fn sector_path(
    cx: f64,
    cy: f64,
    inner: f64,
    outer: f64,
    start_deg: f64,
    end_deg: f64,
) -> String {
    let end_deg = start_deg + (end_deg - start_deg).clamp(0.0, MAX_SWEEP);
    let large = if end_deg - start_deg > 180.0 { 1 } else { 0 };
    let o0 = polar(cx, cy, outer, start_deg);
    let o1 = polar(cx, cy, outer, end_deg);

    if inner <= 0.0 {
        return format!(
            "M {cx:.2} {cy:.2} L {:.2} {:.2} A {outer:.2} {outer:.2} 0 {large} 1 {:.2} {:.2} Z",
            o0.x, o0.y, o1.x, o1.y
        );
    }

    let i0 = polar(cx, cy, inner, start_deg);
    let i1 = polar(cx, cy, inner, end_deg);
    format!(
        "M {:.2} {:.2} A {outer:.2} {outer:.2} 0 {large} 1 {:.2} {:.2} L {:.2} {:.2} A {inner:.2} {inner:.2} 0 {large} 0 {:.2} {:.2} Z",
        o0.x, o0.y, o1.x, o1.y, i1.x, i1.y, i0.x, i0.y
    )
}

/// Open arc along a single radius, drawn with a stroke.
pub fn arc_path(cx: f64, cy: f64, radius: f64, start_deg: f64, end_deg: f64) -> String {
    let end_deg = start_deg + (end_deg - start_deg).clamp(0.0, MAX_SWEEP);
    let large = if end_deg - start_deg > 180.0 { 1 } else { 0 };
    let p0 = polar(cx, cy, radius, start_deg);
    let p1 = polar(cx, cy, radius, end_deg);
    format!(
        "M {:.2} {:.2} A {radius:.2} {radius:.2} 0 {large} 1 {:.2} {:.2}",
        p0.x, p0.y, p1.x, p1.y
    )
}

/// Sum of `values`, pinned at `u64::MAX` instead of overflowing.
fn saturating_total(values: &[u64]) -> u64 {
    values.iter().copied().fold(0u64, u64::saturating_add)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Position of the record this segment belongs to.
    pub index: usize,
    pub start_deg: f64,
    pub end_deg: f64,
    pub fraction: f64,
    pub path: String,
}

/// Lay out pie/donut segments for `values`. Zero values get no segment.
pub fn pie_segments(values: &[u64], cx: f64, cy: f64, inner: f64, outer: f64) -> Vec<Segment> {
    let total = saturating_total(values);
    if total == 0 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(values.len());
    let mut cursor = 0.0;
    for (index, value) in values.iter().copied().enumerate() {
        if value == 0 {
            continue;
        }
        let fraction = value as f64 / total as f64;
        let start_deg = cursor;
        let end_deg = cursor + fraction * 360.0;
        cursor = end_deg;
        segments.push(Segment {
            index,
            start_deg,
            end_deg,
            fraction,
            path: sector_path(cx, cy, inner, outer, start_deg, end_deg),
        });
    }
    segments
}

/// Round `max` up to 1, 2 or 5 times a power of ten so axes read cleanly.
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|step| step * magnitude >= max)
        .unwrap_or(10.0);
    step * magnitude
}

/// `count + 1` evenly spaced tick values from zero to `axis_max`.
pub fn axis_ticks(axis_max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count)
        .map(|i| axis_max * i as f64 / count as f64)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Drawing area of a chart: outer size plus room reserved for axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Frame {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(0.0)
    }

    pub fn plot_bottom(&self) -> f64 {
        self.margins.top + self.plot_height()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarOrientation {
    /// Categories along the x axis, bars grow upwards.
    Vertical,
    /// Categories down the y axis, bars grow rightwards.
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Centre of the category band, along the category axis.
    pub band_center: f64,
}

/// Share of each category band taken by the bar itself.
const BAR_FILL: f64 = 0.7;

pub fn bar_layout(
    values: &[u64],
    orientation: BarOrientation,
    frame: &Frame,
    axis_max: f64,
) -> Vec<BarRect> {
    if values.is_empty() || axis_max <= 0.0 {
        return Vec::new();
    }

    let m = frame.margins;
    let band_extent = match orientation {
        BarOrientation::Vertical => frame.plot_width(),
        BarOrientation::Horizontal => frame.plot_height(),
    };
    let band = band_extent / values.len() as f64;
    let thickness = band * BAR_FILL;
    let offset = (band - thickness) / 2.0;

    values
        .iter()
        .copied()
        .enumerate()
        .map(|(index, value)| {
            let ratio = (value as f64 / axis_max).min(1.0);
            match orientation {
                BarOrientation::Vertical => {
                    let height = ratio * frame.plot_height();
                    let x = m.left + band * index as f64 + offset;
                    BarRect {
                        index,
                        x,
                        y: frame.plot_bottom() - height,
                        width: thickness,
                        height,
                        band_center: x + thickness / 2.0,
                    }
                }
                BarOrientation::Horizontal => {
                    let y = m.top + band * index as f64 + offset;
                    BarRect {
                        index,
                        x: m.left,
                        y,
                        width: ratio * frame.plot_width(),
                        height: thickness,
                        band_center: y + thickness / 2.0,
                    }
                }
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub index: usize,
    pub radius: f64,
    pub thickness: f64,
    pub fraction: f64,
    /// Full background track.
    pub track_path: String,
    /// Arc proportional to `fraction`; empty when the value is zero.
    pub value_path: String,
}

/// Concentric rings, outermost first, each sweeping its share of the sum.
pub fn radial_rings(values: &[u64], cx: f64, cy: f64, inner: f64, outer: f64) -> Vec<Ring> {
    if values.is_empty() || outer <= inner {
        return Vec::new();
    }

    let total = saturating_total(values);
    let step = (outer - inner) / values.len() as f64;
    let thickness = step * 0.72;

    values
        .iter()
        .copied()
        .enumerate()
        .map(|(index, value)| {
            let radius = outer - step * index as f64 - step / 2.0;
            let fraction = if total == 0 {
                0.0
            } else {
                value as f64 / total as f64
            };
            let value_path = if value == 0 {
                String::new()
            } else {
                arc_path(cx, cy, radius, 0.0, fraction * 360.0)
            };
            Ring {
                index,
                radius,
                thickness,
                fraction,
                track_path: arc_path(cx, cy, radius, 0.0, 360.0),
                value_path,
            }
        })
        .collect()
}
