//! # Chart Module
//!
//! Geometry for the score gauge, the trend line, and the radar chart.
//!
//! ## Fixed-point
//!
//! Coordinates are `Fixed` values in hundredths of an SVG user unit. Angles
//! come from a 24-entry trig table (15° steps) in ten-thousandths, so a radar
//! chart can have any axis count that divides 24. No floats are involved, so
//! the rendered markup is byte-for-byte stable.

use crate::error::CoreError;
use crate::records::{SkillDatum, TrendPoint};
use crate::score::Percent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hundredths per user unit.
pub const FIXED_SCALE: i64 = 100;

/// π in millionths.
const PI_MILLIONTHS: u64 = 3_141_593;

// =============================================================================
// FIXED-POINT VALUES
// =============================================================================

/// A coordinate in hundredths of an SVG user unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fixed(i64);

impl Fixed {
    #[must_use]
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(FIXED_SCALE))
    }

    #[must_use]
    pub const fn hundredths(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// A point in SVG user space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: Fixed,
    pub y: Fixed,
}

impl Point {
    #[must_use]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Format points for an SVG `points` attribute.
#[must_use]
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// SCORE GAUGE
// =============================================================================

/// A circular gauge drawn as a stroked ring with a dash offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeGeometry {
    pub radius: u32,
    pub stroke_width: u32,
}

impl Default for GaugeGeometry {
    fn default() -> Self {
        Self {
            radius: 40,
            stroke_width: 8,
        }
    }
}

impl GaugeGeometry {
    /// Side of the square viewbox.
    #[must_use]
    pub fn size(&self) -> u32 {
        2 * self.center()
    }

    /// Center coordinate on both axes.
    #[must_use]
    pub fn center(&self) -> u32 {
        self.radius + self.stroke_width
    }

    /// Ring circumference, 2πr.
    #[must_use]
    pub fn circumference(&self) -> Fixed {
        let hundredths = 2 * self.radius as u64 * PI_MILLIONTHS / 10_000;
        Fixed::from_hundredths(hundredths as i64)
    }

    /// Length of the filled arc. Never longer than the circumference.
    #[must_use]
    pub fn arc(&self, score: Percent) -> Fixed {
        let circumference = self.circumference().hundredths() as u64;
        Fixed::from_hundredths(score.of(circumference) as i64)
    }

    /// `stroke-dashoffset` that leaves exactly `arc(score)` visible.
    #[must_use]
    pub fn dash_offset(&self, score: Percent) -> Fixed {
        Fixed::from_hundredths(self.circumference().hundredths() - self.arc(score).hundredths())
    }
}

// =============================================================================
// LINE CHART
// =============================================================================

/// A score-over-time polyline in a fixed viewbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineChart {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Default for LineChart {
    fn default() -> Self {
        Self {
            width: 400,
            height: 200,
            padding: 24,
        }
    }
}

impl LineChart {
    fn inner_width(&self) -> i64 {
        self.width.saturating_sub(2 * self.padding) as i64
    }

    fn inner_height(&self) -> i64 {
        self.height.saturating_sub(2 * self.padding) as i64
    }

    /// Vertical position of a score level.
    #[must_use]
    pub fn level_y(&self, level: Percent) -> Fixed {
        let from_top = self.inner_height() * (100 - level.value() as i64);
        Fixed::from_hundredths(self.padding as i64 * FIXED_SCALE + from_top)
    }

    /// One point per entry, spread evenly left to right.
    ///
    /// A single entry is centered horizontally.
    pub fn points(&self, series: &[TrendPoint]) -> Result<Vec<Point>, CoreError> {
        if series.is_empty() {
            return Err(CoreError::EmptySeries);
        }

        let left = self.padding as i64 * FIXED_SCALE;
        let span = self.inner_width() * FIXED_SCALE;
        let last = series.len() as i64 - 1;

        Ok(series
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let dx = if last == 0 { span / 2 } else { span * i as i64 / last };
                Point::new(Fixed::from_hundredths(left + dx), self.level_y(point.score))
            })
            .collect())
    }
}

// =============================================================================
// RADAR CHART
// =============================================================================

/// Entries in the trig table.
const TRIG_STEPS: usize = 24;

/// Index of 270° (straight up in SVG space).
const TOP_INDEX: usize = 18;

/// cos(i × 15°) in ten-thousandths.
const COS_TABLE: [i64; TRIG_STEPS] = [
    10000, 9659, 8660, 7071, 5000, 2588, 0, -2588, -5000, -7071, -8660, -9659, -10000, -9659,
    -8660, -7071, -5000, -2588, 0, 2588, 5000, 7071, 8660, 9659,
];

fn cos_at(index: usize) -> i64 {
    COS_TABLE[index % TRIG_STEPS]
}

fn sin_at(index: usize) -> i64 {
    // sin(θ) = cos(θ - 90°)
    COS_TABLE[(index + TRIG_STEPS - 6) % TRIG_STEPS]
}

/// A multi-axis skill chart. Axis 0 points straight up; the rest follow
/// clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarChart {
    pub size: u32,
    pub radius: u32,
    pub label_gap: u32,
}

impl Default for RadarChart {
    fn default() -> Self {
        Self {
            size: 320,
            radius: 100,
            label_gap: 22,
        }
    }
}

impl RadarChart {
    /// Check an axis count against the trig table.
    pub fn check_axes(count: usize) -> Result<usize, CoreError> {
        if count < 3 || TRIG_STEPS % count != 0 {
            return Err(CoreError::UnsupportedAxisCount(count));
        }
        Ok(TRIG_STEPS / count)
    }

    /// Center of the chart.
    #[must_use]
    pub fn center(&self) -> Point {
        let c = Fixed::from_units((self.size / 2) as i64);
        Point::new(c, c)
    }

    /// Point on `axis` at `reach` hundredths from the center.
    fn at(&self, axis: usize, step: usize, reach: i64) -> Point {
        let index = TOP_INDEX + axis * step;
        let c = self.center();
        Point::new(
            Fixed::from_hundredths(c.x.hundredths() + reach * cos_at(index) / 10_000),
            Fixed::from_hundredths(c.y.hundredths() + reach * sin_at(index) / 10_000),
        )
    }

    /// Vertex of one axis for `score`.
    pub fn vertex(&self, axis: usize, count: usize, score: Percent) -> Result<Point, CoreError> {
        let step = Self::check_axes(count)?;
        Ok(self.at(axis, step, self.radius as i64 * score.value() as i64))
    }

    /// The data polygon, one vertex per skill.
    pub fn polygon(&self, skills: &[SkillDatum]) -> Result<Vec<Point>, CoreError> {
        let step = Self::check_axes(skills.len())?;
        Ok(skills
            .iter()
            .enumerate()
            .map(|(axis, s)| self.at(axis, step, self.radius as i64 * s.score.value() as i64))
            .collect())
    }

    /// A grid ring at `level`.
    pub fn ring(&self, count: usize, level: Percent) -> Result<Vec<Point>, CoreError> {
        let step = Self::check_axes(count)?;
        let reach = self.radius as i64 * level.value() as i64;
        Ok((0..count).map(|axis| self.at(axis, step, reach)).collect())
    }

    /// Outer end of every spoke.
    pub fn spokes(&self, count: usize) -> Result<Vec<Point>, CoreError> {
        self.ring(count, Percent::FULL)
    }

    /// Where each axis label sits, just outside the outer ring.
    pub fn label_anchors(&self, count: usize) -> Result<Vec<Point>, CoreError> {
        let step = Self::check_axes(count)?;
        let reach = (self.radius + self.label_gap) as i64 * FIXED_SCALE;
        Ok((0..count).map(|axis| self.at(axis, step, reach)).collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fx(units: i64, hundredths: i64) -> Fixed {
        Fixed::from_hundredths(units * 100 + hundredths)
    }

    #[test]
    fn fixed_display() {
        assert_eq!(Fixed::from_hundredths(25132).to_string(), "251.32");
        assert_eq!(Fixed::from_hundredths(-5).to_string(), "-0.05");
        assert_eq!(Fixed::from_units(3).to_string(), "3.00");
    }

    #[test]
    fn gauge_circumference_and_arc() {
        let gauge = GaugeGeometry::default();
        assert_eq!(gauge.circumference(), fx(251, 32));
        assert_eq!(gauge.arc(Percent::FULL), gauge.circumference());
        assert_eq!(gauge.arc(Percent::ZERO), Fixed::default());
        assert_eq!(gauge.dash_offset(Percent::FULL), Fixed::default());
        assert_eq!(gauge.dash_offset(Percent::ZERO), gauge.circumference());
        assert_eq!(gauge.size(), 96);
    }

    #[test]
    fn gauge_arc_is_proportional() {
        let gauge = GaugeGeometry::default();
        let half = gauge.arc(Percent::new(50)).hundredths();
        assert_eq!(half, gauge.circumference().hundredths() / 2);
    }

    #[test]
    fn line_chart_spreads_points() {
        let chart = LineChart::default();
        let series = vec![
            TrendPoint::new("a", Percent::ZERO),
            TrendPoint::new("b", Percent::new(50)),
            TrendPoint::new("c", Percent::FULL),
        ];
        let points = chart.points(&series).unwrap();
        assert_eq!(points[0], Point::new(Fixed::from_units(24), Fixed::from_units(176)));
        assert_eq!(points[1], Point::new(Fixed::from_units(200), Fixed::from_units(100)));
        assert_eq!(points[2], Point::new(Fixed::from_units(376), Fixed::from_units(24)));
    }

    #[test]
    fn line_chart_single_point_is_centered() {
        let chart = LineChart::default();
        let points = chart
            .points(&[TrendPoint::new("only", Percent::new(50))])
            .unwrap();
        assert_eq!(points[0].x, Fixed::from_units(200));
    }

    #[test]
    fn line_chart_rejects_empty_series() {
        assert_eq!(LineChart::default().points(&[]), Err(CoreError::EmptySeries));
    }

    #[test]
    fn radar_axis_zero_points_up() {
        let radar = RadarChart::default();
        let top = radar.vertex(0, 6, Percent::FULL).unwrap();
        assert_eq!(top, Point::new(Fixed::from_units(160), Fixed::from_units(60)));
    }

    #[test]
    fn radar_second_axis_is_clockwise() {
        let radar = RadarChart::default();
        let p = radar.vertex(1, 6, Percent::FULL).unwrap();
        // 330°: right of center, above it.
        assert!(p.x > radar.center().x);
        assert!(p.y < radar.center().y);
    }

    #[test]
    fn radar_zero_score_collapses_to_center() {
        let radar = RadarChart::default();
        let skills: Vec<_> = (0..4)
            .map(|i| SkillDatum::new(format!("s{i}"), Percent::ZERO))
            .collect();
        let polygon = radar.polygon(&skills).unwrap();
        assert!(polygon.iter().all(|p| *p == radar.center()));
    }

    #[test]
    fn radar_rejects_unsupported_axis_counts() {
        let radar = RadarChart::default();
        assert_eq!(radar.spokes(5), Err(CoreError::UnsupportedAxisCount(5)));
        assert_eq!(radar.spokes(2), Err(CoreError::UnsupportedAxisCount(2)));
        for count in [3, 4, 6, 8, 12, 24] {
            assert_eq!(radar.spokes(count).unwrap().len(), count);
        }
    }

    #[test]
    fn points_attr_format() {
        let pts = [
            Point::new(Fixed::from_units(1), Fixed::from_hundredths(250)),
            Point::new(Fixed::from_units(3), Fixed::from_units(4)),
        ];
        assert_eq!(points_attr(&pts), "1.00,2.50 3.00,4.00");
    }
}
