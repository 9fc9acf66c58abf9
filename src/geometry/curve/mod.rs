mod arc;
mod line;

pub use arc::Arc;
pub use line::Line;

use crate::error::Result;
use crate::math::{normalize_xy, Point3, Vector3};

/// A bounded location curve: either a straight segment or a circular arc.
///
/// Wall location curves are evaluated with a normalized parameter in
/// `[0, 1]` regardless of the underlying representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    /// A straight segment.
    Line(Line),
    /// A circular arc.
    Arc(Arc),
}

impl Curve {
    /// Returns the curve's start point.
    #[must_use]
    pub fn start_point(&self) -> Point3 {
        match self {
            Self::Line(line) => line.start(),
            Self::Arc(arc) => arc.point_at(0.0),
        }
    }

    /// Returns the curve's end point.
    #[must_use]
    pub fn end_point(&self) -> Point3 {
        match self {
            Self::Line(line) => line.end(),
            Self::Arc(arc) => arc.point_at(1.0),
        }
    }

    /// Evaluates the curve at normalized parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        match self {
            Self::Line(line) => line.point_at(t),
            Self::Arc(arc) => arc.point_at(t),
        }
    }

    /// Returns the curve's midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        self.point_at(0.5)
    }

    /// Returns the curve length.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }

    /// Unit XY tangent at the curve midpoint.
    ///
    /// Falls back to the normalized endpoint difference when the midpoint
    /// tangent has no XY footprint. Returns `None` only when both
    /// derivations degenerate.
    #[must_use]
    pub fn tangent_xy(&self) -> Option<Vector3> {
        let mid_tangent = match self {
            Self::Line(line) => line.direction(),
            Self::Arc(arc) => arc.tangent_at(0.5),
        };
        normalize_xy(&mid_tangent)
            .or_else(|| normalize_xy(&(self.end_point() - self.start_point())))
    }

    /// Offsets the curve to the left of its direction of travel in the XY plane.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset is not representable (vertical
    /// segment, collapsed arc radius).
    pub fn offset_xy(&self, distance: f64) -> Result<Self> {
        match self {
            Self::Line(line) => Ok(Self::Line(line.offset_xy(distance)?)),
            Self::Arc(arc) => Ok(Self::Arc(arc.offset_xy(distance)?)),
        }
    }

    /// Returns the underlying line segment, if this curve is straight.
    #[must_use]
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line(line) => Some(line),
            Self::Arc(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use std::f64::consts::PI;

    #[test]
    fn line_tangent_is_direction() {
        let curve = Curve::Line(
            Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 5.0, 0.0)).unwrap(),
        );
        let t = curve.tangent_xy().unwrap();
        assert!((t.y - 1.0).abs() < TOLERANCE);
        assert!(t.x.abs() < TOLERANCE);
    }

    #[test]
    fn arc_tangent_at_midpoint() {
        // CCW semicircle from 0 to π: at the top (π/2) travel is -X.
        let curve =
            Curve::Arc(Arc::new(Point3::new(0.0, 0.0, 0.0), 1.0, 0.0, PI).unwrap());
        let t = curve.tangent_xy().unwrap();
        assert!((t.x + 1.0).abs() < 1e-9);
        assert!(t.y.abs() < 1e-9);
    }

    #[test]
    fn offset_round_trip_line() {
        let curve = Curve::Line(
            Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)).unwrap(),
        );
        let off = curve.offset_xy(1.5).unwrap();
        assert!((off.midpoint().y - 1.5).abs() < TOLERANCE);
        let back = off.offset_xy(-1.5).unwrap();
        assert!((back.midpoint().y).abs() < TOLERANCE);
    }

    #[test]
    fn as_line_distinguishes_variants() {
        let line = Curve::Line(
            Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)).unwrap(),
        );
        let arc = Curve::Arc(Arc::new(Point3::new(0.0, 0.0, 0.0), 1.0, 0.0, PI).unwrap());
        assert!(line.as_line().is_some());
        assert!(arc.as_line().is_none());
    }
}
