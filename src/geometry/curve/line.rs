use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A bounded straight segment between two points.
///
/// The parametric form is `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point3,
    end: Point3,
}

impl Line {
    /// Creates a new bounded line segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is degenerate (near-zero length).
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::Degenerate("zero-length line segment".into()).into());
        }
        Ok(Self { start, end })
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> Point3 {
        self.start
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> Point3 {
        self.end
    }

    /// Returns the unit direction vector from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        (self.end - self.start).normalize()
    }

    /// Evaluates the segment at normalized parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.start + (self.end - self.start) * t
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Translates the segment along its left normal in the XY plane.
    ///
    /// Positive distances move the segment to the left of its direction of
    /// travel, negative to the right. The Z coordinates are preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment has no XY footprint (vertical segment).
    pub fn offset_xy(&self, distance: f64) -> Result<Self> {
        let d = self.end - self.start;
        let len = (d.x * d.x + d.y * d.y).sqrt();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = Vector3::new(-d.y / len, d.x / len, 0.0);
        let shift = normal * distance;
        Self::new(self.start + shift, self.end + shift)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_of_segment() {
        let line = Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 2.0)).unwrap();
        let mid = line.point_at(0.5);
        assert!((mid.x - 2.0).abs() < TOLERANCE);
        assert!((mid.z - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn degenerate_segment_rejected() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(Line::new(p, p).is_err());
    }

    #[test]
    fn offset_left_of_travel() {
        // Travelling +X, left is +Y.
        let line = Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)).unwrap();
        let off = line.offset_xy(2.0).unwrap();
        assert!((off.start().y - 2.0).abs() < TOLERANCE);
        assert!((off.end().y - 2.0).abs() < TOLERANCE);

        let off = line.offset_xy(-2.0).unwrap();
        assert!((off.start().y + 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn offset_preserves_z() {
        let line = Line::new(Point3::new(0.0, 0.0, 5.0), Point3::new(10.0, 0.0, 5.0)).unwrap();
        let off = line.offset_xy(1.0).unwrap();
        assert!((off.start().z - 5.0).abs() < TOLERANCE);
        assert!((off.end().z - 5.0).abs() < TOLERANCE);
    }
}
