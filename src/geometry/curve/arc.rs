use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A circular arc in a horizontal plane.
///
/// Defined by a center, radius, start angle, and signed sweep (radians,
/// positive counter-clockwise). The arc lies in the XY plane at the
/// center's Z height; wall location curves never tilt out of plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point3,
    radius: f64,
    start_angle: f64,
    sweep: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or the sweep is
    /// degenerate (near-zero).
    pub fn new(center: Point3, radius: f64, start_angle: f64, sweep: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        if sweep.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("arc sweep must be non-zero".into()).into());
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            sweep,
        })
    }

    /// Returns the arc center.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Returns the arc radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the signed sweep angle in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Evaluates the arc at normalized parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        let angle = self.start_angle + self.sweep * t;
        Point3::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
            self.center.z,
        )
    }

    /// Unit tangent in the direction of travel at normalized parameter `t`.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector3 {
        let angle = self.start_angle + self.sweep * t;
        let ccw = Vector3::new(-angle.sin(), angle.cos(), 0.0);
        if self.sweep >= 0.0 {
            ccw
        } else {
            -ccw
        }
    }

    /// Returns the arc length: `radius * |sweep|`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    /// Offsets the arc to the left of its direction of travel.
    ///
    /// For a counter-clockwise arc the center lies to the left, so a
    /// positive distance shrinks the radius; for a clockwise arc it grows.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset collapses the radius.
    pub fn offset_xy(&self, distance: f64) -> Result<Self> {
        let radius = self.radius - distance * self.sweep.signum();
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc offset collapses the radius".into()).into());
        }
        Ok(Self {
            center: self.center,
            radius,
            start_angle: self.start_angle,
            sweep: self.sweep,
        })
    }
}
