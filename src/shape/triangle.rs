//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// A triangle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Reference to an array containing the three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [&Point<Real>; 3] {
        [&self.a, &self.b, &self.c]
    }

    /// The arithmetic mean of the three vertices.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// The tight axis-aligned bounding box of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::new(
            self.a.inf(&self.b).inf(&self.c),
            self.a.sup(&self.b).sup(&self.c),
        )
    }
}
