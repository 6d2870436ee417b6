//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis Aligned Bounding Box.
///
/// Both the min/max form and the center/half-extent form are stored; the
/// intersection kernels read whichever form is cheaper for them. The four
/// fields are kept consistent by the constructors: `center = (mins + maxs) / 2`
/// and `half_extents = (maxs - mins) / 2`, with `mins <= maxs` componentwise.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point of this Aabb with the smallest coordinates.
    pub mins: Point<Real>,
    /// The point of this Aabb with the greatest coordinates.
    pub maxs: Point<Real>,
    /// The center of this Aabb, `(mins + maxs) / 2`.
    pub center: Point<Real>,
    /// The half-extents of this Aabb, `(maxs - mins) / 2`.
    pub half_extents: Vector<Real>,
}

impl Aabb {
    /// Creates a new Aabb.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb {
            mins,
            maxs,
            center: na::center(&mins, &maxs),
            half_extents: (maxs - mins) * 0.5,
        }
    }

    /// Creates a new Aabb from a set of points.
    ///
    /// Returns the tight box around `pts`, or a point-sized box at the origin
    /// if `pts` is empty.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut mins = Point::from(Vector::repeat(Real::MAX));
        let mut maxs = Point::from(Vector::repeat(-Real::MAX));

        for pt in pts {
            mins = mins.inf(pt);
            maxs = maxs.sup(pt);
        }

        if mins.x > maxs.x {
            // No point was consumed.
            return Self::new(Point::origin(), Point::origin());
        }

        Self::new(mins, maxs)
    }

    /// The extents of this Aabb, `maxs - mins`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this Aabb.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// The smallest Aabb containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.mins.inf(&other.mins), self.maxs.sup(&other.maxs))
    }

    /// Enlarges this Aabb by `amount` on every side.
    ///
    /// `amount` is expected to be non-negative.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Aabb {
        Aabb::new(
            self.mins + Vector::repeat(-amount),
            self.maxs + Vector::repeat(amount),
        )
    }

    /// Does this Aabb contain `other`?
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    /// Does this Aabb contain the point `point`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }
}
