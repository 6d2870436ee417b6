//! Structures needed to cast rays against meshes.

use crate::math::{Point, Real, Vector};

/// A ray segment rewritten in the AABB form consumed by the pruning kernel.
///
/// Alongside its `start` and `end` points the segment carries its midpoint,
/// the half-direction vector from that midpoint to `end`, and the
/// componentwise absolute value of the half-direction (which is also the
/// half-extent vector of the segment's own tight bounding box). Everything
/// is computed once at construction so the hot ray/AABB separating-axis
/// test reads the fields directly.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct RayAabb {
    /// The start of the segment.
    pub start: Point<Real>,
    /// The end of the segment.
    pub end: Point<Real>,
    /// The midpoint of the segment.
    pub center: Point<Real>,
    /// Half the segment direction: `end - center`.
    pub half_dir: Vector<Real>,
    /// The componentwise absolute value of `half_dir`; the half-extents of
    /// the segment's own bounding box.
    pub half_extents: Vector<Real>,
}

impl RayAabb {
    /// Creates a ray segment from `start` to `end`.
    #[inline]
    pub fn new(start: Point<Real>, end: Point<Real>) -> RayAabb {
        let center = na::center(&start, &end);
        let half_dir = end - center;
        RayAabb {
            start,
            end,
            center,
            half_dir,
            half_extents: half_dir.abs(),
        }
    }

    /// Computes the point on the segment at parameter `t` (0 at `start`, 1 at `end`).
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.start + (self.end - self.start) * t
    }
}

/// The result of a first-hit ray cast against a mesh.
///
/// A fraction of `1.0` together with a triangle id of `-1` is the miss
/// record; any fraction below `1.0` identifies the closest hit along the
/// queried segment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    /// Position of the hit along the segment, in `[0, 1]`. `1.0` means no hit.
    pub fraction: Real,
    /// The id of the hit triangle, or `-1` if the ray hit nothing.
    pub triangle: i32,
    /// Barycentric weight of the triangle's second vertex at the hit point.
    pub b: Real,
    /// Barycentric weight of the triangle's third vertex at the hit point.
    pub c: Real,
}

impl TraceHit {
    /// Did this trace hit anything?
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.fraction < 1.0
    }
}

impl Default for TraceHit {
    #[inline]
    fn default() -> Self {
        TraceHit {
            fraction: 1.0,
            triangle: -1,
            b: 0.0,
            c: 0.0,
        }
    }
}
