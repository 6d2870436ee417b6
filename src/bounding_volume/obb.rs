//! Oriented bounding box.

use crate::math::{Point, Real, Vector};

/// An oriented bounding box.
///
/// The box is described by its center, three orthonormal axes, and the
/// half-extent along each axis. Unlike [`Aabb`](crate::bounding_volume::Aabb)
/// it is not used as a tree bounding volume; it only appears as a culling
/// primitive for the plane and frustum tests.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// The three local axes of the box. Expected to be orthonormal.
    pub axes: [Vector<Real>; 3],
    /// The half-extent of the box along each of `axes`.
    pub half_extents: Vector<Real>,
}

impl Obb {
    /// Creates an oriented box from its center, axes and half-extents.
    #[inline]
    pub fn new(center: Point<Real>, axes: [Vector<Real>; 3], half_extents: Vector<Real>) -> Obb {
        Obb {
            center,
            axes,
            half_extents,
        }
    }
}
