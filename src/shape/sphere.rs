use crate::math::{Point, Real};

/// A sphere shape.
///
/// Spheres are query primitives only: they are tested against meshes but are
/// never themselves indexed by an acceleration structure.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Sphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere. Must be non-negative.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Sphere {
        Sphere { center, radius }
    }
}
