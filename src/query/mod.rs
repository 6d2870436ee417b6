//! Non-persistent geometric queries.
//!
//! The most convenient entry points are the methods on
//! [`TriMesh`](crate::shape::TriMesh): `cast_ray`, `intersects_ray`,
//! `intersects_sphere`, `sweep_sphere` and `intersects_trimesh`.
//!
//! The functions exported by the [`details`] submodule are the specific
//! kernels and drivers those methods are built from, named
//! `[operation]_[shape1]_[shape2]()` where `[operation]` is
//! `intersection_test` for boolean overlap tests and `cast` for queries
//! returning a time of impact.

pub use self::intersection_test::PlaneSide;
pub use self::ray::{RayAabb, TraceHit};

mod intersection_test;
mod ray;
mod shape_cast;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
    pub use super::ray::*;
    pub use super::shape_cast::*;
}
