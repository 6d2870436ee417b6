use crate::bounding_volume::{Aabb, Obb, Plane};

/// The position of a volume relative to a plane or a frustum.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaneSide {
    /// The volume lies entirely on the side the normal points toward.
    Inside,
    /// The volume lies entirely on the opposite side.
    Outside,
    /// The volume crosses the plane (or frustum boundary).
    Intersecting,
}

/// Classifies an axis-aligned box against a plane.
#[inline]
pub fn intersection_test_plane_aabb(plane: &Plane, aabb: &Aabb) -> PlaneSide {
    let e = aabb.half_extents.dot(&plane.normal.abs());
    let s = plane.signed_distance(&aabb.center);
    if s - e > 0.0 {
        PlaneSide::Inside
    } else if s + e < 0.0 {
        PlaneSide::Outside
    } else {
        PlaneSide::Intersecting
    }
}

/// Classifies an oriented box against a plane.
#[inline]
pub fn intersection_test_plane_obb(plane: &Plane, obb: &Obb) -> PlaneSide {
    let n = &plane.normal;
    let e = obb.half_extents.x * obb.axes[0].dot(n).abs()
        + obb.half_extents.y * obb.axes[1].dot(n).abs()
        + obb.half_extents.z * obb.axes[2].dot(n).abs();
    let s = plane.signed_distance(&obb.center);
    if s - e > 0.0 {
        PlaneSide::Inside
    } else if s + e < 0.0 {
        PlaneSide::Outside
    } else {
        PlaneSide::Intersecting
    }
}
