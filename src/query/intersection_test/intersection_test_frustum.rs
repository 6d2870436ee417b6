use super::{intersection_test_plane_aabb, intersection_test_plane_obb, PlaneSide};
use crate::bounding_volume::{Aabb, Frustum, Obb};

/// Classifies an axis-aligned box against a frustum.
///
/// The box is outside as soon as one plane rejects it entirely; it is inside
/// only if every plane accepts it entirely; anything in between is
/// intersecting.
pub fn intersection_test_frustum_aabb(frustum: &Frustum, aabb: &Aabb) -> PlaneSide {
    let mut intersecting = false;
    for plane in &frustum.planes {
        match intersection_test_plane_aabb(plane, aabb) {
            PlaneSide::Outside => return PlaneSide::Outside,
            PlaneSide::Intersecting => intersecting = true,
            PlaneSide::Inside => {}
        }
    }

    if intersecting {
        PlaneSide::Intersecting
    } else {
        PlaneSide::Inside
    }
}

/// Classifies an oriented box against a frustum.
pub fn intersection_test_frustum_obb(frustum: &Frustum, obb: &Obb) -> PlaneSide {
    let mut intersecting = false;
    for plane in &frustum.planes {
        match intersection_test_plane_obb(plane, obb) {
            PlaneSide::Outside => return PlaneSide::Outside,
            PlaneSide::Intersecting => intersecting = true,
            PlaneSide::Inside => {}
        }
    }

    if intersecting {
        PlaneSide::Intersecting
    } else {
        PlaneSide::Inside
    }
}
