use crate::bounding_volume::Aabb;

/// Do the two boxes overlap? Touching boundaries count as overlap.
#[inline]
pub fn intersection_test_aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.mins.x <= b.maxs.x
        && b.mins.x <= a.maxs.x
        && a.mins.y <= b.maxs.y
        && b.mins.y <= a.maxs.y
        && a.mins.z <= b.maxs.z
        && b.mins.z <= a.maxs.z
}
