use crate::bounding_volume::Aabb;
use crate::query::RayAabb;

/// Does the ray segment intersect the box?
///
/// Separating-axis test between the segment and the box: the three face
/// axes compare the segment's own bounding box against the node box, and
/// the three cross-product axes (segment direction crossed with each face
/// normal) catch diagonal segments whose boxes overlap without the segment
/// itself entering the node. This scalar form is the reference semantics
/// for the hierarchy's pruning; any vectorized variant must produce
/// identical results.
#[inline]
pub fn intersection_test_aabb_ray(aabb: &Aabb, ray: &RayAabb) -> bool {
    let v = &ray.half_extents;
    let w = &ray.half_dir;
    let h = &aabb.half_extents;
    let c = ray.center - aabb.center;

    if c.x.abs() > v.x + h.x || c.y.abs() > v.y + h.y || c.z.abs() > v.z + h.z {
        return false;
    }

    if (c.y * w.z - c.z * w.y).abs() > h.y * v.z + h.z * v.y
        || (c.x * w.z - c.z * w.x).abs() > h.x * v.z + h.z * v.x
        || (c.x * w.y - c.y * w.x).abs() > h.x * v.y + h.y * v.x
    {
        return false;
    }

    true
}
