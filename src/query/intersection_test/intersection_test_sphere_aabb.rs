use crate::bounding_volume::Aabb;
use crate::math::Vector;
use crate::shape::Sphere;

/// Does the sphere overlap the box? Touching counts as overlap.
///
/// Compares the squared distance from the sphere center to the box (the sum
/// of the per-axis overshoots past either face) against the squared radius.
#[inline]
pub fn intersection_test_sphere_aabb(sphere: &Sphere, aabb: &Aabb) -> bool {
    let below = (aabb.mins - sphere.center).sup(&Vector::zeros());
    let above = (sphere.center - aabb.maxs).sup(&Vector::zeros());
    let nearest = below + above;
    nearest.norm_squared() <= sphere.radius * sphere.radius
}
