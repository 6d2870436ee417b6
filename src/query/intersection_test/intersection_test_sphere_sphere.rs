use crate::shape::Sphere;

/// Do the two spheres overlap? Touching counts as overlap.
#[inline]
pub fn intersection_test_sphere_sphere(a: &Sphere, b: &Sphere) -> bool {
    let radius_sum = a.radius + b.radius;
    (a.center - b.center).norm_squared() <= radius_sum * radius_sum
}
