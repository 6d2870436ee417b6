use crate::shape::{Sphere, Triangle};

/// Does the sphere overlap the (closed) triangle?
///
/// Separating-axis test over the triangle's Voronoi regions: the triangle
/// plane, the three vertex regions and the three edge regions each get a
/// chance to prove the shapes disjoint; the sphere overlaps iff none
/// succeeds. Everything is expressed relative to the sphere center so the
/// radius only ever appears squared.
pub fn intersection_test_sphere_triangle(sphere: &Sphere, triangle: &Triangle) -> bool {
    let a = triangle.a - sphere.center;
    let b = triangle.b - sphere.center;
    let c = triangle.c - sphere.center;
    let rr = sphere.radius * sphere.radius;

    // Sphere entirely off the triangle plane?
    let v = (b - a).cross(&(c - a));
    let d = a.dot(&v);
    let e = v.dot(&v);
    let sep1 = d * d > rr * e;

    // Sphere outside a vertex region?
    let aa = a.dot(&a);
    let ab = a.dot(&b);
    let ac = a.dot(&c);
    let bb = b.dot(&b);
    let bc = b.dot(&c);
    let cc = c.dot(&c);
    let sep2 = aa > rr && ab > aa && ac > aa;
    let sep3 = bb > rr && ab > bb && bc > bb;
    let sep4 = cc > rr && ac > cc && bc > cc;

    // Sphere outside an edge region?
    let ab_dir = b - a;
    let bc_dir = c - b;
    let ca_dir = a - c;
    let d1 = ab - aa;
    let d2 = bc - bb;
    let d3 = ac - cc;
    let e1 = ab_dir.norm_squared();
    let e2 = bc_dir.norm_squared();
    let e3 = ca_dir.norm_squared();
    let q1 = a * e1 - ab_dir * d1;
    let q2 = b * e2 - bc_dir * d2;
    let q3 = c * e3 - ca_dir * d3;
    let qc = c * e1 - q1;
    let qa = a * e2 - q2;
    let qb = b * e3 - q3;
    let sep5 = q1.norm_squared() > rr * e1 * e1 && q1.dot(&qc) > 0.0;
    let sep6 = q2.norm_squared() > rr * e2 * e2 && q2.dot(&qa) > 0.0;
    let sep7 = q3.norm_squared() > rr * e3 * e3 && q3.dot(&qb) > 0.0;

    !(sep1 || sep2 || sep3 || sep4 || sep5 || sep6 || sep7)
}
