use crate::bounding_volume::Plane;
use crate::math::{Point, Real, Vector2};
use crate::shape::{Sphere, Triangle};

/// Sweeps the sphere linearly from its center to `target` and returns the
/// smallest fraction of the motion at which it touches the triangle, or
/// `1.0` if it completes the motion untouched.
///
/// This is a ray test against the Minkowski sum of the sphere and the
/// triangle, split over that volume's faces: the two triangle-shaped caps
/// (found through the plane), the three edge cylinders, and the three
/// vertex spheres.
pub fn cast_sphere_triangle(sphere: &Sphere, target: &Point<Real>, triangle: &Triangle) -> Real {
    let p = [triangle.a, triangle.b, triangle.c];
    let c = sphere.center;
    let e = *target;
    let r = sphere.radius;

    let n = (p[1] - p[0]).cross(&(p[2] - p[0])).normalize();
    let plane = Plane::from_point_normal(&p[0], n);

    // Both endpoints more than a radius away on the same side of the plane
    // means the sphere can never reach the triangle.
    let sc = plane.signed_distance(&c);
    let se = plane.signed_distance(&e);
    let same_side = sc * se > 0.0;
    if same_side && sc.abs() > r && se.abs() > r {
        return 1.0;
    }

    // The fraction at which the sphere surface reaches the plane; if the
    // contact point projects inside the triangle this is the answer.
    {
        let t = (sc - r) / (sc - se);
        let vt = c + (e - c) * t;

        // Denominator-free barycentric coordinates of the contact point: the
        // triangle maps to ((0,0), (denom,0), (0,denom)) and the point to
        // (beta, gamma) scaled by the same Gram determinant.
        let u0 = p[1] - p[0];
        let u1 = p[2] - p[0];
        let rel = vt - p[0];
        let d00 = u0.dot(&u0);
        let d01 = u0.dot(&u1);
        let d11 = u1.dot(&u1);
        let d20 = rel.dot(&u0);
        let d21 = rel.dot(&u1);
        let denom = d00 * d11 - d01 * d01;

        let verts_2d = [
            Vector2::new(0.0, 0.0),
            Vector2::new(denom, 0.0),
            Vector2::new(0.0, denom),
        ];
        let point = Vector2::new(d11 * d20 - d01 * d21, d00 * d21 - d01 * d20);

        // 2d crossing test.
        let mut inside = false;
        let mut e0 = verts_2d[2];
        let mut y0 = e0.y >= point.y;
        for e1 in verts_2d {
            let y1 = e1.y >= point.y;
            if y0 != y1
                && ((e1.y - point.y) * (e0.x - e1.x) >= (e1.x - point.x) * (e0.y - e1.y)) == y1
            {
                inside = !inside;
            }

            y0 = y1;
            e0 = e1;
        }

        if inside {
            return t;
        }
    }

    // The contact is on the boundary of the Minkowski sum: the earliest
    // touch of an edge cylinder or of a vertex sphere wins.
    let ke = [p[1] - p[0], p[2] - p[1], p[0] - p[2]];
    let kg = [p[0] - c, p[1] - c, p[2] - c];
    let ks = e - c;
    let kss = ks.dot(&ks);

    let mut best = 1.0f32;
    let mut kgg = [0.0; 3];
    let mut kgs = [0.0; 3];

    for i in 0..3 {
        let kee = ke[i].dot(&ke[i]);
        let keg = ke[i].dot(&kg[i]);
        let kes = ke[i].dot(&ks);
        kgg[i] = kg[i].dot(&kg[i]);
        kgs[i] = kg[i].dot(&ks);

        let a = kee * kss - kes * kes;
        let b = 2.0 * (keg * kes - kee * kgs[i]);
        let cc = kee * (kgg[i] - r * r) - keg * keg;

        if let Some(t) = smallest_unit_root(a, b, cc) {
            // Only count the cylinder hit if it lands within the edge segment.
            let ct = c + ks * t;
            let d = (ct - p[i]).dot(&ke[i]);
            if d >= 0.0 && d <= kee {
                best = best.min(t);
            }
        }
    }

    for i in 0..3 {
        let a = kss;
        let b = -2.0 * kgs[i];
        let cc = kgg[i] - r * r;

        if let Some(t) = smallest_unit_root(a, b, cc) {
            best = best.min(t);
        }
    }

    best
}

/// The smallest root of `a·t² + b·t + c = 0` lying in `[0, 1]`.
///
/// Uses the cancellation-free form `q = -(b + sign(b)·sqrt(b² - 4ac)) / 2`
/// with roots `q / a` and `c / q`.
fn smallest_unit_root(a: Real, b: Real, c: Real) -> Option<Real> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sign = if b >= 0.0 { 1.0 } else { -1.0 };
    let q = -0.5 * (b + sign * discriminant.sqrt());
    let t0 = q / a;
    let t1 = c / q;

    let in_unit = |t: Real| t >= 0.0 && t <= 1.0;
    let t = if !in_unit(t0) {
        t1
    } else if !in_unit(t1) {
        t0
    } else {
        t0.min(t1)
    };

    in_unit(t).then_some(t)
}
