use crate::math::{Real, DEFAULT_EPSILON};
use crate::query::RayAabb;
use crate::shape::Triangle;

/// Time of impact and barycentric coordinates of a ray/triangle hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTriangleHit {
    /// Position of the hit along the ray: 0 at `start`, 1 at `end`, may exceed 1.
    pub toi: Real,
    /// Barycentric weight of the triangle's second vertex.
    pub b: Real,
    /// Barycentric weight of the triangle's third vertex.
    pub c: Real,
}

/// Computes the intersection between a triangle and a ray segment
/// (Möller–Trumbore).
///
/// Both windings are reported; there is no back-face culling. The returned
/// time of impact is measured in units of the segment length and is not
/// clipped to the segment, so callers looking for a hit within the segment
/// must additionally check `toi < 1`. Triangles with near-zero determinant
/// (degenerate, or parallel to the ray) yield `None`.
pub fn cast_ray_triangle(ray: &RayAabb, triangle: &Triangle) -> Option<RayTriangleHit> {
    let dir = ray.end - ray.start;

    // Two edges sharing the first vertex.
    let e1 = triangle.b - triangle.a;
    let e2 = triangle.c - triangle.a;

    let p = dir.cross(&e2);
    let det = e1.dot(&p);

    // A near-zero determinant means the ray lies in the triangle plane.
    if det > -DEFAULT_EPSILON && det < DEFAULT_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let t = ray.start - triangle.a;

    let u = t.dot(&p) * inv_det;
    if u < 0.0 || u > 1.0 {
        return None;
    }

    let q = t.cross(&e1);

    let v = dir.dot(&q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let toi = e2.dot(&q) * inv_det;
    if toi <= DEFAULT_EPSILON {
        return None;
    }

    Some(RayTriangleHit { toi, b: u, c: v })
}
