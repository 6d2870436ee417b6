use super::ray_triangle::cast_ray_triangle;
use crate::math::{Point, Real};
use crate::query::intersection_test::intersection_test_aabb_ray;
use crate::query::{RayAabb, TraceHit};
use crate::shape::TriMesh;

/// Casts the segment from `start` to `end` against `mesh` and returns the
/// closest hit, with its fraction measured on the full segment.
///
/// The cast runs in chunks of `max(100, length / 20)` world units: each chunk
/// gets its own [`RayAabb`] so the box fed to the pruning kernel stays tight
/// around the portion of the ray actually being tested. Chunks are visited in
/// ray order, so the first chunk recording a hit also holds the globally
/// closest one and the cast stops there, rebasing the chunk-local fraction
/// onto the full segment.
pub fn cast_ray_trimesh(mesh: &TriMesh, start: &Point<Real>, end: &Point<Real>) -> TraceHit {
    let mut hit = TraceHit::default();
    if mesh.bvh().is_empty() {
        return hit;
    }

    let dir = end - start;
    let tracedist = dir.norm();
    let segmentlen = 100.0f32.max(tracedist / 20.0);

    let mut t = 0.0;
    while t < tracedist {
        let segstart = t / tracedist;
        let segend = (t + segmentlen).min(tracedist) / tracedist;

        let ray = RayAabb::new(start + dir * segstart, start + dir * segend);
        find_first_hit(mesh, &ray, mesh.bvh().root(), &mut hit);
        if hit.fraction < 1.0 {
            hit.fraction = segstart * (1.0 - hit.fraction) + segend * hit.fraction;
            break;
        }

        t += segmentlen;
    }

    hit
}

/// Does the segment from `start` to `end` hit any triangle of `mesh`?
pub fn intersects_ray_trimesh(mesh: &TriMesh, start: &Point<Real>, end: &Point<Real>) -> bool {
    if mesh.bvh().is_empty() {
        return false;
    }

    let ray = RayAabb::new(*start, *end);
    find_any_hit(mesh, &ray, mesh.bvh().root())
}

fn find_first_hit(mesh: &TriMesh, ray: &RayAabb, node_id: i32, hit: &mut TraceHit) {
    let node = mesh.bvh().node(node_id);
    if !intersection_test_aabb_ray(&node.aabb, ray) {
        return;
    }

    if node.is_leaf() {
        let triangle = mesh.triangle(node.triangle_id() as u32);
        if let Some(tri_hit) = cast_ray_triangle(ray, &triangle) {
            if tri_hit.toi < hit.fraction {
                hit.fraction = tri_hit.toi;
                hit.triangle = node.triangle_id();
                hit.b = tri_hit.b;
                hit.c = tri_hit.c;
            }
        }
    } else {
        find_first_hit(mesh, ray, node.left, hit);
        find_first_hit(mesh, ray, node.right, hit);
    }
}

fn find_any_hit(mesh: &TriMesh, ray: &RayAabb, node_id: i32) -> bool {
    let node = mesh.bvh().node(node_id);
    if !intersection_test_aabb_ray(&node.aabb, ray) {
        return false;
    }

    if node.is_leaf() {
        let triangle = mesh.triangle(node.triangle_id() as u32);
        cast_ray_triangle(ray, &triangle).is_some_and(|tri_hit| tri_hit.toi < 1.0)
    } else {
        find_any_hit(mesh, ray, node.left) || find_any_hit(mesh, ray, node.right)
    }
}
