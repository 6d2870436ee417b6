use super::cast_sphere_triangle;
use crate::math::{Point, Real};
use crate::query::intersection_test::intersection_test_aabb_ray;
use crate::query::RayAabb;
use crate::shape::{Sphere, TriMesh};

/// Sweeps the sphere linearly from its center to `target` against the mesh
/// and returns the smallest fraction of the motion at which it touches any
/// triangle, or `1.0` if the motion completes untouched.
///
/// Pruning reduces to a ray test: a node can only be relevant if the center
/// path intersects its AABB inflated by the sphere radius. Both children of
/// every surviving internal node are visited, since the earliest impact may
/// lie in either subtree.
pub fn cast_sphere_trimesh(mesh: &TriMesh, sphere: &Sphere, target: &Point<Real>) -> Real {
    if mesh.bvh().is_empty() {
        return 1.0;
    }

    let ray = RayAabb::new(sphere.center, *target);
    sweep(mesh, sphere, &ray, target, mesh.bvh().root())
}

fn sweep(mesh: &TriMesh, sphere: &Sphere, ray: &RayAabb, target: &Point<Real>, node_id: i32) -> Real {
    let node = mesh.bvh().node(node_id);
    if !intersection_test_aabb_ray(&node.aabb.loosened(sphere.radius), ray) {
        return 1.0;
    }

    if node.is_leaf() {
        cast_sphere_triangle(sphere, target, &mesh.triangle(node.triangle_id() as u32))
    } else {
        sweep(mesh, sphere, ray, target, node.left).min(sweep(mesh, sphere, ray, target, node.right))
    }
}
