use super::{intersection_test_sphere_aabb, intersection_test_sphere_triangle};
use crate::shape::{Sphere, TriMesh};

/// Does the sphere overlap any triangle of the mesh?
///
/// Depth-first traversal of the mesh hierarchy, pruned by sphere/AABB tests
/// and short-circuiting on the first overlapping triangle.
pub fn intersection_test_trimesh_sphere(mesh: &TriMesh, sphere: &Sphere) -> bool {
    if mesh.bvh().is_empty() {
        return false;
    }

    find_any_hit(mesh, sphere, mesh.bvh().root())
}

fn find_any_hit(mesh: &TriMesh, sphere: &Sphere, node_id: i32) -> bool {
    let node = mesh.bvh().node(node_id);
    if !intersection_test_sphere_aabb(sphere, &node.aabb) {
        return false;
    }

    if node.is_leaf() {
        intersection_test_sphere_triangle(sphere, &mesh.triangle(node.triangle_id() as u32))
    } else {
        find_any_hit(mesh, sphere, node.left) || find_any_hit(mesh, sphere, node.right)
    }
}
