use super::intersection_test_aabb_aabb;
use crate::bounding_volume::Aabb;
use crate::shape::{TriMesh, Triangle};

/// Does any triangle of `mesh1` overlap any triangle of `mesh2`?
///
/// Simultaneous descent of both hierarchies: internal/internal pairs are
/// pruned by an AABB/AABB test and recurse into the larger subtree first,
/// leaf/internal pairs descend the internal side. The leaf-level kernels
/// below are placeholders that report no contact, so the whole query
/// currently always answers `false`.
pub fn intersection_test_trimesh_trimesh(mesh1: &TriMesh, mesh2: &TriMesh) -> bool {
    if mesh1.bvh().is_empty() || mesh2.bvh().is_empty() {
        return false;
    }

    find_any_hit(mesh1, mesh2, mesh1.bvh().root(), mesh2.bvh().root())
}

fn find_any_hit(mesh1: &TriMesh, mesh2: &TriMesh, a: i32, b: i32) -> bool {
    let node_a = mesh1.bvh().node(a);
    let node_b = mesh2.bvh().node(b);

    match (node_a.is_leaf(), node_b.is_leaf()) {
        (true, true) => overlap_triangle_triangle(
            &mesh1.triangle(node_a.triangle_id() as u32),
            &mesh2.triangle(node_b.triangle_id() as u32),
        ),
        (false, false) => {
            if !intersection_test_aabb_aabb(&node_a.aabb, &node_b.aabb) {
                return false;
            }

            // Descend the larger subtree first for better pruning.
            if node_a.aabb.volume() > node_b.aabb.volume() {
                find_any_hit(mesh1, mesh2, node_a.left, b) || find_any_hit(mesh1, mesh2, node_a.right, b)
            } else {
                find_any_hit(mesh1, mesh2, a, node_b.left) || find_any_hit(mesh1, mesh2, a, node_b.right)
            }
        }
        (true, false) => {
            if !overlap_subtree_triangle(
                &node_b.aabb,
                &mesh1.triangle(node_a.triangle_id() as u32),
            ) {
                return false;
            }

            find_any_hit(mesh1, mesh2, a, node_b.left) || find_any_hit(mesh1, mesh2, a, node_b.right)
        }
        (false, true) => {
            if !overlap_subtree_triangle(
                &node_a.aabb,
                &mesh2.triangle(node_b.triangle_id() as u32),
            ) {
                return false;
            }

            find_any_hit(mesh1, mesh2, node_a.left, b) || find_any_hit(mesh1, mesh2, node_a.right, b)
        }
    }
}

// TODO: triangle/triangle and AABB/triangle SAT kernels; mesh/mesh any-hit
// reports no contact until they land.
fn overlap_triangle_triangle(_tri1: &Triangle, _tri2: &Triangle) -> bool {
    false
}

fn overlap_subtree_triangle(_aabb: &Aabb, _triangle: &Triangle) -> bool {
    false
}
