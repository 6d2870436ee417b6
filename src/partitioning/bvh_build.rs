use super::{Bvh, BvhNode};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

impl Bvh {
    /// Builds the hierarchy for the given vertex and flat index buffers.
    ///
    /// Triangles are recursively partitioned by the plane through the mean of
    /// their centroids, normal to the longest axis of their bounding box. If
    /// every axis produces an empty side, the set is split in half in its
    /// current order instead, so the build terminates on any input. Nodes are
    /// appended children-first; an empty index buffer yields an empty tree
    /// with `root == -1`.
    pub fn from_trimesh(vertices: &[Point<Real>], indices: &[u32]) -> Bvh {
        let num_triangles = indices.len() / 3;
        let mut bvh = Bvh {
            nodes: Vec::new(),
            root: -1,
            leaf_count: num_triangles as u32,
        };

        if num_triangles == 0 {
            return bvh;
        }

        let mut triangles: Vec<i32> = (0..num_triangles as i32).collect();
        let centroids: Vec<Point<Real>> = triangles
            .iter()
            .map(|&id| {
                let element_index = id as usize * 3;
                Point::from(
                    (vertices[indices[element_index] as usize].coords
                        + vertices[indices[element_index + 1] as usize].coords
                        + vertices[indices[element_index + 2] as usize].coords)
                        / 3.0,
                )
            })
            .collect();
        let mut scratch = vec![0i32; num_triangles * 2];

        bvh.root = subdivide(
            &mut bvh.nodes,
            vertices,
            indices,
            &mut triangles,
            &centroids,
            &mut scratch,
        );

        log::trace!(
            "mesh BVH built: {} nodes over {} triangles",
            bvh.nodes.len(),
            num_triangles
        );

        bvh
    }
}

/// Appends the subtree for `triangles` to `nodes` and returns its root index.
fn subdivide(
    nodes: &mut Vec<BvhNode>,
    vertices: &[Point<Real>],
    indices: &[u32],
    triangles: &mut [i32],
    centroids: &[Point<Real>],
    scratch: &mut [i32],
) -> i32 {
    if triangles.is_empty() {
        return -1;
    }

    // Tight bounds over the actual vertices of the current set, and the mean
    // of its centroids.
    let mut mins = vertices[indices[triangles[0] as usize * 3] as usize];
    let mut maxs = mins;
    let mut median = Vector::zeros();
    for &triangle in triangles.iter() {
        let element_index = triangle as usize * 3;
        for j in 0..3 {
            let vertex = &vertices[indices[element_index + j] as usize];
            mins = mins.inf(vertex);
            maxs = maxs.sup(vertex);
        }

        median += centroids[triangle as usize].coords;
    }
    median /= triangles.len() as Real;

    if triangles.len() == 1 {
        nodes.push(BvhNode::leaf(Aabb::new(mins, maxs), triangles[0] * 3));
        return nodes.len() as i32 - 1;
    }

    // Try to split at the longest axis first, then the next longest, then the
    // remaining one.
    let extents = maxs - mins;
    let mut axis_order = [0usize, 1, 2];
    axis_order.sort_by(|&a, &b| extents[b].total_cmp(&extents[a]));

    let num_triangles = triangles.len();
    let mut left_count = 0;
    let mut right_count = 0;
    for &axis in &axis_order {
        left_count = 0;
        right_count = 0;
        for &triangle in triangles.iter() {
            let side = centroids[triangle as usize][axis] - median[axis];
            if side >= 0.0 {
                scratch[left_count] = triangle;
                left_count += 1;
            } else {
                scratch[num_triangles + right_count] = triangle;
                right_count += 1;
            }
        }

        if left_count != 0 && right_count != 0 {
            break;
        }
    }

    if left_count == 0 || right_count == 0 {
        // Every axis put all centroids on one side. Halve the set in its
        // current order; this guarantees termination.
        left_count = num_triangles / 2;
    } else {
        triangles[..left_count].copy_from_slice(&scratch[..left_count]);
        triangles[left_count..].copy_from_slice(&scratch[num_triangles..num_triangles + right_count]);
    }

    // The scratch buffer is reusable by the recursion because both partitions
    // were copied back before descending.
    let (left_triangles, right_triangles) = triangles.split_at_mut(left_count);
    let left = subdivide(nodes, vertices, indices, left_triangles, centroids, scratch);
    let right = subdivide(nodes, vertices, indices, right_triangles, centroids, scratch);

    nodes.push(BvhNode::internal(Aabb::new(mins, maxs), left, right));
    nodes.len() as i32 - 1
}
