use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::partitioning::Bvh;
use crate::query::details;
use crate::query::TraceHit;
use crate::shape::{Sphere, Triangle};

/// The reasons a triangle mesh can be rejected at construction time.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TriMeshError {
    /// The index buffer length is not a multiple of three.
    #[error("the index buffer length ({0}) is not a multiple of 3")]
    BadIndexCount(usize),
    /// An index refers past the end of the vertex buffer.
    #[error("vertex index {index} out of bounds: the mesh has {num_vertices} vertices")]
    IndexOutOfBounds {
        /// The offending index value.
        index: u32,
        /// The vertex buffer length.
        num_vertices: usize,
    },
}

/// A triangle mesh with a precomputed bounding-volume hierarchy.
///
/// The mesh borrows its vertex and index buffers and owns only the
/// hierarchy, so the buffers must outlive it; the borrow also guarantees
/// they cannot be mutated while queries run. Every triple of consecutive
/// indices describes one triangle. Once built, a mesh is immutable and
/// any number of threads may query it concurrently.
pub struct TriMesh<'a> {
    vertices: &'a [Point<Real>],
    indices: &'a [u32],
    bvh: Bvh,
}

impl<'a> TriMesh<'a> {
    /// Builds a mesh and its hierarchy from a vertex buffer and an index buffer.
    ///
    /// An empty index buffer is accepted and yields a mesh whose queries all
    /// report a miss. Degenerate (zero-area) triangles are accepted; the
    /// query kernels treat them as unhittable.
    pub fn new(vertices: &'a [Point<Real>], indices: &'a [u32]) -> Result<Self, TriMeshError> {
        if indices.len() % 3 != 0 {
            return Err(TriMeshError::BadIndexCount(indices.len()));
        }

        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(TriMeshError::IndexOutOfBounds {
                index,
                num_vertices: vertices.len(),
            });
        }

        let bvh = Bvh::from_trimesh(vertices, indices);

        Ok(Self {
            vertices,
            indices,
            bvh,
        })
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        self.vertices
    }

    /// The flat index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        self.indices
    }

    /// The number of triangles forming this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = &self.indices[i as usize * 3..i as usize * 3 + 3];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// The bounding-volume hierarchy of this mesh.
    #[inline]
    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    /// The bounding box of the whole mesh, or `None` if the mesh is empty.
    #[inline]
    pub fn local_aabb(&self) -> Option<&Aabb> {
        self.bvh.root_node().map(|node| &node.aabb)
    }

    /// Casts the ray segment from `start` to `end` and returns the closest hit.
    ///
    /// The returned fraction is relative to the full segment; a fraction of
    /// `1.0` (with a triangle id of `-1`) means the segment hit nothing.
    pub fn cast_ray(&self, start: &Point<Real>, end: &Point<Real>) -> TraceHit {
        details::cast_ray_trimesh(self, start, end)
    }

    /// Does the ray segment from `start` to `end` hit any triangle of this mesh?
    pub fn intersects_ray(&self, start: &Point<Real>, end: &Point<Real>) -> bool {
        details::intersects_ray_trimesh(self, start, end)
    }

    /// Does `sphere` overlap any triangle of this mesh?
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        details::intersection_test_trimesh_sphere(self, sphere)
    }

    /// Sweeps `sphere` along the straight path from its center to `target`.
    ///
    /// Returns the smallest fraction of the path at which the sphere touches
    /// the mesh, or `1.0` if it completes the motion untouched.
    pub fn sweep_sphere(&self, sphere: &Sphere, target: &Point<Real>) -> Real {
        details::cast_sphere_trimesh(self, sphere, target)
    }

    /// Does this mesh overlap `other`?
    ///
    /// The traversal prunes with the hierarchy AABBs and descends the larger
    /// subtree first, but the triangle/triangle leaf kernel is a placeholder
    /// that reports no contact, so this currently always returns `false`.
    pub fn intersects_trimesh(&self, other: &TriMesh) -> bool {
        details::intersection_test_trimesh_trimesh(self, other)
    }
}
