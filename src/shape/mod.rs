//! Shapes usable in collision queries.

pub use self::sphere::Sphere;
pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshError};

mod sphere;
mod triangle;
mod trimesh;
