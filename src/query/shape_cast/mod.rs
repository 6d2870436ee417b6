//! Implementation details of the swept-sphere (shape cast) queries.

pub use self::shape_cast_sphere_triangle::cast_sphere_triangle;
pub use self::shape_cast_trimesh_sphere::cast_sphere_trimesh;

mod shape_cast_sphere_triangle;
mod shape_cast_trimesh_sphere;
