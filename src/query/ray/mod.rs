//! Structures and kernels for ray casting.

pub use self::ray::{RayAabb, TraceHit};
pub use self::ray_triangle::{cast_ray_triangle, RayTriangleHit};
pub use self::ray_trimesh::{cast_ray_trimesh, intersects_ray_trimesh};

mod ray;
mod ray_triangle;
mod ray_trimesh;
