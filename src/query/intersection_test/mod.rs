//! Implementation details of the boolean and sidedness overlap tests.

pub use self::intersection_test_aabb_aabb::intersection_test_aabb_aabb;
pub use self::intersection_test_aabb_ray::intersection_test_aabb_ray;
pub use self::intersection_test_frustum::{
    intersection_test_frustum_aabb, intersection_test_frustum_obb,
};
pub use self::intersection_test_plane::{
    intersection_test_plane_aabb, intersection_test_plane_obb, PlaneSide,
};
pub use self::intersection_test_sphere_aabb::intersection_test_sphere_aabb;
pub use self::intersection_test_sphere_sphere::intersection_test_sphere_sphere;
pub use self::intersection_test_sphere_triangle::intersection_test_sphere_triangle;
pub use self::intersection_test_trimesh_sphere::intersection_test_trimesh_sphere;
pub use self::intersection_test_trimesh_trimesh::intersection_test_trimesh_trimesh;

mod intersection_test_aabb_aabb;
mod intersection_test_aabb_ray;
mod intersection_test_frustum;
mod intersection_test_plane;
mod intersection_test_sphere_aabb;
mod intersection_test_sphere_sphere;
mod intersection_test_sphere_triangle;
mod intersection_test_trimesh_sphere;
mod intersection_test_trimesh_trimesh;
