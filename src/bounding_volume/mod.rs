//! Bounding volumes and culling primitives.

pub use self::aabb::Aabb;
pub use self::frustum::{Frustum, Plane};
pub use self::obb::Obb;

mod aabb;
mod frustum;
mod obb;
