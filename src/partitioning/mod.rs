//! The bounding-volume hierarchy accelerating mesh queries.

pub use self::bvh::{Bvh, BvhNode};

mod bvh;
mod bvh_build;
