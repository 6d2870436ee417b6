/*!
meshtrace
=========

**meshtrace** is a collision library for static triangle meshes. A mesh is
compiled once into a bounding-volume hierarchy and then answered as a
read-only structure by four query families: first-hit and any-hit ray
casts, sphere overlap tests, swept-sphere casts returning a time-of-impact
fraction, and mesh/mesh overlap tests.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub extern crate na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Matrix4, Point3, Vector2, Vector3};

    /// The scalar type used throughout this crate.
    pub use f32 as Real;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
