//! Planes and view frustums.

use crate::math::{Matrix4, Point, Real, Vector};

/// A plane in Hessian form: the set of points `p` with `normal · p + d = 0`.
///
/// Points with a positive signed distance lie on the side the normal points
/// toward; the frustum planes are oriented so that this is the inside.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Plane {
    /// The normal of the plane.
    pub normal: Vector<Real>,
    /// The offset of the plane along its normal.
    pub d: Real,
}

impl Plane {
    /// Creates a plane from its normal and offset.
    #[inline]
    pub fn new(normal: Vector<Real>, d: Real) -> Plane {
        Plane { normal, d }
    }

    /// Creates the plane containing `point` with the given normal.
    #[inline]
    pub fn from_point_normal(point: &Point<Real>, normal: Vector<Real>) -> Plane {
        Plane {
            normal,
            d: -normal.dot(&point.coords),
        }
    }

    /// The signed distance from `point` to this plane.
    ///
    /// Positive on the side the normal points toward.
    #[inline]
    pub fn signed_distance(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) + self.d
    }
}

/// The six planes of a view frustum, normals pointing inward.
///
/// Plane order: near, far, left, right, top, bottom.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Frustum {
    /// The six boundary planes.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extracts the frustum planes of a world-to-projection matrix.
    ///
    /// Each plane is a sum or difference of the matrix' fourth row with one
    /// of the other rows, rescaled so its normal is a unit vector.
    pub fn from_matrix(world_to_projection: &Matrix4<Real>) -> Frustum {
        let m = world_to_projection;
        Frustum {
            planes: [
                combined_plane(m, 2, 1.0),  // near
                combined_plane(m, 2, -1.0), // far
                combined_plane(m, 0, 1.0),  // left
                combined_plane(m, 0, -1.0), // right
                combined_plane(m, 1, -1.0), // top
                combined_plane(m, 1, 1.0),  // bottom
            ],
        }
    }
}

fn combined_plane(m: &Matrix4<Real>, row: usize, sign: Real) -> Plane {
    let coeffs = m.row(3) + m.row(row) * sign;
    let normal = Vector::new(coeffs[0], coeffs[1], coeffs[2]);
    let inv_len = 1.0 / normal.norm();
    Plane::new(normal * inv_len, coeffs[3] * inv_len)
}
