// src/math/vec3d.rs

use crate::types::{LatLng, Vec3d};

impl Vec3d {
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  /// Point on the unit sphere for a latitude and longitude in radians.
  #[inline]
  pub fn from_lat_lng(geo: &LatLng) -> Self {
    let r = geo.lat.cos();
    Self {
      x: geo.lng.cos() * r,
      y: geo.lng.sin() * r,
      z: geo.lat.sin(),
    }
  }

  /// Square of the euclidean distance to `other`.
  #[inline]
  pub fn square_distance(&self, other: &Vec3d) -> f64 {
    let dx = self.x - other.x;
    let dy = self.y - other.y;
    let dz = self.z - other.z;
    dx * dx + dy * dy + dz * dz
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{EPSILON_RAD, M_PI_2};

  #[test]
  fn test_square_distance() {
    let v1 = Vec3d::new(0.0, 0.0, 0.0);
    let v2 = Vec3d::new(1.0, 1.0, 1.0);
    assert!((v1.square_distance(&v2) - 3.0).abs() < f64::EPSILON);
    assert_eq!(v2.square_distance(&v2), 0.0);
  }

  #[test]
  fn test_from_lat_lng() {
    let origin = Vec3d::from_lat_lng(&LatLng::new(0.0, 0.0));
    let north = Vec3d::from_lat_lng(&LatLng::new(M_PI_2, 0.0));
    assert!((origin.x - 1.0).abs() < EPSILON_RAD);
    assert!((north.z - 1.0).abs() < EPSILON_RAD);
    // quarter turn on the unit sphere: chord length squared is 2
    assert!((origin.square_distance(&north) - 2.0).abs() < EPSILON_RAD);
  }
}
