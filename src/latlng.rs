// src/latlng.rs

//! Spherical coordinate helpers: angle normalization, great-circle
//! distance, azimuths and projecting a point along an azimuth.

use crate::constants::{EARTH_RADIUS_KM, EPSILON, M_180_PI, M_2PI, M_PI, M_PI_180, M_PI_2};
use crate::types::LatLng;

/// Normalizes radians to a value between `0.0` and `2 * PI`.
#[inline]
#[must_use]
pub fn pos_angle_rads(rads: f64) -> f64 {
  let tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  if rads >= M_2PI {
    tmp - M_2PI
  } else {
    tmp
  }
}

/// Constrains longitude to the range `[-PI, PI]`.
#[inline]
#[must_use]
pub fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

#[inline]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

#[inline]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Whether both components of two points are within `threshold` of each other.
#[inline]
#[must_use]
pub fn geo_almost_equal_threshold(p1: &LatLng, p2: &LatLng, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

/// The great circle distance in radians between two points, using the
/// haversine formula.
pub fn great_circle_distance_rads(a: &LatLng, b: &LatLng) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lng - a.lng) * 0.5).sin();

  let h = sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng;
  // rounding can push near-antipodal pairs just past 1
  let h = h.clamp(0.0, 1.0);

  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// The great circle distance in kilometers between two points.
pub fn great_circle_distance_km(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

/// Azimuth from `p1` to `p2` in radians.
pub(crate) fn azimuth_rads(p1: &LatLng, p2: &LatLng) -> f64 {
  (p2.lat.cos() * (p2.lng - p1.lng).sin())
    .atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * (p2.lng - p1.lng).cos())
}

/// The point `distance` radians from `p1` along azimuth `az`.
pub(crate) fn az_distance_rads(p1: &LatLng, az: f64, distance: f64) -> LatLng {
  if distance < EPSILON {
    return *p1;
  }

  let az = pos_angle_rads(az);

  // Snap to a pole when the result lands on one; longitude is meaningless there.
  let at_pole = |lat: f64| -> Option<LatLng> {
    if (lat - M_PI_2).abs() < EPSILON {
      Some(LatLng::new(M_PI_2, 0.0))
    } else if (lat + M_PI_2).abs() < EPSILON {
      Some(LatLng::new(-M_PI_2, 0.0))
    } else {
      None
    }
  };

  // due north or due south
  if az < EPSILON || (az - M_PI).abs() < EPSILON {
    let lat = if az < EPSILON { p1.lat + distance } else { p1.lat - distance };
    return at_pole(lat).unwrap_or_else(|| LatLng::new(lat, constrain_lng(p1.lng)));
  }

  let sin_lat = (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
  let lat = sin_lat.asin();
  if let Some(pole) = at_pole(lat) {
    return pole;
  }

  let inv_cos_lat = 1.0 / lat.cos();
  let sin_lng = (az.sin() * distance.sin() * inv_cos_lat).clamp(-1.0, 1.0);
  let cos_lng = ((distance.cos() - p1.lat.sin() * lat.sin()) / p1.lat.cos() * inv_cos_lat).clamp(-1.0, 1.0);

  LatLng::new(lat, constrain_lng(p1.lng + sin_lng.atan2(cos_lng)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::EPSILON_RAD;

  #[test]
  fn test_pos_angle_rads() {
    assert_eq!(pos_angle_rads(0.0), 0.0);
    assert!((pos_angle_rads(-M_PI_2) - 3.0 * M_PI_2).abs() < EPSILON_RAD);
    assert!((pos_angle_rads(M_2PI + 0.5) - 0.5).abs() < EPSILON_RAD);
  }

  #[test]
  fn test_constrain_lng() {
    assert_eq!(constrain_lng(0.0), 0.0);
    assert!((constrain_lng(M_PI + 0.5) - (-M_PI + 0.5)).abs() < EPSILON_RAD);
    assert!((constrain_lng(-M_PI - 0.5) - (M_PI - 0.5)).abs() < EPSILON_RAD);
    assert!((constrain_lng(3.0 * M_2PI + 0.1) - 0.1).abs() < 1e-12);
  }

  #[test]
  fn test_great_circle_distance() {
    let a = LatLng::from_degrees(10.0, 10.0);
    assert_eq!(great_circle_distance_rads(&a, &a), 0.0);

    let p1 = LatLng::new(0.0, 0.0);
    let p2 = LatLng::new(0.0, M_PI_2);
    assert!((great_circle_distance_rads(&p1, &p2) - M_PI_2).abs() < EPSILON_RAD);
    assert!((great_circle_distance_km(&p1, &p2) - EARTH_RADIUS_KM * M_PI_2).abs() < 1e-6);
  }

  #[test]
  fn test_great_circle_distance_antipodal() {
    for (lat, lng) in [(0.3, 0.7), (-1.2, 2.9), (M_PI_2 - 1e-9, 0.0)] {
      let a = LatLng::new(lat, lng);
      let b = LatLng::new(-lat, constrain_lng(lng + M_PI));
      let d = great_circle_distance_rads(&a, &b);
      assert!(d.is_finite(), "{a:?} to {b:?}");
      assert!((d - M_PI).abs() < 1e-6, "{d}");
    }
  }

  #[test]
  fn test_azimuth() {
    let origin = LatLng::new(0.0, 0.0);
    let north = LatLng::new(0.1, 0.0);
    let east = LatLng::new(0.0, 0.1);
    assert!(azimuth_rads(&origin, &north).abs() < EPSILON_RAD);
    assert!((azimuth_rads(&origin, &east) - M_PI_2).abs() < EPSILON_RAD);
  }

  #[test]
  fn test_az_distance_round_trip() {
    let start = LatLng::from_degrees(15.0, 10.0);
    assert_eq!(az_distance_rads(&start, 1.0, 0.0), start);

    let due_north = az_distance_rads(&start, 0.0, 0.1);
    assert!((due_north.lat - (start.lat + 0.1)).abs() < EPSILON_RAD);
    assert!((due_north.lng - start.lng).abs() < EPSILON_RAD);

    let to_pole = az_distance_rads(&LatLng::new(0.0, 1.0), 0.0, M_PI_2);
    assert_eq!(to_pole, LatLng::new(M_PI_2, 0.0));

    for az in [0.3, 1.2, 2.5, 4.0, 5.5] {
      let dist = 0.05;
      let out = az_distance_rads(&start, az, dist);
      assert!(
        (great_circle_distance_rads(&start, &out) - dist).abs() < 1e-9,
        "distance preserved for azimuth {az}"
      );
      assert!(
        (pos_angle_rads(azimuth_rads(&start, &out)) - az).abs() < 1e-9,
        "azimuth preserved for {az}"
      );
    }
  }
}
