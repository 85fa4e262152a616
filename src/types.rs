// src/types.rs

//! Core grid data structures.

use crate::constants::{MAX_CELL_BNDRY_VERTS, M_180_PI, M_PI_180};
use crate::error::GridError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Latitude/longitude coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

impl LatLng {
  /// Builds a point from radians.
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Builds a point from degrees.
  pub fn from_degrees(lat: f64, lng: f64) -> Self {
    Self {
      lat: lat * M_PI_180,
      lng: lng * M_PI_180,
    }
  }

  /// Latitude in degrees.
  pub fn lat_degrees(&self) -> f64 {
    self.lat * M_180_PI
  }

  /// Longitude in degrees.
  pub fn lng_degrees(&self) -> f64 {
    self.lng * M_180_PI
  }

  /// Whether both components are finite numbers.
  pub fn is_finite(&self) -> bool {
    self.lat.is_finite() && self.lng.is_finite()
  }
}

/// The boundary of a cell, counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellBoundary {
  /// Number of vertices in the boundary.
  pub num_verts: usize,
  /// Vertices; only the first `num_verts` are significant.
  pub verts: [LatLng; MAX_CELL_BNDRY_VERTS],
}

impl Default for CellBoundary {
  fn default() -> Self {
    Self {
      num_verts: 0,
      verts: [LatLng::default(); MAX_CELL_BNDRY_VERTS],
    }
  }
}

impl CellBoundary {
  /// The significant vertices.
  pub fn vertices(&self) -> &[LatLng] {
    &self.verts[..self.num_verts]
  }

  pub(crate) fn push(&mut self, v: LatLng) {
    self.verts[self.num_verts] = v;
    self.num_verts += 1;
  }
}

/// A single closed loop of geographic coordinates.
/// The last vertex is implicitly connected back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLoop {
  /// Vertices forming the loop.
  pub verts: Vec<LatLng>,
}

impl GeoLoop {
  pub fn new(verts: Vec<LatLng>) -> Self {
    Self { verts }
  }

  pub fn num_verts(&self) -> usize {
    self.verts.len()
  }

  /// Iterates the loop edges as `(origin, destination)`, wrapping last to first.
  pub fn edges(&self) -> impl Iterator<Item = (LatLng, LatLng)> + '_ {
    let n = self.verts.len();
    (0..n).map(move |i| (self.verts[i], self.verts[(i + 1) % n]))
  }
}

/// IJK hexagon coordinates. Each axis is spaced 120 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CoordIJK {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
  /// K component.
  pub k: i32,
}

impl CoordIJK {
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }
}

/// Face number and IJK coordinates on that face-centered coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceIJK {
  /// Icosahedron face number (0-19).
  pub face: usize,
  /// IJK coordinates on that face.
  pub coord: CoordIJK,
}

impl FaceIJK {
  pub const fn new(face: usize, coord: CoordIJK) -> Self {
    Self { face, coord }
  }
}

/// 2D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Vec2d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// Grid digit representing one of the six IJK+ axes directions, the center,
/// or the invalid/unused slot marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Digit in center.
  #[default]
  Center = 0,
  /// Digit in k-axes direction.
  KAxes = 1,
  /// Digit in j-axes direction.
  JAxes = 2,
  /// Digit in j == k direction.
  JkAxes = 3,
  /// Digit in i-axes direction.
  IAxes = 4,
  /// Digit in i == k direction.
  IkAxes = 5,
  /// Digit in i == j direction.
  IjAxes = 6,
  /// Digit in the invalid direction; also fills unused digit slots.
  InvalidDigit = 7,
}

impl Direction {
  /// The six directions a step can take, in digit order.
  pub const NEIGHBORS: [Direction; 6] = [
    Direction::KAxes,
    Direction::JAxes,
    Direction::JkAxes,
    Direction::IAxes,
    Direction::IkAxes,
    Direction::IjAxes,
  ];

  /// Decodes the low three bits of `bits`.
  #[inline]
  pub const fn from_bits(bits: u8) -> Self {
    match bits & 0b111 {
      0 => Direction::Center,
      1 => Direction::KAxes,
      2 => Direction::JAxes,
      3 => Direction::JkAxes,
      4 => Direction::IAxes,
      5 => Direction::IkAxes,
      6 => Direction::IjAxes,
      _ => Direction::InvalidDigit,
    }
  }

  /// Whether this is one of the six movement directions.
  #[inline]
  pub const fn is_step(self) -> bool {
    !matches!(self, Direction::Center | Direction::InvalidDigit)
  }

  /// Rotates the digit 60 degrees counter-clockwise.
  #[inline]
  #[must_use]
  pub const fn rotate60_ccw(self) -> Self {
    match self {
      Direction::KAxes => Direction::IkAxes,
      Direction::IkAxes => Direction::IAxes,
      Direction::IAxes => Direction::IjAxes,
      Direction::IjAxes => Direction::JAxes,
      Direction::JAxes => Direction::JkAxes,
      Direction::JkAxes => Direction::KAxes,
      other => other,
    }
  }

  /// Rotates the digit 60 degrees clockwise.
  #[inline]
  #[must_use]
  pub const fn rotate60_cw(self) -> Self {
    match self {
      Direction::KAxes => Direction::JkAxes,
      Direction::JkAxes => Direction::JAxes,
      Direction::JAxes => Direction::IjAxes,
      Direction::IjAxes => Direction::IAxes,
      Direction::IAxes => Direction::IkAxes,
      Direction::IkAxes => Direction::KAxes,
      other => other,
    }
  }

  /// Rotates the digit `n` times 60 degrees counter-clockwise.
  #[must_use]
  pub fn rotate_ccw_n(self, n: usize) -> Self {
    (0..n % 6).fold(self, |d, _| d.rotate60_ccw())
  }

  /// The direction pointing back along this one.
  #[must_use]
  pub const fn opposite(self) -> Self {
    match self {
      Direction::KAxes => Direction::IjAxes,
      Direction::JAxes => Direction::IkAxes,
      Direction::JkAxes => Direction::IAxes,
      Direction::IAxes => Direction::JkAxes,
      Direction::IkAxes => Direction::JAxes,
      Direction::IjAxes => Direction::KAxes,
      other => other,
    }
  }
}

impl TryFrom<u8> for Direction {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    if value > 7 {
      return Err(GridError::Domain);
    }
    Ok(Direction::from_bits(value))
  }
}
