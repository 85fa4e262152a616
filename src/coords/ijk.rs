// src/coords/ijk.rs

//! IJK lattice coordinates. Three axes 120 degrees apart; a normalized
//! coordinate has every component non-negative and at least one zero.

use std::ops::{Add, Sub};

use crate::constants::{M_RSIN60, M_SQRT3_2};
use crate::types::{CoordIJK, Direction, Vec2d};

/// IJK unit vectors corresponding to the 7 digits (0-6).
#[rustfmt::skip]
pub(crate) const UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK::new(0, 0, 0), // Center
  CoordIJK::new(0, 0, 1), // KAxes
  CoordIJK::new(0, 1, 0), // JAxes
  CoordIJK::new(0, 1, 1), // JkAxes
  CoordIJK::new(1, 0, 0), // IAxes
  CoordIJK::new(1, 0, 1), // IkAxes
  CoordIJK::new(1, 1, 0), // IjAxes
];

impl Add for CoordIJK {
  type Output = CoordIJK;

  fn add(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK::new(
      self.i.saturating_add(rhs.i),
      self.j.saturating_add(rhs.j),
      self.k.saturating_add(rhs.k),
    )
  }
}

impl Sub for CoordIJK {
  type Output = CoordIJK;

  fn sub(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK::new(
      self.i.saturating_sub(rhs.i),
      self.j.saturating_sub(rhs.j),
      self.k.saturating_sub(rhs.k),
    )
  }
}

impl CoordIJK {
  /// Uniformly scales every component.
  #[must_use]
  pub fn scale(self, factor: i32) -> Self {
    CoordIJK::new(
      self.i.saturating_mul(factor),
      self.j.saturating_mul(factor),
      self.k.saturating_mul(factor),
    )
  }

  /// Normalizes so every component is non-negative and the smallest is zero.
  #[must_use]
  pub fn normalize(self) -> Self {
    let mut c = self;
    if c.i < 0 {
      c.j = c.j.saturating_sub(c.i);
      c.k = c.k.saturating_sub(c.i);
      c.i = 0;
    }
    if c.j < 0 {
      c.i = c.i.saturating_sub(c.j);
      c.k = c.k.saturating_sub(c.j);
      c.j = 0;
    }
    if c.k < 0 {
      c.i = c.i.saturating_sub(c.k);
      c.j = c.j.saturating_sub(c.k);
      c.k = 0;
    }

    let min = c.i.min(c.j).min(c.k);
    if min > 0 {
      c.i -= min;
      c.j -= min;
      c.k -= min;
    }
    c
  }

  /// Digit of a unit vector (or the zero vector), `InvalidDigit` otherwise.
  pub fn to_digit(self) -> Direction {
    let c = self.normalize();
    UNIT_VECS
      .iter()
      .position(|&u| u == c)
      .map_or(Direction::InvalidDigit, |d| Direction::from_bits(d as u8))
  }

  /// The adjacent coordinate in direction `digit`; center and invalid
  /// digits leave the coordinate as is.
  #[must_use]
  pub fn neighbor(self, digit: Direction) -> Self {
    if digit.is_step() {
      (self + UNIT_VECS[digit as usize]).normalize()
    } else {
      self
    }
  }

  /// Linear combination `i * iv + j * jv + k * kv`, normalized.
  fn combine(self, iv: CoordIJK, jv: CoordIJK, kv: CoordIJK) -> Self {
    (iv.scale(self.i) + jv.scale(self.j) + kv.scale(self.k)).normalize()
  }

  /// Indexing parent in a counter-clockwise aperture 7 grid.
  #[must_use]
  pub fn up_ap7(self) -> Self {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    CoordIJK::new(((3.0 * i - j) / 7.0).round() as i32, ((i + 2.0 * j) / 7.0).round() as i32, 0).normalize()
  }

  /// Indexing parent in a clockwise aperture 7 grid.
  #[must_use]
  pub fn up_ap7r(self) -> Self {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    CoordIJK::new(((2.0 * i + j) / 7.0).round() as i32, ((3.0 * j - i) / 7.0).round() as i32, 0).normalize()
  }

  /// Center of this cell at the next finer counter-clockwise aperture 7
  /// resolution.
  #[must_use]
  pub fn down_ap7(self) -> Self {
    self.combine(CoordIJK::new(3, 0, 1), CoordIJK::new(1, 3, 0), CoordIJK::new(0, 1, 3))
  }

  /// Center of this cell at the next finer clockwise aperture 7 resolution.
  #[must_use]
  pub fn down_ap7r(self) -> Self {
    self.combine(CoordIJK::new(3, 1, 0), CoordIJK::new(0, 3, 1), CoordIJK::new(1, 0, 3))
  }

  /// Center of this cell at the next finer counter-clockwise aperture 3
  /// resolution.
  #[must_use]
  pub fn down_ap3(self) -> Self {
    self.combine(CoordIJK::new(2, 0, 1), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 1, 2))
  }

  /// Center of this cell at the next finer clockwise aperture 3 resolution.
  #[must_use]
  pub fn down_ap3r(self) -> Self {
    self.combine(CoordIJK::new(2, 1, 0), CoordIJK::new(0, 2, 1), CoordIJK::new(1, 0, 2))
  }

  #[must_use]
  pub fn rotate60_ccw(self) -> Self {
    self.combine(CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1), CoordIJK::new(1, 0, 1))
  }

  #[must_use]
  pub fn rotate60_cw(self) -> Self {
    self.combine(CoordIJK::new(1, 0, 1), CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1))
  }

  /// Center of the hex in 2D cartesian coordinates.
  pub fn to_hex2d(self) -> Vec2d {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    Vec2d {
      x: i - 0.5 * j,
      y: j * M_SQRT3_2,
    }
  }

  /// Containing hex of a 2D cartesian point.
  pub fn from_hex2d(v: &Vec2d) -> Self {
    let a1 = v.x.abs();
    let a2 = v.y.abs();

    // reverse conversion
    let x2 = a2 * M_RSIN60;
    let x1 = a1 + x2 / 2.0;

    let m1 = x1 as i32;
    let m2 = x2 as i32;

    let r1 = x1 - f64::from(m1);
    let r2 = x2 - f64::from(m2);

    let (mut i, mut j);
    if r1 < 0.5 {
      if r1 < 1.0 / 3.0 {
        i = m1;
        j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
      } else {
        j = if r2 < 1.0 - r1 { m2 } else { m2 + 1 };
        i = if 1.0 - r1 <= r2 && r2 < 2.0 * r1 { m1 + 1 } else { m1 };
      }
    } else if r1 < 2.0 / 3.0 {
      j = if r2 < 1.0 - r1 { m2 } else { m2 + 1 };
      i = if 2.0 * r1 - 1.0 < r2 && r2 < 1.0 - r1 { m1 } else { m1 + 1 };
    } else {
      i = m1 + 1;
      j = if r2 < r1 / 2.0 { m2 } else { m2 + 1 };
    }

    // fold across the axes if necessary
    if v.x < 0.0 {
      let (i64_i, i64_j) = (i64::from(i), i64::from(j));
      if j % 2 == 0 {
        let diff = i64_i - i64_j / 2;
        i = (i64_i - 2 * diff) as i32;
      } else {
        let diff = i64_i - (i64_j + 1) / 2;
        i = (i64_i - (2 * diff + 1)) as i32;
      }
    }

    if v.y < 0.0 {
      i = (i64::from(i) - (2 * i64::from(j) + 1) / 2) as i32;
      j = -j;
    }

    CoordIJK::new(i, j, 0).normalize()
  }
}
