// src/math/vec2d.rs

use crate::types::Vec2d;

impl Vec2d {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Magnitude of the vector.
  #[inline]
  pub fn magnitude(&self) -> f64 {
    (self.x * self.x + self.y * self.y).sqrt()
  }

  /// Intersection of the line `p0`-`p1` with the line `p2`-`p3`.
  ///
  /// The lines must not be parallel; callers only use this on a cell edge
  /// crossing a face edge.
  pub fn intersect(p0: &Vec2d, p1: &Vec2d, p2: &Vec2d, p3: &Vec2d) -> Vec2d {
    let s1 = Vec2d::new(p1.x - p0.x, p1.y - p0.y);
    let s2 = Vec2d::new(p3.x - p2.x, p3.y - p2.y);

    let t = (s2.x * (p0.y - p2.y) - s2.y * (p0.x - p2.x)) / (-s2.x * s1.y + s1.x * s2.y);

    Vec2d::new(p0.x + t * s1.x, p0.y + t * s1.y)
  }

  /// Component-wise equality within single-precision epsilon.
  #[inline]
  pub fn almost_equals(&self, other: &Vec2d) -> bool {
    let eps = f64::from(f32::EPSILON);
    (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
  }
}
