// src/cell_index/rotation.rs

//! Whole-index 60 degree rotations.
//!
//! Pentagon-rooted indexes never lead with a K digit, so the pentagon
//! variants add one more plain rotation when a rotation lands the leading
//! digit on K.

use super::CellIndex;
use crate::types::Direction;

impl CellIndex {
  /// Rotates every digit `1..=res` 60 degrees counter-clockwise.
  #[must_use]
  pub fn rotate60_ccw(self) -> Self {
    (1..=self.resolution()).fold(self, |h, r| h.with_digit(r, h.digit(r).rotate60_ccw()))
  }

  /// Rotates every digit `1..=res` 60 degrees clockwise.
  #[must_use]
  pub fn rotate60_cw(self) -> Self {
    (1..=self.resolution()).fold(self, |h, r| h.with_digit(r, h.digit(r).rotate60_cw()))
  }

  /// Rotates 60 degrees counter-clockwise about a pentagonal center.
  #[must_use]
  pub fn rotate_pent60_ccw(self) -> Self {
    self.rotate_pent(Direction::rotate60_ccw, CellIndex::rotate60_ccw)
  }

  /// Rotates 60 degrees clockwise about a pentagonal center.
  #[must_use]
  pub fn rotate_pent60_cw(self) -> Self {
    self.rotate_pent(Direction::rotate60_cw, CellIndex::rotate60_cw)
  }

  fn rotate_pent(self, rotate_digit: fn(Direction) -> Direction, rotate_index: fn(Self) -> Self) -> Self {
    let mut h = self;
    let mut found_first_non_zero_digit = false;
    for r in 1..=h.resolution() {
      h = h.with_digit(r, rotate_digit(h.digit(r)));

      if !found_first_non_zero_digit && h.digit(r) != Direction::Center {
        found_first_non_zero_digit = true;
        // step out of the deleted k-axes subsequence
        if h.leading_non_zero_digit() == Direction::KAxes {
          h = rotate_index(h);
        }
      }
    }
    h
  }

  /// Applies `n` plain counter-clockwise rotations.
  #[must_use]
  pub fn rotate60_ccw_n(self, n: usize) -> Self {
    (0..n % 6).fold(self, |h, _| h.rotate60_ccw())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rotate_six_times_is_identity() {
    let h = CellIndex(0x89283082e73ffff);
    let mut r = h;
    for _ in 0..6 {
      r = r.rotate60_ccw();
    }
    assert_eq!(r, h);
    assert_eq!(h.rotate60_ccw_n(6), h);
  }

  #[test]
  fn ccw_and_cw_are_inverse() {
    let h = CellIndex(0x85283473fffffff);
    assert_eq!(h.rotate60_ccw().rotate60_cw(), h);
    assert_eq!(h.rotate60_cw().rotate60_ccw(), h);
  }

  #[test]
  fn rotation_leaves_unused_slots_alone() {
    let h = CellIndex::new(3, 10, Direction::JAxes);
    let r = h.rotate60_ccw();
    for res in 1..=3 {
      assert_eq!(r.digit(res), Direction::JkAxes);
    }
    for res in 4..=15 {
      assert_eq!(r.digit(res), Direction::InvalidDigit);
    }
    assert_eq!(r.base_cell(), 10);
  }

  #[test]
  fn pentagon_rotation_skips_k_leading_digit() {
    // Leading JK rotates ccw onto K, so one extra rotation moves it to IK.
    let h = CellIndex::new(2, 4, Direction::Center).with_digit(1, Direction::JkAxes);
    let r = h.rotate_pent60_ccw();
    assert_eq!(r.digit(1), Direction::IkAxes);
    assert_eq!(r.digit(2), Direction::Center);

    // Leading IK rotates cw onto K, extra cw rotation moves it to JK.
    let h = CellIndex::new(2, 4, Direction::Center).with_digit(1, Direction::IkAxes);
    let r = h.rotate_pent60_cw();
    assert_eq!(r.digit(1), Direction::JkAxes);
  }

  #[test]
  fn pentagon_rotation_matches_plain_when_no_k() {
    let h = CellIndex::new(3, 14, Direction::Center)
      .with_digit(2, Direction::IAxes)
      .with_digit(3, Direction::JAxes);
    assert_eq!(h.rotate_pent60_ccw(), h.rotate60_ccw());
  }

  #[test]
  fn pentagon_rotation_extra_turn_applies_once() {
    // Leading digit JK at res 1, K at res 2. After the extra rotation at res 1
    // the later digits are rotated twice in total; no further correction.
    let h = CellIndex::new(2, 4, Direction::Center)
      .with_digit(1, Direction::JkAxes)
      .with_digit(2, Direction::KAxes);
    let r = h.rotate_pent60_ccw();
    assert_eq!(r.digit(1), Direction::IkAxes);
    // res 2: K -> (extra) IK -> (own) I
    assert_eq!(r.digit(2), Direction::IAxes);
  }
}
