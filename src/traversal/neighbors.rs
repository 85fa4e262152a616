// src/traversal/neighbors.rs

//! Single-step neighbor traversal with rotation tracking.
//!
//! Stepping across a base cell boundary may change the orientation of the
//! IJK axes. The walk reports how many 60 degree ccw rotations the caller
//! must apply to directions expressed in the origin's frame to keep walking
//! consistently in the new cell.

use tracing::debug;

use super::tables::{NEW_ADJUSTMENT_II, NEW_ADJUSTMENT_III, NEW_DIGIT_II, NEW_DIGIT_III};
use crate::base_cells;
use crate::cell_index::{is_resolution_class_iii, CellIndex};
use crate::constants::{INVALID_BASE_CELL, NUM_BASE_CELLS};
use crate::error::{GridError, Result};
use crate::types::Direction;

/// Returns the neighbor of `origin` in `direction`, applying `rotations`
/// ccw rotations to `direction` first and updating `rotations` with the
/// rotations accumulated by the step.
///
/// # Errors
/// * `Domain` if `direction` is not one of the six step directions.
/// * `CellInvalid` for an out-of-range base cell or an unused digit within
///   the resolution.
/// * `Pentagon` when stepping from a pentagon center into its deleted K
///   sub-sequence.
/// * `Failed` on an index inconsistent with the pentagon rules.
pub fn neighbor_rotations(origin: CellIndex, direction: Direction, rotations: &mut i32) -> Result<CellIndex> {
  if !direction.is_step() {
    return Err(GridError::Domain);
  }

  *rotations = rotations.rem_euclid(6);
  let mut dir = direction.rotate_ccw_n(*rotations as usize);

  let old_base_cell = origin.base_cell();
  if old_base_cell >= NUM_BASE_CELLS {
    return Err(GridError::CellInvalid);
  }
  let old_leading_digit = origin.leading_non_zero_digit();

  let mut current = origin;
  let mut new_rotations = 0;

  // Adjust the digits from the finest resolution up, carrying into the
  // base cell when the step leaves the resolution 0 cell.
  let mut level = origin.resolution();
  loop {
    if level == 0 {
      let mut new_base_cell = base_cells::neighbor(old_base_cell, dir);
      new_rotations = base_cells::neighbor_rotations(old_base_cell, dir);

      if new_base_cell == INVALID_BASE_CELL {
        // The deleted K vertex of a pentagon base cell; the edge actually
        // borders the IK neighbor.
        new_base_cell = base_cells::neighbor(old_base_cell, Direction::IkAxes);
        new_rotations = base_cells::neighbor_rotations(old_base_cell, Direction::IkAxes);
        current = current.with_base_cell(new_base_cell).rotate60_ccw();
        *rotations += 1;
        debug!(
          origin = %origin,
          old_base_cell,
          new_base_cell,
          "stepped into deleted pentagon vertex, using IK neighbor"
        );
      } else {
        current = current.with_base_cell(new_base_cell);
      }
      break;
    }

    let old_digit = current.digit(level);
    if old_digit == Direction::InvalidDigit {
      return Err(GridError::CellInvalid);
    }

    let (digits, adjustments) = if is_resolution_class_iii(level) {
      (&NEW_DIGIT_II, &NEW_ADJUSTMENT_II)
    } else {
      (&NEW_DIGIT_III, &NEW_ADJUSTMENT_III)
    };
    current = current.with_digit(level, digits[old_digit as usize][dir as usize]);

    let next_dir = adjustments[old_digit as usize][dir as usize];
    if next_dir == Direction::Center {
      break;
    }
    dir = next_dir;
    level -= 1;
  }

  let new_base_cell = current.base_cell();
  if base_cells::is_pentagon(new_base_cell) {
    let mut already_adjusted_k_subsequence = false;

    // force rotation out of the missing K sub-sequence
    if current.leading_non_zero_digit() == Direction::KAxes {
      if old_base_cell != new_base_cell {
        // rotate in the direction of the face the origin came from
        let from_face = base_cells::home_face(old_base_cell).ok_or(GridError::CellInvalid)?;
        current = if base_cells::is_cw_offset(new_base_cell, from_face) {
          current.rotate60_cw()
        } else {
          current.rotate60_ccw()
        };
        already_adjusted_k_subsequence = true;
      } else {
        // Stayed inside the pentagon base cell; the origin's own leading
        // digit decides which way out of the K sub-sequence.
        match old_leading_digit {
          Direction::Center => return Err(GridError::Pentagon),
          Direction::JkAxes => {
            current = current.rotate60_ccw();
            *rotations += 1;
          }
          Direction::IkAxes => {
            current = current.rotate60_cw();
            *rotations += 5;
          }
          _ => return Err(GridError::Failed),
        }
      }
      debug!(
        origin = %origin,
        cell = %current,
        changed_base_cell = already_adjusted_k_subsequence,
        "rotated out of pentagon K sub-sequence"
      );
    }

    for _ in 0..new_rotations {
      current = current.rotate_pent60_ccw();
    }

    // Account for differing orientation of the base cells (this edge might
    // not follow properties of some other edges).
    if old_base_cell != new_base_cell {
      if base_cells::is_polar_pentagon(new_base_cell) {
        // 118 and 8 have the polar pentagons as their only non-rotated
        // neighbors
        if old_base_cell != 118 && old_base_cell != 8 && current.leading_non_zero_digit() != Direction::JkAxes {
          *rotations += 1;
        }
      } else if current.leading_non_zero_digit() == Direction::IkAxes && !already_adjusted_k_subsequence {
        // account for distortion introduced by the 5 neighbor being deleted
        *rotations += 1;
      }
    }
  } else {
    current = current.rotate60_ccw_n(new_rotations.max(0) as usize);
  }

  *rotations = (*rotations + new_rotations) % 6;
  Ok(current)
}

/// The neighbor of `origin` in `direction` without rotation bookkeeping.
///
/// # Errors
/// As for [`neighbor_rotations`].
pub fn neighbor(origin: CellIndex, direction: Direction) -> Result<CellIndex> {
  let mut rotations = 0;
  neighbor_rotations(origin, direction, &mut rotations)
}

/// Direction from `origin` to an adjacent `destination`. `Center` if they
/// are the same cell and `InvalidDigit` if they are not neighbors.
pub fn direction_for_neighbor(origin: CellIndex, destination: CellIndex) -> Direction {
  if origin == destination {
    return Direction::Center;
  }

  // pentagons have no K neighbor
  let skip = usize::from(origin.is_pentagon());
  Direction::NEIGHBORS
    .into_iter()
    .skip(skip)
    .find(|&dir| neighbor(origin, dir) == Ok(destination))
    .unwrap_or(Direction::InvalidDigit)
}

/// Whether two cells share an edge.
///
/// # Errors
/// `CellInvalid` when either cell is malformed, `ResMismatch` when they are
/// at different resolutions.
pub fn are_neighbor_cells(origin: CellIndex, destination: CellIndex) -> Result<bool> {
  if !origin.is_valid_cell() || !destination.is_valid_cell() {
    return Err(GridError::CellInvalid);
  }
  if origin == destination {
    return Ok(false);
  }
  if origin.resolution() != destination.resolution() {
    return Err(GridError::ResMismatch);
  }
  Ok(direction_for_neighbor(origin, destination) != Direction::InvalidDigit)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_non_step_directions() {
    let h = CellIndex(0x85283473fffffff);
    let mut rotations = 0;
    assert_eq!(neighbor_rotations(h, Direction::Center, &mut rotations), Err(GridError::Domain));
    assert_eq!(neighbor_rotations(h, Direction::InvalidDigit, &mut rotations), Err(GridError::Domain));
  }

  #[test]
  fn rejects_bad_base_cell() {
    let h = CellIndex::new(2, 125, Direction::Center);
    assert_eq!(neighbor(h, Direction::IAxes), Err(GridError::CellInvalid));
  }

  #[test]
  fn unused_digit_mid_walk_is_invalid() {
    // Stepping IJ from digit IJ carries into the parent level, where the
    // digit slot is unused.
    let h = CellIndex::new(2, 10, Direction::IjAxes).with_digit(1, Direction::InvalidDigit);
    assert_eq!(neighbor(h, Direction::IjAxes), Err(GridError::CellInvalid));
  }

  #[test]
  fn pentagon_center_k_is_undefined() {
    for res in 1..=15 {
      let pent = CellIndex::new(res, 4, Direction::Center);
      assert_eq!(neighbor(pent, Direction::KAxes), Err(GridError::Pentagon), "res {res}");
    }
  }

  #[test]
  fn res0_pentagon_k_uses_ik_neighbor() {
    let pent = CellIndex::new(0, 4, Direction::Center);
    let mut rotations = 0;
    let out = neighbor_rotations(pent, Direction::KAxes, &mut rotations).unwrap();
    assert_eq!(out.base_cell(), base_cells::neighbor(4, Direction::IkAxes));
    assert!(out.is_valid_cell());
  }

  #[test]
  fn rotations_are_normalized() {
    let h = CellIndex(0x85283473fffffff);
    let mut a = 7;
    let mut b = 1;
    let na = neighbor_rotations(h, Direction::KAxes, &mut a).unwrap();
    let nb = neighbor_rotations(h, Direction::KAxes, &mut b).unwrap();
    assert_eq!(na, nb);
    assert_eq!(a, b);
    assert!((0..6).contains(&a));
  }

  #[test]
  fn direction_for_neighbor_round_trip() {
    let h = CellIndex(0x8928308280fffff);
    assert_eq!(direction_for_neighbor(h, h), Direction::Center);
    for dir in Direction::NEIGHBORS {
      let n = neighbor(h, dir).unwrap();
      assert_eq!(direction_for_neighbor(h, n), dir);
      assert_eq!(are_neighbor_cells(h, n), Ok(true));
    }
    let far = crate::indexing::lat_lng_to_cell(&crate::types::LatLng::from_degrees(51.5, -0.12), 9).unwrap();
    assert_eq!(direction_for_neighbor(h, far), Direction::InvalidDigit);
  }

  #[test]
  fn are_neighbor_cells_checks_arguments() {
    let h = CellIndex(0x8928308280fffff);
    assert_eq!(are_neighbor_cells(h, h), Ok(false));
    assert_eq!(are_neighbor_cells(h, CellIndex::NULL), Err(GridError::CellInvalid));
    assert_eq!(are_neighbor_cells(h, h.parent(8).unwrap()), Err(GridError::ResMismatch));
  }
}
