// src/traversal/grid_disk.rs

//! Cells within `k` grid steps of an origin.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use super::neighbors::neighbor_rotations;
use crate::cell_index::CellIndex;
use crate::error::{GridError, Result};
use crate::types::Direction;

/// Direction order for walking once around a ring, starting from the cell
/// reached by [`NEXT_RING_DIRECTION`].
const RING_DIRECTIONS: [Direction; 6] = [
  Direction::JAxes,
  Direction::JkAxes,
  Direction::KAxes,
  Direction::IkAxes,
  Direction::IAxes,
  Direction::IjAxes,
];

/// Step from the last cell of one ring to the first cell of the next.
const NEXT_RING_DIRECTION: Direction = Direction::IAxes;

/// A `k` this large covers every cell at resolution 15.
const K_ALL_CELLS_AT_RES_15: u32 = 13_780_510;

/// Number of cells at resolution 15: `2 + 120 * 7^15`.
const NUM_CELLS_MAX_RES: u64 = 569_707_381_193_162;

/// Upper bound on the number of cells returned for radius `k`.
pub fn max_grid_disk_size(k: u32) -> u64 {
  if k >= K_ALL_CELLS_AT_RES_15 {
    return NUM_CELLS_MAX_RES;
  }
  let k = u64::from(k);
  3 * k * (k + 1) + 1
}

/// Cells within `k` steps of `origin`, ordered ring by ring.
///
/// Walks each ring in a spiral, which is only correct away from pentagons.
///
/// # Errors
/// `Pentagon` when the origin is a pentagon or the walk reaches one; any
/// error from [`neighbor_rotations`].
pub fn grid_disk_unsafe(origin: CellIndex, k: u32) -> Result<Vec<CellIndex>> {
  let mut out = Vec::with_capacity(usize::try_from(max_grid_disk_size(k)).unwrap_or(0).min(1 << 16));
  out.push(origin);

  if origin.is_pentagon() {
    return Err(GridError::Pentagon);
  }

  let mut current = origin;
  let mut rotations = 0;
  for ring in 1..=k {
    // Move out to the next ring; it is recorded at the end of the ring.
    current = neighbor_rotations(current, NEXT_RING_DIRECTION, &mut rotations)?;
    if current.is_pentagon() {
      return Err(GridError::Pentagon);
    }

    for dir in RING_DIRECTIONS {
      for _ in 0..ring {
        current = neighbor_rotations(current, dir, &mut rotations)?;
        out.push(current);
        if current.is_pentagon() {
          return Err(GridError::Pentagon);
        }
      }
    }
  }

  Ok(out)
}

/// Cells within `k` steps of `origin` paired with their grid distance,
/// found by breadth-first search. Correct around pentagons.
///
/// # Errors
/// `CellInvalid` for a malformed origin; any error from
/// [`neighbor_rotations`] other than `Pentagon`.
pub fn grid_disk_distances(origin: CellIndex, k: u32) -> Result<Vec<(CellIndex, u32)>> {
  if !origin.is_valid_cell() {
    return Err(GridError::CellInvalid);
  }

  let mut seen = HashSet::from([origin]);
  let mut out = vec![(origin, 0)];
  let mut queue = VecDeque::from([(origin, 0)]);

  while let Some((cell, dist)) = queue.pop_front() {
    if dist == k {
      continue;
    }
    for dir in Direction::NEIGHBORS {
      let mut rotations = 0;
      let next = match neighbor_rotations(cell, dir, &mut rotations) {
        Ok(next) => next,
        // no cell in a pentagon's deleted direction
        Err(GridError::Pentagon) => continue,
        Err(e) => return Err(e),
      };
      if seen.insert(next) {
        out.push((next, dist + 1));
        queue.push_back((next, dist + 1));
      }
    }
  }

  Ok(out)
}

/// Cells within `k` steps of `origin`.
///
/// Tries the spiral walk first and falls back to breadth-first search when
/// it meets a pentagon.
///
/// # Errors
/// As for [`grid_disk_distances`].
pub fn grid_disk(origin: CellIndex, k: u32) -> Result<Vec<CellIndex>> {
  if !origin.is_valid_cell() {
    return Err(GridError::CellInvalid);
  }
  match grid_disk_unsafe(origin, k) {
    Ok(cells) => Ok(cells),
    Err(e) => {
      debug!(origin = %origin, k, error = %e, "spiral walk failed, using breadth-first search");
      Ok(grid_disk_distances(origin, k)?.into_iter().map(|(cell, _)| cell).collect())
    }
  }
}
