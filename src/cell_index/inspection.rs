// src/cell_index/inspection.rs

use super::{digit_offset, CellIndex};
use crate::base_cells;
use crate::constants::{CELL_MODE, MAX_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
use crate::error::{GridError, Result};
use crate::types::Direction;

impl CellIndex {
  /// Whether this is a well-formed cell index.
  ///
  /// Checks the high bit, mode and reserved bits, the base cell, that every
  /// digit up to the resolution is used and every digit past it is 7, and
  /// that a pentagon does not lead with the deleted K sub-sequence.
  pub fn is_valid_cell(self) -> bool {
    if self.high_bit() != 0 || self.mode() != CELL_MODE || self.reserved_bits() != 0 {
      return false;
    }

    let base_cell = self.base_cell();
    if base_cell >= NUM_BASE_CELLS {
      return false;
    }

    let res = self.resolution();
    if (1..=res).any(|r| self.digit(r) == Direction::InvalidDigit) {
      return false;
    }

    // unused digits are all 1s
    if res < MAX_RES {
      let unused = (1u64 << digit_offset(res)) - 1;
      if self.0 & unused != unused {
        return false;
      }
    }

    !(base_cells::is_pentagon(base_cell) && self.leading_non_zero_digit() == Direction::KAxes)
  }

  /// Whether this cell is one of the twelve pentagons at its resolution.
  pub fn is_pentagon(self) -> bool {
    base_cells::is_pentagon(self.base_cell()) && self.leading_non_zero_digit() == Direction::Center
  }

  /// The 122 resolution 0 cells, in base cell order.
  pub fn res0_cells() -> impl Iterator<Item = CellIndex> {
    (0..NUM_BASE_CELLS).map(|bc| CellIndex::new(0, bc, Direction::Center))
  }

  /// The twelve pentagons at `res`.
  ///
  /// # Errors
  /// `ResDomain` when `res > 15`.
  pub fn pentagons(res: u8) -> Result<[CellIndex; NUM_PENTAGONS]> {
    if res > MAX_RES {
      return Err(GridError::ResDomain);
    }
    let mut out = [CellIndex::NULL; NUM_PENTAGONS];
    let pentagon_base_cells = (0..NUM_BASE_CELLS).filter(|&bc| base_cells::is_pentagon(bc));
    for (slot, bc) in out.iter_mut().zip(pentagon_base_cells) {
      *slot = CellIndex::new(res, bc, Direction::Center);
    }
    Ok(out)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_cells_are_valid() {
    assert!(CellIndex(0x85283473fffffff).is_valid_cell());
    assert!(CellIndex(0x8928308280fffff).is_valid_cell());
    assert!(!CellIndex::NULL.is_valid_cell());
  }

  #[test]
  fn malformed_cells_are_invalid() {
    let h = CellIndex(0x85283473fffffff);
    assert!(!h.with_high_bit(1).is_valid_cell());
    assert!(!h.with_mode(2).is_valid_cell());
    assert!(!h.with_reserved_bits(1).is_valid_cell());
    assert!(!h.with_base_cell(NUM_BASE_CELLS).is_valid_cell());
    assert!(!h.with_digit(3, Direction::InvalidDigit).is_valid_cell());
    assert!(!h.with_digit(6, Direction::Center).is_valid_cell(), "digit past resolution");
  }

  #[test]
  fn pentagon_deleted_subsequence_is_invalid() {
    let pent = CellIndex::new(3, 4, Direction::Center);
    assert!(pent.is_valid_cell());
    assert!(!pent.with_digit(2, Direction::KAxes).is_valid_cell());
    assert!(pent.with_digit(2, Direction::JAxes).is_valid_cell());
    // K is fine after a non-zero leading digit
    assert!(pent.with_digit(1, Direction::JAxes).with_digit(2, Direction::KAxes).is_valid_cell());
  }

  #[test]
  fn pentagons_per_resolution() {
    for res in 0..=MAX_RES {
      let pents = CellIndex::pentagons(res).unwrap();
      for p in pents {
        assert!(p.is_valid_cell());
        assert!(p.is_pentagon());
        assert_eq!(p.resolution(), res);
      }
    }
    assert_eq!(CellIndex::pentagons(16), Err(GridError::ResDomain));

    let res0 = CellIndex::pentagons(0).unwrap();
    assert_eq!(res0[0], CellIndex(0x8009fffffffffff));
  }

  #[test]
  fn res0_cells_are_valid() {
    let cells: Vec<_> = CellIndex::res0_cells().collect();
    assert_eq!(cells.len(), usize::from(NUM_BASE_CELLS));
    assert!(cells.iter().all(|c| c.is_valid_cell()));
    assert_eq!(cells.iter().filter(|c| c.is_pentagon()).count(), NUM_PENTAGONS);
  }
}
