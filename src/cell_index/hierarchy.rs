// src/cell_index/hierarchy.rs

//! Parent and child relationships across resolutions.

use super::{digit_offset, CellIndex};
use crate::constants::MAX_RES;
use crate::error::{GridError, Result};
use crate::types::Direction;

fn check_res(res: u8) -> Result<()> {
  if res > MAX_RES {
    Err(GridError::ResDomain)
  } else {
    Ok(())
  }
}

impl CellIndex {
  /// The ancestor of this cell at `parent_res`. A cell is its own parent at
  /// its own resolution.
  ///
  /// # Errors
  /// `ResDomain` when `parent_res > 15`, `ResMismatch` when `parent_res` is
  /// finer than the cell.
  pub fn parent(self, parent_res: u8) -> Result<CellIndex> {
    check_res(parent_res)?;
    let res = self.resolution();
    if parent_res > res {
      return Err(GridError::ResMismatch);
    }

    let mut h = self.with_resolution(parent_res);
    for r in parent_res + 1..=res {
      h = h.with_digit(r, Direction::InvalidDigit);
    }
    Ok(h)
  }

  /// The child at `child_res` sharing this cell's center.
  ///
  /// # Errors
  /// `ResDomain` when `child_res > 15`, `ResMismatch` when `child_res` is
  /// coarser than the cell.
  pub fn center_child(self, child_res: u8) -> Result<CellIndex> {
    check_res(child_res)?;
    let res = self.resolution();
    if child_res < res {
      return Err(GridError::ResMismatch);
    }
    Ok(self.with_resolution(child_res).zero_digits(res + 1, child_res))
  }

  /// Number of children at `child_res`. Pentagons have one fewer child per
  /// subdivision since the K sub-sequence is deleted.
  ///
  /// # Errors
  /// As for [`CellIndex::center_child`].
  pub fn children_count(self, child_res: u8) -> Result<u64> {
    let center = self.center_child(child_res)?;
    let n = u32::from(child_res - self.resolution());
    let hex = 7u64.pow(n);
    if center.is_pentagon() {
      // 1 center plus 5 branches of (7^n - 1) / 6 cells each
      Ok(1 + 5 * (hex - 1) / 6)
    } else {
      Ok(hex)
    }
  }

  /// Iterates the children of this cell at `child_res` in index order.
  /// Yields nothing when `child_res` is coarser than the cell or above 15.
  pub fn children(self, child_res: u8) -> Children {
    let parent_res = self.resolution();
    match self.center_child(child_res) {
      Ok(first) if !self.is_null() => Children {
        next: Some(first),
        parent_res,
        skip_digit: first.is_pentagon().then_some(child_res),
      },
      _ => Children {
        next: None,
        parent_res,
        skip_digit: None,
      },
    }
  }

  /// Adds one to the digit at `res`, carrying into coarser digits.
  const fn increment_digit(self, res: u8) -> CellIndex {
    CellIndex(self.0.wrapping_add(1u64 << digit_offset(res)))
  }
}

/// Iterator over the children of a cell, produced by [`CellIndex::children`].
#[derive(Debug, Clone)]
pub struct Children {
  next: Option<CellIndex>,
  parent_res: u8,
  /// Digit level that still has to skip K for pentagon children. Moves
  /// coarser each time it fires.
  skip_digit: Option<u8>,
}

impl Children {
  fn step(&mut self, current: CellIndex) -> Option<CellIndex> {
    let child_res = current.resolution();
    let mut h = current.increment_digit(child_res);

    let mut r = child_res;
    while r > self.parent_res {
      if self.skip_digit == Some(r) && h.digit(r) == Direction::KAxes {
        // Children of a pentagon never have K as the first non-zero digit
        // below the parent.
        h = h.increment_digit(r);
        self.skip_digit = Some(r - 1);
        return Some(h);
      }

      if h.digit(r) != Direction::InvalidDigit {
        return Some(h);
      }
      // roll over: zero this digit and carry into the next coarser one
      h = h.increment_digit(r);
      r -= 1;
    }
    None
  }
}

impl Iterator for Children {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    let current = self.next?;
    self.next = self.step(current);
    Some(current)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parent_of_known_cell() {
    let h = CellIndex(0x8928308280fffff);
    let p = h.parent(5).unwrap();
    assert_eq!(p, CellIndex(0x85283083fffffff));
    assert_eq!(h.parent(9), Ok(h));
    assert_eq!(h.parent(10), Err(GridError::ResMismatch));
    assert_eq!(h.parent(16), Err(GridError::ResDomain));
  }

  #[test]
  fn center_child_and_parent_invert() {
    let h = CellIndex(0x85283473fffffff);
    for res in 5..=MAX_RES {
      let c = h.center_child(res).unwrap();
      assert!(c.is_valid_cell());
      assert_eq!(c.parent(5), Ok(h));
    }
    assert_eq!(h.center_child(4), Err(GridError::ResMismatch));
    assert_eq!(h.center_child(16), Err(GridError::ResDomain));
  }

  #[test]
  fn hexagon_children() {
    let h = CellIndex(0x85283473fffffff);
    let kids: Vec<_> = h.children(7).collect();
    assert_eq!(kids.len(), 49);
    assert_eq!(h.children_count(7), Ok(49));
    assert_eq!(kids[0], h.center_child(7).unwrap());
    for pair in kids.windows(2) {
      assert!(pair[0] < pair[1], "children come in index order");
    }
    for k in &kids {
      assert!(k.is_valid_cell());
      assert_eq!(k.parent(5), Ok(h));
    }
  }

  #[test]
  fn pentagon_children_skip_k() {
    let pent = CellIndex::new(1, 4, Direction::Center);
    let kids: Vec<_> = pent.children(3).collect();
    assert_eq!(kids.len(), 1 + 5 + 5 * 7);
    assert_eq!(pent.children_count(3), Ok(kids.len() as u64));
    for k in &kids {
      assert!(k.is_valid_cell(), "{k}");
    }
  }

  #[test]
  fn children_at_own_resolution_is_self() {
    let h = CellIndex(0x85283473fffffff);
    assert_eq!(h.children(5).collect::<Vec<_>>(), vec![h]);
    assert_eq!(h.children(4).count(), 0);
  }
}
