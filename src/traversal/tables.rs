// src/traversal/tables.rs

//! Digit stepping tables. Indexed `[old_digit][direction]`: the `NEW_DIGIT`
//! tables give the digit after taking one step, the `NEW_ADJUSTMENT` tables
//! the step still to be taken at the next coarser resolution (`Center` when
//! the step stays inside the parent).

use crate::types::Direction;

const O: Direction = Direction::Center;
const K: Direction = Direction::KAxes;
const J: Direction = Direction::JAxes;
const JK: Direction = Direction::JkAxes;
const I: Direction = Direction::IAxes;
const IK: Direction = Direction::IkAxes;
const IJ: Direction = Direction::IjAxes;

/// New digit when stepping from a Class II digit level.
#[rustfmt::skip]
pub(crate) const NEW_DIGIT_II: [[Direction; 7]; 7] = [
  [O,  K,  J,  JK, I,  IK, IJ],
  [K,  I,  JK, IJ, IK, J,  O ],
  [J,  JK, K,  I,  IJ, O,  IK],
  [JK, IJ, I,  IK, O,  K,  J ],
  [I,  IK, IJ, O,  J,  JK, K ],
  [IK, J,  O,  K,  JK, IJ, I ],
  [IJ, O,  IK, J,  K,  I,  JK],
];

/// Carry into the parent when stepping from a Class II digit level.
#[rustfmt::skip]
pub(crate) const NEW_ADJUSTMENT_II: [[Direction; 7]; 7] = [
  [O,  O,  O,  O,  O,  O,  O ],
  [O,  K,  O,  K,  O,  IK, O ],
  [O,  O,  J,  JK, O,  O,  J ],
  [O,  K,  JK, JK, O,  O,  O ],
  [O,  O,  O,  O,  I,  I,  IJ],
  [O,  IK, O,  O,  I,  IK, O ],
  [O,  O,  J,  O,  IJ, O,  IJ],
];

/// New digit when stepping from a Class III digit level.
#[rustfmt::skip]
pub(crate) const NEW_DIGIT_III: [[Direction; 7]; 7] = [
  [O,  K,  J,  JK, I,  IK, IJ],
  [K,  J,  JK, I,  IK, IJ, O ],
  [J,  JK, I,  IK, IJ, O,  K ],
  [JK, I,  IK, IJ, O,  K,  J ],
  [I,  IK, IJ, O,  K,  J,  JK],
  [IK, IJ, O,  K,  J,  JK, I ],
  [IJ, O,  K,  J,  JK, I,  IK],
];

/// Carry into the parent when stepping from a Class III digit level.
#[rustfmt::skip]
pub(crate) const NEW_ADJUSTMENT_III: [[Direction; 7]; 7] = [
  [O,  O,  O,  O,  O,  O,  O ],
  [O,  K,  O,  JK, O,  K,  O ],
  [O,  O,  J,  J,  O,  O,  IJ],
  [O,  JK, J,  JK, O,  O,  O ],
  [O,  O,  O,  O,  I,  IK, I ],
  [O,  K,  O,  O,  IK, IK, O ],
  [O,  O,  IJ, O,  I,  O,  IJ],
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stepping_from_center_is_the_direction() {
    for d in Direction::NEIGHBORS {
      assert_eq!(NEW_DIGIT_II[0][d as usize], d);
      assert_eq!(NEW_DIGIT_III[0][d as usize], d);
      assert_eq!(NEW_ADJUSTMENT_II[0][d as usize], O);
      assert_eq!(NEW_ADJUSTMENT_III[0][d as usize], O);
    }
  }

  #[test]
  fn step_and_back_returns_to_digit() {
    // Whenever a step stays inside the parent, the opposite step undoes it.
    for (digit_table, adj_table) in [(&NEW_DIGIT_II, &NEW_ADJUSTMENT_II), (&NEW_DIGIT_III, &NEW_ADJUSTMENT_III)] {
      for old in 0..7 {
        for d in Direction::NEIGHBORS {
          if adj_table[old][d as usize] != O {
            continue;
          }
          let new = digit_table[old][d as usize] as usize;
          assert_eq!(digit_table[new][d.opposite() as usize] as usize, old);
        }
      }
    }
  }

  #[test]
  fn tables_are_symmetric() {
    for table in [&NEW_DIGIT_II, &NEW_DIGIT_III, &NEW_ADJUSTMENT_II, &NEW_ADJUSTMENT_III] {
      for a in 0..7 {
        for b in 0..7 {
          assert_eq!(table[a][b], table[b][a]);
        }
      }
    }
  }
}
