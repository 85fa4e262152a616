// src/cell_index/mod.rs

//! The bit-packed cell identifier.
//!
//! Layout, most significant bit first:
//!
//! | bits   | field      |
//! |--------|------------|
//! | 63     | high bit   |
//! | 59..62 | mode       |
//! | 56..58 | reserved   |
//! | 52..55 | resolution |
//! | 45..51 | base cell  |
//! | 0..44  | 15 digits, resolution `r` at bit `(15 - r) * 3` |
//!
//! Every mutator takes `self` by value and returns the modified copy.

pub mod hierarchy;
pub mod inspection;
pub mod rotation;

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::GridError;
use crate::types::Direction;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell index: a 64-bit bitfield.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellIndex(pub u64);

#[inline(always)]
pub(crate) const fn digit_offset(res: u8) -> u32 {
  (MAX_RES - res) as u32 * PER_DIGIT_OFFSET
}

impl CellIndex {
  /// The null index, used as the empty-slot marker in caller buffers.
  pub const NULL: CellIndex = CellIndex(0);

  /// Builds a cell-mode index at `res` on `base_cell` with every digit
  /// `1..=res` set to `init_digit`. Digits past `res` hold 7.
  pub const fn new(res: u8, base_cell: u8, init_digit: Direction) -> Self {
    let mut h = CellIndex(INDEX_INIT)
      .with_mode(CELL_MODE)
      .with_resolution(res)
      .with_base_cell(base_cell);
    let mut r = 1;
    while r <= res {
      h = h.with_digit(r, init_digit);
      r += 1;
    }
    h
  }

  /// Raw integer value.
  #[inline(always)]
  pub const fn raw(self) -> u64 {
    self.0
  }

  #[inline(always)]
  pub const fn is_null(self) -> bool {
    self.0 == 0
  }

  #[inline(always)]
  pub const fn mode(self) -> u8 {
    ((self.0 & MODE_MASK) >> MODE_OFFSET) as u8
  }

  #[inline(always)]
  #[must_use]
  pub const fn with_mode(self, mode: u8) -> Self {
    CellIndex((self.0 & !MODE_MASK) | (((mode as u64) << MODE_OFFSET) & MODE_MASK))
  }

  #[inline(always)]
  pub const fn resolution(self) -> u8 {
    ((self.0 & RES_MASK) >> RES_OFFSET) as u8
  }

  #[inline(always)]
  #[must_use]
  pub const fn with_resolution(self, res: u8) -> Self {
    CellIndex((self.0 & !RES_MASK) | (((res as u64) << RES_OFFSET) & RES_MASK))
  }

  #[inline(always)]
  pub const fn base_cell(self) -> u8 {
    ((self.0 & BC_MASK) >> BC_OFFSET) as u8
  }

  #[inline(always)]
  #[must_use]
  pub const fn with_base_cell(self, base_cell: u8) -> Self {
    CellIndex((self.0 & !BC_MASK) | (((base_cell as u64) << BC_OFFSET) & BC_MASK))
  }

  /// Digit at resolution level `res`, which must be in `1..=15`.
  #[inline(always)]
  pub const fn digit(self, res: u8) -> Direction {
    Direction::from_bits(((self.0 >> digit_offset(res)) & DIGIT_MASK) as u8)
  }

  /// Replaces the digit at resolution level `res` (`1..=15`).
  #[inline(always)]
  #[must_use]
  pub const fn with_digit(self, res: u8, digit: Direction) -> Self {
    let offset = digit_offset(res);
    CellIndex((self.0 & !(DIGIT_MASK << offset)) | ((digit as u64) << offset))
  }

  #[inline(always)]
  pub const fn reserved_bits(self) -> u8 {
    ((self.0 & RESERVED_MASK) >> RESERVED_OFFSET) as u8
  }

  #[inline(always)]
  #[must_use]
  pub const fn with_reserved_bits(self, v: u8) -> Self {
    CellIndex((self.0 & !RESERVED_MASK) | (((v as u64) << RESERVED_OFFSET) & RESERVED_MASK))
  }

  #[inline(always)]
  pub const fn high_bit(self) -> u8 {
    (self.0 >> 63) as u8
  }

  #[inline(always)]
  #[must_use]
  pub const fn with_high_bit(self, v: u8) -> Self {
    CellIndex((self.0 & !HIGH_BIT_MASK) | (((v & 1) as u64) << 63))
  }

  /// Zeroes the digits for resolutions `start..=end`. No-op when `start > end`.
  #[must_use]
  pub const fn zero_digits(self, start: u8, end: u8) -> Self {
    if start > end {
      return self;
    }
    let width = (end - start + 1) as u32 * PER_DIGIT_OFFSET;
    // `width` is at most 45, so neither shift overflows.
    let m = ((1u64 << width) - 1) << digit_offset(end);
    CellIndex(self.0 & !m)
  }

  /// First non-center digit, coarsest resolution first, or `Center` if there
  /// is none.
  pub const fn leading_non_zero_digit(self) -> Direction {
    let res = self.resolution();
    let mut r = 1;
    while r <= res {
      let d = self.digit(r);
      if !matches!(d, Direction::Center) {
        return d;
      }
      r += 1;
    }
    Direction::Center
  }

  /// Odd resolutions are Class III grids.
  #[inline]
  pub const fn is_res_class_iii(self) -> bool {
    is_resolution_class_iii(self.resolution())
  }
}

/// Odd resolutions are Class III, even are Class II.
#[inline]
pub const fn is_resolution_class_iii(res: u8) -> bool {
  res % 2 == 1
}

impl From<CellIndex> for u64 {
  fn from(h: CellIndex) -> u64 {
    h.0
  }
}

impl fmt::LowerHex for CellIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}

impl fmt::Display for CellIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:x}", self.0)
  }
}

impl FromStr for CellIndex {
  type Err = GridError;

  /// Parses the lowercase or uppercase hex form, without a `0x` prefix.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.is_empty() || s.len() > 16 {
      return Err(GridError::Failed);
    }
    u64::from_str_radix(s, 16).map(CellIndex).map_err(|_| GridError::Failed)
  }
}
