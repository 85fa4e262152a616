// src/indexing/to_cell.rs

use crate::base_cells;
use crate::cell_index::{is_resolution_class_iii, CellIndex};
use crate::constants::{CELL_MODE, INDEX_INIT, MAX_RES};
use crate::error::{GridError, Result};
use crate::types::{Direction, FaceIJK, LatLng};

/// Finds the cell containing `geo` at resolution `res`.
///
/// # Errors
/// `ResDomain` when `res > 15`, `LatLngDomain` when either coordinate is not
/// finite.
pub fn lat_lng_to_cell(geo: &LatLng, res: u8) -> Result<CellIndex> {
  if res > MAX_RES {
    return Err(GridError::ResDomain);
  }
  if !geo.is_finite() {
    return Err(GridError::LatLngDomain);
  }

  face_ijk_to_cell(&FaceIJK::from_lat_lng(geo, res), res)
}

/// Converts a FaceIJK address at `res` into a cell index.
///
/// Walks the coordinate up the aperture 7 hierarchy, recording a digit per
/// level, then orients the digits into the base cell's coordinate system.
///
/// # Errors
/// `Failed` when the coordinate does not land on a base cell.
pub fn face_ijk_to_cell(fijk: &FaceIJK, res: u8) -> Result<CellIndex> {
  let mut h = CellIndex(INDEX_INIT).with_mode(CELL_MODE).with_resolution(res);

  // build the index from finest resolution up
  let mut fijk_bc = *fijk;
  for r in (1..=res).rev() {
    let last_ijk = fijk_bc.coord;
    let last_center = if is_resolution_class_iii(r) {
      fijk_bc.coord = fijk_bc.coord.up_ap7();
      fijk_bc.coord.down_ap7()
    } else {
      fijk_bc.coord = fijk_bc.coord.up_ap7r();
      fijk_bc.coord.down_ap7r()
    };

    let digit = (last_ijk - last_center).normalize().to_digit();
    if digit == Direction::InvalidDigit {
      return Err(GridError::Failed);
    }
    h = h.with_digit(r, digit);
  }

  // fijk_bc is now at resolution 0
  let (base_cell, num_rots) = base_cells::from_face_ijk(&fijk_bc).ok_or(GridError::Failed)?;
  if num_rots < 0 {
    return Err(GridError::Failed);
  }
  h = h.with_base_cell(base_cell);

  if base_cells::is_pentagon(base_cell) {
    // force rotation out of the missing k-axes sub-sequence
    if h.leading_non_zero_digit() == Direction::KAxes {
      h = if base_cells::is_cw_offset(base_cell, fijk_bc.face) {
        h.rotate60_cw()
      } else {
        h.rotate60_ccw()
      };
    }
    for _ in 0..num_rots {
      h = h.rotate_pent60_ccw();
    }
  } else {
    h = h.rotate60_ccw_n(num_rots as usize);
  }

  Ok(h)
}
