// src/indexing/from_cell.rs

use crate::base_cells;
use crate::cell_index::{is_resolution_class_iii, CellIndex};
use crate::coords::face_ijk::Overage;
use crate::error::{GridError, Result};
use crate::types::{CellBoundary, CoordIJK, Direction, FaceIJK, LatLng};

/// FaceIJK address of a cell. The face is the base cell's home face unless
/// the cell spills onto a neighboring face.
///
/// # Errors
/// `CellInvalid` for an out-of-range base cell or an unused digit slot
/// within the cell's resolution.
pub fn cell_to_face_ijk(cell: CellIndex) -> Result<FaceIJK> {
  let base_cell = cell.base_cell();
  let mut fijk = base_cells::home_face_ijk(base_cell).ok_or(GridError::CellInvalid)?;
  let res = cell.resolution();
  if (1..=res).any(|r| cell.digit(r) == Direction::InvalidDigit) {
    return Err(GridError::CellInvalid);
  }

  let is_pent = base_cells::is_pentagon(base_cell);

  // Pentagon IK sub-sequences are stored rotated; undo that first.
  let h = if is_pent && cell.leading_non_zero_digit() == Direction::IkAxes {
    cell.rotate60_cw()
  } else {
    cell
  };

  let possible_overage = is_pent || (res != 0 && fijk.coord != CoordIJK::default());

  for r in 1..=res {
    fijk.coord = if is_resolution_class_iii(r) {
      fijk.coord.down_ap7()
    } else {
      fijk.coord.down_ap7r()
    };
    fijk.coord = fijk.coord.neighbor(h.digit(r));
  }

  if !possible_overage {
    return Ok(fijk);
  }

  // overage is only handled on Class II grids
  let orig_ijk = fijk.coord;
  let mut adj_res = res;
  if is_resolution_class_iii(res) {
    fijk.coord = fijk.coord.down_ap7r();
    adj_res += 1;
  }

  let pent_leading4 = is_pent && h.leading_non_zero_digit() == Direction::IAxes;
  if fijk.adjust_overage_class_ii(adj_res, pent_leading4, false) != Overage::None {
    // pentagons can cross a second face edge
    if is_pent {
      while fijk.adjust_overage_class_ii(adj_res, false, false) != Overage::None {}
    }
    if adj_res != res {
      fijk.coord = fijk.coord.up_ap7r();
    }
  } else if adj_res != res {
    fijk.coord = orig_ijk;
  }

  Ok(fijk)
}

/// Center point of a cell.
///
/// # Errors
/// See [`cell_to_face_ijk`].
pub fn cell_to_lat_lng(cell: CellIndex) -> Result<LatLng> {
  Ok(cell_to_face_ijk(cell)?.to_lat_lng(cell.resolution()))
}

/// Boundary of a cell, counter-clockwise. Hexagons have 6 vertices and
/// pentagons 5, plus one per icosahedron edge crossed on Class III grids.
///
/// # Errors
/// See [`cell_to_face_ijk`].
pub fn cell_to_boundary(cell: CellIndex) -> Result<CellBoundary> {
  let fijk = cell_to_face_ijk(cell)?;
  let res = cell.resolution();
  if base_cells::is_pentagon(cell.base_cell()) && cell.leading_non_zero_digit() == Direction::Center {
    Ok(fijk.pent_to_cell_boundary(res))
  } else {
    Ok(fijk.to_cell_boundary(res))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{MAX_RES, NUM_HEX_VERTS, NUM_PENT_VERTS};
  use crate::indexing::lat_lng_to_cell;
  use crate::latlng::great_circle_distance_rads;

  #[test]
  fn center_round_trips_to_same_cell() {
    let p = LatLng::from_degrees(51.5, -0.12);
    for res in 0..=MAX_RES {
      let cell = lat_lng_to_cell(&p, res).unwrap();
      let center = cell_to_lat_lng(cell).unwrap();
      assert_eq!(lat_lng_to_cell(&center, res).unwrap(), cell, "res {res}");
    }
  }

  #[test]
  fn invalid_base_cell_is_rejected() {
    let bad = CellIndex::new(3, 122, Direction::Center);
    assert_eq!(cell_to_lat_lng(bad), Err(GridError::CellInvalid));
    assert_eq!(cell_to_boundary(bad).map(|b| b.num_verts), Err(GridError::CellInvalid));

    let unused_digit = CellIndex::new(3, 10, Direction::Center).with_digit(2, Direction::InvalidDigit);
    assert_eq!(cell_to_lat_lng(unused_digit), Err(GridError::CellInvalid));
  }

  #[test]
  fn hexagon_boundary_has_six_vertices() {
    let cell = CellIndex(0x85283473fffffff);
    let boundary = cell_to_boundary(cell).unwrap();
    assert_eq!(boundary.num_verts, NUM_HEX_VERTS);

    let center = cell_to_lat_lng(cell).unwrap();
    for v in boundary.vertices() {
      let d = great_circle_distance_rads(&center, v);
      assert!(d > 0.0 && d < 0.01, "vertex {v:?} at {d}");
    }
  }

  #[test]
  fn pentagon_boundaries() {
    // Class II pentagons have exactly five vertices; Class III ones gain a
    // distortion vertex on each edge.
    let even = CellIndex::new(2, 4, Direction::Center);
    assert_eq!(cell_to_boundary(even).unwrap().num_verts, NUM_PENT_VERTS);

    let odd = CellIndex::new(1, 4, Direction::Center);
    assert_eq!(cell_to_boundary(odd).unwrap().num_verts, 2 * NUM_PENT_VERTS);
  }

  #[test]
  fn base_cell_centers_are_distinct() {
    let centers: Vec<LatLng> = (0..crate::constants::NUM_BASE_CELLS)
      .map(|bc| cell_to_lat_lng(CellIndex::new(0, bc, Direction::Center)).unwrap())
      .collect();
    for (a, ca) in centers.iter().enumerate() {
      for cb in &centers[a + 1..] {
        assert!(great_circle_distance_rads(ca, cb) > 0.1);
      }
    }
  }
}
