// tests/traversal_tests.rs

use std::collections::HashSet;
use hexgrid_core::*;

const SF_RES9: CellIndex = CellIndex(0x8928308280fffff);

#[test]
fn test_are_neighbor_cells_known_vectors() {
  let origin = CellIndex(0x85283473fffffff);
  assert_eq!(are_neighbor_cells(origin, CellIndex(0x85283477fffffff)), Ok(true));
  // digits 3..=5 hold 7, so this is not a cell
  assert_eq!(
    are_neighbor_cells(origin, CellIndex(0x85283472fffffff)),
    Err(GridError::CellInvalid)
  );
}

#[test]
fn test_res9_step_and_back_reproduces_literal() {
  for dir in Direction::NEIGHBORS {
    let mut rotations = 0;
    let out = neighbor_rotations(SF_RES9, dir, &mut rotations).unwrap();
    assert_ne!(out, SF_RES9);
    assert_eq!(out.resolution(), 9);
    assert!(out.is_valid_cell(), "{out} after {dir:?}");

    let back = neighbor_rotations(out, dir.opposite(), &mut rotations).unwrap();
    assert_eq!(back, SF_RES9, "back from {dir:?}");
  }
}

#[test]
fn test_neighbors_match_grid_disk_ring() {
  let ring: HashSet<_> = Direction::NEIGHBORS
    .iter()
    .map(|&dir| neighbor(SF_RES9, dir).unwrap())
    .collect();
  assert_eq!(ring.len(), 6);

  let disk: HashSet<_> = grid_disk(SF_RES9, 1).unwrap().into_iter().collect();
  assert_eq!(disk.len(), 7);
  assert!(disk.contains(&SF_RES9));
  assert!(ring.is_subset(&disk));
}

/// Base cells with no pentagon among their neighbors; steps out of them never
/// meet pentagon distortion.
fn base_cells_away_from_pentagons() -> impl Iterator<Item = CellIndex> {
  CellIndex::res0_cells().filter(|c| {
    let bc = c.base_cell();
    !base_cells::is_pentagon(bc)
      && Direction::NEIGHBORS
        .iter()
        .all(|&dir| !base_cells::is_pentagon(base_cells::neighbor(bc, dir)))
  })
}

#[test]
fn test_step_back_across_base_cells() {
  // Cells on the edge of base cells, stepped in every direction, including
  // into neighboring base cells.
  let mut crossings = 0;
  for res in [1u8, 2, 5] {
    for base in base_cells_away_from_pentagons() {
      for digit in Direction::NEIGHBORS {
        let origin = CellIndex::new(res, base.base_cell(), digit);
        for dir in Direction::NEIGHBORS {
          let mut rotations = 0;
          let out = neighbor_rotations(origin, dir, &mut rotations).unwrap();
          if out.base_cell() != origin.base_cell() {
            crossings += 1;
          }
          let back = neighbor_rotations(out, dir.opposite(), &mut rotations).unwrap();
          assert_eq!(back, origin, "{origin} via {dir:?} to {out}");
        }
      }
    }
  }
  assert!(crossings > 0);
}

#[test]
fn test_rotation_commutes_with_step_inside_base_cell() {
  let mut checked = 0;
  for cell in grid_disk(CellIndex(0x85283473fffffff), 2).unwrap() {
    for dir in Direction::NEIGHBORS {
      let stepped = neighbor(cell, dir).unwrap();
      let rotated = neighbor(cell.rotate60_ccw(), dir.rotate60_ccw()).unwrap();
      if stepped.base_cell() != cell.base_cell() || rotated.base_cell() != cell.base_cell() {
        continue;
      }
      assert_eq!(rotated, stepped.rotate60_ccw(), "{cell} toward {dir:?}");
      checked += 1;
    }
  }
  assert!(checked > 0);
}

#[test]
fn test_pentagon_k_step() {
  for res in 1..=15 {
    let pent = CellIndex::pentagons(res).unwrap()[3];
    let mut rotations = 0;
    assert_eq!(
      neighbor_rotations(pent, Direction::KAxes, &mut rotations),
      Err(GridError::Pentagon),
      "res {res}"
    );
  }

  // At resolution 0 the deleted direction lands on the IK neighbor.
  for pent in CellIndex::pentagons(0).unwrap() {
    let out = neighbor(pent, Direction::KAxes).unwrap();
    assert_eq!(out, neighbor(pent, Direction::IkAxes).unwrap());
  }
}

#[test]
fn test_pentagon_has_five_neighbors() {
  let pent = CellIndex::pentagons(4).unwrap()[0];
  let neighbors: HashSet<_> = Direction::NEIGHBORS
    .iter()
    .filter_map(|&dir| neighbor(pent, dir).ok())
    .collect();
  assert_eq!(neighbors.len(), 5);
  for n in &neighbors {
    assert_eq!(are_neighbor_cells(pent, *n), Ok(true));
  }
  assert_eq!(grid_disk(pent, 1).unwrap().len(), 6);
}

#[test]
fn test_grid_disk_distances_are_bounded() {
  let cells = grid_disk_distances(SF_RES9, 3).unwrap();
  assert_eq!(cells.len() as u64, max_grid_disk_size(3));
  for (cell, d) in &cells {
    assert!(*d <= 3);
    assert_eq!(*d == 0, *cell == SF_RES9);
  }
}

/// Every descendant of the twelve pentagon base cells at `res`.
fn pentagon_descendants(res: u8) -> impl Iterator<Item = CellIndex> {
  CellIndex::pentagons(0)
    .unwrap()
    .into_iter()
    .flat_map(move |pent| pent.children(res))
}

#[test]
fn test_step_back_inside_pentagon_base_cells() {
  for res in 1..=3 {
    let mut stepped = 0;
    for origin in pentagon_descendants(res) {
      for dir in Direction::NEIGHBORS {
        let mut rotations = 0;
        let out = match neighbor_rotations(origin, dir, &mut rotations) {
          Ok(out) => out,
          Err(GridError::Pentagon) => {
            assert!(origin.is_pentagon() && dir == Direction::KAxes, "{origin} via {dir:?}");
            continue;
          }
          Err(e) => panic!("{origin} via {dir:?}: {e}"),
        };
        assert!(out.is_valid_cell(), "{origin} via {dir:?} gave {out}");
        assert_eq!(are_neighbor_cells(out, origin), Ok(true), "{origin} via {dir:?} to {out}");

        let back = neighbor_rotations(out, dir.opposite(), &mut rotations).unwrap();
        assert_eq!(back, origin, "{origin} via {dir:?} to {out}");
        stepped += 1;
      }
    }
    assert!(stepped > 0, "res {res}");
  }
}

#[test]
fn test_spiral_disk_matches_breadth_first_near_pentagons() {
  let mut compared = 0;
  for res in 1..=2 {
    for origin in pentagon_descendants(res) {
      for k in 1..=2 {
        let Ok(spiral) = grid_disk_unsafe(origin, k) else {
          continue;
        };
        let spiral: HashSet<_> = spiral.into_iter().collect();
        let searched: HashSet<_> = grid_disk_distances(origin, k)
          .unwrap()
          .into_iter()
          .map(|(cell, _)| cell)
          .collect();
        assert_eq!(spiral, searched, "{origin} at k {k}");
        compared += 1;
      }
    }
  }
  assert!(compared > 0);
}

#[test]
fn test_polar_pentagon_entry_rotations() {
  let pent = CellIndex(0x8009fffffffffff);

  // base cell 8 borders polar pentagon 4 without rotation
  let mut rotations = 0;
  assert_eq!(
    neighbor_rotations(CellIndex(0x8011fffffffffff), Direction::IAxes, &mut rotations),
    Ok(pent)
  );
  assert_eq!(rotations, 0);

  // base cell 3 takes one extra rotation on top of its table entry of 2
  let mut rotations = 0;
  assert_eq!(
    neighbor_rotations(CellIndex(0x8007fffffffffff), Direction::IAxes, &mut rotations),
    Ok(pent)
  );
  assert_eq!(rotations, 3);
}
