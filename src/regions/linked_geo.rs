// src/regions/linked_geo.rs

//! Nested polygon output: a multipolygon owns polygons, a polygon owns
//! loops (outer first, then holes), a loop owns its coordinates.

use crate::types::LatLng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single ring of coordinates. The last coordinate connects back to the
/// first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkedGeoLoop {
  pub coords: Vec<LatLng>,
}

/// An outer loop followed by zero or more holes.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkedGeoPolygon {
  pub loops: Vec<LinkedGeoLoop>,
}

/// A set of polygons, in output order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkedGeoMultiPolygon {
  pub polygons: Vec<LinkedGeoPolygon>,
}

impl LinkedGeoMultiPolygon {
  /// Appends an empty polygon and returns it for filling.
  pub fn add_polygon(&mut self) -> &mut LinkedGeoPolygon {
    self.polygons.push(LinkedGeoPolygon::default());
    let last = self.polygons.len() - 1;
    &mut self.polygons[last]
  }
}

impl LinkedGeoPolygon {
  /// Appends an empty loop and returns it for filling.
  pub fn add_loop(&mut self) -> &mut LinkedGeoLoop {
    self.loops.push(LinkedGeoLoop::default());
    let last = self.loops.len() - 1;
    &mut self.loops[last]
  }
}

impl LinkedGeoLoop {
  /// Appends a coordinate and returns the loop for chaining.
  pub fn add_coord(&mut self, coord: LatLng) -> &mut Self {
    self.coords.push(coord);
    self
  }
}

/// Number of polygons in `multi`.
pub fn count_linked_polygons(multi: &LinkedGeoMultiPolygon) -> usize {
  multi.polygons.len()
}

/// Number of loops in `polygon`, outer loop included.
pub fn count_linked_loops(polygon: &LinkedGeoPolygon) -> usize {
  polygon.loops.len()
}

/// Number of coordinates in `geoloop`.
pub fn count_linked_coords(geoloop: &LinkedGeoLoop) -> usize {
  geoloop.coords.len()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_follow_builders() {
    let mut multi = LinkedGeoMultiPolygon::default();
    assert_eq!(count_linked_polygons(&multi), 0);

    let polygon = multi.add_polygon();
    assert_eq!(count_linked_loops(polygon), 0);
    for n in 1..=3 {
      let ring = polygon.add_loop();
      for i in 0..n + 2 {
        ring.add_coord(LatLng::new(f64::from(i) * 0.01, 0.0));
      }
    }
    assert_eq!(count_linked_loops(polygon), 3);
    assert_eq!(count_linked_coords(&polygon.loops[0]), 3);
    assert_eq!(count_linked_coords(&polygon.loops[2]), 5);

    multi.add_polygon().add_loop();
    assert_eq!(count_linked_polygons(&multi), 2);
    assert_eq!(count_linked_coords(&multi.polygons[1].loops[0]), 0);
  }

  #[test]
  fn add_coord_chains() {
    let mut ring = LinkedGeoLoop::default();
    ring
      .add_coord(LatLng::new(0.0, 0.0))
      .add_coord(LatLng::new(0.0, 0.1))
      .add_coord(LatLng::new(0.1, 0.1));
    assert_eq!(count_linked_coords(&ring), 3);
    assert_eq!(ring.coords[1], LatLng::new(0.0, 0.1));
  }
}
