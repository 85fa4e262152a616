// src/regions/mod.rs

//! Regions: tracing the cells along a loop, and the nested polygon output
//! model.

pub mod linked_geo;
pub mod trace;

pub use linked_geo::{
  count_linked_coords, count_linked_loops, count_linked_polygons, LinkedGeoLoop, LinkedGeoMultiPolygon,
  LinkedGeoPolygon,
};
pub use trace::{hex_radius_km, line_hex_estimate, trace_loop_cells};
