// src/lib.rs

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]
#![allow(clippy::wildcard_imports)]

//! `hexgrid-core` is a hierarchical hexagonal grid over the sphere.
//!
//! The sphere is projected onto an icosahedron and tiled with hexagons (and
//! twelve pentagons per resolution) at sixteen resolutions. Each cell is named
//! by a 64-bit [`CellIndex`]: a base cell plus one aperture 7 digit per
//! resolution.
//!
//! The crate covers the bit-level index, point and boundary conversion,
//! neighbor traversal with rotation tracking, and tracing the cells along a
//! geographic loop.

pub mod base_cells;
pub mod cell_index;
pub mod constants;
pub mod coords;
pub mod error;
pub mod indexing;
pub mod latlng;
pub mod math;
pub mod regions;
pub mod traversal;
pub mod types;

pub use cell_index::hierarchy::Children;
pub use cell_index::{is_resolution_class_iii, CellIndex};
pub use constants::{MAX_CELL_BNDRY_VERTS, MAX_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
pub use error::{GridError, Result};
pub use indexing::{cell_to_boundary, cell_to_face_ijk, cell_to_lat_lng, face_ijk_to_cell, lat_lng_to_cell};
pub use latlng::{degs_to_rads, great_circle_distance_km, great_circle_distance_rads, rads_to_degs};
pub use regions::{
  count_linked_coords, count_linked_loops, count_linked_polygons, hex_radius_km, line_hex_estimate, trace_loop_cells,
  LinkedGeoLoop, LinkedGeoMultiPolygon, LinkedGeoPolygon,
};
pub use traversal::{
  are_neighbor_cells, direction_for_neighbor, grid_disk, grid_disk_distances, grid_disk_unsafe, max_grid_disk_size,
  neighbor, neighbor_rotations,
};
pub use types::{CellBoundary, CoordIJK, Direction, FaceIJK, GeoLoop, LatLng, Vec2d, Vec3d};
