// src/regions/trace.rs

//! Tracing the cells crossed by the edges of a geographic loop.
//!
//! Edges are sampled at roughly one point per cell diameter and every sample
//! is indexed. Newly seen cells are recorded in a caller-sized open
//! addressing table so the same cell is never reported twice.

use tracing::{debug, trace};

use crate::cell_index::CellIndex;
use crate::error::{GridError, Result};
use crate::indexing::{cell_to_boundary, cell_to_lat_lng, lat_lng_to_cell};
use crate::latlng::great_circle_distance_km;
use crate::types::{GeoLoop, LatLng};

/// Distance from the center of `cell` to its first boundary vertex, in
/// kilometers.
///
/// # Errors
/// `CellInvalid` when the cell cannot be located.
pub fn hex_radius_km(cell: CellIndex) -> Result<f64> {
  let center = cell_to_lat_lng(cell)?;
  let boundary = cell_to_boundary(cell)?;
  let vertex = boundary.vertices().first().ok_or(GridError::Failed)?;
  Ok(great_circle_distance_km(&center, vertex))
}

/// Upper-bound estimate of the number of cells a straight line from
/// `origin` to `destination` crosses at `res`. Never less than 1.
///
/// Cells are measured against a pentagon, the smallest cell at a
/// resolution.
///
/// # Errors
/// `ResDomain` for a bad resolution, `NonFinite` when either endpoint (and so
/// the distance) is not a finite number.
pub fn line_hex_estimate(origin: &LatLng, destination: &LatLng, res: u8) -> Result<u64> {
  let pentagon = CellIndex::pentagons(res)?[0];
  let pentagon_diameter = 2.0 * hex_radius_km(pentagon)?;
  let dist = great_circle_distance_km(origin, destination);
  let estimate = (dist / pentagon_diameter).ceil();
  if !estimate.is_finite() {
    return Err(GridError::NonFinite);
  }
  Ok((estimate as u64).max(1))
}

/// Indexes points along every edge of `geoloop` at `res`.
///
/// `found` is an open addressing table keyed by `cell % found.len()`, where
/// [`CellIndex::NULL`] marks an empty slot; it may already hold cells from a
/// previous call. Each cell not already in `found` is inserted there and
/// appended to `search`. Returns how many cells were inserted.
///
/// # Errors
/// `CapacityExceeded` when the table fills up. Indexing errors of the sampled
/// points (`ResDomain`, `LatLngDomain`) and `NonFinite` estimates propagate.
pub fn trace_loop_cells(
  geoloop: &GeoLoop,
  res: u8,
  found: &mut [CellIndex],
  search: &mut Vec<CellIndex>,
) -> Result<usize> {
  let capacity = found.len();
  if geoloop.verts.is_empty() {
    return Ok(0);
  }
  if capacity == 0 {
    return Err(GridError::CapacityExceeded);
  }

  let mut inserted = 0;
  for (origin, destination) in geoloop.edges() {
    let samples = line_hex_estimate(&origin, &destination, res)?;
    trace!(samples, res, "tracing loop edge");

    let n = samples as f64;
    for step in 0..samples {
      let s = step as f64;
      let point = LatLng::new(
        origin.lat * (n - s) / n + destination.lat * s / n,
        origin.lng * (n - s) / n + destination.lng * s / n,
      );
      let cell = lat_lng_to_cell(&point, res)?;

      let mut slot = (cell.0 % capacity as u64) as usize;
      let mut probes = 0;
      while !found[slot].is_null() && found[slot] != cell {
        if probes >= capacity {
          debug!(capacity, %cell, "trace table is full");
          return Err(GridError::CapacityExceeded);
        }
        slot = (slot + 1) % capacity;
        probes += 1;
      }
      if found[slot] == cell {
        continue;
      }

      found[slot] = cell;
      search.push(cell);
      inserted += 1;
    }
  }
  Ok(inserted)
}
