// src/indexing/mod.rs

//! Conversions between points on the sphere and cell indexes.

pub mod from_cell;
pub mod to_cell;

pub use from_cell::{cell_to_boundary, cell_to_face_ijk, cell_to_lat_lng};
pub use to_cell::{face_ijk_to_cell, lat_lng_to_cell};
