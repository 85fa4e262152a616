// src/traversal/mod.rs

//! Grid traversal: stepping to neighbors and collecting disks of cells.

pub mod grid_disk;
pub mod neighbors;
mod tables;

pub use grid_disk::{grid_disk, grid_disk_distances, grid_disk_unsafe, max_grid_disk_size};
pub use neighbors::{are_neighbor_cells, direction_for_neighbor, neighbor, neighbor_rotations};
