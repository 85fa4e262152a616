// src/coords/mod.rs

//! Grid coordinate systems.

pub mod face_ijk;
pub mod ijk;
