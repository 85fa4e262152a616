// src/math/mod.rs

pub mod vec2d;
pub mod vec3d;
