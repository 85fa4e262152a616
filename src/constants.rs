// src/constants.rs

//! Grid, geometry and bit-layout constants.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * pi
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// General purpose threshold below which a distance is treated as zero.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;

/// Epsilon for floating point comparisons. ~0.1mm in degrees.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// Epsilon for floating point comparisons. ~0.1mm in radians.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// sqrt(3) / 2.0, also known as sin(60 degrees)
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
/// 1 / sin(60 degrees)
pub const M_RSIN60: f64 = 1.0 / M_SQRT3_2;

/// Square root of 7.
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// 1 / sqrt(7)
pub const M_RSQRT7: f64 = 1.0 / M_SQRT7;

/// One third
pub const M_ONETHIRD: f64 = 1.0 / 3.0;

/// Rotation angle between Class II and Class III resolution axes (asin(sqrt(3.0 / 28.0)))
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Earth radius in kilometers (WGS84 authalic radius)
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;

/// Scaling factor from hex2d resolution 0 unit length
/// (or distance between adjacent cell center points
/// on the plane) to gnomonic unit length.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;
/// Inverse of `RES0_U_GNOMONIC`
pub const INV_RES0_U_GNOMONIC: f64 = 1.0 / RES0_U_GNOMONIC;

// Grid system constants

/// Finest resolution; resolutions are numbered 0 through 15.
pub const MAX_RES: u8 = 15;
/// The number of faces on an icosahedron.
pub const NUM_ICOSA_FACES: usize = 20;
/// The number of resolution 0 base cells.
pub const NUM_BASE_CELLS: u8 = 122;
/// Sentinel for "no base cell" in the adjacency tables.
pub const INVALID_BASE_CELL: u8 = 127;
/// The number of vertices in a hexagon.
pub const NUM_HEX_VERTS: usize = 6;
/// The number of vertices in a pentagon.
pub const NUM_PENT_VERTS: usize = 5;
/// Maximum number of cell boundary vertices; worst case is a pentagon
/// with a distortion vertex on every edge.
pub const MAX_CELL_BNDRY_VERTS: usize = 10;
/// The number of pentagons per resolution.
pub const NUM_PENTAGONS: usize = 12;

// Bit layout

/// The bit offset of the mode.
pub const MODE_OFFSET: u32 = 59;
/// The bit offset of the reserved bits.
pub const RESERVED_OFFSET: u32 = 56;
/// The bit offset of the resolution.
pub const RES_OFFSET: u32 = 52;
/// The bit offset of the base cell.
pub const BC_OFFSET: u32 = 45;
/// The number of bits in a single resolution digit.
pub const PER_DIGIT_OFFSET: u32 = 3;

/// 1 in the highest bit, 0's everywhere else.
pub const HIGH_BIT_MASK: u64 = 1u64 << 63;
/// 1's in the 4 mode bits, 0's everywhere else.
pub const MODE_MASK: u64 = 0b1111u64 << MODE_OFFSET;
/// 1's in the 3 reserved bits, 0's everywhere else.
pub const RESERVED_MASK: u64 = 0b111u64 << RESERVED_OFFSET;
/// 1's in the 4 resolution bits, 0's everywhere else.
pub const RES_MASK: u64 = 0b1111u64 << RES_OFFSET;
/// 1's in the 7 base cell bits, 0's everywhere else.
pub const BC_MASK: u64 = 0b111_1111u64 << BC_OFFSET;
/// 1's in the 3 bits of a single digit.
pub const DIGIT_MASK: u64 = 0b111u64;

/// Index mode for cells.
pub const CELL_MODE: u8 = 1;

/// Mode 0, resolution 0, base cell 0 and 7 in every digit slot.
/// Starting point for building a cell index.
pub const INDEX_INIT: u64 = 35_184_372_088_831;

/// Maximum IJK coordinate of a resolution 0 cell on its face.
pub const MAX_FACE_COORD: i32 = 2;

/// Sentinel ccw rotation count in the FaceIJK to base cell table.
pub const INVALID_ROTATIONS: i32 = -1;

/// Maximum IJK coordinate on a face, by Class II resolution.
/// Class III slots are unused (-1).
#[rustfmt::skip]
pub const MAX_DIM_BY_CII_RES: [i32; 17] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33614, -1, 235298, -1, 1647086, -1, 11529602,
];

/// Unit scale distance table, by Class II resolution.
/// Class III slots are unused (-1).
#[rustfmt::skip]
pub const UNIT_SCALE_BY_CII_RES: [i32; 17] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16807, -1, 117649, -1, 823543, -1, 5764801,
];
