// src/coords/face_ijk.rs

//! Projection between the sphere and the icosahedron faces.
//!
//! Each of the 20 faces carries its own IJK system centered on the face
//! center. Coordinates that run past a face edge ("overage") are moved onto
//! the neighboring face.

use crate::cell_index::is_resolution_class_iii;
use crate::constants::{
  EPSILON, INV_RES0_U_GNOMONIC, MAX_DIM_BY_CII_RES, M_AP7_ROT_RADS, M_ONETHIRD, M_RSQRT7, M_SQRT3_2, M_SQRT7,
  NUM_HEX_VERTS, NUM_ICOSA_FACES, NUM_PENT_VERTS, RES0_U_GNOMONIC, UNIT_SCALE_BY_CII_RES,
};
use crate::latlng::{az_distance_rads, azimuth_rads, pos_angle_rads};
use crate::types::{CellBoundary, CoordIJK, FaceIJK, LatLng, Vec2d, Vec3d};

/// How to move into a neighboring face's IJK system.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceOrientIJK {
  pub(crate) face: usize,
  /// Res 0 translation relative to the primary face.
  pub(crate) translate: CoordIJK,
  /// Number of 60 degree ccw rotations relative to the primary face.
  pub(crate) ccw_rot60: usize,
}

const fn orient(face: usize, [i, j, k]: [i32; 3], ccw_rot60: usize) -> FaceOrientIJK {
  FaceOrientIJK {
    face,
    translate: CoordIJK::new(i, j, k),
    ccw_rot60,
  }
}

pub(crate) const IJ_QUADRANT: usize = 1;
pub(crate) const KI_QUADRANT: usize = 2;
pub(crate) const JK_QUADRANT: usize = 3;

/// Whether a coordinate crossed onto another face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// Still on the original face.
  None,
  /// On a face edge. Only happens on substrate grids.
  FaceEdge,
  /// Moved into the interior of a new face.
  NewFace,
}

/// Face centers in lat/lng radians.
#[rustfmt::skip]
pub(crate) const FACE_CENTER_GEO: [LatLng; NUM_ICOSA_FACES] = [
  LatLng::new(0.803_582_649_718_989_94, 1.248_397_419_617_396), // face 0
  LatLng::new(1.307_747_883_455_638_2, 2.536_945_009_877_921), // face 1
  LatLng::new(1.054_751_253_523_952, -1.347_517_358_900_396_6), // face 2
  LatLng::new(0.600_191_595_538_186_8, -0.450_603_909_469_755_75), // face 3
  LatLng::new(0.491_715_428_198_773_87, 0.401_988_202_911_306_94), // face 4
  LatLng::new(0.172_745_327_415_618_7, 1.678_146_885_280_433_7), // face 5
  LatLng::new(0.605_929_321_571_350_7, 2.953_923_329_812_411_6), // face 6
  LatLng::new(0.427_370_518_328_979_64, -1.888_876_200_336_285_4), // face 7
  LatLng::new(-0.079_066_118_549_212_83, -0.733_429_513_380_867_74), // face 8
  LatLng::new(-0.230_961_644_455_383_64, 0.506_495_587_332_349), // face 9
  LatLng::new(0.079_066_118_549_212_83, 2.408_163_140_208_925_5), // face 10
  LatLng::new(0.230_961_644_455_383_64, -2.635_097_066_257_444), // face 11
  LatLng::new(-0.172_745_327_415_618_7, -1.463_445_768_309_359_5), // face 12
  LatLng::new(-0.605_929_321_571_350_7, -0.187_669_323_777_381_62), // face 13
  LatLng::new(-0.427_370_518_328_979_64, 1.252_716_453_253_508), // face 14
  LatLng::new(-0.600_191_595_538_186_8, 2.690_988_744_120_037_5), // face 15
  LatLng::new(-0.491_715_428_198_773_87, -2.739_604_450_678_486_3), // face 16
  LatLng::new(-0.803_582_649_718_989_94, -1.893_195_233_972_397), // face 17
  LatLng::new(-1.307_747_883_455_638_2, -0.604_647_643_711_872_1), // face 18
  LatLng::new(-1.054_751_253_523_952, 1.794_075_294_689_396_6), // face 19
];

/// Face centers as points on the unit sphere.
#[rustfmt::skip]
const FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES] = [
  Vec3d::new(0.219_930_779_140_460_6, 0.658_369_178_027_499_6, 0.719_847_537_892_618_2), // face 0
  Vec3d::new(-0.213_923_483_450_142_1, 0.147_817_182_955_070_3, 0.965_601_793_521_420_5), // face 1
  Vec3d::new(0.109_262_527_878_479_7, -0.481_195_157_287_321, 0.869_777_512_128_725_3), // face 2
  Vec3d::new(0.742_856_730_158_679_1, -0.359_394_167_827_802_8, 0.564_800_593_651_703_3), // face 3
  Vec3d::new(0.811_253_470_914_096_9, 0.344_895_323_763_938_4, 0.472_138_773_641_393), // face 4
  Vec3d::new(-0.105_549_814_961_392_1, 0.979_445_729_641_141_3, 0.171_887_461_000_936_5), // face 5
  Vec3d::new(-0.807_540_757_997_009_2, 0.153_355_248_589_881_8, 0.569_526_199_488_268_8), // face 6
  Vec3d::new(-0.284_614_806_978_790_7, -0.864_408_097_265_420_6, 0.414_479_255_247_354), // face 7
  Vec3d::new(0.740_562_147_385_448_2, -0.667_329_956_456_552_4, -0.078_983_764_632_673_77), // face 8
  Vec3d::new(0.851_230_398_647_429_3, 0.472_234_378_858_268_1, -0.228_913_738_868_780_8), // face 9
  Vec3d::new(-0.740_562_147_385_448_1, 0.667_329_956_456_552_4, 0.078_983_764_632_673_77), // face 10
  Vec3d::new(-0.851_230_398_647_429_2, -0.472_234_378_858_268_2, 0.228_913_738_868_780_8), // face 11
  Vec3d::new(0.105_549_814_961_391_9, -0.979_445_729_641_141_3, -0.171_887_461_000_936_5), // face 12
  Vec3d::new(0.807_540_757_997_009_2, -0.153_355_248_589_881_9, -0.569_526_199_488_268_8), // face 13
  Vec3d::new(0.284_614_806_978_790_8, 0.864_408_097_265_420_4, -0.414_479_255_247_354), // face 14
  Vec3d::new(-0.742_856_730_158_679_1, 0.359_394_167_827_802_7, -0.564_800_593_651_703_3), // face 15
  Vec3d::new(-0.811_253_470_914_097_1, -0.344_895_323_763_938_2, -0.472_138_773_641_393), // face 16
  Vec3d::new(-0.219_930_779_140_460_7, -0.658_369_178_027_499_6, -0.719_847_537_892_618_2), // face 17
  Vec3d::new(0.213_923_483_450_142, -0.147_817_182_955_070_4, -0.965_601_793_521_420_5), // face 18
  Vec3d::new(-0.109_262_527_878_479_6, 0.481_195_157_287_321, -0.869_777_512_128_725_3), // face 19
];

/// Azimuth in radians from each face center to its vertices 0, 1 and 2
/// (the face's i, j and k axes).
#[rustfmt::skip]
const FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_ICOSA_FACES] = [
  [5.619_958_268_523_94, 3.525_563_166_130_744_5, 1.431_168_063_737_548_7], // face 0
  [5.760_339_081_714_187, 3.665_943_979_320_991_7, 1.571_548_876_927_796], // face 1
  [0.780_213_654_393_430_1, 4.969_003_859_179_821, 2.874_608_756_786_625_7], // face 2
  [0.430_469_363_979_999_9, 4.619_259_568_766_391, 2.524_864_466_373_195_5], // face 3
  [6.130_269_123_335_111, 4.035_874_020_941_916, 1.941_478_918_548_720_3], // face 4
  [2.692_877_706_530_643, 0.598_482_604_137_447_1, 4.787_272_808_923_838], // face 5
  [2.982_963_003_477_244, 0.888_567_901_084_048_4, 5.077_358_105_870_44], // face 6
  [3.532_912_002_790_141, 1.438_516_900_396_945_7, 5.627_307_105_183_337], // face 7
  [3.494_305_004_259_568, 1.399_909_901_866_372_9, 5.588_700_106_652_764], // face 8
  [3.003_214_169_499_538_4, 0.908_819_067_106_342_9, 5.097_609_271_892_734], // face 9
  [5.930_472_956_509_811_6, 3.836_077_854_116_616, 1.741_682_751_723_420_4], // face 10
  [0.138_378_484_090_254_85, 4.327_168_688_876_646, 2.232_773_586_483_45], // face 11
  [0.448_714_947_059_150_36, 4.637_505_151_845_541_5, 2.543_110_049_452_346], // face 12
  [0.158_629_650_112_549_36, 4.347_419_854_898_94, 2.253_024_752_505_745], // face 13
  [5.891_865_957_979_238_5, 3.797_470_855_586_043, 1.703_075_753_192_847_6], // face 14
  [2.711_123_289_609_793_3, 0.616_728_187_216_597_8, 4.805_518_392_002_988_7], // face 15
  [3.294_508_837_434_268, 1.200_113_735_041_073, 5.388_903_939_827_464], // face 16
  [3.804_819_692_245_44, 1.710_424_589_852_244_5, 5.899_214_794_638_635], // face 17
  [3.664_438_879_055_192_4, 1.570_043_776_661_997, 5.758_833_981_448_388], // face 18
  [2.361_378_999_196_363, 0.266_983_896_803_167_6, 4.455_774_101_589_558_6], // face 19
];

/// Orientation of each face's neighbors: the central face itself, then the
/// IJ, KI and JK quadrants.
#[rustfmt::skip]
const FACE_NEIGHBORS: [[FaceOrientIJK; 4]; NUM_ICOSA_FACES] = [
  [orient(0, [0, 0, 0], 0), orient(4, [2, 0, 2], 1), orient(1, [2, 2, 0], 5), orient(5, [0, 2, 2], 3)], // face 0
  [orient(1, [0, 0, 0], 0), orient(0, [2, 0, 2], 1), orient(2, [2, 2, 0], 5), orient(6, [0, 2, 2], 3)], // face 1
  [orient(2, [0, 0, 0], 0), orient(1, [2, 0, 2], 1), orient(3, [2, 2, 0], 5), orient(7, [0, 2, 2], 3)], // face 2
  [orient(3, [0, 0, 0], 0), orient(2, [2, 0, 2], 1), orient(4, [2, 2, 0], 5), orient(8, [0, 2, 2], 3)], // face 3
  [orient(4, [0, 0, 0], 0), orient(3, [2, 0, 2], 1), orient(0, [2, 2, 0], 5), orient(9, [0, 2, 2], 3)], // face 4
  [orient(5, [0, 0, 0], 0), orient(10, [2, 2, 0], 3), orient(14, [2, 0, 2], 3), orient(0, [0, 2, 2], 3)], // face 5
  [orient(6, [0, 0, 0], 0), orient(11, [2, 2, 0], 3), orient(10, [2, 0, 2], 3), orient(1, [0, 2, 2], 3)], // face 6
  [orient(7, [0, 0, 0], 0), orient(12, [2, 2, 0], 3), orient(11, [2, 0, 2], 3), orient(2, [0, 2, 2], 3)], // face 7
  [orient(8, [0, 0, 0], 0), orient(13, [2, 2, 0], 3), orient(12, [2, 0, 2], 3), orient(3, [0, 2, 2], 3)], // face 8
  [orient(9, [0, 0, 0], 0), orient(14, [2, 2, 0], 3), orient(13, [2, 0, 2], 3), orient(4, [0, 2, 2], 3)], // face 9
  [orient(10, [0, 0, 0], 0), orient(5, [2, 2, 0], 3), orient(6, [2, 0, 2], 3), orient(15, [0, 2, 2], 3)], // face 10
  [orient(11, [0, 0, 0], 0), orient(6, [2, 2, 0], 3), orient(7, [2, 0, 2], 3), orient(16, [0, 2, 2], 3)], // face 11
  [orient(12, [0, 0, 0], 0), orient(7, [2, 2, 0], 3), orient(8, [2, 0, 2], 3), orient(17, [0, 2, 2], 3)], // face 12
  [orient(13, [0, 0, 0], 0), orient(8, [2, 2, 0], 3), orient(9, [2, 0, 2], 3), orient(18, [0, 2, 2], 3)], // face 13
  [orient(14, [0, 0, 0], 0), orient(9, [2, 2, 0], 3), orient(5, [2, 0, 2], 3), orient(19, [0, 2, 2], 3)], // face 14
  [orient(15, [0, 0, 0], 0), orient(16, [2, 0, 2], 1), orient(19, [2, 2, 0], 5), orient(10, [0, 2, 2], 3)], // face 15
  [orient(16, [0, 0, 0], 0), orient(17, [2, 0, 2], 1), orient(15, [2, 2, 0], 5), orient(11, [0, 2, 2], 3)], // face 16
  [orient(17, [0, 0, 0], 0), orient(18, [2, 0, 2], 1), orient(16, [2, 2, 0], 5), orient(12, [0, 2, 2], 3)], // face 17
  [orient(18, [0, 0, 0], 0), orient(19, [2, 0, 2], 1), orient(17, [2, 2, 0], 5), orient(13, [0, 2, 2], 3)], // face 18
  [orient(19, [0, 0, 0], 0), orient(15, [2, 0, 2], 1), orient(18, [2, 2, 0], 5), orient(14, [0, 2, 2], 3)], // face 19
];

/// Quadrant of `origin` through which `dest` is reached: 0 for the face
/// itself, then [`IJ_QUADRANT`], [`KI_QUADRANT`] or [`JK_QUADRANT`]. `None`
/// when the faces do not share an edge.
pub(crate) fn adjacent_face_dir(origin: usize, dest: usize) -> Option<usize> {
  FACE_NEIGHBORS[origin].iter().position(|o| o.face == dest)
}

/// Closest face to `g` and the squared euclidean distance to its center.
fn closest_face(g: &LatLng) -> (usize, f64) {
  let v3d = Vec3d::from_lat_lng(g);
  FACE_CENTER_POINT
    .iter()
    .enumerate()
    .map(|(face, center)| (face, center.square_distance(&v3d)))
    .fold((0, 5.0), |best, cur| if cur.1 < best.1 { cur } else { best })
}

/// Gnomonic projection of `g` onto its closest face, scaled to `res`.
pub(crate) fn lat_lng_to_hex2d(g: &LatLng, res: u8) -> (usize, Vec2d) {
  let (face, sqd) = closest_face(g);

  // cos(r) = 1 - 2 * sin^2(r/2) = 1 - 2 * (sqd / 4) = 1 - sqd/2
  let r = (1.0 - sqd * 0.5).clamp(-1.0, 1.0).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  // angle from the face's i axis
  let mut theta = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face][0] - pos_angle_rads(azimuth_rads(&FACE_CENTER_GEO[face], g)));
  if is_resolution_class_iii(res) {
    theta = pos_angle_rads(theta - M_AP7_ROT_RADS);
  }

  let mut r = r.tan() * INV_RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= M_SQRT7;
  }

  (face, Vec2d::new(r * theta.cos(), r * theta.sin()))
}

/// Inverse of [`lat_lng_to_hex2d`]. With `substrate` set, `v` is on the
/// aperture 3 substrate grid used for cell vertices.
pub(crate) fn hex2d_to_lat_lng(v: &Vec2d, face: usize, res: u8, substrate: bool) -> LatLng {
  let mut r = v.magnitude();
  if r < EPSILON {
    return FACE_CENTER_GEO[face];
  }

  let mut theta = v.y.atan2(v.x);

  for _ in 0..res {
    r *= M_RSQRT7;
  }

  if substrate {
    r *= M_ONETHIRD;
    if is_resolution_class_iii(res) {
      r *= M_RSQRT7;
    }
  }

  let r = (r * RES0_U_GNOMONIC).atan();

  // substrate grids are already rotated
  if !substrate && is_resolution_class_iii(res) {
    theta = pos_angle_rads(theta + M_AP7_ROT_RADS);
  }

  let az = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face][0] - theta);
  az_distance_rads(&FACE_CENTER_GEO[face], az, r)
}

/// Substrate offsets of the vertices of an origin-centered Class II cell
/// (aperture sequence 33r).
#[rustfmt::skip]
const VERTS_CII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(2, 1, 0), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 2, 1),
  CoordIJK::new(0, 1, 2), CoordIJK::new(1, 0, 2), CoordIJK::new(2, 0, 1),
];

/// Substrate offsets of the vertices of an origin-centered Class III cell
/// (aperture sequence 33r7r).
#[rustfmt::skip]
const VERTS_CIII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(5, 4, 0), CoordIJK::new(1, 5, 0), CoordIJK::new(0, 5, 4),
  CoordIJK::new(0, 1, 5), CoordIJK::new(4, 0, 5), CoordIJK::new(5, 0, 1),
];

/// Corners of the substrate face triangle, scaled for `res`, in hex2d.
fn face_triangle(res: u8) -> [Vec2d; 3] {
  let max_dim = f64::from(MAX_DIM_BY_CII_RES[res as usize]);
  [
    Vec2d::new(3.0 * max_dim, 0.0),
    Vec2d::new(-1.5 * max_dim, 3.0 * M_SQRT3_2 * max_dim),
    Vec2d::new(-1.5 * max_dim, -3.0 * M_SQRT3_2 * max_dim),
  ]
}

/// The face edge lying in `quadrant`, as a pair of triangle corners.
fn face_edge(res: u8, quadrant: Option<usize>) -> (Vec2d, Vec2d) {
  let [v0, v1, v2] = face_triangle(res);
  match quadrant {
    Some(IJ_QUADRANT) => (v0, v1),
    Some(JK_QUADRANT) => (v1, v2),
    _ => (v2, v0),
  }
}

impl FaceIJK {
  /// The face and containing cell of `g` at `res`.
  pub fn from_lat_lng(g: &LatLng, res: u8) -> Self {
    let (face, v) = lat_lng_to_hex2d(g, res);
    FaceIJK::new(face, CoordIJK::from_hex2d(&v))
  }

  /// Center point of the cell addressed by this coordinate at `res`.
  pub fn to_lat_lng(&self, res: u8) -> LatLng {
    hex2d_to_lat_lng(&self.coord.to_hex2d(), self.face, res, false)
  }

  /// Moves a Class II coordinate that ran past its face onto the correct
  /// neighboring face.
  ///
  /// `pent_leading4` marks a pentagon whose leading digit is I; those rotate
  /// about the pentagon vertex before crossing. `substrate` selects the
  /// aperture 3 substrate grid.
  pub(crate) fn adjust_overage_class_ii(&mut self, res: u8, pent_leading4: bool, substrate: bool) -> Overage {
    let mut max_dim = MAX_DIM_BY_CII_RES[res as usize];
    if substrate {
      max_dim *= 3;
    }

    let sum = self.coord.i + self.coord.j + self.coord.k;
    if substrate && sum == max_dim {
      return Overage::FaceEdge;
    }
    if sum <= max_dim {
      return Overage::None;
    }

    let orient = if self.coord.k > 0 {
      if self.coord.j > 0 {
        FACE_NEIGHBORS[self.face][JK_QUADRANT]
      } else {
        if pent_leading4 {
          // rotate about the pentagon vertex at (max_dim, 0, 0)
          let origin = CoordIJK::new(max_dim, 0, 0);
          self.coord = (self.coord - origin).rotate60_cw() + origin;
        }
        FACE_NEIGHBORS[self.face][KI_QUADRANT]
      }
    } else {
      FACE_NEIGHBORS[self.face][IJ_QUADRANT]
    };

    self.face = orient.face;
    for _ in 0..orient.ccw_rot60 {
      self.coord = self.coord.rotate60_ccw();
    }

    let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
    if substrate {
      unit_scale *= 3;
    }
    self.coord = (self.coord + orient.translate.scale(unit_scale)).normalize();

    if substrate && self.coord.i + self.coord.j + self.coord.k == max_dim {
      Overage::FaceEdge
    } else {
      Overage::NewFace
    }
  }

  /// Repeats the substrate overage adjustment until a pentagon vertex has
  /// settled on a face.
  pub(crate) fn adjust_pent_vert_overage(&mut self, res: u8) -> Overage {
    loop {
      let overage = self.adjust_overage_class_ii(res, false, true);
      if overage != Overage::NewFace {
        return overage;
      }
    }
  }

  /// Substrate-grid vertices of this cell, and the resolution they live at.
  /// Class III cells are moved to the next finer (Class II) resolution.
  fn substrate_vertices(&self, res: u8) -> (FaceIJK, u8, [FaceIJK; NUM_HEX_VERTS]) {
    let class_iii = is_resolution_class_iii(res);
    let offsets = if class_iii { VERTS_CIII } else { VERTS_CII };

    let mut center = self.coord.down_ap3().down_ap3r();
    let mut adj_res = res;
    if class_iii {
      center = center.down_ap7r();
      adj_res += 1;
    }

    let center = FaceIJK::new(self.face, center);
    let verts = offsets.map(|o| FaceIJK::new(self.face, (center.coord + o).normalize()));
    (center, adj_res, verts)
  }

  /// Boundary of the hexagonal cell centered on this coordinate.
  ///
  /// Class III edges that cross an icosahedron edge get an extra
  /// distortion vertex where they cross.
  pub(crate) fn to_cell_boundary(&self, res: u8) -> CellBoundary {
    let (center, adj_res, verts) = self.substrate_vertices(res);

    let mut boundary = CellBoundary::default();
    let mut last: Option<(usize, Overage)> = None;

    // one extra pass to close the loop for distortion vertices
    for vert in 0..=NUM_HEX_VERTS {
      let v = vert % NUM_HEX_VERTS;
      let mut fijk = verts[v];
      let overage = fijk.adjust_overage_class_ii(adj_res, false, true);

      if let Some((last_face, last_overage)) = last {
        if is_resolution_class_iii(res) && fijk.face != last_face && last_overage != Overage::FaceEdge {
          // intersect the original edge with the icosahedron edge it crosses
          let last_v = (v + NUM_HEX_VERTS - 1) % NUM_HEX_VERTS;
          let orig0 = verts[last_v].coord.to_hex2d();
          let orig1 = verts[v].coord.to_hex2d();

          let face2 = if last_face == center.face { fijk.face } else { last_face };
          let (edge0, edge1) = face_edge(adj_res, adjacent_face_dir(center.face, face2));

          let inter = Vec2d::intersect(&orig0, &orig1, &edge0, &edge1);
          // a crossing exactly at a vertex needs no extra point
          if !orig0.almost_equals(&inter) && !orig1.almost_equals(&inter) {
            boundary.push(hex2d_to_lat_lng(&inter, center.face, adj_res, true));
          }
        }
      }

      if vert < NUM_HEX_VERTS {
        boundary.push(hex2d_to_lat_lng(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }

      last = Some((fijk.face, overage));
    }

    boundary
  }

  /// Boundary of the pentagonal cell centered on this coordinate.
  pub(crate) fn pent_to_cell_boundary(&self, res: u8) -> CellBoundary {
    let (_, adj_res, verts) = self.substrate_vertices(res);

    let mut boundary = CellBoundary::default();
    let mut last: Option<FaceIJK> = None;

    for vert in 0..=NUM_PENT_VERTS {
      let v = vert % NUM_PENT_VERTS;
      let mut fijk = verts[v];
      fijk.adjust_pent_vert_overage(adj_res);

      // Every Class III pentagon edge crosses an icosahedron edge.
      if let (true, Some(last_fijk)) = (is_resolution_class_iii(res), last) {
        let orig0 = last_fijk.coord.to_hex2d();

        // the current vertex, expressed in the last vertex's face
        let dir = adjacent_face_dir(fijk.face, last_fijk.face).unwrap_or(0);
        let orient = FACE_NEIGHBORS[fijk.face][dir];
        let mut tmp = FaceIJK::new(orient.face, fijk.coord);
        for _ in 0..orient.ccw_rot60 {
          tmp.coord = tmp.coord.rotate60_ccw();
        }
        let translate = orient.translate.scale(UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3);
        tmp.coord = (tmp.coord + translate).normalize();
        let orig1 = tmp.coord.to_hex2d();

        let (edge0, edge1) = face_edge(adj_res, adjacent_face_dir(tmp.face, fijk.face));
        let inter = Vec2d::intersect(&orig0, &orig1, &edge0, &edge1);
        boundary.push(hex2d_to_lat_lng(&inter, tmp.face, adj_res, true));
      }

      if vert < NUM_PENT_VERTS {
        boundary.push(hex2d_to_lat_lng(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }

      last = Some(fijk);
    }

    boundary
  }
}
