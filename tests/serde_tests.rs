// tests/serde_tests.rs

#![cfg(feature = "serde")]

use hexgrid_core::*;

#[test]
fn test_cell_index_serde() {
  let h = CellIndex(0x8928308280fffff);
  let serialized = serde_json::to_string(&h).unwrap();
  // newtype over u64, serialized as the bare integer
  assert_eq!(serialized, "617700169958293503");
  let deserialized: CellIndex = serde_json::from_str(&serialized).unwrap();
  assert_eq!(h, deserialized);

  let cells = vec![h, CellIndex(0x8928308281fffff), CellIndex::NULL];
  let serialized = serde_json::to_string(&cells).unwrap();
  assert_eq!(serialized, "[617700169958293503,617700169959342079,0]");
  let deserialized: Vec<CellIndex> = serde_json::from_str(&serialized).unwrap();
  assert_eq!(cells, deserialized);
}

#[test]
fn test_latlng_serde() {
  let ll = LatLng::new(0.5, -1.2);
  let serialized = serde_json::to_string(&ll).unwrap();
  assert_eq!(serialized, r#"{"lat":0.5,"lng":-1.2}"#);
  let deserialized: LatLng = serde_json::from_str(&serialized).unwrap();
  assert_eq!(ll, deserialized);
}

#[test]
fn test_repr_enums_serialize_as_numbers() {
  assert_eq!(serde_json::to_string(&Direction::KAxes).unwrap(), "1");
  assert_eq!(serde_json::from_str::<Direction>("6").unwrap(), Direction::IjAxes);

  assert_eq!(serde_json::to_string(&GridError::CellInvalid).unwrap(), "5");
  assert_eq!(serde_json::to_string(&GridError::NonFinite).unwrap(), "16");
  assert_eq!(
    serde_json::from_str::<GridError>("14").unwrap(),
    GridError::CapacityExceeded
  );
  assert!(serde_json::from_str::<GridError>("0").is_err());
}

#[test]
fn test_cell_boundary_serde() {
  let boundary = cell_to_boundary(CellIndex(0x85283473fffffff)).unwrap();
  let serialized = serde_json::to_string(&boundary).unwrap();
  let deserialized: CellBoundary = serde_json::from_str(&serialized).unwrap();
  assert_eq!(boundary.num_verts, deserialized.num_verts);
  for (a, b) in boundary.vertices().iter().zip(deserialized.vertices()) {
    assert!((a.lat - b.lat).abs() < 1e-15 && (a.lng - b.lng).abs() < 1e-15);
  }
}

#[test]
fn test_linked_geo_serde() {
  let mut multi = LinkedGeoMultiPolygon::default();
  multi
    .add_polygon()
    .add_loop()
    .add_coord(LatLng::new(0.1, 0.2))
    .add_coord(LatLng::new(0.3, 0.4));

  let serialized = serde_json::to_string(&multi).unwrap();
  assert_eq!(
    serialized,
    r#"{"polygons":[{"loops":[{"coords":[{"lat":0.1,"lng":0.2},{"lat":0.3,"lng":0.4}]}]}]}"#
  );
  let deserialized: LinkedGeoMultiPolygon = serde_json::from_str(&serialized).unwrap();
  assert_eq!(multi, deserialized);

  let geoloop = GeoLoop::new(vec![LatLng::new(1.0, 1.0), LatLng::new(2.0, 2.0)]);
  let serialized = serde_json::to_string(&geoloop).unwrap();
  let deserialized: GeoLoop = serde_json::from_str(&serialized).unwrap();
  assert_eq!(geoloop, deserialized);
}
