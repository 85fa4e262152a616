// tests/logging_tests.rs

//! Checks the diagnostic events emitted on recovery paths, using a layer
//! that records event messages.

use std::sync::{Arc, Mutex};

use hexgrid_core::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone)]
struct CapturedEvent {
  level: Level,
  message: String,
}

#[derive(Debug, Clone, Default)]
struct EventStore(Arc<Mutex<Vec<CapturedEvent>>>);

impl EventStore {
  fn has_message(&self, needle: &str) -> bool {
    self.0.lock().unwrap().iter().any(|e| e.message.contains(needle))
  }

  fn levels_of(&self, needle: &str) -> Vec<Level> {
    self
      .0
      .lock()
      .unwrap()
      .iter()
      .filter(|e| e.message.contains(needle))
      .map(|e| e.level)
      .collect()
  }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
  fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
    if field.name() == "message" {
      self.0 = format!("{value:?}");
    }
  }
}

struct EventCaptureLayer {
  store: EventStore,
}

impl<S: Subscriber> Layer<S> for EventCaptureLayer {
  fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
    let mut visitor = MessageVisitor(String::new());
    event.record(&mut visitor);
    self.store.0.lock().unwrap().push(CapturedEvent {
      level: *event.metadata().level(),
      message: visitor.0,
    });
  }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, EventStore) {
  let store = EventStore::default();
  let subscriber = tracing_subscriber::registry().with(EventCaptureLayer { store: store.clone() });
  let out = tracing::subscriber::with_default(subscriber, f);
  (out, store)
}

#[test]
fn test_pentagon_repair_is_logged() {
  let pent = CellIndex::pentagons(0).unwrap()[0];
  let (out, store) = capture(|| neighbor(pent, Direction::KAxes));
  assert!(out.is_ok());
  assert!(store.has_message("deleted pentagon vertex"));
  assert_eq!(store.levels_of("deleted pentagon vertex"), vec![Level::DEBUG]);
}

#[test]
fn test_trace_overflow_and_edges_are_logged() {
  let geoloop = GeoLoop::new(vec![
    LatLng::from_degrees(37.813, -122.408),
    LatLng::from_degrees(37.772, -122.447),
    LatLng::from_degrees(37.776, -122.385),
  ]);
  let (out, store) = capture(|| {
    let mut found = [CellIndex::NULL; 4];
    let mut search = Vec::new();
    trace_loop_cells(&geoloop, 9, &mut found, &mut search)
  });
  assert_eq!(out, Err(GridError::CapacityExceeded));
  assert!(store.has_message("tracing loop edge"));
  assert_eq!(store.levels_of("trace table is full"), vec![Level::DEBUG]);
}

#[test]
fn test_grid_disk_fallback_is_logged() {
  let pent = CellIndex::pentagons(2).unwrap()[5];
  let (out, store) = capture(|| grid_disk(pent, 2));
  assert_eq!(out.map(|cells| cells.len()), Ok(16));
  assert!(store.has_message("breadth-first"));
}
