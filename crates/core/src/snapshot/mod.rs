//! The snapshot pipeline: cache → provider chain → simulator → calculator.

pub mod clock;
pub mod snapshot_cache;
pub mod snapshot_service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use snapshot_cache::{Snapshot, SnapshotCache};
pub use snapshot_service::SnapshotService;
