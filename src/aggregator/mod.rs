//! Multi-source stream aggregation
//!
//! Fans a request out to every cataloged source, merges the per-source
//! result streams into one, and drives a single completion signal off a
//! per-source barrier. Snapshot fan-out contains per-source failures on a
//! fault side channel; interval fan-out forwards the first failure as a
//! stream error.

mod barrier;
mod interval;
mod snapshot;

pub use barrier::FanoutBarrier;
pub use interval::MeasurementStream;
pub(crate) use interval::{entry_url, spawn_interval_fanout};
pub use snapshot::{FacilityRecord, FacilityStream, SourceFault};
pub(crate) use snapshot::spawn_facility_fanout;
