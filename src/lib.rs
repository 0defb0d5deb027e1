//! ParkFed - Federated Parking-Data Catalog Resolution and Stream Aggregation
//!
//! ParkFed resolves a set of remote, DCAT-described parking datasets into a
//! flat catalog of fetchable endpoints, then aggregates snapshot and
//! time-ranged observations from all of them into unified push-based
//! streams. Consumers see one logical stream regardless of how many
//! physical sources back it.
//!
//! # Architecture
//!
//! - **facts**: Fact triples, term decoding, pattern-based filtering
//! - **vocab**: DCAT / DATEX / range-gate vocabulary terms
//! - **catalog**: Endpoint registry and metadata-driven resolution
//! - **sources**: External collaborator traits (graph fetch, interval fetch)
//! - **aggregator**: Fan-out, stream merging, per-source completion barrier
//! - **federation**: The public facade tying everything together
//! - **config**: YAML federation configuration
//!
//! Fetching and parsing are pluggable: implement [`GraphSource`] and
//! [`IntervalSource`] for your transport and hand them to [`Federation`].

pub mod aggregator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod facts;
pub mod federation;
pub mod logging;
pub mod sources;
pub mod vocab;

// Re-exports
pub use aggregator::{FacilityRecord, FacilityStream, FanoutBarrier, MeasurementStream, SourceFault};
pub use catalog::{resolve_metadata, Catalog, ResolveSummary};
pub use config::FederationConfig;
pub use error::{ParkFedError, Result};
pub use facts::{filter_facts, Fact, FactPattern, Term};
pub use federation::Federation;
pub use sources::{GraphSource, IntervalSource, MeasurementRecord};
