//! External collaborator interfaces
//!
//! The fetch side of the system is pluggable: a graph client that turns a
//! URL into a set of facts, and an interval client that turns a time range
//! plus an entry URL into a lazy sequence of measurement records. Both are
//! black boxes behind async traits; this crate never parses documents or
//! speaks a wire protocol itself.

use crate::facts::Fact;
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Client that fetches and parses a graph document into facts.
///
/// Fails with [`ParkFedError::Fetch`](crate::ParkFedError::Fetch) when the
/// document is unreachable or unparsable.
#[async_trait]
pub trait GraphSource: Send + Sync + 'static {
    async fn fetch_graph(&self, url: &str) -> Result<Vec<Fact>>;
}

/// Client that fetches time-ranged measurements for one dataset.
///
/// `entry_url` is the time-scoped query URL built by the aggregator
/// (`<endpoint>?time=<ISO-8601>`). The returned channel is the lazy
/// measurement sequence; closing it signals the end of the range. The call
/// itself fails with [`ParkFedError::Fetch`](crate::ParkFedError::Fetch) on
/// network or parse errors.
#[async_trait]
pub trait IntervalSource: Send + Sync + 'static {
    async fn fetch_interval(
        &self,
        from: i64,
        to: i64,
        entry_url: &str,
    ) -> Result<mpsc::Receiver<MeasurementRecord>>;
}

/// A single time-stamped observation for one facility.
///
/// Opaque to the aggregation core beyond the facility URI and timestamp;
/// the payload passes through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// URI of the facility this measurement belongs to
    pub facility_uri: String,

    /// Unix timestamp (seconds) of the observation
    pub timestamp: i64,

    /// Source-defined measurement body, forwarded untouched
    #[serde(default)]
    pub payload: serde_json::Value,
}
