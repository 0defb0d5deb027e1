//! Interval measurement aggregation
//!
//! Fans a time-ranged query out to every cataloged endpoint via the
//! external interval fetcher and merges the produced measurement streams.
//! Unlike the snapshot case, a single source's fetch failure surfaces as a
//! stream error item; consumers treat the first error as fatal. In-flight
//! sources are not cancelled.

use super::barrier::FanoutBarrier;
use crate::sources::{IntervalSource, MeasurementRecord};
use crate::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// Merged interval stream: measurement items until the first error or
/// until every source's range is exhausted.
pub type MeasurementStream = ReceiverStream<Result<MeasurementRecord>>;

/// Build the time-scoped entry URL for one endpoint.
///
/// The "as of" instant is derived from the upper bound of the requested
/// range. Timestamps outside chrono's representable range fall back to raw
/// seconds.
pub(crate) fn entry_url(endpoint: &str, to: i64) -> String {
    let as_of = DateTime::<Utc>::from_timestamp(to, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| to.to_string());
    format!("{}?time={}", endpoint, urlencoding::encode(&as_of))
}

/// Start an interval fan-out over the cataloged endpoints.
///
/// Each source's produced stream is forwarded onto one bounded merged
/// channel; a source fetch failure is forwarded as an `Err` item. The
/// merged stream ends exactly once, after every source has arrived at the
/// barrier. An empty key list yields a stream that completes immediately.
pub(crate) fn spawn_interval_fanout<M: IntervalSource>(
    measurements: Arc<M>,
    keys: Vec<String>,
    from: i64,
    to: i64,
    capacity: usize,
) -> MeasurementStream {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let barrier = Arc::new(FanoutBarrier::new(keys.len()));

    tracing::debug!(sources = keys.len(), from, to, "Starting interval fan-out");

    for dataset_url in keys {
        let measurements = Arc::clone(&measurements);
        let tx = tx.clone();
        let barrier = Arc::clone(&barrier);

        tokio::spawn(async move {
            let entry = entry_url(&dataset_url, to);
            match measurements.fetch_interval(from, to, &entry).await {
                Ok(mut source_rx) => {
                    while let Some(record) = source_rx.recv().await {
                        if tx.send(Ok(record)).await.is_err() {
                            // Consumer went away; stop forwarding.
                            break;
                        }
                    }
                }
                Err(error) => {
                    tracing::warn!(
                        dataset = %dataset_url,
                        error = %error,
                        "Interval source failed"
                    );
                    let _ = tx.send(Err(error)).await;
                }
            }
            if barrier.arrive() {
                tracing::debug!("Interval fan-out complete");
            }
        });
    }

    ReceiverStream::new(rx)
}
