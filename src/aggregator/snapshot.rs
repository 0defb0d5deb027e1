//! Snapshot facility aggregation
//!
//! Fans out to every cataloged endpoint, extracts parking-facility records
//! from each source's fact graph, and merges them onto one push stream.
//! Per-source failures are reported on a fault side channel and never
//! prevent other sources' progress or the final completion.

use super::barrier::FanoutBarrier;
use crate::facts::{filter_facts, Fact, FactPattern, Term};
use crate::sources::GraphSource;
use crate::vocab;
use crate::{ParkFedError, Result};
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_stream::Stream;

/// A decoded parking-facility snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// Human-readable facility name
    pub label: String,

    /// Derived from the label: lowercased, spaces replaced with hyphens.
    /// Deterministic for a given label; labels differing only by case or by
    /// hyphen-versus-space collide.
    pub identifier: String,

    /// Subject URI of the facility in the source graph
    pub source_uri: String,

    /// Total number of parking spaces
    pub capacity: u32,

    /// The cataloged endpoint this record came from
    pub dataset_url: String,
}

/// A contained per-source failure from a snapshot fan-out
#[derive(Debug)]
pub struct SourceFault {
    /// The cataloged endpoint that failed
    pub dataset_url: String,

    /// What went wrong for that source
    pub error: ParkFedError,
}

/// The merged facility stream plus its fault side channel.
///
/// Records from different sources interleave nondeterministically; within
/// one source they follow fact order. The stream ends exactly once, after
/// every source has either finished emitting or faulted. Faults are read
/// separately via [`faults`](Self::faults) and never terminate the stream.
#[derive(Debug)]
pub struct FacilityStream {
    records: UnboundedReceiverStream<FacilityRecord>,
    faults: mpsc::UnboundedReceiver<SourceFault>,
}

impl FacilityStream {
    /// Receive the next merged facility record; `None` once all sources are
    /// done.
    pub async fn next_record(&mut self) -> Option<FacilityRecord> {
        use tokio_stream::StreamExt;
        self.records.next().await
    }

    /// Receive the next contained source failure; `None` once all sources
    /// are done and every fault has been read.
    pub async fn next_fault(&mut self) -> Option<SourceFault> {
        self.faults.recv().await
    }
}

impl Stream for FacilityStream {
    type Item = FacilityRecord;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.records).poll_next(cx)
    }
}

/// Start a snapshot fan-out over `targets` (dataset URL, query URL) pairs.
///
/// The query URL is the fast-path entry point when one is registered for
/// the dataset, otherwise the dataset URL itself. An empty target list
/// yields a stream that completes immediately.
pub(crate) fn spawn_facility_fanout<G: GraphSource>(
    graphs: Arc<G>,
    targets: Vec<(String, String)>,
) -> FacilityStream {
    let (record_tx, record_rx) = mpsc::unbounded_channel();
    let (fault_tx, fault_rx) = mpsc::unbounded_channel();
    let barrier = Arc::new(FanoutBarrier::new(targets.len()));

    tracing::debug!(sources = targets.len(), "Starting facility fan-out");

    for (dataset_url, query_url) in targets {
        let graphs = Arc::clone(&graphs);
        let record_tx = record_tx.clone();
        let fault_tx = fault_tx.clone();
        let barrier = Arc::clone(&barrier);

        tokio::spawn(async move {
            if let Err(error) =
                emit_source_facilities(&*graphs, &dataset_url, &query_url, &record_tx).await
            {
                tracing::warn!(
                    dataset = %dataset_url,
                    error = %error,
                    "Snapshot source failed"
                );
                let _ = fault_tx.send(SourceFault { dataset_url, error });
            }
            if barrier.arrive() {
                tracing::debug!("Facility fan-out complete");
            }
            // Dropping this task's sender clones closes the merged stream
            // once every source has arrived.
        });
    }

    FacilityStream {
        records: UnboundedReceiverStream::new(record_rx),
        faults: fault_rx,
    }
}

/// Fetch one source's facts and emit its facility records, unbuffered, in
/// fact order. Any failure aborts the remainder of this source only;
/// records already emitted stay emitted.
async fn emit_source_facilities<G: GraphSource>(
    graphs: &G,
    dataset_url: &str,
    query_url: &str,
    record_tx: &mpsc::UnboundedSender<FacilityRecord>,
) -> Result<()> {
    let facts = graphs.fetch_graph(query_url).await?;

    let candidate_pattern = FactPattern::new()
        .with_predicate(vocab::RDF_TYPE)
        .with_object(Term::named(vocab::DATEX_URBAN_PARKING_SITE));
    let candidates = filter_facts(&candidate_pattern, &facts);

    if candidates.is_empty() {
        return Err(ParkFedError::EmptySource(dataset_url.to_string()));
    }

    for candidate in candidates {
        let record = decode_facility(&facts, &candidate.subject, dataset_url)?;
        // A dropped receiver just means the consumer went away.
        let _ = record_tx.send(record);
    }

    Ok(())
}

/// Decode one facility candidate's capacity and label facts into a record.
fn decode_facility(facts: &[Fact], subject: &str, dataset_url: &str) -> Result<FacilityRecord> {
    let capacity = single_object(facts, subject, vocab::DATEX_NUMBER_OF_SPACES)
        .and_then(Term::decode_u32)
        .ok_or_else(|| ParkFedError::MalformedRecord {
            subject: subject.to_string(),
            missing: "capacity",
        })?;

    let label = single_object(facts, subject, vocab::RDFS_LABEL)
        .and_then(Term::decode_string)
        .ok_or_else(|| ParkFedError::MalformedRecord {
            subject: subject.to_string(),
            missing: "label",
        })?;

    Ok(FacilityRecord {
        identifier: derive_identifier(&label),
        label,
        source_uri: subject.to_string(),
        capacity,
        dataset_url: dataset_url.to_string(),
    })
}

fn single_object<'a>(facts: &'a [Fact], subject: &str, predicate: &str) -> Option<&'a Term> {
    let pattern = FactPattern::new()
        .with_subject(subject)
        .with_predicate(predicate);
    filter_facts(&pattern, facts)
        .into_iter()
        .next()
        .map(|f| &f.object)
}

fn derive_identifier(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility_facts(subject: &str, label: &str, capacity: &str) -> Vec<Fact> {
        vec![
            Fact::new(
                subject,
                vocab::RDF_TYPE,
                Term::named(vocab::DATEX_URBAN_PARKING_SITE),
            ),
            Fact::new(subject, vocab::RDFS_LABEL, Term::literal(label)),
            Fact::new(subject, vocab::DATEX_NUMBER_OF_SPACES, Term::literal(capacity)),
        ]
    }

    #[test]
    fn test_decode_facility() {
        let facts = facility_facts("urn:p1", "\"Kortrijk P Veemarkt\"", "\"177\"");
        let record = decode_facility(&facts, "urn:p1", "http://a.example/data").unwrap();
        assert_eq!(record.label, "Kortrijk P Veemarkt");
        assert_eq!(record.identifier, "kortrijk-p-veemarkt");
        assert_eq!(record.capacity, 177);
        assert_eq!(record.source_uri, "urn:p1");
        assert_eq!(record.dataset_url, "http://a.example/data");
    }

    #[test]
    fn test_identifier_is_deterministic() {
        assert_eq!(derive_identifier("P Broel"), derive_identifier("P Broel"));
        // Documented collision: case and space-vs-hyphen differences fold
        // to the same identifier.
        assert_eq!(derive_identifier("P BROEL"), "p-broel");
        assert_eq!(derive_identifier("P-Broel"), "p-broel");
    }

    #[test]
    fn test_missing_capacity_is_malformed() {
        let mut facts = facility_facts("urn:p1", "\"P Broel\"", "\"42\"");
        facts.retain(|f| f.predicate != vocab::DATEX_NUMBER_OF_SPACES);

        let err = decode_facility(&facts, "urn:p1", "http://a.example/data").unwrap_err();
        assert!(matches!(
            err,
            ParkFedError::MalformedRecord {
                missing: "capacity",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_label_is_malformed() {
        let mut facts = facility_facts("urn:p1", "\"P Broel\"", "\"42\"");
        facts.retain(|f| f.predicate != vocab::RDFS_LABEL);

        let err = decode_facility(&facts, "urn:p1", "http://a.example/data").unwrap_err();
        assert!(matches!(
            err,
            ParkFedError::MalformedRecord { missing: "label", .. }
        ));
    }
}
