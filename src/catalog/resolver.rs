//! Metadata-driven catalog resolution
//!
//! Walks the DCAT fact graph of an already-fetched metadata document:
//! dataset subjects → their distributions → each distribution's download
//! URL, which becomes a cataloged endpoint. Range-gate relations on the
//! dataset subject become fast-path registrations.

use crate::catalog::Catalog;
use crate::facts::{filter_facts, Fact, FactPattern, Term};
use crate::vocab;

/// Counts of what one metadata document contributed to the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    /// Dataset subjects seen in the document
    pub datasets: usize,

    /// Endpoint URLs newly added to the catalog
    pub endpoints_added: usize,

    /// Fast-path registrations recorded
    pub fast_paths: usize,
}

/// Merge the dataset descriptions in a metadata fact set into the catalog.
///
/// Endpoints are deduplicated against what the catalog already holds.
///
/// Fast paths discovered here are keyed by the dataset's *subject
/// identifier*, while fan-out looks them up by the resolved *endpoint URL*.
/// Those identifiers only coincide when the publisher uses the endpoint URL
/// as the dataset subject; the mismatch is inherited behavior and is left
/// as-is rather than silently remapped. Callers that need a fast path under
/// the endpoint URL register it with [`Catalog::add_fast_path`].
pub fn resolve_metadata(facts: &[Fact], catalog: &mut Catalog) -> ResolveSummary {
    let mut summary = ResolveSummary::default();

    let dataset_pattern = FactPattern::new()
        .with_predicate(vocab::RDF_TYPE)
        .with_object(Term::named(vocab::DCAT_DATASET));

    for dataset in filter_facts(&dataset_pattern, facts) {
        summary.datasets += 1;

        let distribution_pattern = FactPattern::new()
            .with_subject(dataset.subject.as_str())
            .with_predicate(vocab::DCAT_DISTRIBUTION);

        for distribution in filter_facts(&distribution_pattern, facts) {
            let download_pattern = FactPattern::new()
                .with_subject(distribution.object.as_str())
                .with_predicate(vocab::DCAT_DOWNLOAD_URL);

            for download in filter_facts(&download_pattern, facts) {
                let endpoint = download.object.as_str();
                if !catalog.contains(endpoint) {
                    summary.endpoints_added += 1;
                }
                catalog.add_dataset(endpoint);
            }
        }

        let gate_pattern = FactPattern::new()
            .with_subject(dataset.subject.as_str())
            .with_predicate(vocab::MDI_RANGE_GATE);

        for gate in filter_facts(&gate_pattern, facts) {
            catalog.record_fast_path(dataset.subject.as_str(), gate.object.as_str());
            summary.fast_paths += 1;
        }
    }

    tracing::info!(
        datasets = summary.datasets,
        endpoints_added = summary.endpoints_added,
        fast_paths = summary.fast_paths,
        "Catalog resolution complete"
    );

    summary
}
