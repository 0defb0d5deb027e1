//! Federation facade
//!
//! Ties the catalog, the external source clients, and the aggregation layer
//! together behind the public operation surface. Consumers see one logical
//! stream per query regardless of how many physical sources back it.

use crate::aggregator::{
    entry_url, spawn_facility_fanout, spawn_interval_fanout, FacilityStream, MeasurementStream,
};
use crate::catalog::{resolve_metadata, Catalog, ResolveSummary};
use crate::config::FederationConfig;
use crate::sources::{GraphSource, IntervalSource, MeasurementRecord};
use crate::Result;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// Federated view over every cataloged parking dataset.
///
/// Owns the catalog registry; the two collaborator clients are shared with
/// the spawned fan-out tasks.
pub struct Federation<G, M> {
    catalog: Mutex<Catalog>,
    graphs: Arc<G>,
    measurements: Arc<M>,
    config: FederationConfig,
}

impl<G: GraphSource, M: IntervalSource> Federation<G, M> {
    pub fn new(graphs: G, measurements: M) -> Self {
        Self::with_config(graphs, measurements, FederationConfig::default())
    }

    pub fn with_config(graphs: G, measurements: M, config: FederationConfig) -> Self {
        Self {
            catalog: Mutex::new(Catalog::new()),
            graphs: Arc::new(graphs),
            measurements: Arc::new(measurements),
            config,
        }
    }

    pub fn config(&self) -> &FederationConfig {
        &self.config
    }

    // The catalog lock is only ever held for plain map/vec operations,
    // never across an await.
    fn catalog(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Resolve a metadata document and merge its datasets into the catalog.
    ///
    /// # Errors
    /// Fails with `Fetch` when the document is unreachable or unparsable;
    /// the catalog is left untouched in that case.
    pub async fn resolve_catalog(&self, metadata_url: &str) -> Result<ResolveSummary> {
        tracing::info!(metadata = %metadata_url, "Resolving catalog");
        let facts = self.graphs.fetch_graph(metadata_url).await?;
        Ok(resolve_metadata(&facts, &mut self.catalog()))
    }

    /// Resolve every metadata document named in the configuration, in order.
    pub async fn resolve_all(&self) -> Result<()> {
        // Clone the URL list so the fetch loop never touches config storage.
        let catalogs = self.config.catalogs.clone();
        for metadata_url in &catalogs {
            self.resolve_catalog(metadata_url).await?;
        }
        Ok(())
    }

    /// Add a dataset endpoint directly. Idempotent.
    pub fn add_dataset(&self, url: &str) {
        self.catalog().add_dataset(url);
    }

    /// Register a fast-path entry point for a cataloged dataset.
    ///
    /// # Errors
    /// Fails with `NotFound` when `dataset_url` is not in the catalog.
    pub fn add_fast_path(&self, dataset_url: &str, fast_path_url: &str) -> Result<()> {
        self.catalog().add_fast_path(dataset_url, fast_path_url)
    }

    /// Ordered snapshot of the cataloged endpoint URLs
    pub fn list_catalog(&self) -> Vec<String> {
        self.catalog().list()
    }

    /// Merged snapshot stream of facility records across every cataloged
    /// source. Per-source failures appear on the stream's fault channel and
    /// never stop other sources; the stream completes once all sources have
    /// resolved. An empty catalog completes immediately.
    pub fn get_facilities(&self) -> FacilityStream {
        let targets: Vec<(String, String)> = {
            let catalog = self.catalog();
            catalog
                .list()
                .into_iter()
                .map(|url| {
                    let query = catalog
                        .fast_path_for(&url)
                        .unwrap_or(url.as_str())
                        .to_string();
                    (url, query)
                })
                .collect()
        };
        spawn_facility_fanout(Arc::clone(&self.graphs), targets)
    }

    /// Merged time-ranged measurement stream across every cataloged source.
    /// The first source failure surfaces as an `Err` item; treat it as
    /// fatal. An empty catalog completes immediately.
    pub fn get_interval(&self, from: i64, to: i64) -> MeasurementStream {
        let keys = self.catalog().list();
        spawn_interval_fanout(
            Arc::clone(&self.measurements),
            keys,
            from,
            to,
            self.config.channel_capacity,
        )
    }

    /// The external fetcher's measurement stream for one endpoint, without
    /// aggregation.
    ///
    /// # Errors
    /// Fails with `Fetch` when the collaborator cannot produce the stream.
    pub async fn get_dataset_interval(
        &self,
        from: i64,
        to: i64,
        dataset_url: &str,
    ) -> Result<ReceiverStream<MeasurementRecord>> {
        let entry = entry_url(dataset_url, to);
        let rx = self.measurements.fetch_interval(from, to, &entry).await?;
        Ok(ReceiverStream::new(rx))
    }

    /// A single dataset's measurement stream filtered to one facility URI.
    /// Non-matching measurements are dropped; completion passes through
    /// unchanged.
    pub async fn get_facility_interval(
        &self,
        from: i64,
        to: i64,
        dataset_url: &str,
        facility_uri: &str,
    ) -> Result<ReceiverStream<MeasurementRecord>> {
        let entry = entry_url(dataset_url, to);
        let mut upstream = self.measurements.fetch_interval(from, to, &entry).await?;

        let (tx, rx) = mpsc::channel(self.config.channel_capacity.max(1));
        let facility_uri = facility_uri.to_string();
        tokio::spawn(async move {
            while let Some(record) = upstream.recv().await {
                if record.facility_uri != facility_uri {
                    continue;
                }
                if tx.send(record).await.is_err() {
                    break;
                }
            }
        });

        Ok(ReceiverStream::new(rx))
    }
}
