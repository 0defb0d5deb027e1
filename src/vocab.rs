//! Vocabulary terms used during catalog resolution and facility extraction
//!
//! Datasets are described with DCAT, facilities with the DATEX II vocabulary.
//! The range gate predicate marks an alternate entry point that offers a
//! richer query surface for interval data.

/// rdf:type
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// rdfs:label
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// dcat:Dataset — marks a subject as a dataset description
pub const DCAT_DATASET: &str = "http://www.w3.org/ns/dcat#Dataset";

/// dcat:distribution — links a dataset to its distributions
pub const DCAT_DISTRIBUTION: &str = "http://www.w3.org/ns/dcat#distribution";

/// dcat:downloadURL — links a distribution to its fetchable endpoint
pub const DCAT_DOWNLOAD_URL: &str = "http://www.w3.org/ns/dcat#downloadURL";

/// mdi:hasRangeGate — links a dataset to its fast-path entry point
pub const MDI_RANGE_GATE: &str =
    "https://w3id.org/multidimensional-interface/ontology#hasRangeGate";

/// datex:UrbanParkingSite — marks a subject as a parking facility
pub const DATEX_URBAN_PARKING_SITE: &str = "http://vocab.datex.org/terms#UrbanParkingSite";

/// datex:parkingNumberOfSpaces — total capacity of a parking facility
pub const DATEX_NUMBER_OF_SPACES: &str = "http://vocab.datex.org/terms#parkingNumberOfSpaces";
