//! Configuration system
//!
//! YAML-loadable federation settings: the metadata documents to resolve at
//! startup and channel sizing for the merged interval stream.

mod federation_config;

pub use federation_config::FederationConfig;
