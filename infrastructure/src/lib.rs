//! Infrastructure layer for mul-roster
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod export;
pub mod share;
pub mod store;

// Re-export commonly used types
pub use catalog::MulCatalogGateway;
pub use config::{
    ConfigIssue, ConfigLoader, FileCatalogConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileShareConfig, FileStoreConfig, Severity,
};
pub use export::{ExportError, write_export};
pub use share::{ShareError, ShareLinkBuilder, ShareScope, params_from_url};
pub use store::JsonFileRosterStore;
