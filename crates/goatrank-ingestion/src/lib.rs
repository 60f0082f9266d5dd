//! goatrank-ingestion: loading player data into the store.
//!
//! - Built-in sample dataset for local development
//! - JSON file import of the same record shape
//! - Population with optional reset and duplicate skipping

pub mod models;
pub mod sample;
pub mod import;
pub mod populate;

pub use models::PlayerImport;
pub use populate::{populate, PopulateReport};
