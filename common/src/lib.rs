//! AgriGuard common – disease records, the catalog, the filter engine and
//! configuration shared by the server and the WASM client.

pub mod catalog;
pub mod config;
pub mod disease;
pub mod error;
pub mod filter;

pub use catalog::Catalog;
pub use disease::{DiseaseRecord, Severity};
pub use error::CatalogError;
pub use filter::{CropFilter, FilterState, SeverityFilter};
