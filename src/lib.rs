//! Indirect-object repository for PDF generation
//! Allocates and tracks the indirect objects of a document under construction,
//! bootstraps its Info/Catalog/Pages roots and can seed everything from an
//! existing template document.

pub mod config;
pub mod error;
pub mod store;
pub mod template;
pub mod types;

// Shared Utilities
pub mod utils;

// Re-exports for crate consumers
pub use config::StoreOptions;
pub use error::{Error, Result, SourceError, TemplateError};
pub use store::{ObjectStore, ObjectTable};
pub use template::{import_template, ImportedRoots, LopdfSource, ObjectSource, SourceTrailer};
pub use types::{Dictionary, Name, Object, ObjectId, Reference, Stream};
pub use utils::Logger;
