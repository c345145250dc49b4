//! Template documents
//! Author: kartik4905
//!
//! A template is an existing document whose object graph is copied into a fresh
//! store before any new content is added. Reading the document is left to an
//! [`ObjectSource`]; [`importer`] does the copying.

pub mod importer;
pub mod lopdf_source;

pub use importer::{import_template, ImportedRoots};
pub use lopdf_source::LopdfSource;

use lopdf::{Object as SourceObject, ObjectId as SourceId};

use crate::error::SourceError;

/// The two entry points of a parsed document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTrailer {
    pub info: Option<SourceObject>,
    pub root: Option<SourceObject>,
}

/// Read access to an already parsed document.
///
/// Values are exposed through lopdf's object model, which is what tells the
/// importer dictionaries, arrays, references, streams and strings apart.
pub trait ObjectSource {
    fn trailer(&self) -> SourceTrailer;

    /// Dereferences an indirect object of the source document.
    fn resolve(&self, id: SourceId) -> Result<SourceObject, SourceError>;

    /// Whether resolved streams carry their dictionary separately from their
    /// bytes. Importing is refused when they do not.
    fn exposes_stream_dictionaries(&self) -> bool {
        true
    }
}

impl<S: ObjectSource + ?Sized> ObjectSource for &S {
    fn trailer(&self) -> SourceTrailer {
        (**self).trailer()
    }

    fn resolve(&self, id: SourceId) -> Result<SourceObject, SourceError> {
        (**self).resolve(id)
    }

    fn exposes_stream_dictionaries(&self) -> bool {
        (**self).exposes_stream_dictionaries()
    }
}
