//! Template reading backed by lopdf

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use lopdf::{Document, Object as SourceObject, ObjectId as SourceId};
use tracing::{debug, instrument};

use super::{ObjectSource, SourceTrailer};
use crate::error::{Error, Result, SourceError, TemplateError};

impl ObjectSource for Document {
    fn trailer(&self) -> SourceTrailer {
        SourceTrailer {
            info: self.trailer.get(b"Info").ok().cloned(),
            root: self.trailer.get(b"Root").ok().cloned(),
        }
    }

    // A dangling reference reads as null, the way PDF readers treat it.
    fn resolve(&self, id: SourceId) -> std::result::Result<SourceObject, SourceError> {
        Ok(self.objects.get(&id).cloned().unwrap_or(SourceObject::Null))
    }
}

/// A template document loaded from disk.
#[derive(Debug)]
pub struct LopdfSource {
    path: PathBuf,
    document: Document,
}

impl LopdfSource {
    /// Opens and parses `path`.
    ///
    /// A path that is not a readable file is a usage error and is reported before
    /// any parsing happens. Parse failures become [`TemplateError`]s.
    #[instrument]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::usage(format!("{} does not exist", path.display())));
        }
        let file = File::open(path)
            .map_err(|e| Error::usage(format!("{} is not readable: {}", path.display(), e)))?;

        let document = Document::load_from(BufReader::new(file))
            .map_err(|e| TemplateError::from(SourceError::from(e)))?;
        debug!(objects = document.objects.len(), "template parsed");

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl From<Document> for LopdfSource {
    fn from(document: Document) -> Self {
        Self {
            path: PathBuf::new(),
            document,
        }
    }
}

impl ObjectSource for LopdfSource {
    fn trailer(&self) -> SourceTrailer {
        ObjectSource::trailer(&self.document)
    }

    fn resolve(&self, id: SourceId) -> std::result::Result<SourceObject, SourceError> {
        ObjectSource::resolve(&self.document, id)
    }
}
