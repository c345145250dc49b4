//! Object graph import
//! Author: kartik4905
//!
//! Copies the object graph of a template document into an [`ObjectTable`],
//! giving every external indirect object exactly one local identifier and
//! rewriting nested references to match.
//!
//! Documents routinely contain cycles (a page's `Parent` points back at the node
//! listing it in `Kids`). The placeholder for an external object is recorded in
//! the `loaded` map before its contents are visited, so a second visit returns
//! the placeholder instead of descending again.

use std::collections::HashMap;

use lopdf::{Dictionary as SourceDictionary, Object as SourceObject, ObjectId as SourceId};
use tracing::{info, instrument, trace};

use super::ObjectSource;
use crate::error::{Error, Result};
use crate::store::ObjectTable;
use crate::types::{Dictionary, Name, Object, ObjectId, Stream};

/// Local identifiers of the template's trailer entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportedRoots {
    pub info: Option<ObjectId>,
    pub root: Option<ObjectId>,
}

/// Imports everything reachable from the source trailer's Info and Root.
///
/// Any failure aborts the whole import; the table may then hold placeholders
/// and must be discarded by the caller.
#[instrument(skip_all)]
pub fn import_template<S: ObjectSource + ?Sized>(
    table: &mut ObjectTable,
    source: &S,
) -> Result<ImportedRoots> {
    if !source.exposes_stream_dictionaries() {
        return Err(Error::DependencyMismatch(
            "template reader does not expose stream dictionaries".into(),
        ));
    }

    let trailer = source.trailer();
    let mut importer = Importer {
        table,
        source,
        loaded: HashMap::new(),
    };

    let info = match &trailer.info {
        Some(value) => importer.import_root(value)?,
        None => None,
    };
    let root = match &trailer.root {
        Some(value) => importer.import_root(value)?,
        None => None,
    };

    info!(objects = importer.loaded.len(), ?info, ?root, "template imported");
    Ok(ImportedRoots { info, root })
}

struct Importer<'a, S: ?Sized> {
    table: &'a mut ObjectTable,
    source: &'a S,
    /// External object → local identifier, for this import only.
    loaded: HashMap<SourceId, ObjectId>,
}

impl<S: ObjectSource + ?Sized> Importer<'_, S> {
    fn import_root(&mut self, value: &SourceObject) -> Result<Option<ObjectId>> {
        match self.import(value)? {
            Object::Null => Ok(None),
            Object::Reference(id) => Ok(Some(id)),
            // Direct trailer values still need an identifier of their own.
            direct => Ok(Some(self.table.allocate(direct).identifier)),
        }
    }

    fn import(&mut self, value: &SourceObject) -> Result<Object> {
        let object = match value {
            SourceObject::Null => Object::Null,
            SourceObject::Boolean(value) => Object::Boolean(*value),
            SourceObject::Integer(value) => Object::Integer(*value),
            SourceObject::Real(value) => Object::Real(*value),
            SourceObject::Name(name) => Object::Name(Name::from(name.as_slice())),
            SourceObject::String(bytes, _) => Object::LiteralString(bytes.clone()),
            SourceObject::Array(items) => Object::Array(
                items
                    .iter()
                    .map(|item| self.import(item))
                    .collect::<Result<Vec<_>>>()?,
            ),
            SourceObject::Dictionary(dict) => Object::Dictionary(self.import_dictionary(dict)?),
            SourceObject::Stream(stream) => Object::Stream(Stream::new(
                self.import_dictionary(&stream.dict)?,
                stream.content.clone(),
            )),
            SourceObject::Reference(id) => Object::Reference(self.import_reference(*id)?),
        };
        Ok(object)
    }

    fn import_dictionary(&mut self, dict: &SourceDictionary) -> Result<Dictionary> {
        let mut imported = Dictionary::with_capacity(dict.len());
        for (key, value) in dict.iter() {
            imported.insert(Name::from(key.as_slice()), self.import(value)?);
        }
        Ok(imported)
    }

    fn import_reference(&mut self, id: SourceId) -> Result<ObjectId> {
        if let Some(&local) = self.loaded.get(&id) {
            return Ok(local);
        }

        // Must be registered before recursing, or cycles never terminate.
        let local = self.table.allocate(Object::Null).identifier;
        self.loaded.insert(id, local);
        trace!(source = ?id, local, "importing indirect object");

        match self.source.resolve(id)? {
            SourceObject::Stream(stream) => {
                let dict = self.import_dictionary(&stream.dict)?;
                if let Some(placeholder) = self.table.get_mut(local) {
                    placeholder.data = Object::Dictionary(dict);
                    placeholder.stream = Some(stream.content);
                }
            }
            other => {
                let data = self.import(&other)?;
                if let Some(placeholder) = self.table.get_mut(local) {
                    placeholder.data = data;
                }
            }
        }

        Ok(local)
    }
}
