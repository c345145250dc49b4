//! PDF object repository
//! Author: kartik4905
//! Created: 2025-06-03
//!
//! Holds every indirect object of the document being generated, together with
//! the Info, Catalog and Pages roots each document needs. A store can start
//! empty or be seeded from a template document.

pub mod pages;
pub mod table;

pub use table::ObjectTable;

use indexmap::map::Values;
use tracing::{debug, instrument};

use crate::config::StoreOptions;
use crate::error::{Result, TemplateError};
use crate::template::{import_template, ImportedRoots, LopdfSource, ObjectSource};
use crate::types::{Dictionary, Name, Object, ObjectId, Reference};

#[derive(Debug, Clone)]
pub struct ObjectStore {
    table: ObjectTable,
    info: ObjectId,
    root: ObjectId,
}

impl ObjectStore {
    /// An empty document: Info, Catalog and an empty Pages tree.
    pub fn new() -> Self {
        Self::bootstrap(ObjectTable::new(), ImportedRoots::default(), None)
    }

    /// Builds a store from options, importing the template if one is named.
    #[instrument(skip_all, fields(template = ?options.template))]
    pub fn with_options(options: &StoreOptions) -> Result<Self> {
        options.validate()?;
        match &options.template {
            Some(path) => {
                let source = LopdfSource::open(path)?;
                Self::from_source(&source, options)
            }
            None => Ok(Self::bootstrap(ObjectTable::new(), ImportedRoots::default(), options.info.clone())),
        }
    }

    /// Seeds a store from an already opened document. `options.template` is
    /// ignored here.
    #[instrument(skip_all)]
    pub fn from_source<S: ObjectSource + ?Sized>(source: &S, options: &StoreOptions) -> Result<Self> {
        let mut table = ObjectTable::new();
        let roots = import_template(&mut table, source)?;

        if let Some(root) = roots.root {
            let data = table.get(root).map(|r| &r.data);
            if !matches!(data, Some(Object::Dictionary(_))) {
                let kind = data.map_or("nothing", Object::kind);
                return Err(TemplateError::Malformed(format!("document catalog is {}", kind)).into());
            }
        }

        Ok(Self::bootstrap(table, roots, options.info.clone()))
    }

    fn bootstrap(mut table: ObjectTable, roots: ImportedRoots, info: Option<Dictionary>) -> Self {
        let info = match roots.info {
            Some(id) => id,
            None => table.allocate(info.unwrap_or_default()).identifier,
        };
        let root = match roots.root {
            Some(id) => id,
            None => {
                let catalog = Dictionary::from([(Name::from("Type"), Object::name("Catalog"))]);
                table.allocate(catalog).identifier
            }
        };

        let has_pages = table
            .get(root)
            .and_then(|r| r.data.get("Pages"))
            .is_some_and(|pages| !pages.is_null());
        if !has_pages {
            let pages = Dictionary::from([
                (Name::from("Type"), Object::name("Pages")),
                (Name::from("Count"), Object::Integer(0)),
                (Name::from("Kids"), Object::Array(Vec::new())),
            ]);
            let pages = table.allocate(pages).to_object();
            if let Some(catalog) = table.get_mut(root).and_then(|r| r.data.as_dict_mut()) {
                catalog.insert(Name::from("Pages"), pages);
            }
        }

        debug!(objects = table.len(), info, root, "document roots ready");
        Self { table, info, root }
    }

    /// Allocates a new indirect object holding `data`.
    pub fn allocate(&mut self, data: impl Into<Object>) -> &mut Reference {
        self.table.allocate(data)
    }

    /// Adds a reference that already carries an identifier.
    pub fn insert(&mut self, reference: Reference) -> &mut Reference {
        self.table.insert(reference)
    }

    pub fn get(&self, identifier: ObjectId) -> Option<&Reference> {
        self.table.get(identifier)
    }

    pub fn get_mut(&mut self, identifier: ObjectId) -> Option<&mut Reference> {
        self.table.get_mut(identifier)
    }

    /// All objects in the order they will be written.
    pub fn iter(&self) -> Values<'_, ObjectId, Reference> {
        self.table.iter()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn info_id(&self) -> ObjectId {
        self.info
    }

    pub fn root_id(&self) -> ObjectId {
        self.root
    }

    // The roots are allocated during construction and nothing is ever removed,
    // so the lookups below cannot miss.

    pub fn info(&self) -> &Reference {
        self.root_entry(self.info)
    }

    pub fn info_mut(&mut self) -> &mut Reference {
        let id = self.info;
        self.root_entry_mut(id)
    }

    pub fn root(&self) -> &Reference {
        self.root_entry(self.root)
    }

    pub fn root_mut(&mut self) -> &mut Reference {
        let id = self.root;
        self.root_entry_mut(id)
    }

    /// The catalog's `Pages` entry, normally a reference to the page tree root.
    pub fn pages(&self) -> Option<&Object> {
        self.root().data.get("Pages")
    }

    fn root_entry(&self, id: ObjectId) -> &Reference {
        match self.table.get(id) {
            Some(reference) => reference,
            None => unreachable!("document root {} missing from object table", id),
        }
    }

    fn root_entry_mut(&mut self, id: ObjectId) -> &mut Reference {
        match self.table.get_mut(id) {
            Some(reference) => reference,
            None => unreachable!("document root {} missing from object table", id),
        }
    }
}

impl Default for ObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ObjectStore {
    type Item = &'a Reference;
    type IntoIter = Values<'a, ObjectId, Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.iter()
    }
}

impl Extend<Reference> for ObjectStore {
    fn extend<I: IntoIterator<Item = Reference>>(&mut self, references: I) {
        for reference in references {
            self.table.insert(reference);
        }
    }
}
