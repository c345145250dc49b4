//! Identifier-keyed table of indirect objects
//! Author: kartik4905

use indexmap::{map::Values, IndexMap};
use tracing::trace;

use crate::types::{Object, ObjectId, Reference};

/// Indirect objects keyed by identifier, iterated in insertion order.
///
/// Insertion order is the order the writer emits objects in. New identifiers are
/// handed out as `len() + 1`, so a table that only ever allocates holds `1..=n`.
#[derive(Debug, Clone, Default)]
pub struct ObjectTable {
    objects: IndexMap<ObjectId, Reference>,
}

impl ObjectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reference under the next free identifier and stores it.
    pub fn allocate(&mut self, data: impl Into<Object>) -> &mut Reference {
        let identifier = self.next_identifier();
        trace!(identifier, "allocating indirect object");
        self.insert(Reference::new(identifier, data))
    }

    /// Stores a reference under its own identifier.
    ///
    /// An existing entry with the same identifier is replaced and keeps its place
    /// in the iteration order.
    pub fn insert(&mut self, reference: Reference) -> &mut Reference {
        let (index, _) = self.objects.insert_full(reference.identifier, reference);
        &mut self.objects[index]
    }

    pub fn get(&self, identifier: ObjectId) -> Option<&Reference> {
        self.objects.get(&identifier)
    }

    pub fn get_mut(&mut self, identifier: ObjectId) -> Option<&mut Reference> {
        self.objects.get_mut(&identifier)
    }

    pub fn contains(&self, identifier: ObjectId) -> bool {
        self.objects.contains_key(&identifier)
    }

    pub fn iter(&self) -> Values<'_, ObjectId, Reference> {
        self.objects.values()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn next_identifier(&self) -> ObjectId {
        self.objects.len() as ObjectId + 1
    }
}
