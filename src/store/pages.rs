//! Page tree navigation

use std::collections::HashSet;

use tracing::warn;

use super::ObjectStore;
use crate::types::{Object, ObjectId};

impl ObjectStore {
    /// Identifier of page `k`, counting from 0. Negative indices count from the
    /// end, so -1 is the last page.
    ///
    /// ```
    /// # use pdf_objstore::ObjectStore;
    /// let store = ObjectStore::new();
    /// assert_eq!(store.page_identifier_at(0), None);
    /// ```
    pub fn page_identifier_at(&self, k: i64) -> Option<ObjectId> {
        let pages = self.page_ids();
        position(pages.len(), k).map(|i| pages[i])
    }

    /// Leaf page identifiers in document order.
    pub fn page_ids(&self) -> Vec<ObjectId> {
        let mut pages = Vec::new();
        if let Some(node) = self.pages() {
            self.collect_pages(node, &mut pages, &mut HashSet::new());
        }
        pages
    }

    pub fn page_count(&self) -> usize {
        self.page_ids().len()
    }

    // Only `Kids` edges are followed; `Parent` links back up are never read.
    fn collect_pages(&self, node: &Object, pages: &mut Vec<ObjectId>, visited: &mut HashSet<ObjectId>) {
        let Some(id) = node.as_reference() else {
            return;
        };
        if !visited.insert(id) {
            warn!(id, "page tree node reached twice, skipping");
            return;
        }
        let Some(reference) = self.get(id) else {
            return;
        };

        if reference.data.type_name() == Some("Page") {
            pages.push(id);
            return;
        }
        let kids = reference.data.get("Kids").map(|kids| self.follow(kids));
        if let Some(Object::Array(kids)) = kids {
            for kid in kids {
                self.collect_pages(kid, pages, visited);
            }
        }
    }

    /// Looks through one level of indirection.
    fn follow<'a>(&'a self, value: &'a Object) -> &'a Object {
        match value {
            Object::Reference(id) => self.get(*id).map_or(value, |r| &r.data),
            _ => value,
        }
    }
}

/// Maps an end-relative index onto `0..len`.
fn position(len: usize, k: i64) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let index = if k < 0 { len + k } else { k };
    if (0..len).contains(&index) {
        usize::try_from(index).ok()
    } else {
        None
    }
}
