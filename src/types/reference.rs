//! Indirect object references
//! Author: kartik4905

use std::fmt;

use serde::{Deserialize, Serialize};

use super::object::{Object, ObjectId};

/// An indirect object: a fixed identifier plus a payload that can be filled in
/// or replaced after the reference has been handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub identifier: ObjectId,
    pub generation: u16,
    pub data: Object,
    /// Raw stream bytes. When present, `data` holds the stream dictionary.
    pub stream: Option<Vec<u8>>,
}

impl Reference {
    pub fn new(identifier: ObjectId, data: impl Into<Object>) -> Self {
        Self {
            identifier,
            generation: 0,
            data: data.into(),
            stream: None,
        }
    }

    pub fn with_generation(mut self, generation: u16) -> Self {
        self.generation = generation;
        self
    }

    /// Appends raw bytes to this object's stream, starting one if needed.
    pub fn append_stream(&mut self, bytes: &[u8]) -> &mut Self {
        self.stream.get_or_insert_with(Vec::new).extend_from_slice(bytes);
        self
    }

    pub fn is_stream(&self) -> bool {
        self.stream.is_some()
    }

    /// A value pointing at this object, for use inside other payloads.
    pub fn to_object(&self) -> Object {
        Object::Reference(self.identifier)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.identifier, self.generation)
    }
}
