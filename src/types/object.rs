//! PDF object payloads
//! Author: kartik4905
//!
//! Every value that can sit inside an indirect object: scalars, names, literal
//! strings, arrays, dictionaries, streams and references to other indirect objects.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::name::Name;

/// Identifier of an indirect object inside a store.
pub type ObjectId = u32;

/// Name → value mapping. Key order is kept so that imported dictionaries come
/// out the way they went in.
pub type Dictionary = IndexMap<Name, Object>;

/// A stream that sits inline in another value rather than behind a reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stream {
    pub dict: Dictionary,
    /// Raw bytes, still encoded with whatever `Filter` the dictionary names.
    pub content: Vec<u8>,
}

impl Stream {
    pub fn new(dict: Dictionary, content: Vec<u8>) -> Self {
        Self { dict, content }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Object {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    /// Single precision, as the template reader stores it.
    Real(f32),
    Name(Name),
    /// Character string. Kept apart from [`Object::Stream`] because the writer
    /// escapes the two differently.
    LiteralString(Vec<u8>),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    Stream(Stream),
    Reference(ObjectId),
}

impl Object {
    pub fn name(name: impl Into<Name>) -> Self {
        Object::Name(name.into())
    }

    pub fn string(text: impl Into<Vec<u8>>) -> Self {
        Object::LiteralString(text.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut Dictionary> {
        match self {
            Object::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Object]> {
        match self {
            Object::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The name as text; `None` for non-names and non-UTF-8 names.
    pub fn as_name(&self) -> Option<&str> {
        self.as_name_ref().and_then(Name::as_str)
    }

    pub fn as_name_ref(&self) -> Option<&Name> {
        match self {
            Object::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Object::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<ObjectId> {
        match self {
            Object::Reference(id) => Some(*id),
            _ => None,
        }
    }

    /// Looks up `key` when this is a dictionary.
    pub fn get(&self, key: &str) -> Option<&Object> {
        self.as_dict().and_then(|dict| dict.get(key.as_bytes()))
    }

    /// The `/Type` marker of a dictionary, if it has one.
    pub fn type_name(&self) -> Option<&str> {
        self.get("Type").and_then(Object::as_name)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Object::Null => "null",
            Object::Boolean(_) => "boolean",
            Object::Integer(_) => "integer",
            Object::Real(_) => "real",
            Object::Name(_) => "name",
            Object::LiteralString(_) => "string",
            Object::Array(_) => "array",
            Object::Dictionary(_) => "dictionary",
            Object::Stream(_) => "stream",
            Object::Reference(_) => "reference",
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<i32> for Object {
    fn from(value: i32) -> Self {
        Object::Integer(value.into())
    }
}

impl From<f32> for Object {
    fn from(value: f32) -> Self {
        Object::Real(value)
    }
}

impl From<Vec<Object>> for Object {
    fn from(items: Vec<Object>) -> Self {
        Object::Array(items)
    }
}

impl From<Dictionary> for Object {
    fn from(dict: Dictionary) -> Self {
        Object::Dictionary(dict)
    }
}

impl From<Stream> for Object {
    fn from(stream: Stream) -> Self {
        Object::Stream(stream)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Null => write!(f, "null"),
            Object::Boolean(value) => write!(f, "{}", value),
            Object::Integer(value) => write!(f, "{}", value),
            Object::Real(value) => write!(f, "{}", value),
            Object::Name(name) => write!(f, "/{}", name),
            Object::LiteralString(bytes) => write!(f, "({})", String::from_utf8_lossy(bytes)),
            Object::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Object::Dictionary(dict) => {
                write!(f, "<<")?;
                for (key, value) in dict {
                    write!(f, " /{} {}", key, value)?;
                }
                write!(f, " >>")
            }
            Object::Stream(stream) => write!(f, "stream({} bytes)", stream.content.len()),
            Object::Reference(id) => write!(f, "{} 0 R", id),
        }
    }
}
