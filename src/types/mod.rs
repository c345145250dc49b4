// Type definitions for the object store

pub mod name;
pub mod object;
pub mod reference;

pub use name::Name;
pub use object::*;
pub use reference::*;
