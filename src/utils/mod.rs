//! Shared utilities

pub mod logger;

pub use self::logger::Logger;
