//! Logger setup for the object store and its CLI
//! Author: kartik4905
//! Created: 2025-06-05

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber filtered by `RUST_LOG`, falling back to the
/// configured level.
#[derive(Debug, Clone)]
pub struct Logger {
    level: String,
    initialized: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_level("info")
    }

    pub fn with_level(level: &str) -> Self {
        Self {
            level: level.to_string(),
            initialized: false,
        }
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// Filter used when `RUST_LOG` is unset: the library and the `objstore`
    /// binary both log at the configured level.
    pub fn directives(&self) -> String {
        format!("pdf_objstore={0},objstore={0}", self.level)
    }

    /// Returns false when another subscriber was already installed.
    pub fn init(&mut self) -> bool {
        if self.initialized {
            return true;
        }
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directives()));

        self.initialized = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
        if self.initialized {
            debug!("Logger initialized with level: {}", self.level);
        }
        self.initialized
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
