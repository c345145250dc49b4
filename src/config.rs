//! Configuration types and validation for the object store
//! Author: kartik4905

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Dictionary;

/// Options for building an [`ObjectStore`](crate::store::ObjectStore).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Existing document whose object graph seeds the store.
    pub template: Option<PathBuf>,
    /// Initial Info dictionary, used only when no template supplied one.
    pub info: Option<Dictionary>,
}

impl StoreOptions {
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = Some(path.into());
        self
    }

    pub fn with_info(mut self, info: Dictionary) -> Self {
        self.info = Some(info);
        self
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::usage(format!("cannot read options {}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(content)
            .map_err(|e| Error::usage(format!("invalid options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.template {
            if path.as_os_str().is_empty() {
                return Err(Error::usage("template path is empty"));
            }
        }
        Ok(())
    }
}
