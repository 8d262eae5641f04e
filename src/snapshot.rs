use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::common::typedefs::bs64_string::Base64String;
use crate::error::PatcherError;

/// An account dumped by `solana account --output json-compact`.
///
/// The document is kept as raw JSON so that everything except `account.data[0]` is written
/// back exactly as it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    path: PathBuf,
    document: Value,
}

impl AccountSnapshot {
    pub fn from_value(path: impl Into<PathBuf>, document: Value) -> Result<Self, PatcherError> {
        let snapshot = Self {
            path: path.into(),
            document,
        };
        snapshot.data()?;
        Ok(snapshot)
    }

    pub fn load(path: &Path) -> Result<Self, PatcherError> {
        let contents = fs::read_to_string(path).map_err(|e| PatcherError::io(path, e))?;
        let document = serde_json::from_str(&contents).map_err(|e| {
            PatcherError::MalformedSnapshot {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        Self::from_value(path, document)
    }

    /// Overwrites the file the snapshot was loaded from.
    pub fn save(&self) -> Result<(), PatcherError> {
        let contents = serde_json::to_string(&self.document).map_err(|e| {
            PatcherError::MalformedSnapshot {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;
        fs::write(&self.path, contents).map_err(|e| PatcherError::io(&self.path, e))
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn data(&self) -> Result<Base64String, PatcherError> {
        self.document
            .pointer("/account/data/0")
            .and_then(Value::as_str)
            .map(Base64String::from)
            .ok_or_else(|| self.malformed("missing base64 string at account.data[0]"))
    }

    pub fn set_data(&mut self, data: Base64String) -> Result<(), PatcherError> {
        if let Some(slot) = self.document.pointer_mut("/account/data/0") {
            if slot.is_string() {
                *slot = Value::String(data.0);
                return Ok(());
            }
        }
        Err(self.malformed("missing base64 string at account.data[0]"))
    }

    pub fn decode_data(&self) -> Result<Vec<u8>, PatcherError> {
        Ok(self.data()?.decode()?)
    }

    fn malformed(&self, reason: &str) -> PatcherError {
        PatcherError::MalformedSnapshot {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}
