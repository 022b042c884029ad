//! Contract ABI JSON model.
//!
//! Only the parts needed to rebuild canonical signatures are modelled:
//! the entry `type`, its `name` and the `type`/`components` of its inputs.
//! Everything else in the document is ignored.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::FindError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Solidity ABI JSON treats an entry without `type` as a function.
    #[default]
    Function,
    Event,
    Error,
    Constructor,
    Fallback,
    Receive,
    /// Any other `type` value. Never matched, only skipped.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbiEntry {
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    pub name: Option<String>,
    pub inputs: Option<Vec<Param>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Param {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub components: Option<Vec<Param>>,
}

impl AbiEntry {
    pub fn is_error(&self) -> bool {
        self.kind == EntryKind::Error
    }

    fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "<unnamed>".to_string())
    }

    /// Canonical `name(type1,type2,...)` signature of this entry.
    ///
    /// `index` is the entry's position in the ABI and only shows up in errors.
    pub fn signature(&self, index: usize) -> Result<String, FindError> {
        let name = self.name.as_deref().ok_or_else(|| FindError::MissingField {
            index,
            name: self.display_name(),
            field: "name",
        })?;
        let inputs = self.inputs.as_ref().ok_or_else(|| FindError::MissingField {
            index,
            name: self.display_name(),
            field: "inputs",
        })?;

        let types = inputs
            .iter()
            .map(|param| param.canonical_type(index, name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(format!("{}({})", name, types.join(",")))
    }
}

impl Param {
    /// Type string as it appears in a signature. Tuples are expanded to
    /// `(t1,t2,...)` keeping any array suffix, e.g. `tuple[]` -> `(address,uint256)[]`.
    pub fn canonical_type(&self, index: usize, entry_name: &str) -> Result<String, FindError> {
        let ty = self.ty.as_deref().ok_or_else(|| FindError::MissingField {
            index,
            name: entry_name.to_string(),
            field: "inputs[].type",
        })?;

        let suffix = match ty.strip_prefix("tuple") {
            Some(suffix) if suffix.is_empty() || suffix.starts_with('[') => suffix,
            _ => return Ok(ty.to_string()),
        };

        let components = self
            .components
            .as_ref()
            .ok_or_else(|| FindError::MissingComponents {
                index,
                name: entry_name.to_string(),
            })?;
        let inner = components
            .iter()
            .map(|c| c.canonical_type(index, entry_name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(format!("({}){}", inner.join(","), suffix))
    }
}

/// Parse an ABI document held in memory.
pub fn parse_abi(json: &str) -> Result<Vec<AbiEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and parse the ABI file at `path`. The file is closed before returning.
pub fn load_abi(path: impl AsRef<Path>) -> Result<Vec<AbiEntry>, FindError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FindError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let entries: Vec<AbiEntry> = serde_json::from_reader(reader).map_err(|source| FindError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), entries = entries.len(), "loaded ABI");

    Ok(entries)
}
