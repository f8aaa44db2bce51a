//! The emitted, serializable source map.

use crate::codec;
use crate::map::ParsedMap;
use crate::tree::FlattenedMap;
use crate::{RemapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A v3 source map produced by flattening a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub mappings: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    pub names: Vec<String>,
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<Option<String>>>,
}

/// A position in an original source, as reported by [`SourceMap::original_position_for`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OriginalPosition {
    pub source: String,
    pub line: u32,
    pub column: u32,
    pub name: Option<String>,
}

impl SourceMap {
    /// Encode a flattened tree. With `exclude_content` the `sourcesContent`
    /// field is left out entirely.
    pub fn from_flattened(map: FlattenedMap, exclude_content: bool) -> Result<Self> {
        let sources_content = if exclude_content {
            None
        } else {
            Some(map.sources_content)
        };

        Ok(Self {
            version: 3,
            file: map.file,
            mappings: codec::encode(&map.mappings)?,
            source_root: None,
            names: map.names,
            sources: map.sources,
            sources_content,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| RemapError::Serialize(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RemapError::Serialize(e.to_string()))
    }

    /// Decode this map for lookups. Parse once and query the result when
    /// resolving many positions.
    pub fn parse(&self) -> Result<ParsedMap> {
        ParsedMap::parse(self.clone().into(), "")
    }

    /// Look up the original position of a zero-based generated position.
    ///
    /// Decodes the whole map on every call; see [`SourceMap::parse`].
    pub fn original_position_for(&self, line: u32, column: u32) -> Result<Option<OriginalPosition>> {
        Ok(self.parse()?.original_position_for(line, column))
    }
}

impl fmt::Display for SourceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
