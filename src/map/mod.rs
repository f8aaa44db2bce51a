//! Source map input forms and their parsed representation.
//!
//! A map can be supplied as JSON text, as an encoded [`RawSourceMap`], or as a
//! [`DecodedSourceMap`] whose mappings are already segment tables. All three
//! normalize into a [`ParsedMap`].

pub mod parsed;
pub mod resolve;

use crate::codec::SourceMapMappings;
use crate::source_map::SourceMap;
use serde::{Deserialize, Serialize};

pub use parsed::ParsedMap;

/// A v3 source map with VLQ-encoded mappings, as found on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSourceMap {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    #[serde(default)]
    pub sources: Vec<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub mappings: String,
}

/// A source map whose mappings are already decoded into segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedSourceMap {
    pub file: Option<String>,
    pub source_root: Option<String>,
    pub sources: Vec<Option<String>>,
    pub sources_content: Option<Vec<Option<String>>>,
    pub names: Vec<String>,
    pub mappings: SourceMapMappings,
}

/// Any form a source map may be handed to the remapper in.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceMapInput {
    /// Serialized JSON text.
    Json(String),
    /// Parsed JSON with encoded mappings.
    Encoded(RawSourceMap),
    /// Parsed JSON with decoded mappings.
    Decoded(DecodedSourceMap),
}

impl From<&str> for SourceMapInput {
    fn from(json: &str) -> Self {
        SourceMapInput::Json(json.to_string())
    }
}

impl From<String> for SourceMapInput {
    fn from(json: String) -> Self {
        SourceMapInput::Json(json)
    }
}

impl From<RawSourceMap> for SourceMapInput {
    fn from(map: RawSourceMap) -> Self {
        SourceMapInput::Encoded(map)
    }
}

impl From<DecodedSourceMap> for SourceMapInput {
    fn from(map: DecodedSourceMap) -> Self {
        SourceMapInput::Decoded(map)
    }
}

impl From<SourceMap> for SourceMapInput {
    fn from(map: SourceMap) -> Self {
        SourceMapInput::Encoded(RawSourceMap {
            version: Some(map.version),
            file: map.file,
            source_root: map.source_root,
            sources: map.sources.into_iter().map(Some).collect(),
            sources_content: map.sources_content,
            names: map.names,
            mappings: map.mappings,
        })
    }
}
