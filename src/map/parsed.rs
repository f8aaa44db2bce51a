use super::resolve::resolve_source;
use super::{DecodedSourceMap, RawSourceMap, SourceMapInput};
use crate::codec::{self, Segment, SourceMapMappings};
use crate::source_map::OriginalPosition;
use crate::{RemapError, Result};

/// An immutable, validated source map ready for lookups.
///
/// Sources are resolved against `sourceRoot` and the URL the map was loaded
/// from, `sourcesContent` is aligned with `sources`, and every line's segments
/// are ordered by generated column.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMap {
    file: Option<String>,
    sources: Vec<Option<String>>,
    sources_content: Vec<Option<String>>,
    names: Vec<String>,
    mappings: SourceMapMappings,
}

impl ParsedMap {
    /// Parse any input form. `map_url` is the location the map was loaded for
    /// and anchors relative `sources` entries.
    pub fn parse(input: SourceMapInput, map_url: &str) -> Result<Self> {
        let decoded = match input {
            SourceMapInput::Json(json) => decode_raw(parse_json(&json)?)?,
            SourceMapInput::Encoded(raw) => decode_raw(raw)?,
            SourceMapInput::Decoded(decoded) => decoded,
        };
        Self::from_decoded(decoded, map_url)
    }

    fn from_decoded(map: DecodedSourceMap, map_url: &str) -> Result<Self> {
        let DecodedSourceMap {
            file,
            source_root,
            sources,
            sources_content,
            names,
            mut mappings,
        } = map;

        let sources: Vec<Option<String>> = sources
            .into_iter()
            .map(|source| {
                source.map(|source| resolve_source(&source, source_root.as_deref(), map_url))
            })
            .collect();

        let mut sources_content = sources_content.unwrap_or_default();
        sources_content.resize(sources.len(), None);

        for (line, segments) in mappings.iter_mut().enumerate() {
            if !segments
                .windows(2)
                .all(|pair| pair[0].generated_column <= pair[1].generated_column)
            {
                // Stable, so equal columns keep their relative order.
                segments.sort_by_key(|segment| segment.generated_column);
            }
            validate_segments(line, segments, sources.len(), names.len())?;
        }

        Ok(Self {
            file,
            sources,
            sources_content,
            names,
            mappings,
        })
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Resolved source identities; `None` for `null` entries.
    pub fn sources(&self) -> &[Option<String>] {
        &self.sources
    }

    /// Embedded content for source `index`, if the map carries any.
    pub fn source_content(&self, index: usize) -> Option<&str> {
        self.sources_content.get(index)?.as_deref()
    }

    pub fn name(&self, index: u32) -> Option<&str> {
        self.names.get(index as usize).map(String::as_str)
    }

    pub fn mappings(&self) -> &SourceMapMappings {
        &self.mappings
    }

    /// Find the segment covering a generated position: the last segment on
    /// `line` whose generated column is at or before `column`.
    ///
    /// Returns `None` when the line has no segments or `column` precedes all
    /// of them.
    pub fn trace_segment(&self, line: u32, column: u32) -> Option<&Segment> {
        let segments = self.mappings.get(line as usize)?;
        let end = segments.partition_point(|segment| segment.generated_column <= column);
        end.checked_sub(1).map(|index| &segments[index])
    }

    /// Resolve a zero-based generated position to its original position,
    /// reporting the source as resolved against `sourceRoot`.
    pub fn original_position_for(&self, line: u32, column: u32) -> Option<OriginalPosition> {
        let location = self.trace_segment(line, column)?.original?;
        Some(OriginalPosition {
            source: self.sources[location.source as usize]
                .clone()
                .unwrap_or_default(),
            line: location.line,
            column: location.column,
            name: location
                .name
                .and_then(|index| self.name(index))
                .map(str::to_string),
        })
    }
}

fn parse_json(json: &str) -> Result<RawSourceMap> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(deserializer).map_err(|e| {
        let path = e.path().to_string();
        RemapError::InvalidMap(format!("{} (at `{}`)", e.into_inner(), path))
    })
}

fn decode_raw(raw: RawSourceMap) -> Result<DecodedSourceMap> {
    if let Some(version) = raw.version {
        if version != 3 {
            return Err(RemapError::InvalidMap(format!(
                "unsupported version {}, expected 3",
                version
            )));
        }
    }

    Ok(DecodedSourceMap {
        file: raw.file,
        source_root: raw.source_root,
        sources: raw.sources,
        sources_content: raw.sources_content,
        names: raw.names,
        mappings: codec::decode(&raw.mappings)?,
    })
}

fn validate_segments(
    line: usize,
    segments: &[Segment],
    source_count: usize,
    name_count: usize,
) -> Result<()> {
    for location in segments.iter().filter_map(|segment| segment.original) {
        if location.source as usize >= source_count {
            return Err(RemapError::InvalidMap(format!(
                "segment on generated line {} references source {} but the map has {} sources",
                line, location.source, source_count
            )));
        }
        if let Some(name) = location.name {
            if name as usize >= name_count {
                return Err(RemapError::InvalidMap(format!(
                    "segment on generated line {} references name {} but the map has {} names",
                    line, name, name_count
                )));
            }
        }
    }
    Ok(())
}
