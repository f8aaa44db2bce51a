//! Composition of every mapping in a tree down to its original sources.

use super::{MapNode, SourceMapTree};
use crate::codec::{OriginalLocation, Segment, SourceMapMappings};
use crate::logging;
use crate::map::DecodedSourceMap;
use std::collections::HashMap;

/// Where a position ends up after tracing it through the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracedPosition<'a> {
    pub source: &'a str,
    pub content: Option<&'a str>,
    pub line: u32,
    pub column: u32,
    pub name: Option<&'a str>,
}

/// The decoded result of flattening a tree.
///
/// Every segment's source and name index is in bounds of `sources` and
/// `names`; `sources_content` is aligned with `sources`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedMap {
    pub file: Option<String>,
    pub sources: Vec<String>,
    pub sources_content: Vec<Option<String>>,
    pub names: Vec<String>,
    pub mappings: SourceMapMappings,
}

impl From<FlattenedMap> for DecodedSourceMap {
    fn from(map: FlattenedMap) -> Self {
        DecodedSourceMap {
            file: map.file,
            source_root: None,
            sources: map.sources.into_iter().map(Some).collect(),
            sources_content: Some(map.sources_content),
            names: map.names,
            mappings: map.mappings,
        }
    }
}

impl MapNode {
    /// Trace a position in the file this node stands for.
    ///
    /// For a map node the position is a generated position of its map. Returns
    /// `None` when the position is covered by a segment that maps nowhere.
    pub fn trace<'a>(
        &'a self,
        line: u32,
        column: u32,
        name: Option<&'a str>,
    ) -> Option<TracedPosition<'a>> {
        match self {
            MapNode::Original(original) => Some(TracedPosition {
                source: &original.source,
                content: original.content.as_deref(),
                line,
                column,
                name,
            }),
            MapNode::Map(tree) => tree.trace_generated(line, column, name),
        }
    }
}

impl SourceMapTree {
    /// Flatten the whole tree into one set of mappings from this map's
    /// generated positions to original sources.
    pub fn trace_mappings(&self) -> FlattenedMap {
        let mut sources = SourceTable::default();
        let mut names = NameTable::default();
        let mut mappings = Vec::with_capacity(self.map.mappings().len());
        let mut unresolved = 0usize;

        for line in self.map.mappings() {
            let mut traced_line = Vec::with_capacity(line.len());

            for segment in line {
                let traced = segment
                    .original
                    .as_ref()
                    .and_then(|location| self.trace_location(location));

                let Some(traced) = traced else {
                    if segment.original.is_some() {
                        unresolved += 1;
                    }
                    traced_line.push(Segment::unmapped(segment.generated_column));
                    continue;
                };

                let source = sources.put(traced.source, traced.content);
                let mut out = Segment::new(
                    segment.generated_column,
                    source,
                    traced.line,
                    traced.column,
                );
                if let Some(name) = traced.name {
                    out = out.with_name(names.put(name));
                }
                traced_line.push(out);
            }

            mappings.push(traced_line);
        }

        let flattened = FlattenedMap {
            file: self.map.file().map(str::to_string),
            sources: sources.names,
            sources_content: sources.contents,
            names: names.items,
            mappings,
        };
        logging::log_trace_complete(
            flattened.mappings.iter().map(Vec::len).sum(),
            flattened.sources.len(),
            flattened.names.len(),
            unresolved,
        );
        flattened
    }

    /// Trace a single generated position of this map to its original source.
    ///
    /// Returns `None` when no segment of this map covers the position, or when
    /// the trace ends on a segment that maps nowhere.
    pub fn original_position_for(&self, line: u32, column: u32) -> Option<TracedPosition<'_>> {
        let location = self.map.trace_segment(line, column)?.original?;
        self.trace_location(&location)
    }

    fn trace_location<'a>(&'a self, location: &OriginalLocation) -> Option<TracedPosition<'a>> {
        let name = location.name.and_then(|index| self.map.name(index));
        self.children[location.source as usize].trace(location.line, location.column, name)
    }

    /// Query this map as an intermediate level. A position in a gap of the map
    /// stays in the file this map generated.
    fn trace_generated<'a>(
        &'a self,
        line: u32,
        column: u32,
        name: Option<&'a str>,
    ) -> Option<TracedPosition<'a>> {
        let Some(segment) = self.map.trace_segment(line, column) else {
            logging::log_gap_fallback(&self.source, line, column);
            return Some(TracedPosition {
                source: &self.source,
                content: self.content.as_deref(),
                line,
                column,
                name,
            });
        };

        let location = segment.original?;
        let traced = self.trace_location(&location)?;
        Some(TracedPosition {
            name: traced.name.or(name),
            ..traced
        })
    }
}

/// Output `sources` keyed by identity. The first content recorded for an
/// identity is kept, even if it is `None`.
#[derive(Default)]
struct SourceTable {
    indices: HashMap<String, u32>,
    names: Vec<String>,
    contents: Vec<Option<String>>,
}

impl SourceTable {
    fn put(&mut self, source: &str, content: Option<&str>) -> u32 {
        if let Some(&index) = self.indices.get(source) {
            return index;
        }
        let index = self.names.len() as u32;
        self.indices.insert(source.to_string(), index);
        self.names.push(source.to_string());
        self.contents.push(content.map(str::to_string));
        index
    }
}

#[derive(Default)]
struct NameTable {
    indices: HashMap<String, u32>,
    items: Vec<String>,
}

impl NameTable {
    fn put(&mut self, name: &str) -> u32 {
        if let Some(&index) = self.indices.get(name) {
            return index;
        }
        let index = self.items.len() as u32;
        self.indices.insert(name.to_string(), index);
        self.items.push(name.to_string());
        index
    }
}
