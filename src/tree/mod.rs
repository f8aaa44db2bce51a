//! The tree of maps and original sources that a remapping walks.
//!
//! Every [`SourceMapTree`] wraps one parsed map and owns one child per entry in
//! that map's `sources`. A child is either another map node, when the loader
//! found an upstream map for the source, or an [`OriginalSource`] leaf.

pub mod builder;
pub mod trace;

use crate::map::ParsedMap;

pub use builder::build_source_map_tree;
pub use trace::{FlattenedMap, TracedPosition};

/// A file with no further transformation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalSource {
    pub source: String,
    pub content: Option<String>,
}

impl OriginalSource {
    pub fn new(source: impl Into<String>, content: Option<String>) -> Self {
        Self {
            source: source.into(),
            content,
        }
    }
}

/// A node of the source map tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MapNode {
    Map(SourceMapTree),
    Original(OriginalSource),
}

/// A parsed map together with the resolved nodes for each of its sources.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMapTree {
    map: ParsedMap,
    children: Vec<MapNode>,
    source: String,
    content: Option<String>,
}

impl SourceMapTree {
    /// `children[i]` must correspond to `map.sources()[i]`.
    pub(crate) fn new(map: ParsedMap, children: Vec<MapNode>) -> Self {
        debug_assert_eq!(map.sources().len(), children.len());
        let source = map.file().unwrap_or_default().to_string();
        Self {
            map,
            children,
            source,
            content: None,
        }
    }

    /// Record the identity and content this node was loaded as.
    pub(crate) fn with_backing(mut self, source: String, content: Option<String>) -> Self {
        self.source = source;
        self.content = content;
        self
    }

    pub fn map(&self) -> &ParsedMap {
        &self.map
    }

    pub fn children(&self) -> &[MapNode] {
        &self.children
    }

    /// Identity of the file this map generated, as its importer named it.
    ///
    /// Positions that fall outside every segment of this map resolve here.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Number of map levels from this node down to its deepest leaf.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| match child {
                MapNode::Map(tree) => tree.depth(),
                MapNode::Original(_) => 0,
            })
            .max()
            .unwrap_or(0)
    }
}
