//! Entry points tying tree building, tracing and output together.

use crate::loader::SourceMapLoader;
use crate::logging;
use crate::map::SourceMapInput;
use crate::source_map::SourceMap;
use crate::tree::{build_source_map_tree, FlattenedMap};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Default limit on how many maps deep the loader may lead.
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapOptions {
    /// Leave `sourcesContent` out of the emitted map.
    #[serde(default)]
    pub exclude_content: bool,
    /// Maximum number of upstream map levels below the final map.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for RemapOptions {
    fn default() -> Self {
        Self {
            exclude_content: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Flatten `input` and everything the loader finds behind it into one map.
pub fn remap<L>(
    input: impl Into<SourceMapInput>,
    loader: &mut L,
    options: &RemapOptions,
) -> Result<SourceMap>
where
    L: SourceMapLoader + ?Sized,
{
    remap_chain(vec![input.into()], loader, options)
}

/// Flatten a chain of transformation maps, ordered most recent first.
///
/// Passing `[minify_map, transpile_map]` yields a map from the minified output
/// to the sources the transpiler read.
pub fn remap_chain<L>(
    inputs: Vec<SourceMapInput>,
    loader: &mut L,
    options: &RemapOptions,
) -> Result<SourceMap>
where
    L: SourceMapLoader + ?Sized,
{
    let flattened = remap_decoded(inputs, loader, options)?;
    SourceMap::from_flattened(flattened, options.exclude_content)
}

/// Like [`remap_chain`], but returns the decoded segments instead of
/// encoding them.
pub fn remap_decoded<L>(
    inputs: Vec<SourceMapInput>,
    loader: &mut L,
    options: &RemapOptions,
) -> Result<FlattenedMap>
where
    L: SourceMapLoader + ?Sized,
{
    logging::log_remap_start(inputs.len(), options.max_depth);
    let tree = build_source_map_tree(inputs, loader, options.max_depth)?;
    Ok(tree.trace_mappings())
}
