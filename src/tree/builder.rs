use super::{MapNode, OriginalSource, SourceMapTree};
use crate::loader::{ContentOverride, LoadedSource, LoaderContext, SourceMapLoader};
use crate::logging;
use crate::map::{ParsedMap, SourceMapInput};
use crate::{RemapError, Result};

/// Recursively build the tree for a chain of source maps.
///
/// `inputs` is ordered most-recent-transformation-first: the last element is
/// the map of the final build stage, and every earlier element describes one
/// later single-file transformation (a minifier run over the bundle, say), so
/// each of those must have exactly one source. The loader is asked about every
/// source the final map references, and again for the sources of every map it
/// returns, until it reports original files.
pub fn build_source_map_tree<L>(
    inputs: Vec<SourceMapInput>,
    loader: &mut L,
    max_depth: usize,
) -> Result<SourceMapTree>
where
    L: SourceMapLoader + ?Sized,
{
    let mut maps = inputs
        .into_iter()
        .map(|input| ParsedMap::parse(input, ""))
        .collect::<Result<Vec<_>>>()?;
    let map = maps.pop().ok_or(RemapError::EmptyInput)?;

    for (index, transform) in maps.iter().enumerate() {
        let sources = transform.sources().len();
        if sources != 1 {
            return Err(RemapError::InvalidTransformationMap { index, sources });
        }
    }

    let mut tree = build_node(map, "", loader, 0, max_depth)?;

    for transform in maps.into_iter().rev() {
        let source = transform.sources()[0].clone().unwrap_or_default();
        let content = transform.source_content(0).map(str::to_string);
        let child = tree.with_backing(source, content);
        tree = SourceMapTree::new(transform, vec![MapNode::Map(child)]);
    }

    logging::log_tree_built(tree.depth(), tree.children().len());
    Ok(tree)
}

fn build_node<L>(
    map: ParsedMap,
    importer: &str,
    loader: &mut L,
    depth: usize,
    max_depth: usize,
) -> Result<SourceMapTree>
where
    L: SourceMapLoader + ?Sized,
{
    let mut children = Vec::with_capacity(map.sources().len());

    for (index, resolved) in map.sources().iter().enumerate() {
        let resolved = resolved.as_deref().unwrap_or_default();
        let ctx = LoaderContext {
            importer,
            source: resolved,
            depth,
        };

        let LoadedSource {
            map: upstream,
            source,
            content,
        } = loader.load(resolved, &ctx).map_err(RemapError::Loader)?;
        logging::log_loader_call(resolved, importer, depth, upstream.is_some());

        let source = source.unwrap_or_else(|| resolved.to_string());
        let content = match content {
            ContentOverride::Set(content) => content,
            ContentOverride::Inherit => map.source_content(index).map(str::to_string),
        };

        let child = match upstream {
            None => MapNode::Original(OriginalSource::new(source, content)),
            Some(input) => {
                if depth + 1 > max_depth {
                    return Err(RemapError::DepthExceeded {
                        limit: max_depth,
                        source_file: source,
                    });
                }
                let parsed = ParsedMap::parse(input, &source)?;
                let node = build_node(parsed, &source, loader, depth + 1, max_depth)?;
                MapNode::Map(node.with_backing(source, content))
            }
        };
        children.push(child);
    }

    Ok(SourceMapTree::new(map, children))
}
