//! Structured logging helpers for remapping.
//!
//! Named functions for the recurring events of a remap run, so that field
//! names stay consistent across the crate. Emitted through `tracing`.

/// Log the one-line summary of a flattened map.
pub fn log_summary(summary: &str) {
    tracing::info!("{}", summary);
}

/// Log the start of a remap run.
pub fn log_remap_start(inputs: usize, max_depth: usize) {
    tracing::debug!(inputs, max_depth, "Starting remap");
}

/// Log one loader invocation.
pub fn log_loader_call(source: &str, importer: &str, depth: usize, found_map: bool) {
    tracing::trace!(source, importer, depth, found_map, "Loader resolved source");
}

/// Log a source map discovered on disk.
pub fn log_upstream_map_found(source: &str, importer: &str, path: &str) {
    tracing::debug!(source, importer, path, "Found upstream source map");
}

/// Log the finished tree.
pub fn log_tree_built(depth: usize, sources: usize) {
    tracing::debug!(depth, sources, "Source map tree built");
}

/// Log a position that no segment of an intermediate map covers.
pub fn log_gap_fallback(source: &str, line: u32, column: u32) {
    tracing::trace!(source, line, column, "Position outside intermediate map, keeping it");
}

/// Log trace statistics.
pub fn log_trace_complete(segments: usize, sources: usize, names: usize, unresolved: usize) {
    tracing::debug!(segments, sources, names, unresolved, "Mappings traced");
}

/// Log the input map being read.
pub fn log_loading_map(path: &str) {
    tracing::info!(map = path, "Loading source map");
}

/// Log the written output.
pub fn log_map_written(path: &str, bytes: usize) {
    tracing::info!(path, bytes, "Remapped source map written");
}
