pub mod cli;
pub mod codec;
pub mod config;
pub mod loader;
pub mod logging;
pub mod map;
pub mod remap;
pub mod source_map;
pub mod tree;
pub mod ui;

use miette::Diagnostic;

pub use codec::{OriginalLocation, Segment, SourceMapMappings};
pub use loader::{from_fn, ContentOverride, LoadedSource, LoaderContext, SourceMapLoader};
pub use map::{DecodedSourceMap, ParsedMap, RawSourceMap, SourceMapInput};
pub use remap::{remap, remap_chain, remap_decoded, RemapOptions};
pub use source_map::{OriginalPosition, SourceMap};
pub use tree::{build_source_map_tree, FlattenedMap, MapNode, OriginalSource, SourceMapTree};

/// Result type alias for remapping operations
pub type Result<T, E = RemapError> = std::result::Result<T, E>;

/// Error types for source map remapping
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum RemapError {
    #[error("No source maps were supplied")]
    #[diagnostic(
        code(remap::empty_input),
        help("Pass at least one source map; the last one is the map of the final build stage.")
    )]
    EmptyInput,

    #[error("Transformation map {index} must have exactly one source file, found {sources}")]
    #[diagnostic(
        code(remap::invalid_transformation_map),
        help("Did you specify these with the most recent transformation maps first? Every map except the last must describe a single-file transformation.")
    )]
    InvalidTransformationMap { index: usize, sources: usize },

    #[error("Source map chain exceeds the maximum depth of {limit} while loading {source_file:?}")]
    #[diagnostic(
        code(remap::depth_exceeded),
        help("The loader probably returns maps that reference each other in a cycle. Raise `max_depth` only if the chain really is that deep.")
    )]
    DepthExceeded { limit: usize, source_file: String },

    #[error("Invalid source map: {0}")]
    #[diagnostic(
        code(remap::invalid_map),
        help("The input must be a version 3 source map, either as JSON text or as an already parsed object.")
    )]
    InvalidMap(String),

    #[error("Invalid mappings on generated line {line}: {message}")]
    #[diagnostic(
        code(remap::invalid_mappings),
        help("The `mappings` field must be a base64 VLQ string with 1, 4 or 5 fields per segment.")
    )]
    InvalidMappings { line: usize, message: String },

    #[error("Failed to serialize source map: {0}")]
    #[diagnostic(code(remap::serialize))]
    Serialize(String),

    #[error(transparent)]
    #[diagnostic(code(remap::loader_failed))]
    Loader(anyhow::Error),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(remap::config_error),
        help("Check that the configuration file is valid TOML and readable.")
    )]
    Config(String),

    #[error("File operation failed: {0}")]
    #[diagnostic(
        code(remap::file_error),
        help("Check if you have necessary permissions and that the path exists.")
    )]
    FileError(String),
}
