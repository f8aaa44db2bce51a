//! The loader seam through which the tree builder discovers upstream maps.
//!
//! For every source a map references, the builder asks the loader whether that
//! file was itself generated. The loader answers with a [`LoadedSource`]: an
//! optional upstream map plus optional overrides for the source's identity and
//! content.

pub mod fs;

use crate::map::SourceMapInput;

pub use fs::FsLoader;

/// Information about why a source is being loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderContext<'a> {
    /// Identity of the map that references this source. Empty for the final map.
    pub importer: &'a str,
    /// Resolved identity of the source; empty for `null` entries.
    pub source: &'a str,
    /// How many maps deep the importer sits below the final map.
    pub depth: usize,
}

/// How the content of an original source should be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContentOverride {
    /// Use the importing map's `sourcesContent` entry.
    #[default]
    Inherit,
    /// Use exactly this content, including an explicit `None`.
    Set(Option<String>),
}

/// The loader's answer for one source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedSource {
    /// Upstream map of the source, or `None` if it is an original file.
    pub map: Option<SourceMapInput>,
    /// Replacement identity for the source.
    pub source: Option<String>,
    pub content: ContentOverride,
}

impl LoadedSource {
    /// The source is an original file.
    pub fn original() -> Self {
        Self::default()
    }

    /// The source was generated and `map` describes how.
    pub fn map(map: impl Into<SourceMapInput>) -> Self {
        Self {
            map: Some(map.into()),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = ContentOverride::Set(content);
        self
    }
}

/// Resolves referenced sources to their upstream maps.
///
/// Errors are returned to the caller of the remapping operation unchanged.
pub trait SourceMapLoader {
    fn load(&mut self, source: &str, ctx: &LoaderContext<'_>) -> anyhow::Result<LoadedSource>;
}

/// A [`SourceMapLoader`] backed by a closure. See [`from_fn`].
pub struct FnLoader<F>(F);

impl<F> SourceMapLoader for FnLoader<F>
where
    F: FnMut(&str, &LoaderContext<'_>) -> anyhow::Result<LoadedSource>,
{
    fn load(&mut self, source: &str, ctx: &LoaderContext<'_>) -> anyhow::Result<LoadedSource> {
        (self.0)(source, ctx)
    }
}

/// Wrap a closure as a loader.
pub fn from_fn<F>(f: F) -> FnLoader<F>
where
    F: FnMut(&str, &LoaderContext<'_>) -> anyhow::Result<LoadedSource>,
{
    FnLoader(f)
}
