use sourcemap_remap::{LoadedSource, LoaderContext, SourceMapInput, SourceMapLoader};
use std::collections::{HashMap, HashSet};

/// One recorded loader invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderCall {
    pub source: String,
    pub importer: String,
    pub depth: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum MockLoaderError {
    #[error("mock loader refused to load {0:?}")]
    Refused(String),
}

/// An in-memory loader keyed by source identity.
///
/// Sources without a registered map are reported as original files.
#[derive(Debug, Clone, Default)]
pub struct MockLoader {
    maps: HashMap<String, SourceMapInput>,
    contents: HashMap<String, Option<String>>,
    renames: HashMap<String, String>,
    failures: HashSet<String>,
    calls: Vec<LoaderCall>,
}

impl MockLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `map` as the upstream map of `source`.
    pub fn with_map(mut self, source: &str, map: impl Into<SourceMapInput>) -> Self {
        self.maps.insert(source.to_string(), map.into());
        self
    }

    /// Override the content reported for `source`, including with `None`.
    pub fn with_content(mut self, source: &str, content: Option<&str>) -> Self {
        self.contents
            .insert(source.to_string(), content.map(str::to_string));
        self
    }

    /// Report `source` under a different identity.
    pub fn with_rename(mut self, source: &str, renamed: &str) -> Self {
        self.renames.insert(source.to_string(), renamed.to_string());
        self
    }

    /// Fail with [`MockLoaderError::Refused`] when asked for `source`.
    pub fn failing_on(mut self, source: &str) -> Self {
        self.failures.insert(source.to_string());
        self
    }

    pub fn calls(&self) -> &[LoaderCall] {
        &self.calls
    }

    pub fn requested_sources(&self) -> Vec<&str> {
        self.calls.iter().map(|call| call.source.as_str()).collect()
    }
}

impl SourceMapLoader for MockLoader {
    fn load(&mut self, source: &str, ctx: &LoaderContext<'_>) -> anyhow::Result<LoadedSource> {
        self.calls.push(LoaderCall {
            source: source.to_string(),
            importer: ctx.importer.to_string(),
            depth: ctx.depth,
        });

        if self.failures.contains(source) {
            return Err(MockLoaderError::Refused(source.to_string()).into());
        }

        let mut loaded = match self.maps.get(source) {
            Some(map) => LoadedSource::map(map.clone()),
            None => LoadedSource::original(),
        };
        if let Some(renamed) = self.renames.get(source) {
            loaded = loaded.with_source(renamed.clone());
        }
        if let Some(content) = self.contents.get(source) {
            loaded = loaded.with_content(content.clone());
        }
        Ok(loaded)
    }
}
