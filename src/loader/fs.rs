use super::{LoadedSource, LoaderContext, SourceMapLoader};
use crate::logging;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads upstream maps from `<source>.map` files next to each source.
///
/// Source identities are resolved relative to `base_dir`, which is normally
/// the directory holding the final map. URLs and anonymous sources are always
/// treated as original files.
#[derive(Debug, Clone)]
pub struct FsLoader {
    base_dir: PathBuf,
    read_content: bool,
}

impl FsLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            read_content: false,
        }
    }

    /// Read original files from disk and use their text as `sourcesContent`,
    /// replacing whatever the importing map embedded.
    pub fn read_content(mut self, enable: bool) -> Self {
        self.read_content = enable;
        self
    }

    fn map_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".map");
        PathBuf::from(name)
    }
}

impl SourceMapLoader for FsLoader {
    fn load(&mut self, source: &str, ctx: &LoaderContext<'_>) -> anyhow::Result<LoadedSource> {
        if source.is_empty() || source.contains("://") {
            return Ok(LoadedSource::original());
        }

        let path = self.base_dir.join(source);
        let map_path = Self::map_path(&path);

        if map_path.is_file() {
            let json = fs::read_to_string(&map_path)
                .with_context(|| format!("Failed to read source map {:?}", map_path))?;
            logging::log_upstream_map_found(source, ctx.importer, &map_path.to_string_lossy());
            return Ok(LoadedSource::map(json));
        }

        if self.read_content && path.is_file() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read original source {:?}", path))?;
            return Ok(LoadedSource::original().with_content(Some(content)));
        }

        Ok(LoadedSource::original())
    }
}
