use sourcemap_remap::{DecodedSourceMap, RawSourceMap, Segment, SourceMapInput};

/// Builds small source maps for tests.
///
/// Sources and names are registered on first use, so mappings can be written
/// in terms of file names instead of indices.
#[derive(Debug, Clone, Default)]
pub struct MapBuilder {
    map: DecodedSourceMap,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, file: &str) -> Self {
        self.map.file = Some(file.to_string());
        self
    }

    pub fn source_root(mut self, root: &str) -> Self {
        self.map.source_root = Some(root.to_string());
        self
    }

    /// Register a source without mapping anything to it.
    pub fn source(mut self, source: &str) -> Self {
        self.source_index(source);
        self
    }

    /// Register a `null` source entry.
    pub fn null_source(mut self) -> Self {
        self.map.sources.push(None);
        self.sync_content();
        self
    }

    /// Embed content for `source`, registering it if needed.
    pub fn content(mut self, source: &str, content: &str) -> Self {
        let index = self.source_index(source) as usize;
        let contents = self.map.sources_content.get_or_insert_with(Vec::new);
        contents.resize(self.map.sources.len(), None);
        contents[index] = Some(content.to_string());
        self
    }

    /// Map generated `line:column` to `source` at `original_line:original_column`.
    pub fn mapping(
        mut self,
        line: u32,
        column: u32,
        source: &str,
        original_line: u32,
        original_column: u32,
    ) -> Self {
        let index = self.source_index(source);
        self.push(line, Segment::new(column, index, original_line, original_column));
        self
    }

    /// Like [`MapBuilder::mapping`], with a name.
    pub fn named_mapping(
        mut self,
        line: u32,
        column: u32,
        source: &str,
        original_line: u32,
        original_column: u32,
        name: &str,
    ) -> Self {
        let index = self.source_index(source);
        let name = self.name_index(name);
        self.push(
            line,
            Segment::new(column, index, original_line, original_column).with_name(name),
        );
        self
    }

    /// Add a generated-only segment.
    pub fn unmapped(mut self, line: u32, column: u32) -> Self {
        self.push(line, Segment::unmapped(column));
        self
    }

    pub fn build(self) -> DecodedSourceMap {
        self.map
    }

    pub fn input(self) -> SourceMapInput {
        SourceMapInput::Decoded(self.map)
    }

    /// The map in its encoded JSON form.
    pub fn to_json(self) -> String {
        let map = self.map;
        let raw = RawSourceMap {
            version: Some(3),
            file: map.file,
            source_root: map.source_root,
            sources: map.sources,
            sources_content: map.sources_content,
            names: map.names,
            mappings: sourcemap_remap::codec::encode(&map.mappings)
                .expect("builder mappings always encode"),
        };
        serde_json::to_string(&raw).expect("raw source maps always serialize")
    }

    fn push(&mut self, line: u32, segment: Segment) {
        let line = line as usize;
        if self.map.mappings.len() <= line {
            self.map.mappings.resize_with(line + 1, Vec::new);
        }
        let segments = &mut self.map.mappings[line];
        segments.push(segment);
        segments.sort_by_key(|segment| segment.generated_column);
    }

    fn source_index(&mut self, source: &str) -> u32 {
        let existing = self
            .map
            .sources
            .iter()
            .position(|s| s.as_deref() == Some(source));
        let index = existing.unwrap_or_else(|| {
            self.map.sources.push(Some(source.to_string()));
            self.map.sources.len() - 1
        });
        self.sync_content();
        index as u32
    }

    fn name_index(&mut self, name: &str) -> u32 {
        let index = match self.map.names.iter().position(|n| n == name) {
            Some(index) => index,
            None => {
                self.map.names.push(name.to_string());
                self.map.names.len() - 1
            }
        };
        index as u32
    }

    fn sync_content(&mut self) {
        let len = self.map.sources.len();
        if let Some(contents) = self.map.sources_content.as_mut() {
            contents.resize(len, None);
        }
    }
}
