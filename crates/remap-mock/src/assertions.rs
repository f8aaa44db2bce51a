use sourcemap_remap::{OriginalPosition, ParsedMap, SourceMap};

/// Assertions over an emitted source map, all positions zero-based.
pub struct MapAssertions<'a> {
    map: &'a SourceMap,
    parsed: ParsedMap,
}

impl<'a> MapAssertions<'a> {
    pub fn new(map: &'a SourceMap) -> Self {
        let parsed = map.parse().expect("emitted map should decode");
        Self { map, parsed }
    }

    fn position(&self, line: u32, column: u32) -> Option<OriginalPosition> {
        self.parsed.original_position_for(line, column)
    }

    pub fn assert_traces_to(
        &self,
        line: u32,
        column: u32,
        source: &str,
        original_line: u32,
        original_column: u32,
    ) {
        let position = self
            .position(line, column)
            .unwrap_or_else(|| panic!("no mapping at {}:{}", line, column));
        assert_eq!(
            (position.source.as_str(), position.line, position.column),
            (source, original_line, original_column),
            "unexpected original position for {}:{}",
            line,
            column
        );
    }

    pub fn assert_name(&self, line: u32, column: u32, name: Option<&str>) {
        let position = self
            .position(line, column)
            .unwrap_or_else(|| panic!("no mapping at {}:{}", line, column));
        assert_eq!(position.name.as_deref(), name);
    }

    pub fn assert_unmapped(&self, line: u32, column: u32) {
        let position = self.position(line, column);
        assert!(
            position.is_none(),
            "expected {}:{} to be unmapped, got {:?}",
            line,
            column,
            position
        );
    }

    /// Check the content recorded for `source`, which must appear exactly once.
    pub fn assert_content(&self, source: &str, expected: Option<&str>) {
        let matches: Vec<usize> = self
            .map
            .sources
            .iter()
            .enumerate()
            .filter(|(_, s)| s.as_str() == source)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(matches.len(), 1, "{:?} should appear once in sources", source);

        let contents = self
            .map
            .sources_content
            .as_ref()
            .expect("map has no sourcesContent");
        assert_eq!(contents.len(), self.map.sources.len());
        assert_eq!(contents[matches[0]].as_deref(), expected);
    }

    /// Every segment must reference an existing source and name.
    pub fn assert_indices_in_bounds(&self) {
        for location in self
            .parsed
            .mappings()
            .iter()
            .flatten()
            .filter_map(|segment| segment.original)
        {
            assert!((location.source as usize) < self.map.sources.len());
            if let Some(name) = location.name {
                assert!((name as usize) < self.map.names.len());
            }
        }
    }
}
