use proptest::prelude::*;
use remap_mock::MapBuilder;
use std::collections::BTreeMap;

/// Where a generated column points: `None` for generated-only code.
pub type Target = Option<(u8, u32, u32)>;

/// Generated lines of segments, keyed by column so columns stay unique.
pub fn mapping_lines() -> impl Strategy<Value = Vec<BTreeMap<u32, Target>>> {
    let target = prop_oneof![
        1 => Just(None),
        4 => (0u8..4, 0u32..50, 0u32..200).prop_map(Some),
    ];
    prop::collection::vec(prop::collection::btree_map(0u32..120, target, 0..8), 0..6)
}

pub fn source_name(index: u8) -> String {
    format!("src/file{}.ts", index)
}

/// Build a map whose segments are exactly `lines`.
pub fn build_map(lines: &[BTreeMap<u32, Target>]) -> MapBuilder {
    let mut builder = MapBuilder::new();
    for (line, segments) in lines.iter().enumerate() {
        for (&column, target) in segments {
            builder = match target {
                Some((source, original_line, original_column)) => builder.mapping(
                    line as u32,
                    column,
                    &source_name(*source),
                    *original_line,
                    *original_column,
                ),
                None => builder.unmapped(line as u32, column),
            };
        }
    }
    builder
}

/// A map covering `lines` x `columns` that moves every position by
/// `line_shift` lines and `column_shift` columns into `source`.
pub fn shifted_map(
    source: &str,
    lines: u32,
    columns: u32,
    line_shift: u32,
    column_shift: u32,
) -> MapBuilder {
    let mut builder = MapBuilder::new();
    for line in 0..lines {
        for column in 0..columns {
            builder = builder.mapping(line, column, source, line + line_shift, column + column_shift);
        }
    }
    builder
}
