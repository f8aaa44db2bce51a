//! Segment tables for the `mappings` field of a v3 source map.
//!
//! Decoding produces one `Vec<Segment>` per generated line. Generated columns
//! are relative to the previous segment on the same line; source index,
//! original line, original column and name index are relative to the previous
//! segment that carried them, across line boundaries. The base64 VLQ digits
//! themselves are read and written by `sourcemap::vlq`.

use crate::{RemapError, Result};
use sourcemap::vlq;

/// Decoded mappings, grouped by generated line.
pub type SourceMapMappings = Vec<Vec<Segment>>;

/// Position in an upstream source referenced by a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OriginalLocation {
    /// Index into the map's `sources`.
    pub source: u32,
    /// Zero-based original line.
    pub line: u32,
    /// Zero-based original column.
    pub column: u32,
    /// Index into the map's `names`.
    pub name: Option<u32>,
}

/// One mapping record on a generated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub generated_column: u32,
    /// `None` for generated-only code that maps nowhere.
    pub original: Option<OriginalLocation>,
}

impl Segment {
    /// A segment that maps `generated_column` to nothing.
    pub fn unmapped(generated_column: u32) -> Self {
        Self {
            generated_column,
            original: None,
        }
    }

    pub fn new(generated_column: u32, source: u32, line: u32, column: u32) -> Self {
        Self {
            generated_column,
            original: Some(OriginalLocation {
                source,
                line,
                column,
                name: None,
            }),
        }
    }

    /// Attach a name index. Has no effect on unmapped segments.
    pub fn with_name(mut self, name: u32) -> Self {
        if let Some(original) = self.original.as_mut() {
            original.name = Some(name);
        }
        self
    }
}

/// Decode a VLQ `mappings` string.
pub fn decode(mappings: &str) -> Result<SourceMapMappings> {
    let mut lines = Vec::new();
    let mut source: i64 = 0;
    let mut original_line: i64 = 0;
    let mut original_column: i64 = 0;
    let mut name: i64 = 0;

    for (line_index, line) in mappings.split(';').enumerate() {
        let invalid = |message: String| RemapError::InvalidMappings {
            line: line_index,
            message,
        };

        let mut segments = Vec::new();
        let mut generated_column: i64 = 0;

        for raw in line.split(',').filter(|raw| !raw.is_empty()) {
            let fields = parse_segment(raw).map_err(invalid)?;

            generated_column = generated_column.saturating_add(fields[0]);
            let mut segment = Segment::unmapped(
                to_u32(generated_column, "generated column").map_err(invalid)?,
            );

            if fields.len() >= 4 {
                source = source.saturating_add(fields[1]);
                original_line = original_line.saturating_add(fields[2]);
                original_column = original_column.saturating_add(fields[3]);
                let mut location = OriginalLocation {
                    source: to_u32(source, "source index").map_err(invalid)?,
                    line: to_u32(original_line, "original line").map_err(invalid)?,
                    column: to_u32(original_column, "original column").map_err(invalid)?,
                    name: None,
                };
                if let Some(delta) = fields.get(4) {
                    name = name.saturating_add(*delta);
                    location.name = Some(to_u32(name, "name index").map_err(invalid)?);
                }
                segment.original = Some(location);
            }

            segments.push(segment);
        }

        lines.push(segments);
    }

    Ok(lines)
}

/// Encode decoded mappings back into a VLQ string.
pub fn encode(mappings: &[Vec<Segment>]) -> Result<String> {
    let mut out = String::new();
    let mut source: i64 = 0;
    let mut original_line: i64 = 0;
    let mut original_column: i64 = 0;
    let mut name: i64 = 0;

    for (line_index, segments) in mappings.iter().enumerate() {
        if line_index > 0 {
            out.push(';');
        }

        let mut generated_column: i64 = 0;
        for (segment_index, segment) in segments.iter().enumerate() {
            if segment_index > 0 {
                out.push(',');
            }

            let column = i64::from(segment.generated_column);
            let mut fields = vec![column - generated_column];
            generated_column = column;

            if let Some(location) = segment.original {
                fields.push(i64::from(location.source) - source);
                fields.push(i64::from(location.line) - original_line);
                fields.push(i64::from(location.column) - original_column);
                source = i64::from(location.source);
                original_line = i64::from(location.line);
                original_column = i64::from(location.column);

                if let Some(index) = location.name {
                    fields.push(i64::from(index) - name);
                    name = i64::from(index);
                }
            }

            let encoded = vlq::generate_vlq_segment(&fields).map_err(|e| {
                RemapError::InvalidMappings {
                    line: line_index,
                    message: e.to_string(),
                }
            })?;
            out.push_str(&encoded);
        }
    }

    Ok(out)
}

fn parse_segment(raw: &str) -> std::result::Result<Vec<i64>, String> {
    if let Some(c) = raw
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '+' || *c == '/'))
    {
        return Err(format!("invalid base64 character {:?}", c));
    }

    let fields = vlq::parse_vlq_segment(raw).map_err(|e| e.to_string())?;
    match fields.len() {
        1 | 4 | 5 => Ok(fields),
        n => Err(format!("segment has {} fields, expected 1, 4 or 5", n)),
    }
}

fn to_u32(value: i64, field: &str) -> std::result::Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("{} out of range: {}", field, value))
}
