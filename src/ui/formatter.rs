use crate::codec::Segment;
use crate::source_map::{OriginalPosition, SourceMap};
use crossterm::style::Stylize;
use itertools::Itertools;
use std::sync::atomic::{AtomicBool, Ordering};

/// Pretty printing utilities for remap output
pub struct Formatter;

impl Formatter {
    /// Format a one-line summary of an emitted map.
    pub fn format_summary(map: &SourceMap) -> String {
        let with_content = map
            .sources_content
            .as_ref()
            .map(|contents| contents.iter().filter(|c| c.is_some()).count());

        let content = match with_content {
            Some(count) => format!("{}/{} with content", count, map.sources.len()),
            None => "content excluded".to_string(),
        };

        format!(
            "{} sources ({}), {} names, {} generated lines",
            map.sources.len(),
            content,
            map.names.len(),
            map.mappings.split(';').count()
        )
    }

    /// Format a traced position as `source:line:column (name)`, one-based for humans.
    pub fn format_position(position: &OriginalPosition) -> String {
        let base = format!(
            "{}:{}:{}",
            position.source,
            position.line + 1,
            position.column + 1
        );
        match &position.name {
            Some(name) => format!("{} ({})", base, name),
            None => base,
        }
    }

    /// Format one generated line of decoded segments.
    pub fn format_segments(line: usize, segments: &[Segment], sources: &[String]) -> String {
        let rendered = segments
            .iter()
            .map(|segment| match segment.original {
                Some(location) => format!(
                    "{} -> {}:{}:{}",
                    segment.generated_column,
                    sources
                        .get(location.source as usize)
                        .map(String::as_str)
                        .unwrap_or("?"),
                    location.line,
                    location.column
                ),
                None => format!("{} -> -", segment.generated_column),
            })
            .join(", ");
        format!("{:>5}: {}", line, rendered)
    }

    /// Format a success message in green.
    pub fn success(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Success)
    }

    /// Format a warning message in yellow.
    pub fn warning(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Warning)
    }

    /// Configure whether ANSI colors are enabled.
    pub fn configure_colors(enable: bool) {
        COLOR_ENABLED.store(enable, Ordering::Relaxed);
    }

    /// Auto-configure color output based on environment.
    pub fn configure_colors_from_env() {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::configure_colors(!no_color);
    }

    fn apply_color(message: &str, kind: ColorKind) -> String {
        if !COLOR_ENABLED.load(Ordering::Relaxed) {
            return message.to_string();
        }

        match kind {
            ColorKind::Success => format!("{}", message.green()),
            ColorKind::Warning => format!("{}", message.yellow()),
        }
    }
}

#[derive(Copy, Clone)]
enum ColorKind {
    Success,
    Warning,
}

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);
