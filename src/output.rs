//! Output formatting for query results and trie dumps

use crate::index::reader::EdgeRecord;
use crate::index::types::StartOffset;
use crate::utils::{build_line_map, line_span, position_to_line_col};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// A start offset resolved against the original text
#[derive(Debug, Clone, Serialize)]
pub struct PositionMatch {
    pub pattern: String,
    pub offset: StartOffset,
    pub line: u32,
    pub column: u32,
}

/// Resolve raw start offsets into line/column records
pub fn resolve_matches(
    content: &[u8],
    pattern: &str,
    offsets: &[StartOffset],
) -> Vec<PositionMatch> {
    let line_map = build_line_map(content);

    offsets
        .iter()
        .map(|&offset| {
            let (line, column) = position_to_line_col(&line_map, offset);
            PositionMatch {
                pattern: pattern.to_string(),
                offset,
                line,
                column,
            }
        })
        .collect()
}

/// Print matches for one pattern: `line:column:` plus the line content with
/// the match span highlighted
pub fn print_pattern_matches(
    content: &[u8],
    pattern: &str,
    offsets: &[StartOffset],
    heading: bool,
    color: bool,
) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if heading {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(stdout, "{}", pattern)?;
        stdout.reset()?;
    }

    if offsets.is_empty() {
        writeln!(stdout, "no matches")?;
        return Ok(());
    }

    let line_map = build_line_map(content);

    for &offset in offsets {
        let (line, column) = position_to_line_col(&line_map, offset);

        // offset and line:column prefix
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", offset)?;
        stdout.reset()?;
        write!(stdout, ":")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}:{}", line, column)?;
        stdout.reset()?;
        write!(stdout, ":")?;

        // line content with the match highlighted, clamped to the line
        let (start, end) = line_span(content, &line_map, line);
        let line_bytes = &content[start..end];
        let match_start = (offset as usize - start).min(line_bytes.len());
        let match_end = (match_start + pattern.len()).min(line_bytes.len());

        stdout.write_all(&line_bytes[..match_start])?;
        if match_end > match_start {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            stdout.write_all(&line_bytes[match_start..match_end])?;
            stdout.reset()?;
        }
        stdout.write_all(&line_bytes[match_end..])?;
        writeln!(stdout)?;
    }

    Ok(())
}

/// Print plain offsets for one pattern on a single line
pub fn print_offsets_only(pattern: &str, offsets: &[StartOffset], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(stdout, "{}", pattern)?;
    stdout.reset()?;
    write!(stdout, ":")?;

    for offset in offsets {
        write!(stdout, " {}", offset)?;
    }
    writeln!(stdout)?;

    Ok(())
}

/// Print the compact trie's edge list
pub fn print_edges(edges: &[EdgeRecord], limit: Option<usize>, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let shown = limit.unwrap_or(edges.len()).min(edges.len());

    for edge in &edges[..shown] {
        let parent = if edge.parent.is_empty() {
            "root"
        } else {
            &edge.parent
        };

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(stdout, "{}", parent)?;
        stdout.reset()?;
        write!(stdout, " --[")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, "{}", edge.label)?;
        stdout.reset()?;
        write!(stdout, "]--> terminal={}, offsets=[", edge.terminal)?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        let rendered: Vec<String> = edge.offsets.iter().map(|o| o.to_string()).collect();
        write!(stdout, "{}", rendered.join(", "))?;
        stdout.reset()?;

        if edge.offset_count > edge.offsets.len() {
            write!(stdout, ", ... {} total", edge.offset_count)?;
        }
        writeln!(stdout, "]")?;
    }

    if shown < edges.len() {
        writeln!(stdout, "... and {} more edges", edges.len() - shown)?;
    }

    Ok(())
}
