//! Plain text and Markdown renderings of a [`Report`].
//!
//! The plain rendering is the canonical one. Markdown is derived from it line
//! by line, so both always carry the same figures.

use std::fmt::Write;

use crate::report::Report;
use crate::utils::{format_minutes, format_size};

/// Prefix of the per-folder total line (after its two-space indent).
pub const FOLDER_TOTAL_LABEL: &str = "Total in folder:";

/// Output style for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    #[default]
    Plain,
    Markdown,
}

/// Renders `report` in the requested style.
pub fn render(report: &Report, style: ReportStyle) -> String {
    match style {
        ReportStyle::Plain => render_plain(report),
        ReportStyle::Markdown => markdown_from_plain(&render_plain(report)),
    }
}

/// Renders the plain text report.
///
/// Each directory with at least one entry gets a section; directories
/// without entries are omitted. Two grand-total lines close the report.
pub fn render_plain(report: &Report) -> String {
    let mut out = String::new();

    for node in report.directories() {
        if node.entries.is_empty() {
            continue;
        }
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}/", node.display_path());
        for entry in &node.entries {
            let _ = writeln!(
                out,
                "    {} ({}, {})",
                entry.name,
                format_minutes(entry.duration_minutes),
                format_size(entry.size_bytes)
            );
        }
        let _ = writeln!(
            out,
            "  {} {}, {}",
            FOLDER_TOTAL_LABEL,
            format_minutes(node.total_minutes),
            format_size(node.total_bytes)
        );
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Total duration of all videos: {}",
        format_minutes(report.total_minutes)
    );
    let _ = writeln!(out, "Total size of all videos: {}", format_size(report.total_bytes));
    out
}

/// Converts a plain text report to Markdown based on the shape of each line.
///
/// - unindented lines ending in `/` become `##` headings
/// - folder and grand total lines become bold
/// - other indented lines become list items
///
/// Headings and bold lines this function emits are kept as they are, so
/// converting the output again yields the same text. Any other unindented
/// line ending in `/` is a directory and becomes a heading, whatever its
/// first characters.
pub fn markdown_from_plain(plain: &str) -> String {
    let mut lines: Vec<String> = plain.lines().map(markdown_line).collect();
    if plain.ends_with('\n') {
        lines.push(String::new());
    }
    lines.join("\n")
}

fn markdown_line(line: &str) -> String {
    let trimmed = line.trim();
    let indented = line.starts_with(char::is_whitespace);

    let emitted_heading = line.starts_with("## ") && line.ends_with('/');
    let emitted_bold = line.len() > 4 && line.starts_with("**") && line.ends_with("**");

    if trimmed.is_empty() || emitted_heading || emitted_bold {
        line.to_string()
    } else if !indented && line.ends_with('/') {
        format!("## {line}")
    } else if indented && trimmed.starts_with(FOLDER_TOTAL_LABEL) {
        format!("**{trimmed}**")
    } else if !indented && line.starts_with("Total ") {
        format!("**{line}**")
    } else if indented {
        format!("- {trimmed}")
    } else {
        line.to_string()
    }
}
