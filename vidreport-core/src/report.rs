//! Report data model produced by the scanner.
//!
//! A [`Report`] is a tree of [`DirectoryNode`]s, one per directory visited
//! within the depth bound. Folder totals cover a node's own entries only;
//! descendant folders are counted solely in the report's grand totals.

use std::path::{Path, PathBuf};

/// One qualifying media file.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Full path of the file
    pub path: PathBuf,

    /// File name as shown in the report
    pub name: String,

    /// Playback duration in minutes (0 if probing failed)
    pub duration_minutes: f64,

    /// Size in bytes (0 if the size lookup failed)
    pub size_bytes: u64,
}

/// One visited directory within the depth bound.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryNode {
    /// Path relative to the scan root (empty for the root itself)
    pub relative_path: PathBuf,

    /// Number of path segments between the scan root and this directory
    pub depth: usize,

    /// Qualifying files, sorted by name
    pub entries: Vec<Entry>,

    /// Visited subdirectories, sorted by name
    pub children: Vec<DirectoryNode>,

    /// Sum of this directory's entry durations, in minutes
    pub total_minutes: f64,

    /// Sum of this directory's entry sizes, in bytes
    pub total_bytes: u64,
}

impl DirectoryNode {
    /// Creates a node and computes its folder totals from `entries`.
    pub fn new(
        relative_path: PathBuf,
        depth: usize,
        entries: Vec<Entry>,
        children: Vec<DirectoryNode>,
    ) -> Self {
        let total_minutes = entries.iter().map(|e| e.duration_minutes).sum();
        let total_bytes = entries.iter().map(|e| e.size_bytes).sum();
        Self {
            relative_path,
            depth,
            entries,
            children,
            total_minutes,
            total_bytes,
        }
    }

    /// Relative path with `/` separators; the root renders as `.`.
    pub fn display_path(&self) -> String {
        display_relative(&self.relative_path)
    }

    /// Iterates over this node and all descendants in pre-order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

fn display_relative(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Pre-order iterator over a directory tree.
pub struct PreOrder<'a> {
    stack: Vec<&'a DirectoryNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a DirectoryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Result of a complete scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The scan root as given by the caller
    pub root_path: PathBuf,

    /// Root of the visited directory tree
    pub root: DirectoryNode,

    /// Sum of every visited folder's duration total, in minutes
    pub total_minutes: f64,

    /// Sum of every visited folder's size total, in bytes
    pub total_bytes: u64,

    /// Number of qualifying files across the report
    pub file_count: usize,

    /// Files whose duration could not be probed
    pub probe_failures: usize,

    /// Files whose size could not be read
    pub stat_failures: usize,
}

impl Report {
    /// Builds a report from a finished tree, computing the grand totals.
    pub fn new(root_path: PathBuf, root: DirectoryNode) -> Self {
        let mut total_minutes = 0.0;
        let mut total_bytes = 0;
        let mut file_count = 0;
        for node in root.iter() {
            total_minutes += node.total_minutes;
            total_bytes += node.total_bytes;
            file_count += node.entries.len();
        }
        Self {
            root_path,
            root,
            total_minutes,
            total_bytes,
            file_count,
            probe_failures: 0,
            stat_failures: 0,
        }
    }

    /// Visited directories in pre-order.
    pub fn directories(&self) -> PreOrder<'_> {
        self.root.iter()
    }
}
