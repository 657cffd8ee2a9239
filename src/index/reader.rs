//! Read-only suffix-trie index
//!
//! [`SuffixIndex`] owns the case-folded text and the compact trie built
//! over it. All three query operations share one edge walker and differ
//! only in what they return; queries are total functions - an absent
//! pattern yields an empty/false result, never an error.

use crate::error::{IndexError, Result};
use crate::index::build::build_raw_trie;
use crate::index::compress::{CompactNode, compress};
use crate::index::types::{IndexConfig, IndexMeta, StartOffset};
use crate::utils::fold_case;
use serde::Serialize;

/// How many stored offsets a dump row keeps per edge
pub const DUMP_OFFSET_LIMIT: usize = 5;

/// Build an index over `text` with the default configuration.
///
/// Matching is case-insensitive via ASCII folding; all reported offsets are
/// byte offsets into `text`. Fails only when `text` exceeds
/// [`IndexConfig::max_text_len`].
pub fn build_index(text: &str) -> Result<SuffixIndex> {
    SuffixIndex::build(text)
}

/// Compressed suffix-trie index over a fixed text
///
/// Immutable once built: arbitrarily many queries may run concurrently from
/// independent readers without locking.
#[derive(Debug)]
pub struct SuffixIndex {
    /// Case-folded copy of the input; edge labels are ranges into it
    text: Vec<u8>,
    root: CompactNode,
    meta: IndexMeta,
}

/// Where the walker stopped relative to the compact trie
enum WalkOutcome<'a> {
    /// Pattern consumed exactly at a node boundary
    AtNode(&'a CompactNode),
    /// Pattern consumed inside an edge label; carries the edge's child
    InsideEdge(&'a CompactNode),
    NotFound,
}

impl SuffixIndex {
    /// Build with the default configuration, without progress output.
    pub fn build(text: &str) -> Result<Self> {
        Self::build_with_config(text, &IndexConfig::default())
    }

    /// Build with an explicit configuration, without progress output.
    pub fn build_with_config(text: &str, config: &IndexConfig) -> Result<Self> {
        Self::build_with_progress(text, config, true)
    }

    /// Build with an explicit configuration and optional progress bar
    /// (shown unless `silent`; requires the `progress` feature).
    pub fn build_with_progress(text: &str, config: &IndexConfig, silent: bool) -> Result<Self> {
        if text.len() > config.max_text_len {
            return Err(IndexError::InvalidInput(format!(
                "text is {} bytes, configured limit is {}",
                text.len(),
                config.max_text_len
            )));
        }

        let folded = fold_case(text.as_bytes());
        let raw = build_raw_trie(&folded, silent);
        let meta = IndexMeta {
            text_len: folded.len(),
            raw_node_count: raw.node_count,
            case_folded: true,
        };

        Ok(Self {
            root: compress(raw.root),
            text: folded,
            meta,
        })
    }

    /// All byte offsets where `pattern` starts in the text, ascending.
    ///
    /// An empty pattern stops at the root, which stores no offsets.
    pub fn positions(&self, pattern: &str) -> Vec<StartOffset> {
        match self.walk(&fold_case(pattern.as_bytes())) {
            // Every suffix passing through the edge has the pattern as a
            // prefix of its remaining text, so the child's offsets are
            // exactly the match positions.
            WalkOutcome::AtNode(node) | WalkOutcome::InsideEdge(node) => {
                node.start_offsets.clone()
            }
            WalkOutcome::NotFound => Vec::new(),
        }
    }

    /// Whether `pattern` occurs anywhere in the text.
    pub fn contains_substring(&self, pattern: &str) -> bool {
        !matches!(
            self.walk(&fold_case(pattern.as_bytes())),
            WalkOutcome::NotFound
        )
    }

    /// Whether `pattern` equals a full suffix of the text.
    ///
    /// A true suffix must end exactly at a node, so a pattern ending inside
    /// an edge label is never a suffix.
    pub fn is_suffix(&self, pattern: &str) -> bool {
        match self.walk(&fold_case(pattern.as_bytes())) {
            WalkOutcome::AtNode(node) => node.terminal,
            WalkOutcome::InsideEdge(_) | WalkOutcome::NotFound => false,
        }
    }

    /// Number of occurrences of `pattern` in the text.
    pub fn count_matches(&self, pattern: &str) -> usize {
        match self.walk(&fold_case(pattern.as_bytes())) {
            WalkOutcome::AtNode(node) | WalkOutcome::InsideEdge(node) => {
                node.start_offsets.len()
            }
            WalkOutcome::NotFound => 0,
        }
    }

    /// Length of the indexed text in bytes
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Build-time metadata
    pub fn meta(&self) -> &IndexMeta {
        &self.meta
    }

    /// Deterministic preorder edge list for diagnostics.
    ///
    /// Children are visited in first-byte order; each record keeps at most
    /// [`DUMP_OFFSET_LIMIT`] offsets. A debugging aid, not part of the
    /// query contract.
    pub fn edges(&self) -> Vec<EdgeRecord> {
        let mut records = Vec::new();
        self.collect_edges(&self.root, String::new(), &mut records);
        records
    }

    fn collect_edges(&self, node: &CompactNode, path: String, out: &mut Vec<EdgeRecord>) {
        let mut firsts: Vec<u8> = node.children.keys().copied().collect();
        firsts.sort_unstable();

        for first in firsts {
            let edge = &node.children[&first];
            let label = String::from_utf8_lossy(edge.label(&self.text)).into_owned();
            let child = &edge.node;

            out.push(EdgeRecord {
                parent: path.clone(),
                label: label.clone(),
                terminal: child.terminal,
                offsets: child
                    .start_offsets
                    .iter()
                    .take(DUMP_OFFSET_LIMIT)
                    .copied()
                    .collect(),
                offset_count: child.start_offsets.len(),
            });

            let mut child_path = path.clone();
            child_path.push_str(&label);
            self.collect_edges(child, child_path, out);
        }
    }

    /// Shared traversal: dispatch on the next pattern byte, then compare
    /// the edge label against the unconsumed remainder.
    fn walk(&self, pattern: &[u8]) -> WalkOutcome<'_> {
        let mut node = &self.root;
        let mut pos = 0usize;

        while pos < pattern.len() {
            let Some(edge) = node.children.get(&pattern[pos]) else {
                return WalkOutcome::NotFound;
            };

            let label = edge.label(&self.text);
            let rest = &pattern[pos..];

            if rest.len() >= label.len() {
                if &rest[..label.len()] == label {
                    // Full label consumed, descend
                    pos += label.len();
                    node = &edge.node;
                } else {
                    return WalkOutcome::NotFound;
                }
            } else if label[..rest.len()] == *rest {
                // Pattern ends inside this edge
                return WalkOutcome::InsideEdge(&edge.node);
            } else {
                return WalkOutcome::NotFound;
            }
        }

        WalkOutcome::AtNode(node)
    }

    pub(crate) fn root(&self) -> &CompactNode {
        &self.root
    }
}

/// One edge of the compact trie, as reported by [`SuffixIndex::edges`]
#[derive(Debug, Clone, Serialize)]
pub struct EdgeRecord {
    /// Path label of the parent node; empty for the root
    pub parent: String,
    /// Edge label
    pub label: String,
    /// Whether the child ends a suffix
    pub terminal: bool,
    /// Bounded prefix of the child's stored offsets
    pub offsets: Vec<StartOffset>,
    /// Total number of offsets stored at the child
    pub offset_count: usize,
}
