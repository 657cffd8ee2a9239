//! Raw suffix-trie builder
//!
//! Inserts every suffix of the folded text byte by byte into a branching
//! trie, recording at each visited node the start offsets of the suffixes
//! that pass through it. The raw trie is an intermediate structure: it is
//! handed to [`compress`](crate::index::compress::compress) and discarded.

use crate::index::types::StartOffset;
use rustc_hash::FxHashMap;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// Node of the uncompressed suffix trie
pub(crate) struct RawNode {
    /// Children keyed by a single folded byte
    pub children: FxHashMap<u8, RawNode>,
    /// True if some suffix ends exactly at this node
    pub terminal: bool,
    /// Start offsets of every suffix whose path passes through this node.
    /// Ascending: suffixes are inserted in offset order.
    pub start_offsets: Vec<StartOffset>,
}

impl RawNode {
    fn new() -> Self {
        Self {
            children: FxHashMap::default(),
            terminal: false,
            start_offsets: Vec::new(),
        }
    }
}

/// Result of raw trie construction
pub(crate) struct RawTrie {
    pub root: RawNode,
    /// Total node count, including the root
    pub node_count: usize,
}

/// Build the uncompressed suffix trie over already-folded text.
///
/// For every start offset `i`, walks a path from the root consuming
/// `text[i..]`, creating missing children along the way, and appends `i` to
/// each landed node's offset list. The node reached by the full suffix is
/// marked terminal. O(n^2) time and space in the text length; the caller is
/// responsible for size-guarding the input.
pub(crate) fn build_raw_trie(text: &[u8], silent: bool) -> RawTrie {
    let mut root = RawNode::new();
    let mut node_count = 1usize;

    #[cfg(feature = "progress")]
    let progress = suffix_progress(text.len(), silent);
    #[cfg(not(feature = "progress"))]
    let _ = silent;

    for i in 0..text.len() {
        let mut node = &mut root;
        for &byte in &text[i..] {
            node = node.children.entry(byte).or_insert_with(|| {
                node_count += 1;
                RawNode::new()
            });
            node.start_offsets.push(i as StartOffset);
        }
        node.terminal = true;

        #[cfg(feature = "progress")]
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    #[cfg(feature = "progress")]
    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    RawTrie { root, node_count }
}

/// Progress bar over the suffix insertion loop.
///
/// Only shown for inputs large enough for construction to be noticeable.
#[cfg(feature = "progress")]
fn suffix_progress(suffix_count: usize, silent: bool) -> Option<ProgressBar> {
    if silent || suffix_count < 8192 {
        return None;
    }

    let bar = ProgressBar::new(suffix_count as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} suffixes")
            .unwrap(),
    );
    Some(bar)
}
