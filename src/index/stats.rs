//! Index statistics
//!
//! Read-only traversal counters over the compact trie, plus the console
//! report used by the `stats` subcommand.

use crate::index::compress::CompactNode;
use crate::index::reader::SuffixIndex;
use serde::Serialize;

/// Shape counters for a built index
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrieStats {
    /// Indexed text length in bytes
    pub text_len: usize,
    /// Raw trie node count before compression (including the root)
    pub raw_node_count: usize,
    /// Compact trie node count (including the root)
    pub node_count: usize,
    /// Compact trie edge count
    pub edge_count: usize,
    /// Nodes at which some suffix ends
    pub terminal_count: usize,
    /// Deepest node, measured in label bytes from the root
    pub max_depth: usize,
    /// Total label bytes across all edges
    pub label_bytes: usize,
}

/// Collect statistics from a built index.
pub fn collect_stats(index: &SuffixIndex) -> TrieStats {
    let mut stats = TrieStats {
        text_len: index.text_len(),
        raw_node_count: index.meta().raw_node_count,
        node_count: 1,
        ..TrieStats::default()
    };
    visit(index.root(), 0, &mut stats);
    stats
}

fn visit(node: &CompactNode, depth: usize, stats: &mut TrieStats) {
    if node.terminal {
        stats.terminal_count += 1;
    }
    stats.max_depth = stats.max_depth.max(depth);

    for edge in node.children.values() {
        stats.node_count += 1;
        stats.edge_count += 1;
        stats.label_bytes += edge.label_len();
        visit(&edge.node, depth + edge.label_len(), stats);
    }
}

/// Display index statistics
pub fn show_stats(index: &SuffixIndex) {
    let stats = collect_stats(index);

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Text length:      {} bytes", stats.text_len);
    println!("Raw trie nodes:   {}", stats.raw_node_count);
    println!("Compact nodes:    {}", stats.node_count);
    println!("Compact edges:    {}", stats.edge_count);
    println!("Terminal nodes:   {}", stats.terminal_count);
    println!("Max depth:        {} bytes", stats.max_depth);
    println!("Label bytes:      {}", stats.label_bytes);

    if stats.raw_node_count > 1 {
        let ratio = (stats.node_count - 1) as f64 / (stats.raw_node_count - 1) as f64;
        println!("Compression:      {:.1}% of raw nodes kept", ratio * 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::reader::build_index;

    #[test]
    fn test_banana_stats() {
        let index = build_index("banana").unwrap();
        let stats = collect_stats(&index);

        assert_eq!(stats.text_len, 6);
        assert_eq!(stats.node_count, 7);
        assert_eq!(stats.edge_count, 6);
        assert_eq!(stats.terminal_count, 6);
        assert_eq!(stats.max_depth, 6);
        // a + na + na + banana + na + na
        assert_eq!(stats.label_bytes, 15);
    }

    #[test]
    fn test_empty_text_stats() {
        let index = build_index("").unwrap();
        let stats = collect_stats(&index);

        assert_eq!(stats.node_count, 1);
        assert_eq!(stats.edge_count, 0);
        assert_eq!(stats.terminal_count, 0);
        assert_eq!(stats.max_depth, 0);
    }

    #[test]
    fn test_terminal_count_matches_suffix_count() {
        // Distinct suffixes each end at a distinct terminal node
        let index = build_index("abcd").unwrap();
        let stats = collect_stats(&index);
        assert_eq!(stats.terminal_count, 4);
    }
}
