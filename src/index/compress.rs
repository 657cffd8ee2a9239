//! Path compression of the raw suffix trie
//!
//! Rewrites the raw trie into a compact trie whose edges carry whole
//! substrings instead of single bytes. A maximal chain of single-child,
//! non-terminal nodes collapses into one edge; collapsing stops at terminal
//! nodes (a query must be able to stop there to recognize a full suffix)
//! and at branching nodes.
//!
//! Edge labels are stored as byte ranges into the index's folded text
//! rather than owned strings, so compression allocates nothing per label.

use crate::index::build::RawNode;
use crate::index::types::StartOffset;
use rustc_hash::FxHashMap;

/// Node of the compact (queryable) suffix trie
#[derive(Debug)]
pub(crate) struct CompactNode {
    /// Outgoing edges keyed by the first byte of their label. Labels from
    /// one node never share a first byte, so dispatch is a single lookup.
    pub children: FxHashMap<u8, CompactEdge>,
    /// Carried from the raw chain's end node
    pub terminal: bool,
    /// Carried from the raw chain's end node, ascending
    pub start_offsets: Vec<StartOffset>,
}

/// Edge of the compact trie: a non-empty label plus the owned child
#[derive(Debug)]
pub(crate) struct CompactEdge {
    /// Label start in the folded text (inclusive)
    pub label_start: u32,
    /// Label end in the folded text (exclusive)
    pub label_end: u32,
    pub node: CompactNode,
}

impl CompactEdge {
    /// Resolve the label against the folded text the index owns
    #[inline]
    pub fn label<'t>(&self, text: &'t [u8]) -> &'t [u8] {
        &text[self.label_start as usize..self.label_end as usize]
    }

    /// Label length in bytes
    #[inline]
    pub fn label_len(&self) -> usize {
        (self.label_end - self.label_start) as usize
    }
}

/// Compress the raw trie rooted at `root` into a compact trie.
pub(crate) fn compress(root: RawNode) -> CompactNode {
    compress_node(root, 0)
}

/// Compress one raw node sitting at `depth` bytes below the root.
fn compress_node(raw: RawNode, depth: u32) -> CompactNode {
    let mut children = FxHashMap::default();

    for (first_byte, child) in raw.children {
        let mut end = child;
        let mut end_depth = depth + 1;

        // Collapse while the chained node cannot be a query stop: exactly
        // one child and not terminal.
        while end.children.len() == 1 && !end.terminal {
            let next = end.children.into_iter().next().map(|(_, n)| n).unwrap();
            // A non-terminal single-child node passes every suffix straight
            // through, so the offset list is identical along the chain and
            // keeping only the end node's copy is lossless.
            debug_assert_eq!(next.start_offsets.len(), end.start_offsets.len());
            end = next;
            end_depth += 1;
        }

        // Every non-root raw node lies on at least one suffix path, so the
        // end node has an offset to anchor the label range: the path from
        // the root to it spells text[i..i + end_depth] for any recorded i.
        let anchor = end.start_offsets[0];
        children.insert(
            first_byte,
            CompactEdge {
                label_start: anchor + depth,
                label_end: anchor + end_depth,
                node: compress_node(end, end_depth),
            },
        );
    }

    CompactNode {
        children,
        terminal: raw.terminal,
        start_offsets: raw.start_offsets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build::build_raw_trie;

    fn compact(text: &[u8]) -> CompactNode {
        compress(build_raw_trie(text, true).root)
    }

    fn label<'t>(text: &'t [u8], node: &CompactNode, first: u8) -> &'t [u8] {
        node.children[&first].label(text)
    }

    #[test]
    fn test_empty_text() {
        let root = compact(b"");
        assert!(root.children.is_empty());
        assert!(!root.terminal);
        assert!(root.start_offsets.is_empty());
    }

    #[test]
    fn test_banana_root_edges() {
        let text = b"banana";
        let root = compact(text);

        let mut keys: Vec<u8> = root.children.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![b'a', b'b', b'n']);

        assert_eq!(label(text, &root, b'a'), b"a");
        assert_eq!(label(text, &root, b'b'), b"banana");
        assert_eq!(label(text, &root, b'n'), b"na");
    }

    #[test]
    fn test_offsets_and_terminal_carried() {
        let text = b"banana";
        let root = compact(text);

        // Whole-text edge collapses to a single terminal leaf at offset 0
        let banana = &root.children[&b'b'].node;
        assert!(banana.terminal);
        assert_eq!(banana.start_offsets, vec![0]);
        assert!(banana.children.is_empty());

        // "na" stops at the terminal suffix "na" even though it chains on
        let na = &root.children[&b'n'].node;
        assert!(na.terminal);
        assert_eq!(na.start_offsets, vec![2, 4]);
        assert_eq!(label(text, na, b'n'), b"na");
        assert_eq!(na.children[&b'n'].node.start_offsets, vec![2]);
    }

    #[test]
    fn test_chain_stops_at_terminal() {
        // Every prefix of "aaa" ends a suffix, so nothing may collapse
        let text = b"aaa";
        let root = compact(text);

        let a1 = &root.children[&b'a'];
        assert_eq!(a1.label(text), b"a");
        assert_eq!(a1.node.start_offsets, vec![0, 1, 2]);
        assert!(a1.node.terminal);

        let a2 = &a1.node.children[&b'a'];
        assert_eq!(a2.label(text), b"a");
        assert_eq!(a2.node.start_offsets, vec![0, 1]);
        assert!(a2.node.terminal);

        let a3 = &a2.node.children[&b'a'];
        assert_eq!(a3.label(text), b"a");
        assert_eq!(a3.node.start_offsets, vec![0]);
        assert!(a3.node.terminal);
        assert!(a3.node.children.is_empty());
    }

    #[test]
    fn test_chain_stops_at_branch() {
        // In "abac" the 'a' node branches into "bac" and "c"
        let text = b"abac";
        let root = compact(text);

        let a = &root.children[&b'a'];
        assert_eq!(a.label(text), b"a");
        assert!(!a.node.terminal);
        assert_eq!(a.node.start_offsets, vec![0, 2]);
        assert_eq!(a.node.children.len(), 2);

        assert_eq!(label(text, &a.node, b'b'), b"bac");
        assert_eq!(label(text, &a.node, b'c'), b"c");
        assert_eq!(a.node.children[&b'b'].node.start_offsets, vec![0]);
        assert_eq!(a.node.children[&b'c'].node.start_offsets, vec![2]);
    }

    #[test]
    fn test_labels_are_nonempty_and_disjoint() {
        let text = b"mississippi";
        let root = compact(text);

        fn check(text: &[u8], node: &CompactNode) {
            for (first, edge) in &node.children {
                let lab = edge.label(text);
                assert!(!lab.is_empty());
                assert_eq!(lab[0], *first);
                check(text, &edge.node);
            }
        }
        check(text, &root);
    }
}
