use serde::{Deserialize, Serialize};

/// Byte offset in the indexed text where a suffix starts
pub type StartOffset = u32;

/// Configuration for index construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Maximum text size accepted by the builder (bytes, default: 64KB)
    ///
    /// The raw suffix trie is quadratic in the text length, so construction
    /// rejects anything larger instead of exhausting memory. Texts beyond
    /// this size belong in a suffix array, not a suffix trie.
    pub max_text_len: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_text_len: 64 * 1024, // 64KB
        }
    }
}

/// Index metadata captured at build time
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IndexMeta {
    /// Length of the indexed (folded) text in bytes
    pub text_len: usize,
    /// Node count of the intermediate raw trie, including the root
    pub raw_node_count: usize,
    /// Whether the text was case-folded before indexing (always true)
    pub case_folded: bool,
}
