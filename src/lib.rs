//! # SFXI - Suffix-Trie Text Index
//!
//! SFXI is an in-memory compressed suffix-trie index over a fixed text,
//! answering substring-position, substring-existence, and full-suffix
//! queries, all case-insensitive.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Index building (raw trie + path compression) and querying
//! - [`output`] - Result formatting (colored matches, edge dumps)
//! - [`utils`] - Utility functions (case folding, line maps)
//!
//! ## Quick Start
//!
//! ```
//! use sfxi::index::build_index;
//!
//! let index = build_index("banana").unwrap();
//!
//! assert_eq!(index.positions("ana"), vec![1, 3]);
//! assert!(index.contains_substring("nan"));
//! assert!(index.is_suffix("ana"));
//! assert!(!index.is_suffix("ban"));
//! ```
//!
//! ## Design
//!
//! Construction inserts every suffix of the folded text into a branching
//! trie (quadratic, deliberately size-guarded), then collapses maximal
//! single-child, non-terminal chains into multi-byte edges whose labels are
//! ranges into the indexed text. Queries walk edges dispatching on the next
//! pattern byte, so their cost is proportional to the pattern length, not
//! the text length. The built index is immutable and `Send + Sync`;
//! concurrent readers need no locking.

pub mod error;
pub mod index;
pub mod output;
pub mod utils;

pub use error::{IndexError, Result};
pub use index::reader::{SuffixIndex, build_index};
