pub mod build;
pub mod compress;
pub mod reader;
pub mod stats;
pub mod types;

pub use reader::{DUMP_OFFSET_LIMIT, EdgeRecord, SuffixIndex, build_index};
pub use types::*;
