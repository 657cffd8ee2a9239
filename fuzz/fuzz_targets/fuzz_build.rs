#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Build an index from arbitrary text and check the full-text identities
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(index) = sfxi::build_index(text) else {
        return;
    };

    let folded = text.to_ascii_lowercase();
    if !folded.is_empty() {
        // The whole text is a substring of itself, its only occurrence
        // starts at 0, and it is its own longest suffix
        assert!(index.contains_substring(&folded));
        assert!(index.is_suffix(&folded));
        assert_eq!(index.positions(&folded), vec![0]);
    }

    let _ = index.edges();
});
