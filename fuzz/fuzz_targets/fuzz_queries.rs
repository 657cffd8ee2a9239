#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let (text, pattern) = input;
    let Ok(index) = sfxi::build_index(text) else {
        return;
    };

    let positions = index.positions(pattern);
    let contains = index.contains_substring(pattern);

    if pattern.is_empty() {
        // Node-boundary result at the root
        assert!(contains);
        assert!(positions.is_empty());
        return;
    }

    // The three operations must agree with each other
    assert_eq!(contains, !positions.is_empty());
    if index.is_suffix(pattern) {
        assert!(contains);
    }

    // And with a naive scan over the folded text
    let folded_text = text.to_ascii_lowercase();
    let folded_pattern = pattern.to_ascii_lowercase();
    let naive: Vec<u32> = folded_text
        .as_bytes()
        .windows(folded_pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == folded_pattern.as_bytes())
        .map(|(i, _)| i as u32)
        .collect();
    assert_eq!(positions, naive);
});
