//! Text helpers: case folding and offset-to-line mapping.

use memchr::memchr_iter;

/// ASCII-fold to lower case.
///
/// Both the indexed text and incoming patterns go through this, making all
/// matching case-insensitive for ASCII letters. Non-ASCII bytes pass
/// through unchanged.
pub fn fold_case(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|b| b.to_ascii_lowercase()).collect()
}

/// Byte offset of the first byte of every line
pub fn build_line_map(content: &[u8]) -> Vec<u32> {
    let mut offsets = vec![0u32];
    for pos in memchr_iter(b'\n', content) {
        if pos + 1 < content.len() {
            offsets.push((pos + 1) as u32);
        }
    }
    offsets
}

/// Map a byte offset to 1-based (line, column)
pub fn position_to_line_col(line_map: &[u32], pos: u32) -> (u32, u32) {
    let line = match line_map.binary_search(&pos) {
        Ok(idx) => idx,
        Err(idx) => idx - 1,
    };
    (line as u32 + 1, pos - line_map[line] + 1)
}

/// Byte span of the 1-based `line`, excluding the trailing newline
pub fn line_span(content: &[u8], line_map: &[u32], line: u32) -> (usize, usize) {
    let idx = (line as usize) - 1;
    let start = line_map[idx] as usize;
    let mut end = if idx + 1 < line_map.len() {
        line_map[idx + 1] as usize
    } else {
        content.len()
    };
    while end > start && (content[end - 1] == b'\n' || content[end - 1] == b'\r') {
        end -= 1;
    }
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case(b"BanAna"), b"banana");
        assert_eq!(fold_case(b"abc123!"), b"abc123!");
        assert_eq!(fold_case(b""), b"");
    }

    #[test]
    fn test_build_line_map() {
        assert_eq!(build_line_map(b"one\ntwo\nthree"), vec![0, 4, 8]);
        // Trailing newline does not open an empty line
        assert_eq!(build_line_map(b"one\ntwo\n"), vec![0, 4]);
        assert_eq!(build_line_map(b"flat"), vec![0]);
        assert_eq!(build_line_map(b""), vec![0]);
    }

    #[test]
    fn test_position_to_line_col() {
        let content = b"one\ntwo\nthree";
        let map = build_line_map(content);

        assert_eq!(position_to_line_col(&map, 0), (1, 1));
        assert_eq!(position_to_line_col(&map, 3), (1, 4));
        assert_eq!(position_to_line_col(&map, 4), (2, 1));
        assert_eq!(position_to_line_col(&map, 9), (3, 2));
    }

    #[test]
    fn test_line_span() {
        let content = b"one\ntwo\nthree";
        let map = build_line_map(content);

        assert_eq!(line_span(content, &map, 1), (0, 3));
        assert_eq!(line_span(content, &map, 2), (4, 7));
        assert_eq!(line_span(content, &map, 3), (8, 13));

        let crlf = b"one\r\ntwo";
        let map = build_line_map(crlf);
        assert_eq!(line_span(crlf, &map, 1), (0, 3));
    }
}
