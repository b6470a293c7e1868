/// Number of characters in `s`.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of character `idx` in `s`, clamped to the end of the string.
pub(crate) fn byte_offset(s: &str, idx: usize) -> usize {
    s.char_indices().nth(idx).map(|(off, _)| off).unwrap_or(s.len())
}

/// Replace the characters in `[start, end)` of `s` with `text`.
pub(crate) fn splice(s: &str, start: usize, end: usize, text: &str) -> String {
    let bstart = byte_offset(s, start);
    let bend = byte_offset(s, end).max(bstart);

    let mut res = String::with_capacity(s.len() - (bend - bstart) + text.len());
    res.push_str(&s[..bstart]);
    res.push_str(text);
    res.push_str(&s[bend..]);
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("héllo", 0), 0);
        assert_eq!(byte_offset("héllo", 2), 3);
        assert_eq!(byte_offset("héllo", 5), 6);
        assert_eq!(byte_offset("héllo", 50), 6);
    }

    #[test]
    fn test_splice() {
        assert_eq!(splice("0-A", 0, 1, "7"), "7-A");
        assert_eq!(splice("0-A", 3, 3, "!"), "0-A!");
        assert_eq!(splice("é-è", 1, 2, "+"), "é+è");
        assert_eq!(splice("abc", 1, 10, ""), "a");
        assert_eq!(char_len("é-è"), 3);
    }
}
