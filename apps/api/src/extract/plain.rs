//! Best-effort plain text decoding for TXT and unrecognized formats.

/// Decodes bytes as UTF-8, dropping invalid byte sequences entirely rather
/// than replacing them with a visible marker. Total: never fails, worst case
/// returns an empty string.
pub fn extract(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());
    let mut rest = data;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, invalid) = rest.split_at(err.valid_up_to());
                if let Ok(s) = std::str::from_utf8(valid) {
                    out.push_str(s);
                }
                match err.error_len() {
                    // Skip the offending bytes and keep decoding.
                    Some(len) => rest = &invalid[len..],
                    // Truncated sequence at the end of input.
                    None => break,
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_passes_through() {
        assert_eq!(extract("Hello, World!".as_bytes()), "Hello, World!");
    }

    #[test]
    fn test_accented_characters_preserved() {
        let input = "résumé — ingénieur backend à Paris".as_bytes();
        assert_eq!(extract(input), "résumé — ingénieur backend à Paris");
    }

    #[test]
    fn test_invalid_bytes_are_dropped_not_replaced() {
        let input = b"caf\xc3\xa9\xff ok";
        let text = extract(input);
        assert_eq!(text, "café ok");
        assert!(!text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_pure_garbage_yields_empty_string() {
        assert_eq!(extract(b"\xff\xfe\xfd"), "");
    }

    #[test]
    fn test_truncated_multibyte_tail_is_dropped() {
        // "é" is 0xC3 0xA9; cut it in half at the end of input.
        assert_eq!(extract(b"abc\xc3"), "abc");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract(b""), "");
    }
}
