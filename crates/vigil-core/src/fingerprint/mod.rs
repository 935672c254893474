//! Whole-feed change detection.
//!
//! The server re-renders the activity feed fragment on every poll, and the
//! fragment can be large. Instead of diffing records, the poller hashes the
//! whole fragment and re-renders only when the hash moves. The hash is the
//! classic `h * 31 + code_unit` polynomial over UTF-16 code units with
//! 32-bit wraparound.
//!
//! A 32-bit hash can collide and swallow a real change. That risk is
//! accepted; see DESIGN.md.

/// Fingerprint of a rendered feed fragment.
///
/// `h = (h << 5) - h + code_unit` per UTF-16 code unit, wrapping at 32 bits.
pub fn fingerprint(fragment: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in fragment.encode_utf16() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit));
    }
    hash
}

/// Whether the feed fragment warrants a re-render.
///
/// Auxiliary fragments are never gated by this; only the primary feed is.
pub fn should_rerender(old: i32, new: i32) -> bool {
    old != new
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_deterministic() {
        let fragment = "<ul><li>migration started, node-3</li></ul>";
        assert_eq!(fingerprint(fragment), fingerprint(fragment));
    }

    #[test]
    fn test_empty_fragment_hashes_to_zero() {
        assert_eq!(fingerprint(""), 0);
    }

    #[test]
    fn test_known_polynomial_values() {
        // h accumulates as h * 31 + code_unit.
        assert_eq!(fingerprint("a"), 97);
        assert_eq!(fingerprint("ab"), 97 * 31 + 98);
        assert_eq!(fingerprint("hello"), 99162322);
        assert_eq!(fingerprint("Hello"), 69609650);
    }

    #[test]
    fn test_non_ascii_hashes_by_utf16_code_unit() {
        assert_eq!(fingerprint("é"), 233);
        // U+1F4A5 is the surrogate pair D83D DCA5.
        assert_eq!(fingerprint("💥"), 55357 * 31 + 56485);
    }

    #[test]
    fn test_long_input_wraps_instead_of_panicking() {
        let long = "activity".repeat(4096);
        assert_eq!(fingerprint(&long), fingerprint(&long));
    }

    #[test]
    fn test_distinct_fragments_usually_differ() {
        let a = fingerprint("<li>boot started</li>");
        let b = fingerprint("<li>boot finished</li>");
        assert_ne!(a, b);
    }

    #[test]
    fn test_should_rerender_only_on_change() {
        assert!(!should_rerender(42, 42));
        assert!(should_rerender(42, 43));
        assert!(should_rerender(0, fingerprint("x")));
    }
}
