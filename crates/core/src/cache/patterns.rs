//! Glob matching for cache key patterns.
//!
//! Patterns support `*` as a wildcard for any run of characters, including
//! an empty one. This is the subset of Redis `KEYS` syntax the service uses.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use entryd_core::cache::pattern_matches;
///
/// assert!(pattern_matches("entry:*", "entry:42"));
/// assert!(pattern_matches("entries:all", "entries:all"));
/// assert!(!pattern_matches("entry:*", "entries:all"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let mut segments = pattern.split('*');

    // `split` always yields at least one item.
    let head = segments.next().unwrap_or_default();
    let Some(mut rest) = key.strip_prefix(head) else {
        return false;
    };

    let tail: Vec<&str> = segments.collect();
    let Some((last, middle)) = tail.split_last() else {
        // No wildcard at all: the head must be the whole key.
        return rest.is_empty();
    };

    for segment in middle.iter().filter(|s| !s.is_empty()) {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }

    rest.ends_with(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(pattern_matches("entries:all", "entries:all"));
        assert!(pattern_matches("entry:1", "entry:1"));
        assert!(!pattern_matches("entry:1", "entry:12"));
        assert!(!pattern_matches("entry:12", "entry:1"));
    }

    #[test]
    fn test_wildcard_at_end() {
        assert!(pattern_matches("entry:*", "entry:1"));
        assert!(pattern_matches("entry:*", "entry:"));
        assert!(pattern_matches("entry:*", "entry:_keys"));
        assert!(!pattern_matches("entry:*", "entries:all"));
    }

    #[test]
    fn test_wildcard_at_start() {
        assert!(pattern_matches("*:all", "entries:all"));
        assert!(!pattern_matches("*:all", "entries:some"));
    }

    #[test]
    fn test_wildcard_in_middle() {
        assert!(pattern_matches("entr*:all", "entries:all"));
        assert!(pattern_matches("a*c", "abc"));
        assert!(pattern_matches("a*c", "ac"));
        assert!(!pattern_matches("a*c", "abd"));
    }

    #[test]
    fn test_multiple_wildcards() {
        assert!(pattern_matches("*:*", "entry:1"));
        assert!(pattern_matches("*ry:*", "entry:1"));
        assert!(pattern_matches("a*b*c", "a-x-b-y-c"));
        assert!(!pattern_matches("a*b*c", "a-x-c-y-b"));
    }

    #[test]
    fn test_suffix_cannot_reuse_middle_match() {
        assert!(!pattern_matches("a*b*b", "a-b"));
        assert!(pattern_matches("a*b*b", "a-b-b"));
    }

    #[test]
    fn test_wildcard_only() {
        assert!(pattern_matches("*", "anything"));
        assert!(pattern_matches("*", ""));
        assert!(pattern_matches("**", "entry:1"));
    }

    #[test]
    fn test_empty_pattern() {
        assert!(pattern_matches("", ""));
        assert!(!pattern_matches("", "entry:1"));
    }

    #[test]
    fn test_empty_key() {
        assert!(!pattern_matches("entry:*", ""));
        assert!(!pattern_matches("entries:all", ""));
    }
}
