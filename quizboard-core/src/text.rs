//! Shared text cleanup helpers.

/// Longest description kept on a game; longer source text is truncated.
pub const MAX_DESCRIPTION_LEN: usize = 250;

/// Marker appended to a truncated description.
const ELLIPSIS: &str = "...";

/// Collapse all whitespace runs (including newlines) to single spaces
/// and trim the ends.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitize a description: collapse whitespace, then truncate to
/// [`MAX_DESCRIPTION_LEN`] characters with a trailing ellipsis marker.
pub fn clean_description(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    if collapsed.chars().count() <= MAX_DESCRIPTION_LEN {
        return collapsed;
    }
    let keep = MAX_DESCRIPTION_LEN - ELLIPSIS.len();
    let truncated: String = collapsed.chars().take(keep).collect();
    truncated + ELLIPSIS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_newlines() {
        assert_eq!(collapse_whitespace("  a\n\t b  c "), "a b c");
    }

    #[test]
    fn short_descriptions_pass_through() {
        assert_eq!(clean_description("A short quiz."), "A short quiz.");
    }

    #[test]
    fn long_descriptions_are_truncated_with_marker() {
        let long = "x".repeat(300);
        let cleaned = clean_description(&long);
        assert_eq!(cleaned.chars().count(), MAX_DESCRIPTION_LEN);
        assert!(cleaned.ends_with("..."));
    }
}
