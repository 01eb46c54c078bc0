//! Answer matching.
//!
//! Both functions are pure. [`normalize`] is applied identically to
//! questions (for lookup keys) and answers (for comparison).

/// Lowercase, trim, and collapse every run of whitespace into one space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decide whether `actual` matches `expected`.
///
/// After normalizing both sides, the answer matches when the strings are
/// equal or when either one contains the other. The containment check runs
/// in both directions, so the result does not depend on argument order.
///
/// This is deliberately loose. An answer that merely embeds a short expected
/// fragment in unrelated text also passes (expected `"7"` matches
/// `"there are 17 of them"`). Such false positives are an accepted risk of
/// substring matching, not a bug.
///
/// An empty side is contained in everything, so a blank answer matches any
/// expected answer.
pub fn is_match(expected: &str, actual: &str) -> bool {
    let expected = normalize(expected);
    let actual = normalize(actual);

    expected == actual || actual.contains(&expected) || expected.contains(&actual)
}
