//! Pure symbol-sequence helpers used by insertion and lookup.
//!
//! All functions take a slice plus a start offset so callers can compare the
//! unconsumed remainder of a key without re-slicing it first. An offset past
//! the end of its slice is treated as an empty remainder.

/// Returns the number of leading symbols that match between `a[a_start..]`
/// and `b[b_start..]`.
///
/// The result is bounded by the shorter of the two remainders.
///
/// ```
/// use radix_index::util::common_prefix_length;
///
/// assert_eq!(common_prefix_length(b"banana", 0, b"bandana", 0), 3);
/// assert_eq!(common_prefix_length(b"banana", 3, b"bandana", 4), 3);
/// ```
pub fn common_prefix_length<T: Eq>(a: &[T], a_start: usize, b: &[T], b_start: usize) -> usize {
    let a = a.get(a_start..).unwrap_or_default();
    let b = b.get(b_start..).unwrap_or_default();

    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Returns `true` if `candidate` appears in full at `text[text_start..]`.
///
/// This is the insertion-side test for "the whole edge label can be consumed".
pub fn is_prefix_of<T: Eq>(candidate: &[T], text: &[T], text_start: usize) -> bool {
    match text.get(text_start..) {
        Some(rest) => rest.starts_with(candidate),
        None => false,
    }
}

/// Returns `true` if `prefix[prefix_start..]` matches the start of
/// `text[text_start..]`.
///
/// The prefix remainder must not be longer than the text remainder, so a label
/// that runs past the end of the search key never matches.
///
/// ```
/// use radix_index::util::matches_as_prefix;
///
/// assert!(matches_as_prefix(b"banana", 0, b"ban", 0));
/// assert!(!matches_as_prefix(b"banan", 0, b"banana", 0));
/// ```
pub fn matches_as_prefix<T: Eq>(text: &[T], text_start: usize, prefix: &[T], prefix_start: usize) -> bool {
    let text = text.get(text_start..).unwrap_or_default();
    let prefix = prefix.get(prefix_start..).unwrap_or_default();

    if prefix.len() > text.len() {
        return false;
    }

    text.starts_with(prefix)
}
