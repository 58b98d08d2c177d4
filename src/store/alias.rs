/// Next alias in shortest-first order.
///
/// Walks `current` from the end; the first character below `'z'` is bumped and
/// everything after it dropped. If every character is `'z'` (or `current` is empty),
/// an `'a'` is appended:
///
/// `"" -> "a" -> ... -> "z" -> "za" -> ... -> "zz" -> "zza"`
///
/// The result is always strictly greater than `current`. It is only the shortest
/// free slot when `current` consists of lowercase ASCII letters; any character above
/// `'z'` (including all non-ASCII ones) is treated like `'z'`.
pub fn next_alias(current: &str) -> String {
    for (idx, ch) in current.char_indices().rev() {
        if ch < 'z' {
            // Anything below 'z' is ASCII, so the bump stays a single byte.
            let mut next = String::with_capacity(idx + 1);
            next.push_str(&current[..idx]);
            next.push(char::from(ch as u8 + 1));
            return next;
        }
    }

    let mut next = String::with_capacity(current.len() + 1);
    next.push_str(current);
    next.push('a');
    next
}
