use crate::tree::OrderedMap;

/// Exclusive upper bound for keys starting with `prefix`.
///
/// The last byte is incremented; trailing `0xFF` bytes cannot be incremented and are
/// dropped first. `None` means every key `>= prefix` matches (also returned for an
/// empty prefix). UTF-8 text never ends in `0xFF`, so for `&str` prefixes the bound is
/// always the plain increment, though it may itself not be valid UTF-8.
pub fn prefix_upper_bound(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut bound = prefix.to_vec();
    while let Some(last) = bound.pop() {
        if last < u8::MAX {
            bound.push(last + 1);
            return Some(bound);
        }
    }
    None
}

/// Entries whose key starts with the bytes of `prefix`, ascending.
///
/// An empty prefix, or one made only of `0xFF` bytes, has no finite upper bound and
/// scans everything from `prefix` onward.
pub fn scan_prefix<V: Clone>(map: &OrderedMap<V>, prefix: &[u8]) -> Vec<(String, V)> {
    match prefix_upper_bound(prefix) {
        Some(hi) => map.range(prefix, hi),
        None => map.range_from(prefix),
    }
}
