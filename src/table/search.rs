use super::rows::RowRecord;

/// Apply the search predicate: a row matches when its lowercased,
/// concatenated cell text contains the lowercased term. The empty term
/// matches every row. Row order is never touched here; search is a
/// filter, not a permutation.
pub fn apply_search(rows: &mut [RowRecord], term: &str) {
    let needle = term.to_lowercase();
    for row in rows.iter_mut() {
        row.matched = needle.is_empty() || row.haystack().contains(&needle);
    }
}
