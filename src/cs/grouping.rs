/// Groups `(key, value)` pairs by key, returning each distinct key alongside the
/// values paired with it.
///
/// Keys appear in the order they are first seen; values keep their original
/// relative order. Only `PartialEq` is needed on keys, so lookups are linear in
/// the number of distinct keys.
pub fn group_pairs<K, V, I>(pairs: I) -> Vec<(K, Vec<V>)>
where
    K: PartialEq,
    I: IntoIterator<Item = (K, V)>,
{
    let mut groups: Vec<(K, Vec<V>)> = Vec::new();
    for (key, value) in pairs {
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => groups.push((key, vec![value])),
        }
    }
    groups
}

/// Groups the values of `(key, value)` pairs by key, dropping the keys.
///
/// # Example
///
/// ```
/// use restaurant_maps::cs::grouping::group_by_first;
///
/// let pairs = vec![(1, 2), (3, 2), (2, 4), (1, 3), (3, 1), (1, 2)];
/// assert_eq!(group_by_first(pairs), vec![vec![2, 3, 2], vec![2, 1], vec![4]]);
/// ```
pub fn group_by_first<K, V, I>(pairs: I) -> Vec<Vec<V>>
where
    K: PartialEq,
    I: IntoIterator<Item = (K, V)>,
{
    group_pairs(pairs)
        .into_iter()
        .map(|(_, values)| values)
        .collect()
}
