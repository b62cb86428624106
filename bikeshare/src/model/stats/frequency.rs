use std::collections::HashMap;
use std::hash::Hash;

/// the most frequent value in the sequence. ties resolve to the value
/// encountered first. `None` on an empty sequence.
pub fn mode_first<'a, T, I>(items: I) -> Option<&'a T>
where
    T: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let items: Vec<&T> = items.into_iter().collect();
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for &item in &items {
        *counts.entry(item).or_insert(0) += 1;
    }
    let max = counts.values().copied().max()?;
    items.iter().find(|item| counts[**item] == max).copied()
}

/// occurrence counts ordered by descending count; ties keep the order the
/// values were first encountered in.
pub fn value_counts<'a, T, I>(items: I) -> Vec<(&'a T, usize)>
where
    T: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut order: Vec<&T> = Vec::new();
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for item in items {
        if !counts.contains_key(item) {
            order.push(item);
        }
        *counts.entry(item).or_insert(0) += 1;
    }
    let mut result: Vec<(&T, usize)> = order.into_iter().map(|v| (v, counts[v])).collect();
    // stable sort preserves first-encountered order within equal counts
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result
}
