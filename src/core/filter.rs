//! Order-preserving selection

/// Collect the items of `collection` for which `should_keep` returns `true`.
///
/// The predicate sees every item once, in order. Kept items appear in the
/// output in their original relative order, duplicates included.
///
/// # Examples
///
/// ```
/// use wordscan::core::filter;
///
/// let evens = filter(|n: &i32| n % 2 == 0, vec![1, 2, 3, 4, 4]);
/// assert_eq!(evens, vec![2, 4, 4]);
/// ```
pub fn filter<I, P>(mut should_keep: P, collection: I) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut result = Vec::new();

    for item in collection {
        if should_keep(&item) {
            result.push(item);
        }
    }

    result
}
