//! Order-preserving transformation

/// Apply `transform` to every item of `collection`, collecting the results.
///
/// The output has one entry per input item, in the same order:
/// `output[i] == transform(input[i])`.
///
/// # Examples
///
/// ```
/// use wordscan::core::map;
///
/// let lengths = map(|w: &str| w.len(), ["a", "fox", "over"]);
/// assert_eq!(lengths, vec![1, 3, 4]);
/// ```
pub fn map<I, F, U>(mut transform: F, collection: I) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    let mut result = Vec::new();

    for item in collection {
        let transformed_item = transform(item);
        result.push(transformed_item);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_lengths() {
        let words = [
            "jumps", "laziest", "brown", "a", "quick", "fox", "the", "dog", "over",
        ];
        assert_eq!(
            map(|w: &str| w.len(), words),
            vec![5, 7, 5, 1, 5, 3, 3, 3, 4]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let empty: Vec<String> = Vec::new();
        assert!(map(|s: String| s.len(), empty).is_empty());
    }

    #[test]
    fn test_changes_element_type() {
        let labels = map(|n: u32| format!("#{n}"), 1..=3);
        assert_eq!(labels, vec!["#1", "#2", "#3"]);
    }

    #[test]
    fn test_transform_called_once_per_item_in_order() {
        let mut calls = Vec::new();
        let doubled = map(
            |n: i32| {
                calls.push(n);
                n * 2
            },
            vec![4, -1, 0],
        );
        assert_eq!(doubled, vec![8, -2, 0]);
        assert_eq!(calls, vec![4, -1, 0]);
    }

    #[test]
    fn test_borrowed_input_is_untouched() {
        let words = vec![String::from("dog"), String::from("over")];
        let upper = map(|w: &String| w.to_uppercase(), &words);
        assert_eq!(upper, vec!["DOG", "OVER"]);
        assert_eq!(words, vec!["dog", "over"]);
    }
}
