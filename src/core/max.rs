//! Maximum-by-key selection
//!
//! Two strategies are provided. [`max_by_key`] walks a slice by position and
//! seeds the running best with index 0. [`max_by_key_iter`] only needs to
//! traverse its input once and starts with no best at all, so it also works
//! for iterators that cannot be indexed or asked for their length. On slices
//! both return the same element.
//!
//! In both, the key is computed exactly once per element and an element only
//! replaces the running best when its key compares strictly greater. Ties
//! therefore go to the element seen first, and keys that cannot be ordered
//! against the running best (`f64::NAN`) never win.

use super::CollectionError;

/// Return the element of `collection` whose `key` is greatest.
///
/// # Errors
///
/// Returns [`CollectionError::Empty`] when `collection` has no elements.
///
/// # Examples
///
/// ```
/// use wordscan::core::max_by_key;
///
/// let words = ["fox", "laziest", "dog"];
/// assert_eq!(max_by_key(&words, |w| w.len()), Ok(&"laziest"));
/// ```
#[allow(clippy::needless_range_loop)]
pub fn max_by_key<T, C, F>(collection: &[T], mut key: F) -> Result<&T, CollectionError>
where
    C: PartialOrd,
    F: FnMut(&T) -> C,
{
    if collection.is_empty() {
        return Err(CollectionError::Empty);
    }

    let mut max_item = &collection[0];
    let mut max_value = key(max_item);

    for i in 1..collection.len() {
        let item = &collection[i];
        let current_value = key(item);

        if current_value > max_value {
            max_value = current_value;
            max_item = item;
        }
    }

    Ok(max_item)
}

/// Return the item of `iterable` whose `key` is greatest, consuming the
/// iterator in a single pass.
///
/// # Errors
///
/// Returns [`CollectionError::Empty`] when `iterable` yields nothing.
///
/// # Examples
///
/// ```
/// use wordscan::core::max_by_key_iter;
///
/// let letters = "quick".chars();
/// assert_eq!(max_by_key_iter(letters, |c| *c), Ok('u'));
/// ```
pub fn max_by_key_iter<I, C, F>(iterable: I, mut key: F) -> Result<I::Item, CollectionError>
where
    I: IntoIterator,
    C: PartialOrd,
    F: FnMut(&I::Item) -> C,
{
    let mut best: Option<(I::Item, C)> = None;

    for item in iterable {
        let current_value = key(&item);

        let replace = match &best {
            None => true,
            Some((_, max_value)) => current_value > *max_value,
        };

        if replace {
            best = Some((item, current_value));
        }
    }

    best.map(|(item, _)| item).ok_or(CollectionError::Empty)
}
