use std::collections::HashSet;
use std::hash::Hash;

use crate::error::LinkError;

/// Compact a sequence to its distinct elements, keeping first-occurrence
/// order. Equality is by value.
///
/// An empty input is an error, not an empty output.
pub fn unique<T>(items: &[T]) -> Result<Vec<T>, LinkError>
where
    T: Clone + Eq + Hash,
{
    if items.is_empty() {
        return Err(LinkError::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(items.len());
    let mut compact = Vec::new();
    for item in items {
        if seen.insert(item) {
            compact.push(item.clone());
        }
    }
    Ok(compact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkError;

    #[test]
    fn keeps_first_occurrence_order() {
        let input = ["a", "b", "a", "c", "b"].map(String::from);
        assert_eq!(unique(&input).unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn already_unique_input_is_unchanged() {
        let input = vec![1, 2, 3];
        assert_eq!(unique(&input).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn empty_input_is_an_error() {
        let input: Vec<String> = vec![];
        assert!(matches!(unique(&input), Err(LinkError::EmptyInput)));
    }
}
