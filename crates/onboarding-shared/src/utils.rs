//! Utility functions

use std::collections::HashSet;

/// Drop repeated values, keeping the first occurrence of each.
pub fn remove_duplicate_strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .map(Into::into)
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_duplicate_strings_keeps_first_occurrence() {
        let deduped = remove_duplicate_strings(["user", "tes", "user", "123", "another user"]);
        assert_eq!(deduped, vec!["user", "tes", "123", "another user"]);
    }

    #[test]
    fn test_remove_duplicate_strings_empty() {
        let deduped = remove_duplicate_strings(Vec::<String>::new());
        assert!(deduped.is_empty());
    }
}
