use super::{split_initial, PermutationSet, INITIAL_SEPARATORS};
use crate::names::{NameEntry, NameList};

/// Expands every name into its lowercase username conventions.
pub fn lowercase_permutations(names: &NameList) -> PermutationSet {
    let mut result = PermutationSet::new();
    for entry in names {
        match entry {
            NameEntry::Pair { first, last } => extend_pair(&mut result, first, last),
            NameEntry::Single { token } => {
                result.insert(token.clone());
            }
        }
    }
    result
}

fn extend_pair(result: &mut PermutationSet, first: &str, last: &str) {
    let (initial, _) = split_initial(first);

    result.insert(first.to_string());
    result.insert(last.to_string());
    for separator in INITIAL_SEPARATORS {
        result.insert(format!("{initial}{separator}{last}"));
    }
    result.insert(format!("{first}{last}"));
    result.insert(format!("{last}{first}"));
    result.insert(format!("{first}.{last}"));
    result.insert(format!("{last}.{first}"));
}
