use super::{split_initial, PermutationSet, INITIAL_SEPARATORS};
use crate::names::{NameEntry, NameList};

/// Expands every name into capitalized and fully upper-cased conventions.
///
/// Single tokens fall back to their upper-cased form.
pub fn uppercase_permutations(names: &NameList) -> PermutationSet {
    let mut result = PermutationSet::new();
    for entry in names {
        match entry {
            NameEntry::Pair { first, last } => extend_pair(&mut result, first, last),
            NameEntry::Single { token } => {
                result.insert(token.to_ascii_uppercase());
            }
        }
    }
    result
}

fn extend_pair(result: &mut PermutationSet, first: &str, last: &str) {
    let initial = split_initial(first).0.to_ascii_uppercase();

    let first_cap = capitalize(first);
    let last_cap = capitalize(last);
    let first_up = first.to_ascii_uppercase();
    let last_up = last.to_ascii_uppercase();

    result.insert(first_cap.clone());
    result.insert(last_cap.clone());
    result.insert(first_up.clone());
    result.insert(last_up.clone());

    for (x, y) in [(&first_cap, &last_cap), (&first_up, &last_up)] {
        for separator in INITIAL_SEPARATORS {
            result.insert(format!("{initial}{separator}{y}"));
        }
        result.insert(format!("{x}{y}"));
        result.insert(format!("{y}{x}"));
        result.insert(format!("{x}.{y}"));
        result.insert(format!("{y}.{x}"));
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub(crate) fn capitalize(token: &str) -> String {
    let (head, tail) = split_initial(token);
    let mut out = String::with_capacity(token.len());
    out.push_str(&head.to_ascii_uppercase());
    out.push_str(&tail.to_ascii_lowercase());
    out
}
