mod lowercase;
mod uppercase;

use crate::names::NameList;
use std::collections::BTreeSet;
use tracing::debug;

pub use lowercase::lowercase_permutations;
pub use uppercase::uppercase_permutations;

/// Generated username candidates, unique and kept in byte-wise order.
pub type PermutationSet = BTreeSet<String>;

/// Separators placed between an initial and a last name.
pub(crate) const INITIAL_SEPARATORS: [&str; 5] = [".", "-", "_", "+", ""];

/// Selects which case passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    LowercaseOnly,
    WithUppercase,
}

impl CaseMode {
    pub fn from_flag(uppercase: bool) -> Self {
        if uppercase {
            Self::WithUppercase
        } else {
            Self::LowercaseOnly
        }
    }

    pub fn includes_uppercase(self) -> bool {
        matches!(self, Self::WithUppercase)
    }
}

/// Runs the lowercase pass and, when requested, unions in the uppercase pass.
pub fn generate(names: &NameList, mode: CaseMode) -> PermutationSet {
    let mut values = lowercase_permutations(names);
    let lowercase_count = values.len();

    if mode.includes_uppercase() {
        values.extend(uppercase_permutations(names));
    }

    debug!(
        names = names.len(),
        lowercase = lowercase_count,
        total = values.len(),
        ?mode,
        "generated permutations"
    );
    values
}

/// Splits off the first character of a token; tokens are never empty.
pub(crate) fn split_initial(token: &str) -> (&str, &str) {
    match token.char_indices().nth(1) {
        Some((idx, _)) => token.split_at(idx),
        None => (token, ""),
    }
}
