use std::collections::BTreeSet;

/// A normalized name, classified once so both generators consume it the same way.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum NameEntry {
    /// Exactly two whitespace-separated tokens.
    Pair { first: String, last: String },
    /// Anything else, kept as an opaque token.
    Single { token: String },
}

impl NameEntry {
    /// Classifies an already normalized (trimmed, lowercased) name.
    pub fn classify(normalized: &str) -> Self {
        let mut tokens = normalized
            .split(is_name_whitespace)
            .filter(|token| !token.is_empty());
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(first), Some(last), None) => Self::Pair {
                first: first.to_string(),
                last: last.to_string(),
            },
            _ => Self::Single {
                token: normalized.to_string(),
            },
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair { .. })
    }
}

/// Deduplicated, ordered collection of input names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    entries: BTreeSet<NameEntry>,
}

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a raw line and records it. Blank and `#` comment lines are
    /// skipped; returns whether the line contributed a name.
    pub fn push_line(&mut self, raw: &str) -> bool {
        match normalize_line(raw) {
            Some(normalized) => {
                self.entries.insert(NameEntry::classify(&normalized));
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NameEntry> {
        self.entries.iter()
    }

    pub fn pair_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_pair()).count()
    }
}

impl FromIterator<NameEntry> for NameList {
    fn from_iter<I: IntoIterator<Item = NameEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a NameEntry;
    type IntoIter = std::collections::btree_set::Iter<'a, NameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// ASCII whitespace as name lists treat it: the usual blanks plus vertical tab
/// and the `\x1c`..=`\x1f` separator controls.
pub(crate) fn is_name_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '\x0b' | '\x1c'..='\x1f')
}

pub(crate) fn normalize_line(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(is_name_whitespace);
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}
