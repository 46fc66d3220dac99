use crate::error::PermuteError;
use crate::names::NameList;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Largest input accepted, in bytes. Keeps the expansion bounded.
pub const MAX_INPUT_BYTES: u64 = 1_000_000;

/// Loads a name list from a regular file no larger than `limit` bytes.
pub fn load_names_from_path(path: impl AsRef<Path>, limit: u64) -> Result<NameList, PermuteError> {
    let path = path.as_ref();
    ensure_input_file(path)?;
    ensure_within_limit(path, limit)?;

    let file = File::open(path).map_err(|source| PermuteError::io(path, source))?;
    let bytes = read_capped(file, limit)
        .map_err(|source| PermuteError::io(path, source))?;
    check_read_size(&bytes, limit)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read name list");
    parse_names(&bytes)
}

/// Loads a name list from an arbitrary reader, enforcing the same size cap.
pub fn load_names_from_reader<R: Read>(reader: R, limit: u64) -> Result<NameList, PermuteError> {
    let bytes =
        read_capped(reader, limit).map_err(|source| PermuteError::io("<reader>", source))?;
    check_read_size(&bytes, limit)?;
    parse_names(&bytes)
}

// Reads one byte past the cap so an oversized source is detectable even when
// its metadata lied about the length.
fn read_capped<R: Read>(reader: R, limit: u64) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn check_read_size(bytes: &[u8], limit: u64) -> Result<(), PermuteError> {
    let size = bytes.len() as u64;
    if size > limit {
        return Err(PermuteError::SizeLimit { size, max: limit });
    }
    Ok(())
}

/// Validates strict 7-bit ASCII and collects the normalized names.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Blank lines and lines whose first
/// non-whitespace character is `#` are ignored.
pub fn parse_names(bytes: &[u8]) -> Result<NameList, PermuteError> {
    if let Some(offset) = bytes.iter().position(|byte| !byte.is_ascii()) {
        return Err(PermuteError::Encoding {
            offset,
            byte: bytes[offset],
        });
    }

    let text: String = bytes.iter().copied().map(char::from).collect();

    let mut names = NameList::new();
    let mut skipped = 0usize;
    for line in text.split(['\n', '\r']) {
        if !names.push_line(line) {
            skipped += 1;
        }
    }

    debug!(
        names = names.len(),
        pairs = names.pair_count(),
        skipped,
        "normalized name list"
    );
    Ok(names)
}

pub(crate) fn ensure_input_file(path: &Path) -> Result<(), PermuteError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(PermuteError::MissingInput {
            path: path.to_path_buf(),
        })
    }
}

pub(crate) fn ensure_within_limit(path: &Path, limit: u64) -> Result<(), PermuteError> {
    let size = fs::metadata(path)
        .map_err(|source| PermuteError::io(path, source))?
        .len();
    if size > limit {
        return Err(PermuteError::SizeLimit { size, max: limit });
    }
    Ok(())
}
