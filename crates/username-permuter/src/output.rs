use crate::error::PermuteError;
use crate::permutations::PermutationSet;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the sorted permutations are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Fails when the destination file already exists; existing files are never overwritten.
    pub fn ensure_available(&self) -> Result<(), PermuteError> {
        match self {
            Self::File(path) if path.exists() => Err(PermuteError::OutputExists { path: path.clone() }),
            _ => Ok(()),
        }
    }

    pub fn write(&self, values: &PermutationSet) -> Result<(), PermuteError> {
        match self {
            Self::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                render(values, &mut handle).map_err(|source| PermuteError::io("<stdout>", source))
            }
            Self::File(path) => write_new_file(path, values),
        }
    }
}

/// Writes each value on its own line in byte-wise ascending order.
pub fn render<W: Write>(values: &PermutationSet, writer: &mut W) -> io::Result<()> {
    let mut out = BufWriter::new(writer);
    for value in values {
        out.write_all(value.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

fn write_new_file(path: &Path, values: &PermutationSet) -> Result<(), PermuteError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => PermuteError::OutputExists {
                path: path.to_path_buf(),
            },
            _ => PermuteError::io(path, source),
        })?;

    render(values, &mut file).map_err(|source| PermuteError::io(path, source))?;
    info!(path = %path.display(), lines = values.len(), "wrote permutations");
    Ok(())
}
