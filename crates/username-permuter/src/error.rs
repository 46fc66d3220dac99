use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while validating input, expanding names, or writing output.
///
/// Every variant is fatal: the pipeline aborts before any output is produced.
#[derive(Debug, Error)]
pub enum PermuteError {
    #[error("the input file {} does not exist", path.display())]
    MissingInput { path: PathBuf },
    #[error("the output file {} does already exist", path.display())]
    OutputExists { path: PathBuf },
    #[error("the file has {size} bytes, but max. {max} bytes are allowed")]
    SizeLimit { size: u64, max: u64 },
    #[error("the input contains non-ASCII byte 0x{byte:02x} at offset {offset}")]
    Encoding { offset: usize, byte: u8 },
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PermuteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
