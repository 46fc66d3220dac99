use crate::error::PermuteError;
use crate::input::{ensure_input_file, load_names_from_path, MAX_INPUT_BYTES};
use crate::output::OutputTarget;
use crate::permutations::{generate, CaseMode};
use std::path::PathBuf;
use tracing::info;

/// One invocation of the permuter: where to read, where to write, which passes to run.
#[derive(Debug, Clone)]
pub struct PermuteRequest {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub case_mode: CaseMode,
    pub max_input_bytes: u64,
}

impl PermuteRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: OutputTarget::Stdout,
            case_mode: CaseMode::LowercaseOnly,
            max_input_bytes: MAX_INPUT_BYTES,
        }
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    pub fn with_case_mode(mut self, case_mode: CaseMode) -> Self {
        self.case_mode = case_mode;
        self
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: u64) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermuteSummary {
    pub names: usize,
    pub permutations: usize,
}

/// Validates everything up front, then loads, expands and writes in one pass.
///
/// Nothing is written unless every check succeeds.
pub fn run(request: &PermuteRequest) -> Result<PermuteSummary, PermuteError> {
    ensure_input_file(&request.input)?;
    request.output.ensure_available()?;

    let names = load_names_from_path(&request.input, request.max_input_bytes)?;
    let values = generate(&names, request.case_mode);
    request.output.write(&values)?;

    let summary = PermuteSummary {
        names: names.len(),
        permutations: values.len(),
    };
    info!(
        input = %request.input.display(),
        names = summary.names,
        permutations = summary.permutations,
        "permutation run complete"
    );
    Ok(summary)
}
