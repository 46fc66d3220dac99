//! Username candidate generation from `First Last` name lists.
//!
//! The pipeline is a single forward pass: [`input`] loads and normalizes the
//! names, [`permutations`] expands them into username conventions, and
//! [`output`] renders the sorted result.

pub mod config;
pub mod error;
pub mod input;
pub mod names;
pub mod output;
pub mod permutations;
pub mod pipeline;
pub mod telemetry;

pub use error::PermuteError;
pub use input::{load_names_from_path, load_names_from_reader, parse_names, MAX_INPUT_BYTES};
pub use names::{NameEntry, NameList};
pub use output::{render, OutputTarget};
pub use permutations::{generate, CaseMode, PermutationSet};
pub use pipeline::{run, PermuteRequest, PermuteSummary};
