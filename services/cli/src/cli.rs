use crate::error::AppError;
use crate::report::apply_color_choice;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use username_permuter::config::{AppConfig, ColorChoice};
use username_permuter::{
    run as run_permuter, telemetry, CaseMode, OutputTarget, PermuteRequest, PermuteSummary,
};

#[derive(Parser, Debug)]
#[command(
    name = "username-permuter",
    about = "Calculates permutations of a userlist to check for e.g. using Kerbrute",
    version
)]
pub(crate) struct Cli {
    /// The input userlist to calculate permutations of
    pub(crate) input: PathBuf,
    /// Also generate uppercase permutations
    #[arg(short, long)]
    pub(crate) uppercase: bool,
    /// The output file to write the results to (prints to stdout if not specified)
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

impl Cli {
    pub(crate) fn into_request(self, config: &AppConfig) -> PermuteRequest {
        PermuteRequest::new(self.input)
            .with_output(OutputTarget::from_option(self.output))
            .with_case_mode(CaseMode::from_flag(self.uppercase))
            .with_max_input_bytes(config.max_input_bytes)
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    apply_color_choice(ColorChoice::Auto);
    let config = AppConfig::load()?;
    apply_color_choice(config.color);
    telemetry::init(&config.telemetry)?;

    let summary = execute(cli, &config)?;
    debug!(
        names = summary.names,
        permutations = summary.permutations,
        "finished"
    );
    Ok(())
}

pub(crate) fn execute(cli: Cli, config: &AppConfig) -> Result<PermuteSummary, AppError> {
    let request = cli.into_request(config);
    Ok(run_permuter(&request)?)
}
