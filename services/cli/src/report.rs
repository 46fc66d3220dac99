use crate::error::AppError;
use colored::Colorize;
use std::env;
use std::io::IsTerminal;
use username_permuter::config::ColorChoice;

/// Status marker printed before every failure line.
pub(crate) const FAILURE_MARKER: &str = "[-]";

pub(crate) fn apply_color_choice(choice: ColorChoice) {
    let no_color = env::var_os("NO_COLOR").is_some();
    let clicolor_force = env::var("CLICOLOR_FORCE").is_ok_and(|value| value != "0");
    let stderr_is_terminal = std::io::stderr().is_terminal();

    match color_override(choice, no_color, clicolor_force, stderr_is_terminal) {
        Some(enabled) => colored::control::set_override(enabled),
        None => colored::control::unset_override(),
    }
}

/// Resolves the colour override for failure lines, which go to stderr.
///
/// `colored` probes stdout on its own, so `Auto` pins the decision to stderr
/// unless `NO_COLOR` or `CLICOLOR_FORCE` ask `colored` to decide.
pub(crate) fn color_override(
    choice: ColorChoice,
    no_color: bool,
    clicolor_force: bool,
    stderr_is_terminal: bool,
) -> Option<bool> {
    match choice {
        ColorChoice::Always => Some(true),
        ColorChoice::Never => Some(false),
        ColorChoice::Auto if no_color || clicolor_force => None,
        ColorChoice::Auto => Some(stderr_is_terminal),
    }
}

pub(crate) fn failure_line(err: &AppError) -> String {
    format!("{FAILURE_MARKER} {err}")
}

/// Prints a fatal error in red on stderr.
pub fn report_error(err: &AppError) {
    eprintln!("{}", failure_line(err).red());
}
