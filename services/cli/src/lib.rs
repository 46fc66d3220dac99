mod cli;
mod error;
mod report;

pub use error::AppError;
pub use report::report_error;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
