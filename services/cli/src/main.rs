use username_permuter_cli::{report_error, run};

fn main() {
    if let Err(err) = run() {
        report_error(&err);
        std::process::exit(1);
    }
}
