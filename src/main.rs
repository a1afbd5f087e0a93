// src/main.rs
use clap::Parser;
use domfront::cli::Args;
use domfront::driver;
use domfront::error::report::report_errors;

/// Exit code for input-validation failures.
const INVALID_INPUT_EXIT: i32 = 0x777;

fn main() {
    let args = Args::parse();

    if let Err(errors) = driver::run(&args) {
        report_errors(&errors);
        let code =
            if errors.iter().all(domfront::error::GraphError::is_input_error) {
                INVALID_INPUT_EXIT
            } else {
                1
            };
        std::process::exit(code);
    }
}
