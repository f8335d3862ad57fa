use std::process::ExitCode;

fn main() -> ExitCode {
    match ascii_graph::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
