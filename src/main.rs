use std::process::ExitCode;

fn main() -> ExitCode {
    match vercalc::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("vercalc: {}", e);
            ExitCode::FAILURE
        }
    }
}
