mod cli;
mod config;
mod loader;

use std::process::ExitCode;

fn main() -> ExitCode {
    // RUST_LOG=debug shows what the atlas loader is doing
    env_logger::init();

    let err_exit = ExitCode::from(1);
    let ok_exit = ExitCode::from(0);

    match cli::cli() {
        cli::CliRes::Ok => ok_exit,
        cli::CliRes::Err => err_exit,
    }
}
