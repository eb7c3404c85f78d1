//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use env_logger::Env;
use podium_cli::CliError;

fn main() {
    env_logger::Builder::from_env(Env::new().filter_or("PODIUM_LOG", "warn")).init();
    match podium_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("podium: {err}");
            std::process::exit(1);
        }
    }
}
