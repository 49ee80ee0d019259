//! Entry point for the `rolodex` binary.

use std::process::ExitCode;

use clap::Parser;

use rolodex_cli::app::RolodexApp;
use rolodex_cli::cli::CliArgs;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let app = match RolodexApp::from_args(&args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("rolodex: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app.run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rolodex: {e}");
            ExitCode::FAILURE
        }
    }
}
