use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use bootstrap_cli::cli::Cli;
use bootstrap_cli::commands;
use bootstrap_cli::exec::SystemExecutor;
use bootstrap_cli::logging::Logger;

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Cli::command(), "bootstrap", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let log = Logger::new(args.verbose);

    // A SIGINT during a blocked subprocess wait lands here: warn and exit 1.
    let interrupt_log = log.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        interrupt_log.warn("interrupted by user");
        std::process::exit(1);
    }) {
        log.debug(&format!("could not install interrupt handler: {e}"));
    }

    match commands::install::run(&args, &log, &SystemExecutor) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
