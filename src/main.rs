use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

use gitops::cli::{Cli, Commands};
use gitops::dispatch::Dispatcher;
use gitops::{exitcode, logging, output};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // An unknown command is treated like asking for help.
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => return show_usage(),
        Err(e) => e.exit(),
    };

    logging::setup_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::from(exitcode::SOFTWARE)
        }
    }
}

fn show_usage() -> ExitCode {
    match Cli::print_usage() {
        Ok(()) => ExitCode::from(exitcode::OK),
        Err(e) => {
            output::error(&e);
            ExitCode::from(exitcode::SOFTWARE)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let Some(command) = &cli.command else {
        return Ok(show_usage());
    };

    let Some(request) = command.to_request() else {
        // Helper commands never reach the external tool.
        if let Commands::Completions { shell } = command {
            generate(*shell, &mut Cli::command(), "gitops", &mut std::io::stdout());
        }
        return Ok(ExitCode::from(exitcode::OK));
    };

    let dispatcher = Dispatcher::new(cli.git_config());
    let result = match dispatcher.execute(&request) {
        Ok(result) => result,
        Err(e) => {
            output::error(&e);
            Cli::print_usage()?;
            return Ok(ExitCode::from(exitcode::USAGE));
        }
    };

    output::print_result(&result, cli.json)?;

    Ok(ExitCode::from(if result.is_success() {
        exitcode::OK
    } else {
        exitcode::FAILURE
    }))
}
