use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    coursemenu::logging::init("info").context("init logging")?;

    let cli = coursemenu::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        coursemenu::cli::Command::Show(args) => {
            coursemenu::show::run(args).context("show")?;
        }
        coursemenu::cli::Command::Validate(args) => {
            coursemenu::validate::run(args).context("validate")?;
        }
        coursemenu::cli::Command::Export(args) => {
            coursemenu::export::run(args).context("export")?;
        }
        coursemenu::cli::Command::Disclaimer(args) => {
            coursemenu::disclaimer::run(args).context("disclaimer")?;
        }
    }

    Ok(())
}
