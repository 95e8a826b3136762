use clap::Parser;
use std::io;

use layoutsmith::cli::{Cli, Command};
use layoutsmith::commands::{run_export, run_ratios, run_recipe, run_scale};
use layoutsmith::{ProjectConfig, Result, init_logger};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logger(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
    if let Err(error) = run(&cli) {
        log::debug!("{error:?}");
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let config = ProjectConfig::load_or_default(cli.config.as_deref())?;
    match &cli.command {
        Command::Ratios => run_ratios(&mut stdout),
        Command::Scale(args) => run_scale(&config, args, &mut stdout),
        Command::Recipe(args) => run_recipe(&config, args, &mut stdout),
        Command::Export(args) => run_export(&config, args, &mut stdout),
    }
}
