use clap::Parser;

use stakelord::cli::command::{Cli, ColorChoice, Commands, ConfigCommand, FormatsCommand};
use stakelord::cli::{config, diagnostic, form, formats, insights, output, stake};
use stakelord::error::Result;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match &cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(err) = dispatch(&cli) {
        diagnostic::report(&err);
        std::process::exit(1);
    }
}

fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Stake(args) => stake::execute(args),
        Commands::Form(args) => form::execute(args),
        Commands::Formats(FormatsCommand::List) => formats::list(),
        Commands::Formats(FormatsCommand::Explain { name }) => formats::explain(name),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
        Commands::Insights => insights::execute(),
    }
}
