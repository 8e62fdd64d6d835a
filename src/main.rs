use clap::Parser;
use miette::Result;
use stampcard::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => stampcard::cli::render::run(args)?,
        Commands::Serve(args) => stampcard::cli::serve::run(args)?,
        Commands::Validate(args) => stampcard::cli::validate::run(args)?,
        Commands::Completions(args) => stampcard::cli::completions::run(args)?,
    }

    Ok(())
}
