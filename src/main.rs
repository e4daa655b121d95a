use clap::Parser;
use tracing_subscriber::EnvFilter;

use verse_solver::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("verse_solver=debug,info")
    } else {
        EnvFilter::new("verse_solver=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Lookup(args) => {
            cli::lookup::run(args, cli.format)?;
        }
        cli::Commands::Resolve(args) => {
            cli::resolve::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Books => {
            cli::books::run(cli.format)?;
        }
    }

    Ok(())
}
