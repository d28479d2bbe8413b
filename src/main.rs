use art_shares::cli::{Cli, CommandContext, Commands};
use art_shares::config::Config;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::example()?
        }
    };

    // Initialize telemetry
    art_shares::telemetry::init_telemetry(&config.telemetry)?;

    let ctx = CommandContext::new(&config, cli.format);

    match cli.command {
        Commands::Quote(args) => args.execute(&ctx)?,
        Commands::Value(args) => args.execute(&ctx)?,
        Commands::Fee(args) => args.execute(&ctx)?,
        Commands::Settle(args) => args.execute(&ctx)?,
        Commands::Holding(args) => args.execute(&ctx)?,
        Commands::Simulate(args) => args.execute(&ctx)?,
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
