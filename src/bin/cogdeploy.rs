use clap::Parser;
use cogdeploy::cli::{commands, init_tracing, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Init(args) => commands::execute_init(&cli.config, args)?,
        Commands::Provision(args) => commands::execute_provision(&cli.config, args)?,
        Commands::Outputs(args) => commands::execute_outputs(&cli.config, args)?,
        Commands::List => commands::execute_list(&cli.config)?,
    }

    Ok(())
}
