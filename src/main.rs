use clap::Parser;

use metaforge::cli::{self, output, CheckCommand, Cli, Commands, ConfigCommand};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Provision(args) => cli::provision::execute(&args.config).await,
        Commands::Migrate(args) => cli::migrate::execute(&args.config).await,
        Commands::Status(args) => cli::status::execute(&args.config).await,
        Commands::Check(command) => match command {
            CheckCommand::Config(args) => cli::check::execute_config(&args.config),
            CheckCommand::Connection(args) => cli::check::execute_connection(&args.config).await,
        },
        Commands::Config(command) => match command {
            ConfigCommand::Init(args) => cli::config::execute_init(&args.path, args.force),
            ConfigCommand::Show(args) => cli::config::execute_show(&args.config),
        },
    };

    if let Err(error) = result {
        output::error(&error.to_string());
        std::process::exit(1);
    }
}
