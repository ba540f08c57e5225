use agent_vault::cli::{commands, Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries redacted file content.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::execute(&cli),
        Commands::Set {
            ref name,
            ref value,
            ref desc,
        } => commands::set::execute(&cli, name, value.as_deref(), desc.as_deref()),
        Commands::Get { ref name, reveal } => commands::get::execute(&cli, name, reveal),
        Commands::Has { ref name } => match commands::has::execute(&cli, name) {
            Ok(true) => Ok(()),
            Ok(false) => std::process::exit(1),
            Err(e) => Err(e),
        },
        Commands::List => commands::list::execute(&cli),
        Commands::Rm { ref name, force } => commands::remove::execute(&cli, name, force),
        Commands::Read { ref file } => commands::read::execute(&cli, file),
        Commands::Write { ref file } => commands::write::execute(&cli, file),
    };

    if let Err(e) = result {
        agent_vault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
