use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{info, Level};

use vehicle_rental::config::RentalConfig;
use vehicle_rental::services::LoginService;
use vehicle_rental::terminal::{run_session, EditorPrompt};

/// Vehicle rental desk terminal
#[derive(Parser, Debug)]
#[command(name = "vehicle-rental")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL, without credentials (overrides DATABASE_URL)
    #[arg(long, value_name = "URL")]
    database_url: Option<String>,

    /// Create the tables after login if they do not exist
    #[arg(long)]
    init_schema: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    let cli = Cli::parse();

    let mut config = RentalConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }
    if cli.init_schema {
        config.database.init_schema = true;
    }
    if cli.verbose {
        config.log_level = Level::DEBUG;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    info!("Vehicle rental desk starting");

    let mut prompt = EditorPrompt::new()?;
    let mut login = LoginService::new(&config);
    let end = run_session(&mut prompt, &mut io::stdout(), &mut login).await?;

    info!("Exiting with {:?}", end);
    Ok(ExitCode::from(end.exit_code()))
}
