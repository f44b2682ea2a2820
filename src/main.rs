use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{Level, info};

use labsite::config::AppConfig;
use labsite::state::AppState;
use labsite::{database, importer};

#[derive(Parser)]
#[command(name = "labsite", version, about = "EMO Lab website backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve,
    /// Import achievement records from the competition CSV
    ImportCompetition {
        /// Path to the CSV file; defaults to the configured location
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Import lab, team, news, and partner data from the JSON fixture
    ImportLab {
        /// Path to the fixture file; defaults to the configured location
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let db = database::init_db(&config.database.url).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let addr: SocketAddr =
                format!("{}:{}", config.server.host, config.server.port).parse()?;
            let app = labsite::build_router(AppState { db, config });

            info!("Listening on http://{}", addr);
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
        Commands::ImportCompetition { file } => {
            let path = file.unwrap_or_else(|| config.import.competition_csv.clone());
            let report = importer::competition::run(&db, &path).await?;
            info!(
                created = report.created,
                matched = report.matched,
                skipped = report.skipped,
                "Competition import finished"
            );
        }
        Commands::ImportLab { file } => {
            let path = file.unwrap_or_else(|| config.import.lab_fixture.clone());
            let report = importer::lab_fixture::run(&db, &path).await?;
            info!(
                created = report.created,
                matched = report.matched,
                "Lab fixture import finished"
            );
        }
    }

    Ok(())
}
