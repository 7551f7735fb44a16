/// Tapedeck CLI - tag inspection, lyric timelines and batch imports
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tapedeck_cli::{commands, CliConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tapedeck")]
#[command(about = "Read tags and lyrics from audio files and build a Tapedeck library", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./tapedeck.toml when present)
    #[arg(short, long, global = true, env = "TAPEDECK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the embedded tags of each file as JSON
    Inspect {
        /// Audio files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Import files and directories, printing the tracks as JSON
    Import {
        /// Files or directories to import
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the lyric timeline of an .lrc file or of an audio file's tags
    Lyrics {
        /// .lrc or audio file
        file: PathBuf,

        /// Playback position in seconds; the line playing there is marked
        #[arg(long)]
        at: Option<f64>,

        /// Print the timeline as JSON instead
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tapedeck=info,tapedeck_cli=info,tapedeck_importer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Inspect { files } => {
            let reports = commands::inspect(&files, &config.import_config()?).await;
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        Commands::Import { paths } => {
            let summary = commands::import(&paths, &config).await?;
            println!("{}", serde_json::to_string_pretty(&summary.tracks)?);
            for (file, error) in &summary.errors {
                eprintln!("failed: {file}: {error}");
            }
            eprintln!("{}", summary.summary_text());
        }
        Commands::Lyrics { file, at, json } => {
            let view = commands::lyrics(&file, &config.import_config()?).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", commands::render_timeline(&view, at));
            }
        }
    }

    Ok(())
}
