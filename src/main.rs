mod analysis;
mod decode;
mod error;
mod fetch;
mod page;
mod parser;
mod settings;
mod store;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use settings::Settings;

#[derive(Parser)]
#[command(
    name = "powerball_scraper",
    about = "Powerball jackpot winners scraper and number frequency report"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the jackpot winners page and write drawings + winners to CSV
    Scrape {
        /// Page URL (default: settings `url`)
        #[arg(long)]
        url: Option<String>,
        /// Existing directory for the CSV files
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Parse a saved copy of the page instead of fetching it
    Parse {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Most and least frequent numbers and powerballs from the drawings CSV
    Analyze {
        /// Drawings CSV (default: <output_dir>/<drawings_file>)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scrape + analyze in one go
    Run {
        #[arg(long)]
        url: Option<String>,
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let mut settings = Settings::load()?;

    match cli.command {
        Commands::Scrape { url, out } => {
            override_settings(&mut settings, url, out);
            let html = fetch::fetch_page(&settings.url).await?;
            save(&settings, &html)?;
        }
        Commands::Parse { input, out } => {
            override_settings(&mut settings, None, out);
            let html = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            save(&settings, &html)?;
        }
        Commands::Analyze { input, json } => {
            let path = input.unwrap_or_else(|| settings.drawings_path());
            report(&path, json)?;
        }
        Commands::Run { url, out, json } => {
            override_settings(&mut settings, url, out);
            let html = fetch::fetch_page(&settings.url).await?;
            let drawings = save(&settings, &html)?;
            println!();
            report(&drawings, json)?;
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn override_settings(settings: &mut Settings, url: Option<String>, out: Option<PathBuf>) {
    if let Some(url) = url {
        settings.url = url;
    }
    if let Some(out) = out {
        settings.output_dir = out;
    }
}

/// Parse the page and write both CSVs; returns the drawings CSV path.
fn save(settings: &Settings, html: &str) -> Result<PathBuf> {
    let table = parser::process_document(html, settings.parse_winners);
    let written = store::write_csv(
        &table.drawings,
        &settings.output_dir,
        &settings.drawings_file,
        &settings.winners_file,
    )?;

    let winners: usize = table.drawings.iter().map(|d| d.winners.len()).sum();
    println!(
        "Parsed {} drawings, {} winners ({} rows dropped).",
        table.drawings.len(),
        winners,
        table.failures.len()
    );
    println!("Successfully wrote to file: {}", written.drawings.display());
    if settings.parse_winners {
        println!("Successfully wrote to file: {}", written.winners.display());
    }
    Ok(written.drawings)
}

fn report(drawings_csv: &Path, json: bool) -> Result<()> {
    let records = store::read_drawings(drawings_csv)?;
    let report = analysis::analyze(&records);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        analysis::write_summary(&report, std::io::stdout().lock())?;
    }
    Ok(())
}
