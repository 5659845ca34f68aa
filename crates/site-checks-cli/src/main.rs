//! Site Checks CLI — entry point.

use std::io::Read;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use site_checks::{
    fetch_site_checks, resolve_backend_url, HttpTransport, MemoryPage, Outcome, SiteSource,
    CONFIDENCE_SLOT_ID, CRITERIA, PANEL_ID, SCORE_SLOT_ID,
};

#[derive(Parser)]
#[command(
    name = "site-checks",
    about = "Eight-criterion evaluation of a candidate solar parcel",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a site record against the scoring service and print the panel.
    Analyze {
        /// Path to the site record JSON document, or "-" for stdin.
        #[arg(short, long)]
        site: String,

        /// Scoring service base address.
        /// Also reads from SITE_CHECKS_BACKEND_URL env var.
        #[arg(long)]
        backend_url: Option<String>,

        /// Origin of the hosting page, used when no backend address is set.
        #[arg(long)]
        origin: Option<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },

    /// List the evaluation criteria in panel order.
    Catalog,

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            site,
            backend_url,
            origin,
            format,
        } => {
            let source = load_site(&site)?;
            let base = resolve_backend_url(backend_url.as_deref(), origin.as_deref());
            tracing::info!("Backend: {}", if base.is_empty() { "<unset>" } else { base.as_str() });

            let transport = HttpTransport::new(&base);
            let mut page = MemoryPage::with_standard_elements();
            let outcome = fetch_site_checks(&source, &transport, &mut page).await;

            match format {
                Format::Html => {
                    if let Some(panel) = page.text_of(PANEL_ID).filter(|s| !s.is_empty()) {
                        println!("{panel}");
                    }
                }
                Format::Json => {
                    let report = serde_json::json!({
                        "result": &outcome,
                        "panel": page.text_of(PANEL_ID),
                        "total_score": page.text_of(SCORE_SLOT_ID),
                        "confidence": page.text_of(CONFIDENCE_SLOT_ID),
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }

            if let Outcome::Failed { .. } = outcome {
                std::process::exit(1);
            }
        }

        Commands::Catalog => {
            for (i, c) in CRITERIA.iter().enumerate() {
                println!("{}. {:<12} {}", i + 1, c.key, c.title);
            }
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "site-checks", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load the site record from a path, or stdin for "-".
fn load_site(path: &str) -> anyhow::Result<SiteSource> {
    if path == "-" {
        let mut json = String::new();
        std::io::stdin().read_to_string(&mut json)?;
        return Ok(SiteSource::from_json_str(&json)?);
    }
    Ok(SiteSource::from_path(path)?)
}
