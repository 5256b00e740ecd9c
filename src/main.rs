use anyhow::Context;
use clap::{Parser, Subcommand};
use nopo_core::{config::Config, render, Catalog, SearchField, SearchForm};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nopo", about = "nopo: look up long-running restaurants by name, address, menu or price")]
struct Cli {
    /// Write debug logs to /tmp/nopo-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Restaurant catalogue to load. Overrides `[data] path` from the config.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Run a single search and print the results instead of opening the TUI.
    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Search the catalogue and print matches to stdout.
    Search {
        /// Field to search: name, address, menu or price.
        #[arg(short, long)]
        field: Option<SearchField>,

        /// Text to look for. Price searches compare it as a number.
        #[arg(allow_hyphen_values = true)]
        keyword: String,

        /// Exact menu price to require (menu searches only).
        #[arg(short, long, default_value = "")]
        price: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/nopo-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("nopo debug log started, tail -f /tmp/nopo-debug.log");
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load config, using defaults");
        Config::defaults()
    });

    let path = cli.data.unwrap_or_else(|| config.data.path.clone());
    let catalog = Catalog::load(&path)
        .with_context(|| format!("failed to load restaurant catalogue from {}", path.display()))?;

    match cli.command {
        Some(Cmd::Search { field, keyword, price }) => {
            let field = match field {
                Some(f) => f,
                None => config
                    .ui
                    .default_field()
                    .context("invalid [ui] default_field in config")?,
            };
            let query = SearchForm::new(field, keyword).with_price(price).submit()?;
            let matches = query.run(catalog.restaurants());
            let mut out = std::io::stdout().lock();
            render::write_results(&mut out, &matches, config.ui.separator_width)?;
            Ok(())
        }
        None => nopo_tui::run(catalog, &config),
    }
}
