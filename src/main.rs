//! canonsort CLI - CBETA corpus classifier
//!
//! Usage: canonsort [--config FILE] [-v...] [--color WHEN] <COMMAND>
//!
//! Commands:
//!   analyze     Classify every document and write the metadata report
//!   provenance  Group documents by digitization provenance
//!   recommend   Recommend a Canon/Tradition/Period folder layout

mod commands;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use canonsort::config::Config;
use canonsort::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let loaded = Config::discover(cli.config.as_deref()).context("failed to load configuration")?;
    let ui = UiContext::new(cli.color, &loaded.config);
    let config = loaded.config;

    match cli.command {
        Commands::Analyze {
            corpus,
            canons,
            sample_cap,
            group_cap,
            detail_cap,
            top,
        } => commands::analyze::cmd_analyze(
            &config,
            ui,
            commands::analyze::AnalyzeArgs {
                corpus,
                canons,
                sample_cap,
                group_cap,
                detail_cap,
                top,
            },
        ),
        Commands::Provenance { corpus } => {
            commands::provenance::cmd_provenance(&config, ui, corpus)
        }
        Commands::Recommend {
            corpus,
            canons,
            period_threshold,
        } => commands::recommend::cmd_recommend(&config, ui, corpus, canons, period_threshold),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("canonsort={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
