//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --color, --verbose) are inherited by all subcommands
//! - Every flag that has a config counterpart is optional so config and
//!   environment values show through

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// canonsort - classify a CBETA TEI-XML corpus
#[derive(Parser, Debug)]
#[command(name = "canonsort")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./canonsort.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Corpus selection shared by every command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusArgs {
    /// Corpus root (the `xml-p5` directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every document and write the metadata report
    Analyze {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Canon registry JSON (canons.json)
        #[arg(long, value_name = "FILE")]
        canons: Option<PathBuf>,

        /// Sample files listed per canon
        #[arg(long, value_name = "N")]
        sample_cap: Option<usize>,

        /// Files listed per tradition, period and origin
        #[arg(long, value_name = "N")]
        group_cap: Option<usize>,

        /// Detail records kept in the report
        #[arg(long, value_name = "N")]
        detail_cap: Option<usize>,

        /// Canons shown in the console summary
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },

    /// Group documents by digitization provenance
    Provenance {
        #[command(flatten)]
        corpus: CorpusArgs,
    },

    /// Recommend a Canon/Tradition/Period folder layout
    Recommend {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Canon registry JSON (canons.json)
        #[arg(long, value_name = "FILE")]
        canons: Option<PathBuf>,

        /// Canon size from which documents are also split by period
        #[arg(long, value_name = "N")]
        period_threshold: Option<usize>,
    },
}
