//! Analyze command handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use canonsort::application::{walk_and_classify, write_report};
use canonsort::config::Config;
use canonsort::presentation::cli::CorpusArgs;

use crate::commands::{display, load_registry, resolve_root};
use crate::ui::context::UiContext;
use crate::ui::views::analyze::AnalyzeView;

/// `analyze` flags; `None` leaves the configured value in place
#[derive(Debug, Default)]
pub struct AnalyzeArgs {
    pub corpus: CorpusArgs,
    pub canons: Option<PathBuf>,
    pub sample_cap: Option<usize>,
    pub group_cap: Option<usize>,
    pub detail_cap: Option<usize>,
    pub top: Option<usize>,
}

pub fn cmd_analyze(config: &Config, ui: UiContext, args: AnalyzeArgs) -> Result<()> {
    let root = resolve_root(args.corpus.root, config)?;
    let registry = load_registry(args.canons, config)?;
    let output = args
        .corpus
        .output
        .unwrap_or_else(|| config.report.output.clone());

    let mut options = config.report_options();
    if let Some(cap) = args.sample_cap {
        options = options.with_sample_cap(cap);
    }
    if let Some(cap) = args.group_cap {
        options = options.with_group_cap(cap);
    }
    if let Some(cap) = args.detail_cap {
        options = options.with_detail_cap(cap);
    }
    if let Some(top) = args.top {
        options = options.with_top(top);
    }

    let index = walk_and_classify(&root, &registry, &config.analyze_options())
        .with_context(|| format!("failed to analyze corpus {}", display(&root)))?;

    write_report(&index, &registry, &output, &options)
        .with_context(|| format!("failed to write report {}", display(&output)))?;
    info!(output = %output.display(), "report written");

    let view = AnalyzeView::new(&root, &output, &index, &registry, options.top);
    print!("{}", view.render(ui.color, ui.unicode));
    Ok(())
}
