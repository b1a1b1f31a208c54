//! Recommend command handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use canonsort::application::{plan_layout, walk_and_classify, write_layout_plan};
use canonsort::config::Config;
use canonsort::presentation::cli::CorpusArgs;

use crate::commands::{display, load_registry, resolve_root};
use crate::ui::context::UiContext;
use crate::ui::views::layout::LayoutView;

pub fn cmd_recommend(
    config: &Config,
    ui: UiContext,
    corpus: CorpusArgs,
    canons: Option<PathBuf>,
    period_threshold: Option<usize>,
) -> Result<()> {
    let root = resolve_root(corpus.root, config)?;
    let registry = load_registry(canons, config)?;
    let output = corpus.output.or_else(|| config.layout.output.clone());

    let mut options = config.layout_options();
    if let Some(threshold) = period_threshold {
        options = options.with_period_threshold(threshold);
    }

    let index = walk_and_classify(&root, &registry, &config.analyze_options())
        .with_context(|| format!("failed to analyze corpus {}", display(&root)))?;
    let plan = plan_layout(&index, &registry, &options);

    if let Some(output) = &output {
        write_layout_plan(&plan, output)
            .with_context(|| format!("failed to write layout plan {}", display(output)))?;
        info!(output = %output.display(), "layout plan written");
    }

    let view = LayoutView::new(&plan, options.period_threshold);
    print!("{}", view.render(ui.color, ui.unicode));
    Ok(())
}
