//! Provenance command handler

use anyhow::{Context, Result};
use tracing::info;

use canonsort::application::{walk_and_classify, write_provenance_report};
use canonsort::config::Config;
use canonsort::domain::entities::CanonRegistry;
use canonsort::presentation::cli::CorpusArgs;

use crate::commands::{display, resolve_root};
use crate::ui::context::UiContext;
use crate::ui::views::provenance::ProvenanceView;

pub fn cmd_provenance(config: &Config, ui: UiContext, corpus: CorpusArgs) -> Result<()> {
    let root = resolve_root(corpus.root, config)?;
    let output = corpus
        .output
        .unwrap_or_else(|| config.provenance.output.clone());

    // Canon names play no part in provenance grouping.
    let registry = CanonRegistry::new();
    let index = walk_and_classify(&root, &registry, &config.analyze_options())
        .with_context(|| format!("failed to analyze corpus {}", display(&root)))?;

    let report = write_provenance_report(&index, &output)
        .with_context(|| format!("failed to write report {}", display(&output)))?;
    info!(output = %output.display(), "provenance report written");

    let view = ProvenanceView::new(&root, &output, &report, config.provenance.error_preview);
    print!("{}", view.render(ui.color, ui.unicode));
    Ok(())
}
