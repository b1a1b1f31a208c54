use std::path::Path;

use canonsort::application::{rank_by_count, ProvenanceReport};

use crate::ui::blocks::header::{section, CommandHeader};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{truncate_to_width, ColoredText};
use crate::ui::views::{count_line, label_width};

/// Descriptions listed under "Largest categories"
const TOP_CATEGORIES: usize = 20;
const DESCRIPTION_WIDTH: usize = 80;

pub struct ProvenanceView<'a> {
    root: &'a Path,
    output: &'a Path,
    report: &'a ProvenanceReport,
    error_preview: usize,
}

impl<'a> ProvenanceView<'a> {
    pub fn new(
        root: &'a Path,
        output: &'a Path,
        report: &'a ProvenanceReport,
        error_preview: usize,
    ) -> Self {
        Self {
            root,
            output,
            report,
            error_preview,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let report = self.report;
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Provenance, "canonsort provenance");
        header.add("Root", self.root.display().to_string());
        header.add("Report", self.output.display().to_string());
        out.push_str(&header.render(supports_color, supports_unicode));

        out.push_str(&section("Summary", supports_color));
        let stats = [
            ("Total files", report.summary.total_files),
            ("Unique descriptions", report.summary.unique_project_desc_count),
            ("Files with errors", report.summary.files_with_errors),
        ];
        let width = label_width(stats.iter().map(|(label, _)| *label));
        for (label, count) in stats {
            out.push_str(&count_line(label, count, width, supports_color));
        }

        if !report.contributor_groups.is_empty() {
            out.push_str(&section("Contributor groups", supports_color));
            let ranked = rank_by_count(
                report
                    .contributor_groups
                    .iter()
                    .map(|(group, section)| ((*group, section.categories), section.file_count)),
            );
            for ((group, categories), files) in ranked {
                out.push_str(&format!(
                    "  {}: {} in {} categories\n",
                    group,
                    ColoredText::info(format!("{} files", files)).render(supports_color),
                    categories
                ));
            }

            out.push_str(&section("Largest categories", supports_color));
            let ranked = rank_by_count(
                report
                    .project_groups
                    .iter()
                    .map(|(description, group)| (description.as_str(), group.file_count)),
            );
            for (rank, (description, files)) in ranked.into_iter().take(TOP_CATEGORIES).enumerate() {
                out.push_str(&format!(
                    "  {:>2}. {} {}\n",
                    rank + 1,
                    ColoredText::info(format!("[{}]", files)).render(supports_color),
                    truncate_to_width(description, DESCRIPTION_WIDTH)
                ));
            }
        }

        if !report.errors.is_empty() {
            out.push_str(&section("Errors", supports_color));
            for error in report.errors.iter().take(self.error_preview) {
                out.push_str(&format!(
                    "  {} {}: {}\n",
                    Icon::Error.colored(supports_color, supports_unicode),
                    error.file,
                    ColoredText::error(error.issue.as_str()).render(supports_color)
                ));
            }
            let hidden = report.errors.len().saturating_sub(self.error_preview);
            if hidden > 0 {
                out.push_str(&format!("  ... and {} more errors\n", hidden));
            }
        }

        out
    }
}
