use std::path::Path;

use canonsort::application::{rank_by_count, rank_groups, AggregateIndex};
use canonsort::domain::entities::CanonRegistry;

use crate::ui::blocks::header::{section, CommandHeader};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{pad_to_width, ColoredText};
use crate::ui::views::{count_line, label_width};

/// Console summary of a corpus analysis
pub struct AnalyzeView<'a> {
    root: &'a Path,
    output: &'a Path,
    index: &'a AggregateIndex,
    registry: &'a CanonRegistry,
    top: usize,
}

impl<'a> AnalyzeView<'a> {
    pub fn new(
        root: &'a Path,
        output: &'a Path,
        index: &'a AggregateIndex,
        registry: &'a CanonRegistry,
        top: usize,
    ) -> Self {
        Self {
            root,
            output,
            index,
            registry,
            top,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let index = self.index;
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Analyze, "canonsort analyze");
        header.add("Root", self.root.display().to_string());
        header.add("Report", self.output.display().to_string());
        out.push_str(&header.render(supports_color, supports_unicode));

        out.push_str(&section("Summary", supports_color));
        let stats = [
            ("Total files", index.total_files),
            ("Classified", index.classified_files()),
            ("Skipped", index.skipped_files()),
            ("Canons", index.by_canon.len()),
            ("Traditions", index.by_tradition.len()),
            ("Periods", index.by_period.len()),
            ("Origins", index.by_origin.len()),
        ];
        let width = label_width(stats.iter().map(|(label, _)| *label));
        for (label, count) in stats {
            out.push_str(&count_line(label, count, width, supports_color));
        }

        if !index.by_canon.is_empty() {
            out.push_str(&section(
                &format!("Top {} canons", self.top.min(index.by_canon.len())),
                supports_color,
            ));
            let ranked = rank_by_count(
                index
                    .by_canon
                    .iter()
                    .map(|(code, group)| (code.as_str(), group.file_count())),
            );
            let code_width = label_width(ranked.iter().map(|(code, _)| *code));
            for (rank, (code, count)) in ranked.into_iter().take(self.top).enumerate() {
                let group = &index.by_canon[code];
                let top_tradition = group
                    .top_tradition()
                    .map(|(t, n)| format!(" {} {} ({})", Icon::Arrow.render(supports_unicode), t, n))
                    .unwrap_or_default();
                out.push_str(&format!(
                    "  {:>2}. {} {} {}{}\n",
                    rank + 1,
                    pad_to_width(code, code_width),
                    self.registry.display_name(code),
                    ColoredText::info(format!("{} files", count)).render(supports_color),
                    ColoredText::dim(top_tradition).render(supports_color)
                ));
            }
        }

        out.push_str(&grouping("Traditions", &rank_groups(&index.by_tradition), supports_color));
        out.push_str(&grouping("Periods", &rank_groups(&index.by_period), supports_color));
        out.push_str(&grouping("Origins", &rank_groups(&index.by_origin), supports_color));

        out.push('\n');
        if index.skipped.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Success.colored(supports_color, supports_unicode),
                ColoredText::success("All documents classified").render(supports_color)
            ));
        } else {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(format!(
                    "{} documents skipped (listed in the report)",
                    index.skipped_files()
                ))
                .render(supports_color)
            ));
        }

        out
    }
}

fn grouping<K: std::fmt::Display>(title: &str, ranked: &[(K, usize)], supports_color: bool) -> String {
    if ranked.is_empty() {
        return String::new();
    }
    let labels: Vec<String> = ranked.iter().map(|(k, _)| k.to_string()).collect();
    let width = label_width(labels.iter().map(String::as_str));

    let mut out = section(title, supports_color);
    for (label, (_, count)) in labels.iter().zip(ranked) {
        out.push_str(&count_line(label, *count, width, supports_color));
    }
    out
}
