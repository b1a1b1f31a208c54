use std::collections::BTreeMap;

use canonsort::application::{rank_by_count, LayoutPlan};
use canonsort::domain::services::folder_segment;

use crate::ui::blocks::header::{section, CommandHeader};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Folder tree for a layout recommendation
pub struct LayoutView<'a> {
    plan: &'a LayoutPlan,
    period_threshold: usize,
}

impl<'a> LayoutView<'a> {
    pub fn new(plan: &'a LayoutPlan, period_threshold: usize) -> Self {
        Self {
            plan,
            period_threshold,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let plan = self.plan;
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Layout, "canonsort recommend");
        header.add("Documents", plan.assignments.len().to_string());
        header.add(
            "Period level",
            format!("canons with at least {} documents", self.period_threshold),
        );
        out.push_str(&header.render(supports_color, supports_unicode));
        out.push_str(&section("Recommended layout", supports_color));

        let canons = rank_by_count(
            plan.canons
                .iter()
                .map(|(code, canon)| ((code.as_str(), canon), canon.file_count)),
        );
        for ((code, canon), count) in canons {
            let prefix = format!("Canon_{}/", folder_segment(code));
            let split = if canon.by_period { ", by period" } else { "" };
            out.push_str(&format!(
                "{} {}\n",
                ColoredText::info(prefix.as_str()).bold().render(supports_color),
                ColoredText::dim(format!("({}, {} files{})", canon.canon_name, count, split))
                    .render(supports_color)
            ));

            let children = children_of(&plan.folders, &prefix);
            let last = children.len().saturating_sub(1);
            for (i, (child, files)) in children.into_iter().enumerate() {
                let branch = if i == last { Icon::LastBranch } else { Icon::Branch };
                out.push_str(&format!(
                    "  {} {} {}\n",
                    branch.colored(supports_color, supports_unicode),
                    child,
                    ColoredText::dim(format!("[{}]", files)).render(supports_color)
                ));
            }
        }

        out
    }
}

/// Folders under `prefix`, relative to it, largest first
fn children_of<'p>(folders: &'p BTreeMap<String, usize>, prefix: &str) -> Vec<(&'p str, usize)> {
    rank_by_count(
        folders
            .iter()
            .filter_map(|(path, count)| path.strip_prefix(prefix).map(|rest| (rest, *count))),
    )
}
