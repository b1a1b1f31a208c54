pub mod analyze;
pub mod layout;
pub mod provenance;

use crate::ui::primitives::text::{pad_to_width, ColoredText};

/// `  label    count` with the label padded to `width` columns
pub(crate) fn count_line(label: &str, count: usize, width: usize, supports_color: bool) -> String {
    format!(
        "  {} {}\n",
        pad_to_width(label, width),
        ColoredText::info(count.to_string()).render(supports_color)
    )
}

/// Widest label in columns, for aligning `count_line`s
pub(crate) fn label_width<'a>(labels: impl IntoIterator<Item = &'a str>) -> usize {
    labels
        .into_iter()
        .map(unicode_width::UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}
