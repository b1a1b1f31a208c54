use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Branch,
    LastBranch,
    Analyze,
    Provenance,
    Layout,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Branch) => theme::icons::BRANCH,
            (true, Icon::LastBranch) => theme::icons::LAST_BRANCH,
            (true, Icon::Analyze) => theme::icons::ANALYZE,
            (true, Icon::Provenance) => theme::icons::PROVENANCE,
            (true, Icon::Layout) => theme::icons::LAYOUT,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Branch) => theme::icons_ascii::BRANCH,
            (false, Icon::LastBranch) => theme::icons_ascii::LAST_BRANCH,
            (false, Icon::Analyze) => theme::icons_ascii::ANALYZE,
            (false, Icon::Provenance) => theme::icons_ascii::PROVENANCE,
            (false, Icon::Layout) => theme::icons_ascii::LAYOUT,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Branch | Icon::LastBranch => theme::colors::DIM,
            Icon::Analyze | Icon::Provenance | Icon::Layout => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fallback() {
        assert_eq!(Icon::Warning.render(false), "[WARN]");
        assert_eq!(Icon::LastBranch.render(true), "└─");
        assert_eq!(Icon::Success.colored(false, true), "✓");
    }
}
