use canonsort::config::{ColorMode, Config};
use canonsort::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            color,
            unicode: caps.supports_unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: true,
            supports_unicode: true,
            is_ci,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let ui = UiContext::from_caps(None, &Config::default(), tty_caps(true));
        assert!(!ui.color);
    }

    #[test]
    fn cli_flag_beats_config() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;

        let ui = UiContext::from_caps(Some(ColorWhen::Never), &config, tty_caps(false));
        assert!(!ui.color);
    }

    #[test]
    fn config_always_forces_color() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;

        let ui = UiContext::from_caps(None, &config, tty_caps(true));
        assert!(ui.color);
    }
}
