use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use sweep::config::{ColorMode, Config};
use sweep::presentation::output::TextRenderer;
use sweep::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        Self {
            json,
            // -v on the command line wins over the configured verbosity
            verbose: verbose.max(config.output.verbosity.level()),
            caps,
            color: wants_color(cli_color, config.output.color, &caps),
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }

    pub fn renderer(&self) -> TextRenderer {
        TextRenderer {
            color: self.color,
            unicode: self.unicode,
            verbose: self.verbose,
        }
    }

    pub fn success_icon(&self) -> &'static str {
        if self.unicode {
            "✓"
        } else {
            "[OK]"
        }
    }
}

/// An explicit `--color` beats the config file; `auto` defers to the terminal
fn wants_color(
    flag: Option<ColorWhen>,
    configured: ColorMode,
    caps: &TerminalCapabilities,
) -> bool {
    match (flag, configured) {
        (Some(ColorWhen::Never), _) => false,
        (Some(ColorWhen::Always), _) => true,
        (_, ColorMode::Never) => false,
        (_, ColorMode::Always) => true,
        (_, ColorMode::Auto) => caps.supports_color && !caps.is_ci,
    }
}
