//! # Output Configuration
//!
//! Controls CLI output appearance. Colors and emojis follow the `--color`
//! flag, the `NO_COLOR` convention (https://no-color.org/), and terminal
//! capability detection through the `console` crate.

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the `--color` flag value:
    /// "always", "never", or "auto".
    pub fn from_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => {
                env::var_os("NO_COLOR").is_none()
                    && console::Term::stdout().features().colors_supported()
            }
        };

        Self { use_color }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain alternative
/// otherwise.
pub fn emoji<'a>(config: &OutputConfig, symbol: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        symbol
    } else {
        plain
    }
}
