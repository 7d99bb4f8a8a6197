use colored::*;
use std::env;
use std::io::IsTerminal;

use crate::health::HealthColor;
use crate::recommendations::Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    /// Resolve the mode once and apply it to `colored` globally.
    pub fn apply(&self) -> Painter {
        let enabled = self.color.should_use_color();
        colored::control::set_override(enabled);
        Painter { enabled }
    }
}

/// Colors text for the terminal report, or passes it through untouched.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn health(&self, color: HealthColor, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match color {
            HealthColor::Green => text.green().to_string(),
            HealthColor::Yellow => text.yellow().to_string(),
            HealthColor::Red => text.red().bold().to_string(),
        }
    }

    pub fn priority(&self, priority: Priority, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match priority {
            Priority::Critical => text.red().bold().to_string(),
            Priority::High => text.yellow().to_string(),
            Priority::Medium => text.cyan().to_string(),
            Priority::Low => text.dimmed().to_string(),
        }
    }

    pub fn header(&self, text: &str) -> String {
        if self.enabled {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
