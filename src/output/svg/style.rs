//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// Color specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Any literal CSS color (`#2563eb`, `hsl(12 76% 61%)`)
    Css(String),
    /// CSS variable reference (e.g., "text-muted" → "var(--color-text-muted)")
    CssVar(String),
}

impl ChartColor {
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    #[must_use]
    pub fn css(color: &str) -> Self {
        Self::Css(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Css(color) => color.clone(),
            Self::CssVar(name) => format!("var(--color-{name})"),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
