//! Series and slice colors.

use serde::Serialize;

/// Chart colors used when nothing else is configured.
pub const DEFAULT_CHART_COLORS: [&str; 5] = [
    "hsl(12 76% 61%)",
    "hsl(173 58% 39%)",
    "hsl(197 37% 24%)",
    "hsl(43 74% 66%)",
    "hsl(27 87% 67%)",
];

/// Ordered color list handed to the renderers.
///
/// Never empty; lookups wrap around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_CHART_COLORS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Palette {
    /// Build from configured colors. An empty list falls back to the defaults.
    #[must_use]
    pub fn new(colors: Vec<String>) -> Self {
        let colors: Vec<String> = colors
            .into_iter()
            .map(|color| color.trim().to_string())
            .filter(|color| !color.is_empty())
            .collect();
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    /// Color for position `index`, wrapping modulo the palette length.
    #[must_use]
    pub fn color_at(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
