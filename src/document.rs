//! Diagram document assembly: theme directive, opener line, cleaned body.

use std::fmt;
use std::str::FromStr;

use crate::sanitize::CleanedBody;

pub const DEFAULT_THEME: &str = "default";

/// Themes offered by the CLI. Any other string is still forwarded verbatim.
pub const KNOWN_THEMES: &[&str] = &["default", "forest", "dark", "neutral"];

// =============================================================================
// ORIENTATION
// =============================================================================

/// Layout direction written on the opener line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum Orientation {
    /// top to bottom
    #[default]
    Tb,
    /// top down (alias of TB)
    Td,
    /// bottom to top
    Bt,
    /// right to left
    Rl,
    /// left to right
    Lr,
}

impl Orientation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tb => "TB",
            Self::Td => "TD",
            Self::Bt => "BT",
            Self::Rl => "RL",
            Self::Lr => "LR",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown orientation '{0}' (expected TB, TD, BT, RL or LR)")]
pub struct ParseOrientationError(String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TB" => Ok(Self::Tb),
            "TD" => Ok(Self::Td),
            "BT" => Ok(Self::Bt),
            "RL" => Ok(Self::Rl),
            "LR" => Ok(Self::Lr),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

// =============================================================================
// HEADER STYLE
// =============================================================================

/// Diagram-type keyword for the opener line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagramKeyword {
    #[default]
    Graph,
    Flowchart,
}

impl DiagramKeyword {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::Flowchart => "flowchart",
        }
    }
}

/// Quote character used inside the theme directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeQuote {
    /// `%%{init:{"theme":"dark"}}%%`
    #[default]
    Double,
    /// `%%{init:{'theme':'dark'}}%%`
    Single,
}

impl ThemeQuote {
    fn as_char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderStyle {
    pub keyword: DiagramKeyword,
    pub quote: ThemeQuote,
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// Caller-chosen header settings. None of these are validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub theme: String,
    pub orientation: Orientation,
    pub style: HeaderStyle,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self { theme: DEFAULT_THEME.to_string(), orientation: Orientation::default(), style: HeaderStyle::default() }
    }
}

impl DocumentOptions {
    /// `%%{init:{"theme":"<theme>"}}%%`
    #[must_use]
    pub fn directive_line(&self) -> String {
        let q = self.style.quote.as_char();
        format!("%%{{init:{{{q}theme{q}:{q}{}{q}}}}}%%", self.theme)
    }

    /// `graph TB`
    #[must_use]
    pub fn opener_line(&self) -> String {
        format!("{} {}", self.style.keyword.as_str(), self.orientation)
    }
}

/// Final renderable text: directive, opener, then the cleaned body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramDocument {
    text: String,
}

impl DiagramDocument {
    /// Assemble a document. An empty body still yields both header lines
    /// followed by a newline.
    #[must_use]
    pub fn assemble(options: &DocumentOptions, body: &CleanedBody) -> Self {
        let text = format!("{}\n{}\n{body}", options.directive_line(), options.opener_line());
        Self { text }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for DiagramDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
