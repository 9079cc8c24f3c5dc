//! Body sanitizer — raw model output to a renderable diagram body.
//!
//! DESIGN
//! ======
//! The model is asked for a bare diagram body but routinely wraps it in
//! markdown fences, repeats the diagram header, or adds commentary. The
//! renderer rejects all of that, so sanitizing runs four total passes:
//!
//! 1. strip every ```` ``` ```` / ```` ```mermaid ```` fence marker
//! 2. drop header lines (`graph TD`, `flowchart LR ...`); the caller
//!    prepends its own
//! 3. right-trim lines and drop blank ones
//! 4. keep only lines matching the [`rules::RULES`] whitelist; keyword rules
//!    are anchored at column 0, so indented prose never passes as syntax
//!
//! The result is a pure function of the input and re-sanitizing a cleaned
//! body returns it unchanged. There is no failure mode: input with nothing
//! diagram-shaped produces an empty body.

pub mod rules;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

pub use rules::{LineKind, classify};

/// Diagram-type keywords whose header lines are stripped by default.
pub const DEFAULT_HEADER_KEYWORDS: &[&str] = &["graph", "flowchart"];

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:mermaid)?").expect("fence pattern must compile"));

static DEFAULT_SANITIZER: LazyLock<Sanitizer> = LazyLock::new(Sanitizer::default);

// =============================================================================
// CLEANED BODY
// =============================================================================

/// A kept line and the whitelist rule that admitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyLine {
    pub kind: LineKind,
    pub text: String,
}

/// Ordered, whitelisted diagram lines. Source order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedBody {
    lines: Vec<BodyLine>,
}

impl CleanedBody {
    #[must_use]
    pub fn lines(&self) -> &[BodyLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Number of kept lines of the given kind.
    #[must_use]
    pub fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|line| line.kind == kind).count()
    }

    /// Lines joined with `\n`, no trailing newline.
    #[must_use]
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CleanedBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line.text)?;
        }
        Ok(())
    }
}

// =============================================================================
// SANITIZER
// =============================================================================

/// Sanitizer parametrized by which header keywords it strips.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    header_keywords: Vec<String>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_KEYWORDS.iter().copied())
    }
}

impl Sanitizer {
    pub fn new<I, S>(header_keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header_keywords: header_keywords
                .into_iter()
                .map(|kw| kw.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Transform raw generated text into a cleaned diagram body.
    #[must_use]
    pub fn sanitize(&self, raw: &str) -> CleanedBody {
        let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
        let unfenced = FENCE.replace_all(&normalized, "");

        let mut lines = Vec::new();
        let mut dropped = 0usize;
        for line in unfenced.lines() {
            if self.is_header_line(line) {
                dropped += 1;
                continue;
            }
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            match classify(line) {
                Some(kind) => lines.push(BodyLine { kind, text: line.to_string() }),
                None => dropped += 1,
            }
        }

        debug!(kept = lines.len(), dropped, "sanitized diagram body");
        CleanedBody { lines }
    }

    /// `<keyword> <direction> ...` after optional indentation, keyword
    /// matched case-insensitively.
    fn is_header_line(&self, line: &str) -> bool {
        let line = line.trim_start_matches([' ', '\t']);
        self.header_keywords.iter().any(|kw| {
            let Some(head) = line.get(..kw.len()) else {
                return false;
            };
            if !head.eq_ignore_ascii_case(kw) {
                return false;
            }
            let rest = &line[kw.len()..];
            let after_gap = rest.trim_start_matches([' ', '\t']);
            after_gap.len() < rest.len() && after_gap.chars().next().is_some_and(is_word_char)
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Sanitize with the default header keywords (`graph`, `flowchart`).
#[must_use]
pub fn sanitize(raw: &str) -> CleanedBody {
    DEFAULT_SANITIZER.sanitize(raw)
}

/// Sanitize arbitrary bytes; invalid UTF-8 is replaced, never rejected.
#[must_use]
pub fn sanitize_bytes(raw: &[u8]) -> CleanedBody {
    sanitize(&String::from_utf8_lossy(raw))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
