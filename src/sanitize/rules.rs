//! Whitelist of recognized diagram-line shapes.
//!
//! The table order is the classification priority: a line belongs to the
//! first rule whose pattern matches it. Patterns are tested against the line
//! with only trailing whitespace removed, so the anchored keyword rules reject
//! indented lines while the arrow and label rules match anywhere.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Syntactic category of a line kept in a cleaned body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `%%{...}%%` engine directive.
    Directive,
    /// `subgraph <id> ...`
    SubgraphStart,
    /// bare `end`
    SubgraphEnd,
    /// `classDef <id> ...`
    ClassDef,
    /// `class <id> ...`
    ClassAssign,
    /// `note <side> of <id> ...`
    Note,
    /// Any line carrying a `->` or `-->` arrow.
    Edge,
    /// Any line carrying a `[...]` label.
    Node,
}

impl LineKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Directive => "directive",
            Self::SubgraphStart => "subgraph_start",
            Self::SubgraphEnd => "subgraph_end",
            Self::ClassDef => "class_def",
            Self::ClassAssign => "class_assign",
            Self::Note => "note",
            Self::Edge => "edge",
            Self::Node => "node",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One whitelist entry: the category and the pattern that recognizes it.
#[derive(Debug, Clone, Copy)]
pub struct LineRule {
    pub kind: LineKind,
    pub pattern: &'static str,
}

/// Recognized shapes in priority order.
pub const RULES: &[LineRule] = &[
    LineRule { kind: LineKind::Directive, pattern: r"^%%\{.*\}%%$" },
    LineRule { kind: LineKind::SubgraphStart, pattern: r"^subgraph\s+\w+" },
    LineRule { kind: LineKind::SubgraphEnd, pattern: r"(?i)^end$" },
    LineRule { kind: LineKind::ClassDef, pattern: r"^classDef\s+\w+" },
    LineRule { kind: LineKind::ClassAssign, pattern: r"^class\s+\w+" },
    LineRule { kind: LineKind::Note, pattern: r"(?i)^note\s+(?:left|right|top|bottom)\s+of\s+\w+" },
    LineRule { kind: LineKind::Edge, pattern: r"--?>" },
    LineRule { kind: LineKind::Node, pattern: r"\[.*\]" },
];

static COMPILED: LazyLock<Vec<(LineKind, Regex)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|rule| (rule.kind, Regex::new(rule.pattern).expect("whitelist pattern must compile")))
        .collect()
});

/// Classify a single line, first matching rule wins. `None` means the line
/// is not diagram syntax and must be dropped.
#[must_use]
pub fn classify(line: &str) -> Option<LineKind> {
    let line = line.trim_end();
    if line.is_empty() {
        return None;
    }
    COMPILED
        .iter()
        .find(|(_, re)| re.is_match(line))
        .map(|(kind, _)| *kind)
}
