//! Export helpers: fenced Mermaid, JSON, and Markdown report.

use std::path::{Path, PathBuf};

use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("timestamp format failed: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl crate::error::ErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Serialize(_) => "E_EXPORT_SERIALIZE",
            Self::Timestamp(_) => "E_EXPORT_TIMESTAMP",
            Self::Io(_) => "E_EXPORT_IO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Diagram wrapped in a mermaid code fence
    #[value(name = "md")]
    MermaidCode,
    /// `{description, mermaid_code, exported_at}`
    Json,
    /// Titled report with description and diagram sections
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::MermaidCode | Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

/// What gets exported. `title` only appears in the Markdown report.
#[derive(Debug, Clone, Copy)]
pub struct ExportInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub document: &'a str,
}

#[derive(Serialize)]
struct JsonExport<'a> {
    description: &'a str,
    mermaid_code: &'a str,
    exported_at: String,
}

fn fenced(document: &str) -> String {
    format!("```mermaid\n{document}\n```")
}

/// Render an export body.
///
/// # Errors
///
/// Fails only if JSON serialization or timestamp formatting fails.
pub fn render(format: ExportFormat, input: &ExportInput<'_>, exported_at: OffsetDateTime) -> Result<String, ExportError> {
    match format {
        ExportFormat::MermaidCode => Ok(fenced(input.document)),
        ExportFormat::Json => {
            let export = JsonExport {
                description: input.description,
                mermaid_code: input.document,
                exported_at: exported_at.format(&Rfc3339)?,
            };
            Ok(serde_json::to_string_pretty(&export)?)
        }
        ExportFormat::Markdown => Ok(format!(
            "# {}\n\n## Workflow Description\n\n{}\n\n## Diagram\n\n{}\n",
            input.title,
            input.description,
            fenced(input.document)
        )),
    }
}

/// Render and write `<stem>.<ext>`, returning the written path.
///
/// # Errors
///
/// Rendering errors, or the file could not be written.
pub fn write_export(stem: &Path, format: ExportFormat, input: &ExportInput<'_>) -> Result<PathBuf, ExportError> {
    let body = render(format, input, OffsetDateTime::now_utc())?;
    let path = stem.with_extension(format.extension());
    std::fs::write(&path, body)?;
    tracing::info!(path = %path.display(), ?format, "diagram exported");
    Ok(path)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
