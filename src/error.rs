//! Error codes shared by every fallible module.
//!
//! Each error enum carries a grepable code so the CLI can report failures as
//! `error[E_CODE]: message` regardless of which layer produced them.

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code and retryable flag for user-facing error reports.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    /// Whether trying the same call again could succeed. Informational only:
    /// nothing in this crate retries on its own.
    fn retryable(&self) -> bool {
        false
    }
}

/// Render an error as a single report line: `error[E_CODE]: message`.
pub fn report(err: &(impl ErrorCode + ?Sized)) -> String {
    let mut line = format!("error[{}]: {err}", err.error_code());
    if err.retryable() {
        line.push_str(" (retryable)");
    }
    line
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
