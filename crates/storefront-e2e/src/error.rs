// Error types for the storefront-e2e harness

use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the page-object harness.
///
/// Any failure here is fatal for the current test; the harness never
/// retries on its own.
#[derive(Debug, Error)]
pub enum Error {
    /// Failure inside the automation engine (launch, navigation, locator
    /// resolution, protocol I/O). Carries the engine's own context.
    #[error(transparent)]
    Automation(#[from] playwright_rs::Error),

    /// A bounded wait elapsed before its condition held.
    ///
    /// Covers both explicit element waits and navigation-settle waits.
    #[error("timed out after {budget_ms}ms waiting for {what}")]
    WaitTimeout { what: String, budget_ms: u64 },

    /// A screenshot artifact could not be written to disk.
    #[error("failed to write screenshot to '{path}'")]
    Artifact {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
