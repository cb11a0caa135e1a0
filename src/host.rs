//! Host view seam.
//!
//! The original selection workflow ends by asking the host editor to redraw
//! so the new selection becomes visible. [`ViewRefresher`] is that seam: the
//! selection pass requests exactly one refresh after a completed enumeration,
//! and an aborted pass requests none.

use thiserror::Error;

/// Errors reported by the host view.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host rejected or failed the refresh request.
    #[error("view refresh failed: {message}")]
    RefreshFailed {
        /// Description from the host.
        message: String,
    },
}

impl HostError {
    /// Creates a refresh failure error.
    pub fn refresh_failed(message: impl Into<String>) -> Self {
        Self::RefreshFailed {
            message: message.into(),
        }
    }
}

/// A host view that can be asked to redraw.
pub trait ViewRefresher {
    /// Requests a redraw of the host's visual presentation.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot service the request.
    fn refresh(&mut self) -> Result<(), HostError>;
}

/// A refresher that logs the request instead of driving an editor.
///
/// Used by the CLI, where there is no live editor attached to the board
/// snapshot being processed.
#[derive(Debug, Default)]
pub struct LoggingRefresher;

impl ViewRefresher for LoggingRefresher {
    fn refresh(&mut self) -> Result<(), HostError> {
        tracing::info!("view refresh requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_refresher_succeeds() {
        let mut refresher = LoggingRefresher;
        assert!(refresher.refresh().is_ok());
    }

    #[test]
    fn refresh_error_display() {
        let err = HostError::refresh_failed("editor disconnected");
        assert_eq!(err.to_string(), "view refresh failed: editor disconnected");
    }
}
