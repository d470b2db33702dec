use emboss_toolchain_profile::ProfileError;
use thiserror::Error;

/// Broad classification of a core error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a value the device or grammar cannot accept.
    /// Fix the input and resubmit; nothing is retried internally.
    InvalidArgument,
    /// The caller violated the usage contract of a component (for example,
    /// asking for rendered output before the document has ended).
    Usage,
}

/// Errors produced by the core pipeline.
///
/// Every variant carries enough context (the offending token, bound, or
/// dimension) to diagnose the failure without re-running.
#[derive(Debug, Error)]
pub enum Error {
    /// A page-range token or interval violated the grammar, a bound was
    /// below 1, or an interval was out of order relative to its predecessor.
    #[error("invalid page range token `{token}`: {reason}")]
    InvalidPageRange {
        /// The offending token as written by the caller.
        token: String,
        /// Why the token was rejected.
        reason: String,
    },

    /// Braille content was wider than the usable line width.
    #[error("line content of {cells} cells exceeds the {available} cells available on this line")]
    LineTooLong {
        /// Cells supplied for the line so far, including this event.
        cells: usize,
        /// Usable cells per line under the current geometry.
        available: usize,
    },

    /// More lines were started than fit on a page under the current geometry.
    #[error("page already holds {lines} lines, the page is full")]
    PageOverflow {
        /// Lines already emitted on the current page, top margin included.
        lines: u32,
    },

    /// A character outside U+2800–U+28FF appeared in braille content.
    #[error("character U+{code:04X} is not a Unicode braille cell")]
    NonBrailleContent {
        /// Code point of the offending character.
        code: u32,
    },

    /// The renderer geometry failed validation.
    #[error(transparent)]
    Geometry(#[from] ProfileError),

    /// An event arrived that the renderer cannot accept at its current
    /// position in the document.
    #[error("event {event} is not valid in renderer state {state}")]
    InvalidState {
        /// Name of the rejected event.
        event: &'static str,
        /// Name of the renderer state that rejected it.
        state: &'static str,
    },

    /// Rendered bytes were requested before `EndDocument` was observed.
    #[error("rendered output requested before the end of the document")]
    OutputNotReady,
}

impl Error {
    /// Classify this error as an argument error or a contract violation.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPageRange { .. }
            | Error::LineTooLong { .. }
            | Error::PageOverflow { .. }
            | Error::NonBrailleContent { .. }
            | Error::Geometry(_) => ErrorKind::InvalidArgument,
            Error::InvalidState { .. } | Error::OutputNotReady => ErrorKind::Usage,
        }
    }
}

/// Result alias for core operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
