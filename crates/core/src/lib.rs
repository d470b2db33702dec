//! Emboss toolchain core library.
//!
//! Converts an abstract braille document, expressed as a stream of
//! [`DocumentEvent`]s, into the byte stream a text-mode embosser consumes.
//! The pipeline is: event producer → [`PageFilter`] →
//! [`InterpointGraphicTransform`] → [`GenericTextRenderer`] → bytes. Each
//! transform stage is a pure event-to-event mapping; the renderer is the
//! only byte-producing stage and is governed by an
//! [`emboss_toolchain_profile::Geometry`].

#![warn(missing_docs)]

/// Unicode braille to device character mapping.
pub mod braille;
/// Core error type and classification.
pub mod error;
/// The document event model.
pub mod event;
/// Page-range selection sets and their textual grammar.
pub mod ranges;
/// The generic text renderer.
pub mod render;
/// Structural stream transforms: page filtering and interpoint handling.
pub mod transform;

// ── Convenience re-exports ──────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common items.

// Events
pub use event::DocumentEvent;

// Page ranges
pub use ranges::PageRanges;

// Transforms
pub use transform::{
    DocumentTransform, InterpointGraphicTransform, PageFilter, Pipeline, apply_transform,
};

// Renderer
pub use render::{GenericTextRenderer, render_document};

// Errors
pub use error::{Error, ErrorKind, Result};

// Geometry (re-exported from the profile crate)
pub use emboss_toolchain_profile::{Geometry, ProfileError};
