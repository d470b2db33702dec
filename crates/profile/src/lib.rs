//! Embosser geometry profiles for the emboss toolchain.
//!
//! A [`Geometry`] describes the page shape a rendering stage must honour:
//! cell width, lines per page, margins, duplex (interpoint) behaviour, copy
//! count, and the line/page terminator bytes the device expects. Profiles
//! are immutable once validated; construct them through [`Geometry::validated`]
//! or [`load_geometry_from_str`] and hand them to the renderer untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Widest carriage of any supported embosser, in braille cells.
pub const MAX_CELLS_PER_LINE: u32 = 96;
/// Longest page of any supported embosser, in braille lines.
pub const MAX_LINES_PER_PAGE: u32 = 99;

/// Errors that can occur when loading or validating a geometry profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// JSON deserialization failed.
    #[error("invalid geometry JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A field value is out of its valid range, or a cross-field constraint
    /// does not hold.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// The name of the field that failed validation.
        field: String,
        /// A human-readable explanation of why the field value is invalid.
        reason: String,
    },
}

/// Page geometry for a braille embosser (or class of embossers).
///
/// All dimensions are in braille cells horizontally and braille lines
/// vertically. The usable text area of a page is
/// `cells_per_line - left_margin - right_margin` cells wide and
/// `lines_per_page - top_margin - bottom_margin` lines tall.
///
/// # Example
/// ```
/// use emboss_toolchain_profile::Geometry;
///
/// let geometry = Geometry {
///     cells_per_line: 32,
///     lines_per_page: 27,
///     left_margin: 2,
///     interpoint: true,
///     ..Geometry::default()
/// }
/// .validated()
/// .unwrap();
/// assert_eq!(geometry.usable_cells(), 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Geometry {
    /// Total braille cells per line, including margins.
    pub cells_per_line: u32,
    /// Total braille lines per page, including margins.
    pub lines_per_page: u32,
    /// Blank cells at the start of every line.
    pub left_margin: u32,
    /// Cells at the end of every line that must stay blank.
    pub right_margin: u32,
    /// Blank lines at the top of every page.
    pub top_margin: u32,
    /// Lines at the bottom of every page that must stay blank.
    pub bottom_margin: u32,
    /// Bytes terminating each line.
    pub end_of_line: Vec<u8>,
    /// Bytes terminating each page.
    pub end_of_page: Vec<u8>,
    /// Whether the device embosses both sides of a sheet (interpoint duplex).
    pub interpoint: bool,
    /// Number of collated copies of the whole document to produce.
    pub copies: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            cells_per_line: 40,
            lines_per_page: 25,
            left_margin: 0,
            right_margin: 0,
            top_margin: 0,
            bottom_margin: 0,
            end_of_line: b"\r\n".to_vec(),
            end_of_page: b"\x0c".to_vec(),
            interpoint: false,
            copies: 1,
        }
    }
}

impl Geometry {
    /// Validate this geometry, consuming it and returning it unchanged on
    /// success.
    ///
    /// Checks, in order:
    /// - `cells_per_line` in 1..=[`MAX_CELLS_PER_LINE`]
    /// - `lines_per_page` in 1..=[`MAX_LINES_PER_PAGE`]
    /// - `left_margin + right_margin < cells_per_line`
    /// - `top_margin + bottom_margin < lines_per_page`
    /// - `copies >= 1`
    pub fn validated(self) -> Result<Self, ProfileError> {
        if self.cells_per_line == 0 {
            return Err(invalid("cells_per_line", "must be > 0"));
        }
        if self.cells_per_line > MAX_CELLS_PER_LINE {
            return Err(invalid(
                "cells_per_line",
                format!(
                    "{} exceeds the widest supported carriage ({MAX_CELLS_PER_LINE} cells)",
                    self.cells_per_line
                ),
            ));
        }
        if self.lines_per_page == 0 {
            return Err(invalid("lines_per_page", "must be > 0"));
        }
        if self.lines_per_page > MAX_LINES_PER_PAGE {
            return Err(invalid(
                "lines_per_page",
                format!(
                    "{} exceeds the longest supported page ({MAX_LINES_PER_PAGE} lines)",
                    self.lines_per_page
                ),
            ));
        }
        // Margin sums are checked, not plain additions: the fields come
        // straight from JSON and may individually be anywhere in u32.
        if self
            .left_margin
            .checked_add(self.right_margin)
            .is_none_or(|used| used >= self.cells_per_line)
        {
            return Err(invalid(
                "margins",
                format!(
                    "left ({}) + right ({}) leave no cells on a {}-cell line",
                    self.left_margin, self.right_margin, self.cells_per_line
                ),
            ));
        }
        if self
            .top_margin
            .checked_add(self.bottom_margin)
            .is_none_or(|used| used >= self.lines_per_page)
        {
            return Err(invalid(
                "margins",
                format!(
                    "top ({}) + bottom ({}) leave no lines on a {}-line page",
                    self.top_margin, self.bottom_margin, self.lines_per_page
                ),
            ));
        }
        if self.copies == 0 {
            return Err(invalid("copies", "must be >= 1"));
        }
        Ok(self)
    }

    /// Cells available for content on each line, margins excluded.
    pub fn usable_cells(&self) -> u32 {
        self.cells_per_line - self.left_margin - self.right_margin
    }

    /// Line slots emitted per page: everything above the bottom margin.
    /// The top margin is emitted as blank lines and counts toward this.
    pub fn emitted_lines(&self) -> u32 {
        self.lines_per_page - self.bottom_margin
    }

    /// Lines available for content on each page, margins excluded.
    pub fn usable_lines(&self) -> u32 {
        self.lines_per_page - self.top_margin - self.bottom_margin
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ProfileError {
    ProfileError::InvalidField {
        field: field.into(),
        reason: reason.into(),
    }
}

/// Load and validate a [`Geometry`] from a JSON string.
///
/// Every field is optional in the JSON; missing fields take the defaults of
/// [`Geometry::default`] (a 40x25 single-sided page with CRLF line endings
/// and a form feed page terminator). The result is checked with
/// [`Geometry::validated`] before being returned.
pub fn load_geometry_from_str(s: &str) -> Result<Geometry, ProfileError> {
    let geometry: Geometry = serde_json::from_str(s)?;
    geometry.validated()
}
