//! Page-range selection sets.
//!
//! A [`PageRanges`] names the 1-based pages of a document that should be
//! embossed, as an ordered list of disjoint `[low, high]` intervals. Ranges
//! are deliberately kept caller-ordered and unmerged: a reversed or
//! overlapping input is rejected instead of silently repaired, because a
//! quietly "fixed" range would emboss the wrong pages and waste braille
//! paper.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable set of 1-based page numbers, stored as strictly ascending,
/// non-overlapping closed intervals.
///
/// The empty set of intervals denotes *all* pages: `contains(n)` is true for
/// every `n >= 1`. This is the default, so a driver that is handed no page
/// selection embosses the whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRanges {
    intervals: Vec<(u32, u32)>,
}

impl PageRanges {
    /// The unbounded set: every page `>= 1` is contained.
    pub fn all() -> Self {
        Self::default()
    }

    /// A set holding exactly one page.
    ///
    /// Fails if `page` is 0 (pages are numbered from 1).
    pub fn single(page: u32) -> Result<Self> {
        Self::range(page, page)
    }

    /// A set holding the closed interval `[low, high]`.
    ///
    /// Fails if `low` is 0 or `high < low`.
    pub fn range(low: u32, high: u32) -> Result<Self> {
        let mut intervals = Vec::with_capacity(1);
        push_checked(&mut intervals, low, high, || interval_token(low, high))?;
        Ok(Self { intervals })
    }

    /// A set built from explicit intervals, in the order given.
    ///
    /// A single page is written as `(n, n)`. The caller must supply the
    /// pairs already in ascending, non-overlapping order; a pair with a zero
    /// bound, an inverted pair, or a pair that does not sort strictly after
    /// its predecessor is rejected. No sorting or merging is attempted.
    pub fn from_intervals(pairs: &[(u32, u32)]) -> Result<Self> {
        let mut intervals = Vec::with_capacity(pairs.len());
        for &(low, high) in pairs {
            push_checked(&mut intervals, low, high, || interval_token(low, high))?;
        }
        Ok(Self { intervals })
    }

    /// Parse a textual page range.
    ///
    /// Grammar: comma-separated tokens, each either `INT` or `INT-INT`,
    /// where INT is one or more ASCII digits with value `>= 1`. ASCII spaces
    /// and tabs around tokens are tolerated; any other separator (a colon,
    /// a semicolon, a second dash) is a syntax error. Tokens must appear in
    /// ascending, non-overlapping order.
    ///
    /// ```
    /// use emboss_toolchain_core::PageRanges;
    ///
    /// let pages = PageRanges::parse("1-3, 7, 10-12").unwrap();
    /// assert!(pages.contains(2));
    /// assert!(!pages.contains(4));
    /// assert!(PageRanges::parse("7:8").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut intervals = Vec::new();
        for raw in text.split(',') {
            let token = raw.trim_matches([' ', '\t']);
            let (low, high) = parse_token(token)?;
            push_checked(&mut intervals, low, high, || token.to_string())?;
        }
        Ok(Self { intervals })
    }

    /// Whether page `n` is in the set. Always false for `n == 0`; always
    /// true for the unbounded set and `n >= 1`.
    pub fn contains(&self, n: u32) -> bool {
        if n == 0 {
            return false;
        }
        if self.intervals.is_empty() {
            return true;
        }
        self.intervals
            .iter()
            .any(|&(low, high)| low <= n && n <= high)
    }

    /// The intervals of this set, ascending and disjoint. Empty means
    /// "all pages".
    pub fn intervals(&self) -> &[(u32, u32)] {
        &self.intervals
    }
}

impl fmt::Display for PageRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(low, high)) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if low == high {
                write!(f, "{low}")?;
            } else {
                write!(f, "{low}-{high}")?;
            }
        }
        Ok(())
    }
}

/// Validate `[low, high]` against the bound and ordering rules and append it.
///
/// `token` produces the caller's spelling of the interval for error
/// reporting, lazily so the happy path allocates nothing.
fn push_checked(
    intervals: &mut Vec<(u32, u32)>,
    low: u32,
    high: u32,
    token: impl Fn() -> String,
) -> Result<()> {
    if low == 0 {
        return Err(Error::InvalidPageRange {
            token: token(),
            reason: "page numbers start at 1".into(),
        });
    }
    if high < low {
        return Err(Error::InvalidPageRange {
            token: token(),
            reason: format!("upper bound {high} is below lower bound {low}"),
        });
    }
    if let Some(&(_, prev_high)) = intervals.last()
        && low <= prev_high
    {
        return Err(Error::InvalidPageRange {
            token: token(),
            reason: format!("must sort strictly after the preceding interval ending at {prev_high}"),
        });
    }
    intervals.push((low, high));
    Ok(())
}

fn interval_token(low: u32, high: u32) -> String {
    if low == high {
        low.to_string()
    } else {
        format!("{low}-{high}")
    }
}

/// Parse one `INT` or `INT-INT` token.
fn parse_token(token: &str) -> Result<(u32, u32)> {
    match token.split_once('-') {
        Some((low, high)) => Ok((parse_int(token, low)?, parse_int(token, high)?)),
        None => {
            let page = parse_int(token, token)?;
            Ok((page, page))
        }
    }
}

/// Parse a run of ASCII digits. `token` is the enclosing token, reported on
/// failure; `digits` is the slice being converted.
fn parse_int(token: &str, digits: &str) -> Result<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidPageRange {
            token: token.to_string(),
            reason: "expected an integer or INT-INT pair of ASCII digits".into(),
        });
    }
    digits.parse().map_err(|_| Error::InvalidPageRange {
        token: token.to_string(),
        reason: format!("value {digits} does not fit a 32-bit page number"),
    })
}
