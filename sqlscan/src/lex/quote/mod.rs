// sqlscan - context-sensitive scanning of interactive SQL input.
// Copyright (C) 2025 Free Software Foundation, Inc.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

//! Quoted strings, dollar quotes, and block comments.
//!
//! A string opened on one line may close several lines later, so the kind of
//! quote that is open lives in a [ScannerState] owned by the input session.
//! The scanners here only look for the terminator of the construct that the
//! state says is open.  They never decide that a construct *opens*; that is
//! up to the caller (see [StatementScanner](super::statement::StatementScanner)).
//!
//! A scan that reaches the end of its window without finding a terminator
//! returns `Err(Incomplete)`, meaning that more input is needed.

use thiserror::Error as ThisError;

use crate::identifier::{MAX_TAG_LEN, is_dollar_tag};

use super::{Incomplete, cursor::char_at};

/// The kind of quoted string that is currently open.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Quote {
    /// Not inside a string.
    #[default]
    None,

    /// Inside `'...'`.
    Single,

    /// Inside `"..."`.
    Double,

    /// Inside `$tag$...$tag$`.  The tag may be empty.
    Dollar(String),
}

/// Quoting state carried from one scan to the next within a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerState {
    quote: Quote,
    dollar_quoting: bool,
}

impl Default for ScannerState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ScannerState {
    /// Returns a state outside of any string.  If `dollar_quoting` is false,
    /// `$` is an ordinary character.
    pub fn new(dollar_quoting: bool) -> Self {
        Self {
            quote: Quote::None,
            dollar_quoting,
        }
    }

    /// Returns the kind of string that is open.
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Records that a string of kind `quote` has been opened.
    pub fn open(&mut self, quote: Quote) {
        log::trace!("open {quote:?}");
        self.quote = quote;
    }

    /// Records that the open string has been closed.
    pub fn close(&mut self) {
        log::trace!("close {:?}", self.quote);
        self.quote = Quote::None;
    }

    /// Returns true if any kind of string is open.
    pub fn is_open(&self) -> bool {
        self.quote != Quote::None
    }

    /// Returns true inside `'...'`.
    pub fn inside_single_quote(&self) -> bool {
        self.quote == Quote::Single
    }

    /// Returns true inside `"..."`.
    pub fn inside_double_quote(&self) -> bool {
        self.quote == Quote::Double
    }

    /// Returns true inside `$tag$...$tag$`.
    pub fn inside_dollar_quote(&self) -> bool {
        matches!(self.quote, Quote::Dollar(_))
    }

    /// Returns the tag that closes the open dollar quote, if any.
    pub fn dollar_tag(&self) -> Option<&str> {
        match &self.quote {
            Quote::Dollar(tag) => Some(tag),
            _ => None,
        }
    }

    /// Returns false if `$` is an ordinary character.
    pub fn dollar_quoting_enabled(&self) -> bool {
        self.dollar_quoting
    }

    /// Enables or disables dollar quoting.  This does not close a dollar
    /// quote that is already open.
    pub fn set_dollar_quoting(&mut self, enabled: bool) {
        self.dollar_quoting = enabled;
    }
}

/// Why `$` at some position does not start a dollar-quote delimiter.
#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
pub enum TagError {
    /// No closing `$` within [MAX_TAG_LEN] characters.
    #[error("no closing \"$\" before position {pos}")]
    Unterminated {
        /// Last position examined.
        pos: usize,
    },

    /// The text between the `$` signs is not a valid tag.
    #[error("{tag:?} ending at position {pos} is not a valid dollar-quote tag")]
    Invalid {
        /// Text between the `$` signs.
        tag: String,

        /// Position of the closing `$`.
        pos: usize,
    },
}

impl TagError {
    /// Position at which scanning stopped.  This is for diagnostics only: it
    /// is never a terminator.
    pub fn pos(&self) -> usize {
        match self {
            TagError::Unterminated { pos } | TagError::Invalid { pos, .. } => *pos,
        }
    }
}

/// Reads a `$tag$` delimiter whose first `$` is at `i`.
///
/// On success, returns the tag and the position of the closing `$`.
pub fn read_dollar_tag(buf: &[char], i: usize, end: usize) -> Result<(String, usize), TagError> {
    debug_assert_eq!(char_at(buf, i, end), Some('$'));

    let limit = end.min(i + MAX_TAG_LEN + 2);
    let Some(close) = (i + 1..limit).find(|&j| buf[j] == '$') else {
        return Err(TagError::Unterminated { pos: limit });
    };
    let tag = &buf[i + 1..close];
    if !is_dollar_tag(tag) {
        return Err(TagError::Invalid {
            tag: tag.iter().collect(),
            pos: close,
        });
    }
    Ok((tag.iter().collect(), close))
}

/// Scans `[i, end)` for the terminator of the string that `state` says is
/// open, returning its position.
///
/// With no string open, this scans as if inside a single-quoted string.
pub fn read_string(
    buf: &[char],
    i: usize,
    end: usize,
    state: &ScannerState,
) -> Result<usize, Incomplete> {
    match &state.quote {
        Quote::Dollar(tag) if state.dollar_quoting => read_dollar_quoted(buf, i, end, tag),
        Quote::Dollar(_) => Err(Incomplete),
        Quote::Double => read_double_quoted(buf, i, end),
        Quote::Single | Quote::None => read_single_quoted(buf, i, end),
    }
}

fn read_dollar_quoted(buf: &[char], i: usize, end: usize, tag: &str) -> Result<usize, Incomplete> {
    for j in i..end {
        if buf[j] == '$' {
            if let Ok((candidate, close)) = read_dollar_tag(buf, j, end) {
                if candidate == tag {
                    return Ok(close);
                }
            }
        }
    }
    Err(Incomplete)
}

fn read_double_quoted(buf: &[char], i: usize, end: usize) -> Result<usize, Incomplete> {
    (i..end).find(|&j| buf[j] == '"').ok_or(Incomplete)
}

fn read_single_quoted(buf: &[char], mut i: usize, end: usize) -> Result<usize, Incomplete> {
    while i < end {
        if buf[i] == '\'' {
            if char_at(buf, i + 1, end) != Some('\'') {
                return Ok(i);
            }
            // `''` is a quote inside the string.
            i += 1;
        }
        i += 1;
    }
    Err(Incomplete)
}

/// Scans for the `*/` that closes a block comment, starting just after the
/// opening `/*`.  Returns the position of the `/`.
///
/// Comments do not nest.
pub fn read_block_comment(buf: &[char], i: usize, end: usize) -> Result<usize, Incomplete> {
    (i + 1..end)
        .find(|&j| buf[j - 1] == '*' && buf[j] == '/')
        .ok_or(Incomplete)
}
