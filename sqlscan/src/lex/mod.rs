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

//! Lexical analysis of interactive SQL input.
//!
//! Input arrives one line at a time, and a statement may span many lines, so
//! scanning works in layers:
//!
//! 1. [cursor] provides bounded access to a window of a character buffer.
//!
//! 2. [quote] finds the ends of quoted strings, dollar quotes, and block
//!    comments, given the quoting state carried over from earlier lines.
//!
//! 3. [command] reads backslash meta-commands such as `\c mydb`.
//!
//! 4. [statement] accumulates lines and uses the layers above to divide them
//!    into complete statements and meta-commands.
//!
//! All of the scanners operate on `&[char]` plus a `[start, end)` window, and
//! all positions are character indexes into that buffer.

// Warn about missing docs, but not for items declared with `#[cfg(test)]`.
#![cfg_attr(not(test), warn(missing_docs))]

pub mod command;
pub mod cursor;
pub mod quote;
pub mod statement;

pub use command::{Command, read_command};
pub use quote::{Quote, ScannerState, TagError, read_block_comment, read_dollar_tag, read_string};
pub use statement::{Item, Statement, StatementScanner};

/// A scan reached the end of its input without finding what it was looking
/// for.  The caller should obtain more input and try again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Incomplete;
