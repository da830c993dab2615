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

//! Backslash meta-commands.
//!
//! A meta-command is a backslash followed by a name and whitespace-separated
//! arguments, e.g. `\c mydb`.  Several may be chained on one line:
//! `\c mydb \d mytable` is two commands, because a backslash that follows
//! whitespace starts the next command.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use super::cursor::tokenize;

/// A meta-command name and its arguments.
///
/// The name does not include the introducing backslash.  An empty name means
/// that the backslash was followed only by whitespace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Command {
    /// Command name, e.g. `c` for `\c mydb`.
    pub name: String,

    /// Whitespace-separated arguments, e.g. `["mydb"]` for `\c mydb`.
    pub args: Vec<String>,
}

impl Command {
    /// Creates a command from `name` and `args`.
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true for a bare backslash with no name.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "\\{}", self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Reads the meta-command whose backslash is at `i`.
///
/// Returns the command and the position where scanning should resume: the
/// backslash of the next chained command, or `end` if there is none.
pub fn read_command(buf: &[char], i: usize, end: usize) -> (Command, usize) {
    debug_assert!(i < end && buf[i] == '\\');

    let start = i + 1;
    let boundary = (start..end.saturating_sub(1))
        .find(|&j| buf[j].is_whitespace() && buf[j + 1] == '\\')
        .map_or(end, |j| j + 1);

    let mut tokens = tokenize(buf, start, boundary).into_iter();
    let command = match tokens.next() {
        Some(name) => Command {
            name,
            args: tokens.collect(),
        },
        None => Command::default(),
    };
    (command, boundary)
}
