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

//! Dividing lines of input into statements and meta-commands.
//!
//! A [StatementScanner] accepts input one line at a time with
//! [push_line](StatementScanner::push_line) and hands back complete
//! [Item]s from [next_item](StatementScanner::next_item).  A statement is
//! complete at a `;` outside of any string or comment.  A backslash outside
//! of any string or comment introduces a meta-command that runs to the end of
//! its line (or to the next chained meta-command).
//!
//! Text that has been classified is never scanned again: when
//! [next_item](StatementScanner::next_item) runs out of input, it remembers
//! where it stopped and which string or comment is open, and resumes there
//! after the next line arrives.

use serde::Serialize;

use crate::{prompt::PromptStyle, settings::Settings};

use super::{
    Incomplete,
    command::{Command, read_command},
    cursor::{char_at, find_non_space},
    quote::{Quote, ScannerState, read_block_comment, read_dollar_tag, read_string},
};

/// Statement text, possibly spanning several lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Statement {
    /// The statement, without leading or trailing white space.  A
    /// terminating `;` is included.
    pub text: String,

    /// Whether the statement ended with `;`.  A statement that precedes a
    /// meta-command, or that is left over at end of input, is unterminated.
    pub terminated: bool,

    /// 1-based line number on which the statement starts.
    pub line: usize,
}

impl Statement {
    /// Creates a statement starting on 1-based `line`.
    pub fn new(text: impl Into<String>, terminated: bool, line: usize) -> Self {
        Self {
            text: text.into(),
            terminated,
            line,
        }
    }
}

/// Something recognized by [StatementScanner].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
    /// SQL to be executed.
    Statement(Statement),

    /// A backslash meta-command.
    Command(Command),
}

/// Accumulates lines of input for one session and divides them into
/// [Item]s.
#[derive(Clone, Debug)]
pub struct StatementScanner {
    state: ScannerState,
    buf: Vec<char>,

    /// Where to resume scanning in `buf`.
    pos: usize,

    /// Start of the pending statement in `buf`.
    start: usize,

    /// Inside `/* ... */`.
    comment: bool,

    /// The pending statement contains something other than white space and
    /// comments.
    code: bool,

    /// 1-based line number of `buf[0]`.
    line: usize,
}

impl Default for StatementScanner {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl StatementScanner {
    /// Returns a scanner with an empty buffer, configured by `settings`.
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: ScannerState::new(settings.dollar_quoting),
            buf: Vec::new(),
            pos: 0,
            start: 0,
            comment: false,
            code: false,
            line: 1,
        }
    }

    /// Returns the quoting state at the point where scanning stopped.
    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    /// Appends `line`, which should not include a line terminator, to the
    /// input.
    pub fn push_line(&mut self, line: &str) {
        self.buf.extend(line.chars());
        self.buf.push('\n');
    }

    /// Returns true if there is no pending statement text and no string or
    /// comment is open.
    pub fn is_empty(&self) -> bool {
        !self.code && !self.comment && !self.state.is_open()
    }

    /// Returns the prompt to show for the next line of input.
    pub fn prompt(&self) -> PromptStyle {
        if self.comment {
            PromptStyle::Comment
        } else if let Some(style) = PromptStyle::for_quote(self.state.quote()) {
            style
        } else if self.code {
            PromptStyle::Later
        } else {
            PromptStyle::First
        }
    }

    /// Returns the next complete statement or meta-command, or
    /// `Err(Incomplete)` if more input is needed first.
    pub fn next_item(&mut self) -> Result<Item, Incomplete> {
        let end = self.buf.len();
        while self.pos < end {
            if self.comment {
                match read_block_comment(&self.buf, self.pos, end) {
                    Ok(close) => {
                        log::trace!("comment closed at {close}");
                        self.comment = false;
                        self.pos = close + 1;
                        continue;
                    }
                    Err(Incomplete) => {
                        // The last `*` might pair with a `/` that is yet to come.
                        self.pos = end - 1;
                        return Err(Incomplete);
                    }
                }
            }
            if self.state.is_open() {
                match read_string(&self.buf, self.pos, end, &self.state) {
                    Ok(close) => {
                        self.state.close();
                        self.pos = close + 1;
                        continue;
                    }
                    Err(Incomplete) => {
                        self.pos = end;
                        return Err(Incomplete);
                    }
                }
            }

            // Leading white space and comments are not part of a statement.
            if !self.code {
                self.start = self.pos;
            }

            let i = self.pos;
            let c = self.buf[i];
            let next = char_at(&self.buf, i + 1, end);
            self.pos = i + 1;
            match c {
                '-' if next == Some('-') => self.pos = self.find_newline(i),
                '/' if next == Some('*') => {
                    log::trace!("comment opened at {i}");
                    self.comment = true;
                    self.pos = i + 2;
                }
                '\'' => self.open(Quote::Single),
                '"' => self.open(Quote::Double),
                '$' if self.state.dollar_quoting_enabled() => {
                    if let Ok((tag, close)) = read_dollar_tag(&self.buf, i, end) {
                        self.open(Quote::Dollar(tag));
                        self.pos = close + 1;
                    } else {
                        self.code = true;
                    }
                }
                '\\' if self.code => {
                    self.pos = i;
                    return Ok(Item::Statement(self.take_statement(i, false)));
                }
                '\\' => {
                    let (command, next) = read_command(&self.buf, i, self.find_newline(i));
                    log::debug!("line {}: meta-command {command:?}", self.line_at(i));
                    self.start = next;
                    self.pos = next;
                    self.compact();
                    return Ok(Item::Command(command));
                }
                ';' => return Ok(Item::Statement(self.take_statement(i + 1, true))),
                _ if c.is_whitespace() => (),
                _ => self.code = true,
            }
        }

        if self.is_empty() {
            self.start = end;
            self.compact();
        }
        Err(Incomplete)
    }

    /// Ends the input.  Returns whatever statement text remains, as an
    /// unterminated statement, and resets the scanner.
    ///
    /// Call this only after [next_item](Self::next_item) has returned
    /// `Err(Incomplete)`.
    pub fn finish(&mut self) -> Option<Item> {
        let item = if self.code {
            Some(Item::Statement(self.take_statement(self.buf.len(), false)))
        } else {
            None
        };
        self.reset();
        item
    }

    /// Discards all pending input and closes any open string or comment.
    pub fn reset(&mut self) {
        self.start = self.buf.len();
        self.compact();
        self.state.close();
        self.comment = false;
        self.code = false;
    }

    fn open(&mut self, quote: Quote) {
        self.code = true;
        self.state.open(quote);
    }

    /// Returns the position of the new-line that ends the line containing
    /// `i`, or the end of the buffer.
    fn find_newline(&self, i: usize) -> usize {
        (i..self.buf.len())
            .find(|&j| self.buf[j] == '\n')
            .unwrap_or(self.buf.len())
    }

    fn line_at(&self, i: usize) -> usize {
        self.line + self.buf[..i].iter().filter(|&&c| c == '\n').count()
    }

    fn take_statement(&mut self, stop: usize, terminated: bool) -> Statement {
        let first = find_non_space(&self.buf, self.start, stop).unwrap_or(stop);
        let text: String = self.buf[first..stop].iter().collect();
        let statement = Statement::new(text.trim_end(), terminated, self.line_at(first));
        log::debug!("line {}: statement {:?}", statement.line, statement.text);

        self.start = stop;
        self.code = false;
        self.compact();
        statement
    }

    /// Drops the text before the pending statement from the buffer.
    fn compact(&mut self) {
        self.line = self.line_at(self.start);
        self.buf.drain(..self.start);
        self.pos -= self.start.min(self.pos);
        self.start = 0;
    }
}

#[cfg(test)]
mod tests;
