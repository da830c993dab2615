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

use crate::lex::Quote;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum PromptStyle {
    /// First line of a statement.
    First,

    /// Second or later line of a statement.
    Later,

    /// Inside `'...'`.
    SingleQuote,

    /// Inside `"..."`.
    DoubleQuote,

    /// Inside `$tag$...$tag$`.
    DollarQuote,

    /// Inside `/* ... */`.
    Comment,
}

impl PromptStyle {
    /// Returns the style for continuing inside `quote`, or `None` if no
    /// quote is open.
    pub fn for_quote(quote: &Quote) -> Option<Self> {
        match quote {
            Quote::None => None,
            Quote::Single => Some(Self::SingleQuote),
            Quote::Double => Some(Self::DoubleQuote),
            Quote::Dollar(_) => Some(Self::DollarQuote),
        }
    }

    /// Returns the marker that follows the prompt name, as in `mydb=>`.
    pub fn marker(&self) -> &'static str {
        match self {
            PromptStyle::First => "=>",
            PromptStyle::Later => "->",
            PromptStyle::SingleQuote => "'>",
            PromptStyle::DoubleQuote => "\">",
            PromptStyle::DollarQuote => "$>",
            PromptStyle::Comment => "*>",
        }
    }
}
