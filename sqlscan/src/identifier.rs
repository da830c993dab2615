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

//! Syntactic shape of dollar-quote tags.

/// Maximum number of characters in a dollar-quote tag.
pub const MAX_TAG_LEN: usize = 128;

/// Character classes for dollar-quote tags.
pub trait TagChar {
    /// Returns true if `self` may be the first character in a dollar-quote
    /// tag.
    fn may_start_tag(self) -> bool;

    /// Returns true if `self` may be a second or subsequent character in a
    /// dollar-quote tag.
    fn may_continue_tag(self) -> bool;
}

impl TagChar for char {
    fn may_start_tag(self) -> bool {
        self.is_ascii_alphabetic()
    }

    fn may_continue_tag(self) -> bool {
        matches!(self, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_')
    }
}

/// Returns true if `tag` may appear between the `$` signs of a dollar quote.
///
/// The empty tag is valid (`$$`).  Otherwise the tag is an ASCII letter
/// followed by up to 127 ASCII letters, digits, or underscores.
pub fn is_dollar_tag(tag: &[char]) -> bool {
    let Some((&first, rest)) = tag.split_first() else {
        return true;
    };
    tag.len() <= MAX_TAG_LEN && first.may_start_tag() && rest.iter().all(|c| c.may_continue_tag())
}
