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

//! Bounded character access over a window `[i, end)` of a character buffer.
//!
//! Every function here accepts any `i` and reads nothing at or beyond `end`.
//! The caller guarantees `end <= buf.len()`.

use unicase::UniCase;

/// Returns the character at `i`, or `None` if `i` is at or past `end`.
pub fn char_at(buf: &[char], i: usize, end: usize) -> Option<char> {
    if i < end { Some(buf[i]) } else { None }
}

/// Returns the position of the first whitespace character in `[i, end)`.
pub fn find_space(buf: &[char], i: usize, end: usize) -> Option<usize> {
    (i..end).find(|&j| buf[j].is_whitespace())
}

/// Returns the position of the first non-whitespace character in `[i, end)`.
pub fn find_non_space(buf: &[char], i: usize, end: usize) -> Option<usize> {
    (i..end).find(|&j| !buf[j].is_whitespace())
}

/// Returns true if `[i, end)` is empty or contains only whitespace.
pub fn is_empty_line(buf: &[char], i: usize, end: usize) -> bool {
    find_non_space(buf, i, end).is_none()
}

/// Splits `[i, end)` into whitespace-delimited tokens.
///
/// Quotes have no special meaning: `'a b'` yields `'a` and `b'`.
pub fn tokenize(buf: &[char], mut i: usize, end: usize) -> Vec<String> {
    let mut tokens = Vec::new();
    while let Some(start) = find_non_space(buf, i, end) {
        let stop = find_space(buf, start, end).unwrap_or(end);
        tokens.push(buf[start..stop].iter().collect());
        i = stop;
    }
    tokens
}

/// Returns true if `[i, end)`, after leading whitespace, begins with `help`
/// in any case.
///
/// Only four characters are compared, so `helper` counts.
pub fn starts_with_help(buf: &[char], i: usize, end: usize) -> bool {
    let Some(start) = find_non_space(buf, i, end) else {
        return false;
    };
    if end - start < 4 {
        return false;
    }
    let word: String = buf[start..start + 4].iter().collect();
    UniCase::new(word.as_str()) == UniCase::new("help")
}
