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

#![no_main]

use libfuzzer_sys::fuzz_target;
use sqlscan::lex::{
    read_block_comment, read_command, read_dollar_tag, read_string, Quote, ScannerState,
};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let buf: Vec<char> = input.chars().collect();
        let end = buf.len();
        for quote in [Quote::None, Quote::Double, Quote::Dollar(String::from("t"))] {
            let mut state = ScannerState::new(true);
            state.open(quote);
            if let Ok(pos) = read_string(&buf, 0, end, &state) {
                assert!(pos < end);
            }
        }
        if let Ok(pos) = read_block_comment(&buf, 0, end) {
            assert_eq!(&buf[pos - 1..=pos], ['*', '/']);
        }
        for i in (0..end).filter(|&i| buf[i] == '$') {
            if let Ok((_, pos)) = read_dollar_tag(&buf, i, end) {
                assert_eq!(buf[pos], '$');
            }
        }
        for i in (0..end).filter(|&i| buf[i] == '\\') {
            let (_, next) = read_command(&buf, i, end);
            assert!(next > i && next <= end);
        }
    }
});
