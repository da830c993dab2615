/* sqlscan - context-sensitive scanning of interactive SQL input.
 * Copyright (C) 2023 Free Software Foundation, Inc.
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <http://www.gnu.org/licenses/>. */

use std::io::{Write, stdin, stdout};

use anyhow::Result;
use clap::Args;
use sqlscan::{
    lex::{Item, StatementScanner, cursor::starts_with_help},
    settings::Settings,
};

const HELP: &str = "\
Type SQL statements terminated by `;`.  Statements may span lines.
Meta-commands start with a backslash:
  \\q     quit
  \\r     reset the statement buffer
Any other meta-command is echoed with its arguments.";

/// Read SQL interactively and echo each statement and meta-command.
#[derive(Args, Clone, Debug)]
pub struct Repl {
    /// Don't print prompts.
    #[arg(long, short)]
    quiet: bool,
}

impl Repl {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let mut scanner = StatementScanner::new(settings);
        let stdin = stdin();
        let mut stdout = stdout();
        let mut buffer = String::new();
        loop {
            if !self.quiet {
                write!(stdout, "{}{} ", settings.prompt_name, scanner.prompt().marker())?;
                stdout.flush()?;
            }

            buffer.clear();
            if stdin.read_line(&mut buffer)? == 0 {
                break;
            }
            let line = buffer.trim_end_matches(['\n', '\r']);

            let chars: Vec<char> = line.chars().collect();
            if settings.help_on_empty_buffer
                && scanner.is_empty()
                && starts_with_help(&chars, 0, chars.len())
            {
                writeln!(stdout, "{HELP}")?;
                continue;
            }

            scanner.push_line(line);
            while let Ok(item) = scanner.next_item() {
                match item {
                    Item::Command(command) if command.is_empty() => {
                        writeln!(stdout, "Missing meta-command name after `\\`.")?
                    }
                    Item::Command(command) if command.name == "q" => return Ok(()),
                    Item::Command(command) if command.name == "r" => {
                        scanner.reset();
                        writeln!(stdout, "Statement buffer reset.")?;
                    }
                    Item::Command(command) => writeln!(stdout, "meta-command: {command}")?,
                    Item::Statement(statement) => {
                        writeln!(stdout, "statement: {}", statement.text)?
                    }
                }
            }
        }

        if let Some(Item::Statement(statement)) = scanner.finish() {
            writeln!(stdout, "unterminated statement: {}", statement.text)?;
        }
        Ok(())
    }
}
