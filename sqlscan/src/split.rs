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

use std::{
    fs::File,
    io::{BufRead, BufReader, Write, stdin, stdout},
    path::PathBuf,
};

use anyhow::{Result, anyhow};
use clap::{Args, ValueEnum};
use sqlscan::{
    lex::{Item, StatementScanner},
    prompt::PromptStyle,
    settings::Settings,
};

/// Divide SQL input into statements and meta-commands.
#[derive(Args, Clone, Debug)]
pub struct Split {
    /// Input file name (if omitted, input is read from stdin).
    input: Option<PathBuf>,

    /// Output file name (if omitted, output is written to stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t = SplitFormat::Text)]
    format: SplitFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SplitFormat {
    /// One item per line, prefixed by its line number.
    Text,

    /// One JSON object per line.
    Ndjson,
}

impl Split {
    pub fn run(self, settings: &Settings) -> Result<()> {
        let input: Box<dyn BufRead> = match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .map_err(|err| anyhow!("{}: open failed ({err})", path.display()))?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(stdin().lock()),
        };
        let mut output: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .map_err(|err| anyhow!("{}: create failed ({err})", path.display()))?,
            ),
            None => Box::new(stdout()),
        };

        let mut scanner = StatementScanner::new(settings);
        for line in input.lines() {
            scanner.push_line(&line?);
            while let Ok(item) = scanner.next_item() {
                self.write_item(&mut *output, &item)?;
            }
        }

        match scanner.prompt() {
            PromptStyle::First | PromptStyle::Later => (),
            prompt => log::warn!("input ended in {prompt:?} state"),
        }
        if let Some(item) = scanner.finish() {
            self.write_item(&mut *output, &item)?;
        }
        output.flush()?;
        Ok(())
    }

    fn write_item(&self, output: &mut dyn Write, item: &Item) -> Result<()> {
        match self.format {
            SplitFormat::Text => match item {
                Item::Statement(statement) if statement.terminated => {
                    writeln!(output, "{}: {}", statement.line, statement.text)?
                }
                Item::Statement(statement) => writeln!(
                    output,
                    "{}: {} (unterminated)",
                    statement.line, statement.text
                )?,
                Item::Command(command) => writeln!(output, "{command}")?,
            },
            SplitFormat::Ndjson => {
                serde_json::to_writer(&mut *output, item)?;
                writeln!(output)?;
            }
        }
        Ok(())
    }
}
