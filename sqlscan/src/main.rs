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

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sqlscan::settings::Settings;

use crate::{repl::Repl, split::Split};

mod repl;
mod split;

/// sqlscan, a scanner that divides interactive SQL input into statements and
/// meta-commands.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    options: ScanOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Clone, Debug)]
struct ScanOptions {
    /// TOML file with scanner settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Treat `$` as an ordinary character instead of a dollar quote.
    #[arg(long, global = true)]
    no_dollar_quoting: bool,
}

impl ScanOptions {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if self.no_dollar_quoting {
            settings.dollar_quoting = false;
        }
        Ok(settings)
    }
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    Split(Split),
    Repl(Repl),
}

impl Command {
    fn run(self, settings: &Settings) -> Result<()> {
        match self {
            Command::Split(split) => split.run(settings),
            Command::Repl(repl) => repl.run(settings),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = cli.options.settings()?;
    cli.command.run(&settings)
}
