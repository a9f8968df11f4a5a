// Copyright (C) 2025 Thom Hayward.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use crate::{conv::ByteOrder, Error};

/// Words written per line in every output.
pub const ITEMS_PER_LINE: usize = 8;

pub const HELP: &str = "
This program takes in a file, and prints the binary data in
an unsigned integer format so that it can be pasted in source code
for use.

Usage: vkshaderconv [option]... [file]

  -o <file>  Base name of the generated files, rather than the input
             file name with its extension removed.
  --ch       Also generate a C header, '<file>.h'.
  --cpph     Also generate a C++ header, '<file>.hpp'.
  --le       Read the input as little-endian words.
  --be       Read the input as big-endian words.

  --help     Display this help and exit.
  --version  Output version information and exit.

Set RUST_LOG=debug for a trace of each step on stderr.
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: String,
    /// Output base name, without extension.
    pub output: Option<String>,
    pub c_header: bool,
    pub cpp_header: bool,
    pub byte_order: ByteOrder,
    pub items_per_line: usize,
}

impl Config {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: None,
            c_header: false,
            cpp_header: false,
            byte_order: ByteOrder::default(),
            items_per_line: ITEMS_PER_LINE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Convert(Config),
}

/// Interprets a full argument list, program name included.
///
/// Every token is checked for flags, including the value following `-o` and
/// the program name. The last token is always the input file, whatever else
/// it matched.
pub fn parse<I, S>(args: I) -> Result<Command, Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.len() < 2 {
        return Err(Error::Usage);
    }

    let mut config = Config::new(args[args.len() - 1].clone());
    for (index, arg) in args.iter().enumerate() {
        match arg.as_str() {
            "--help" => return Ok(Command::Help),
            "--version" => return Ok(Command::Version),
            "-o" => {
                if let Some(value) = args.get(index + 1) {
                    config.output = Some(value.clone());
                }
            }
            "--ch" => config.c_header = true,
            "--cpph" => config.cpp_header = true,
            "--le" => config.byte_order = ByteOrder::Little,
            "--be" => config.byte_order = ByteOrder::Big,
            _ => {}
        }
    }

    Ok(Command::Convert(config))
}
