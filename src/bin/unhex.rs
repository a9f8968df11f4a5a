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
use std::path::{Path, PathBuf};
use vkshaderconv::{conv, listing, ByteOrder, Error};

const USAGE: &str = "Usage: unhex [-o <file>] [--le|--be] <listing>";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut output = None;
    let mut input = None;
    let mut order = ByteOrder::Native;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--out" => match args.next() {
                Some(path) => output = Some(PathBuf::from(path)),
                None => usage(),
            },
            "--le" => order = ByteOrder::Little,
            "--be" => order = ByteOrder::Big,
            "--help" => {
                println!("{USAGE}");
                return;
            }
            _ => input = Some(PathBuf::from(arg)),
        }
    }

    let Some(input) = input else { usage() };
    let output = output.unwrap_or_else(|| vkshaderconv::with_extension(&input, "spv"));

    match unhex(&input, &output, order) {
        Ok(words) => log::info!("wrote {words} words to {}", output.display()),
        Err(error) => {
            println!("{error}");
            std::process::exit(error.exit_code());
        }
    }
}

fn usage() -> ! {
    println!("{USAGE}");
    std::process::exit(1);
}

fn unhex(input: &Path, output: &Path, order: ByteOrder) -> Result<usize, Error> {
    let source = std::fs::read_to_string(input).map_err(|source| Error::Open {
        path: input.to_owned(),
        source,
    })?;

    let words = listing::parse(&source).map_err(|source| Error::Listing {
        path: input.to_owned(),
        source,
    })?;
    if words.is_empty() {
        return Err(Error::Empty {
            path: input.to_owned(),
        });
    }

    std::fs::write(output, conv::words_to_bytes(&words, order)).map_err(|source| {
        Error::Write {
            path: output.to_owned(),
            source,
        }
    })?;
    Ok(words.len())
}
