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
pub mod args;
pub mod conv;
pub mod encode;
mod error;
pub mod ident;
#[cfg(feature = "listing")]
pub mod listing;
pub mod load;

pub use args::{Command, Config};
pub use conv::ByteOrder;
pub use encode::{Encoder, Target};
pub use error::Error;
pub use ident::Symbols;

use smallvec::SmallVec;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

pub type Word = u32;

pub const VERSION: &str = concat!(
    "Vulkan Shader Binary Converter ",
    env!("CARGO_PKG_VERSION")
);

/// What a successful conversion produced.
#[derive(Debug)]
pub struct Report {
    pub words: usize,
    pub files: Vec<PathBuf>,
}

/// The path an output of the given kind is written to.
pub fn output_path(base: &str, target: Target) -> PathBuf {
    PathBuf::from(format!("{base}.{}", target.extension()))
}

/// Converts `config.input` into a plain listing and any requested headers.
///
/// If anything goes wrong after the first output was created, the outputs of
/// this run are deleted again before the error is returned.
pub fn run(config: &Config) -> Result<Report, Error> {
    let words = load::load_words(&config.input, config.byte_order)?;
    log::debug!("loaded {} words from {}", words.len(), config.input);

    let base = ident::output_base(&config.input, config.output.as_deref());
    let symbols = Symbols::new(&ident::identifier(base));
    log::debug!("output base {base:?}, array symbol {}", symbols.array);

    let mut targets: SmallVec<[Target; 3]> = SmallVec::new();
    targets.push(Target::PlainText);
    if config.c_header {
        targets.push(Target::CHeader);
    }
    if config.cpp_header {
        targets.push(Target::CppHeader);
    }

    let mut encoder = Encoder::new(symbols, config.items_per_line);
    let mut files = Vec::with_capacity(targets.len());
    for target in targets {
        let path = output_path(base, target);
        match File::create(&path) {
            Ok(file) => encoder.add_sink(target, BufWriter::new(file)),
            Err(source) => {
                drop(encoder);
                remove_outputs(&files);
                return Err(Error::Open { path, source });
            }
        }
        files.push(path);
    }

    if let Err(error) = encoder.encode(&words) {
        remove_outputs(&files);
        return Err(Error::Write {
            path: output_path(base, error.target),
            source: error.source,
        });
    }

    for file in &files {
        log::info!("wrote {}", file.display());
    }

    Ok(Report {
        words: words.len(),
        files,
    })
}

fn remove_outputs(files: &[PathBuf]) {
    for file in files {
        if let Err(error) = std::fs::remove_file(file) {
            log::warn!("could not remove {}: {error}", file.display());
        }
    }
}

/// Replaces the extension of `path`, keeping everything before its last `.`.
pub fn with_extension(path: &Path, extension: &str) -> PathBuf {
    let path = path.to_string_lossy();
    PathBuf::from(format!("{}.{extension}", ident::strip_extension(&path)))
}
