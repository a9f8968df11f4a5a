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
use std::{io, path::PathBuf};

/// Everything that can stop a conversion.
///
/// All of these are terminal: the binaries print the message and exit with
/// [`Error::exit_code`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("vkshaderconv: no file given.")]
    Usage,

    #[error("vkshaderconv: could not open file: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("vkshaderconv: {}: file is empty.", .path.display())]
    Empty { path: PathBuf },

    #[error("vkshaderconv: {}: file content is not a multiple of 4 ({len} bytes).", .path.display())]
    Alignment { path: PathBuf, len: u64 },

    #[error("vkshaderconv: {}: error reading file.", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("vkshaderconv: {}: error writing file.", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[cfg(feature = "listing")]
    #[error("{}: {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: crate::listing::Error,
    },
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        1
    }
}
