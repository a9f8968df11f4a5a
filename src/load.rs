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
use crate::{
    conv::{self, ByteOrder, Misaligned, WORD_LEN},
    Error, Word,
};
use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::Path,
};

/// Reads a whole file of 32-bit words into memory.
///
/// The file must be non-empty and a multiple of 4 bytes long. The handle is
/// closed before this returns, whichever way it returns.
pub fn load_words(path: impl AsRef<Path>, order: ByteOrder) -> Result<Vec<Word>, Error> {
    let path = path.as_ref();
    let read_error = |source: std::io::Error| Error::Read {
        path: path.to_owned(),
        source,
    };

    let mut file = File::open(path).map_err(|source| Error::Open {
        path: path.to_owned(),
        source,
    })?;

    let len = file.seek(SeekFrom::End(0)).map_err(read_error)?;
    if len == 0 {
        return Err(Error::Empty {
            path: path.to_owned(),
        });
    }
    if len % WORD_LEN as u64 != 0 {
        return Err(Error::Alignment {
            path: path.to_owned(),
            len,
        });
    }

    file.seek(SeekFrom::Start(0)).map_err(read_error)?;
    let mut bytes = vec![0; len as usize];
    file.read_exact(&mut bytes).map_err(read_error)?;
    drop(file);

    log::debug!("read {len} bytes from {}", path.display());

    conv::bytes_to_words(&bytes, order).map_err(|Misaligned(len)| Error::Alignment {
        path: path.to_owned(),
        len: len as u64,
    })
}
