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
use crate::Word;

pub const WORD_LEN: usize = std::mem::size_of::<Word>();

/// How the bytes of each word are laid out in the input file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Whatever the host uses. Output produced this way is only reproducible
    /// on hosts of the same endianness.
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    #[inline]
    pub fn decode(self, bytes: [u8; WORD_LEN]) -> Word {
        match self {
            Self::Native => Word::from_ne_bytes(bytes),
            Self::Little => Word::from_le_bytes(bytes),
            Self::Big => Word::from_be_bytes(bytes),
        }
    }

    #[inline]
    pub fn encode(self, word: Word) -> [u8; WORD_LEN] {
        match self {
            Self::Native => word.to_ne_bytes(),
            Self::Little => word.to_le_bytes(),
            Self::Big => word.to_be_bytes(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Misaligned(pub usize);

/// Converts a byte slice to words.
///
/// Fails if the byte slice is not a multiple of 4 bytes in length.
pub fn bytes_to_words(bytes: &[u8], order: ByteOrder) -> Result<Vec<Word>, Misaligned> {
    if bytes.len().rem_euclid(WORD_LEN) != 0 {
        return Err(Misaligned(bytes.len()));
    }

    let mut chunks = bytes.chunks_exact(WORD_LEN);
    let words = (&mut chunks)
        .map(|word| order.decode([word[0], word[1], word[2], word[3]]))
        .collect();
    debug_assert!(chunks.remainder().is_empty());
    Ok(words)
}

pub fn words_to_bytes(words: &[Word], order: ByteOrder) -> Vec<u8> {
    words.iter().flat_map(|&word| order.encode(word)).collect()
}
