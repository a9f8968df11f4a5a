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
//! Reads words back out of a generated listing or header.
mod lexer;

use crate::Word;
use lexer::Token;
use logos::Logos;
use std::ops::Range;

#[derive(Debug, PartialEq, Eq)]
pub struct Error(pub String, pub Range<usize>);

impl Error {
    fn new(message: impl ToString, span: &Range<usize>) -> Self {
        Self(message.to_string(), span.clone())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {:?}", self.0, self.1)
    }
}

impl std::error::Error for Error {}

/// Extracts the `0x` literals from a `.out`, `.h` or `.hpp` file.
///
/// If the source has a `{`, only the literals inside the first braced
/// initialiser count. Otherwise the whole source must be literals.
pub fn parse(source: &str) -> Result<Vec<Word>, Error> {
    let mut lexer = Token::lexer(source);
    let mut spanned = vec![];
    while let Some(res) = lexer.next() {
        match res {
            Ok(token) => spanned.push((token, lexer.span())),
            Err(()) => Err(Error::new(
                format!("lex: unexpected {:?}", lexer.slice()),
                &lexer.span(),
            ))?,
        }
    }

    let mut tokens = spanned.into_iter();
    let braced = source.contains('{');
    if braced {
        for (token, _) in &mut tokens {
            if token == Token::BraceOpen {
                break;
            }
        }
    }

    let mut words = vec![];
    for (token, span) in &mut tokens {
        match token {
            Token::Hex(word) => words.push(word),
            Token::BraceClose if braced => return Ok(words),
            Token::Comment(_) if !braced => {}
            token => Err(Error::new(format!("unexpected {token:?}"), &span))?,
        }
    }

    if braced {
        return Err(Error::new("unterminated initialiser", &(source.len()..source.len())));
    }
    Ok(words)
}
