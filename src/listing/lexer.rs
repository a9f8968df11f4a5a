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
use logos::{Lexer, Logos};

#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n\f,]+")]
pub enum Token<'source> {
    #[regex("0x[0-9a-fA-F]{1,8}", lex_hex)]
    Hex(u32),

    #[regex("[0-9]+", |lexer| lexer.slice().parse().ok())]
    Number(u64),

    #[regex("[a-zA-Z_][a-zA-Z0-9_:]*", |lexer| lexer.slice())]
    Ident(&'source str),

    #[regex("#[^\n]*", |lexer| lexer.slice())]
    Directive(&'source str),

    #[regex("//[^\n]*", |lexer| &lexer.slice()[2..])]
    Comment(&'source str),

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("<")]
    AngleOpen,

    #[token(">")]
    AngleClose,

    #[token("=")]
    Assign,

    #[token(";")]
    Semicolon,
}

fn lex_hex<'source>(lex: &mut Lexer<'source, Token<'source>>) -> Option<u32> {
    u32::from_str_radix(&lex.slice()[2..], 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_tokens() {
        let tokens: Vec<_> = Token::lexer("constexpr std::array<uint32_t, 4> vk_x = {\n    0x0000000A, ")
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("constexpr"),
                Token::Ident("std::array"),
                Token::AngleOpen,
                Token::Ident("uint32_t"),
                Token::Number(4),
                Token::AngleClose,
                Token::Ident("vk_x"),
                Token::Assign,
                Token::BraceOpen,
                Token::Hex(10),
            ]
        );
    }
}
