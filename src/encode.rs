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
use crate::{conv::WORD_LEN, ident::Symbols, Word, VERSION};
use smallvec::SmallVec;
use std::io::{self, Write};

/// The kinds of file a conversion can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// A flat list of literals.
    PlainText,
    CHeader,
    CppHeader,
}

impl Target {
    pub fn extension(self) -> &'static str {
        match self {
            Self::PlainText => "out",
            Self::CHeader => "h",
            Self::CppHeader => "hpp",
        }
    }

    fn prologue(self, symbols: &Symbols, word_count: usize) -> String {
        let Symbols { size, array } = symbols;
        let bytes = word_count * WORD_LEN;
        match self {
            Self::PlainText => String::new(),
            Self::CHeader => format!(
                "// Generated by {VERSION}\n\
                 #pragma once\n\
                 \n\
                 #include <stdint.h>\n\
                 \n\
                 static const uint32_t {size} = {bytes};\n\
                 static const uint32_t {array}[] = {{\n    "
            ),
            Self::CppHeader => format!(
                "// Generated by {VERSION}\n\
                 #pragma once\n\
                 \n\
                 #include <array>\n\
                 #include <cstdint>\n\
                 \n\
                 constexpr uint32_t {size} = {bytes};\n\
                 constexpr std::array<uint32_t, {word_count}> {array} = {{\n    "
            ),
        }
    }

    fn line_break(self) -> &'static str {
        match self {
            Self::PlainText => "\n",
            Self::CHeader | Self::CppHeader => "\n    ",
        }
    }

    fn epilogue(self) -> &'static str {
        match self {
            Self::PlainText => "",
            Self::CHeader | Self::CppHeader => "\n};",
        }
    }
}

/// A write to one of the outputs failed.
#[derive(Debug)]
pub struct SinkError {
    pub target: Target,
    pub source: io::Error,
}

struct Sink<W> {
    target: Target,
    out: W,
}

/// Writes one word list to several outputs in a single pass.
///
/// All outputs share one column counter, so every output wraps after the
/// same word.
pub struct Encoder<W: Write> {
    sinks: SmallVec<[Sink<W>; 3]>,
    symbols: Symbols,
    items_per_line: usize,
    column: usize,
}

impl<W: Write> Encoder<W> {
    pub fn new(symbols: Symbols, items_per_line: usize) -> Self {
        assert!(items_per_line > 0, "items_per_line must be non-zero");
        Self {
            sinks: SmallVec::new(),
            symbols,
            items_per_line,
            column: 0,
        }
    }

    pub fn add_sink(&mut self, target: Target, out: W) {
        self.sinks.push(Sink { target, out });
    }

    pub fn targets(&self) -> impl Iterator<Item = Target> + '_ {
        self.sinks.iter().map(|sink| sink.target)
    }

    /// Writes every word to every sink, then closes them all.
    ///
    /// On failure the remaining sinks are still closed, and the first error
    /// is returned.
    pub fn encode(mut self, words: &[Word]) -> Result<SmallVec<[W; 3]>, SinkError> {
        let written = self
            .begin(words.len())
            .and_then(|()| words.iter().try_for_each(|&word| self.push(word)));

        match written {
            Ok(()) => self.finish(),
            Err(error) => {
                let _ = self.finish();
                Err(error)
            }
        }
    }

    /// Writes each sink's prologue.
    pub fn begin(&mut self, word_count: usize) -> Result<(), SinkError> {
        let symbols = &self.symbols;
        for sink in self.sinks.iter_mut() {
            let prologue = sink.target.prologue(symbols, word_count);
            sink.write(prologue.as_bytes())?;
        }
        Ok(())
    }

    pub fn push(&mut self, word: Word) -> Result<(), SinkError> {
        let literal = format!("0x{word:08X}, ");
        for sink in self.sinks.iter_mut() {
            sink.write(literal.as_bytes())?;
        }

        self.column += 1;
        if self.column == self.items_per_line {
            self.column = 0;
            for sink in self.sinks.iter_mut() {
                let line_break = sink.target.line_break();
                sink.write(line_break.as_bytes())?;
            }
        }
        Ok(())
    }

    /// Writes each sink's epilogue and flushes it.
    ///
    /// Every sink is closed even if an earlier one failed.
    pub fn finish(self) -> Result<SmallVec<[W; 3]>, SinkError> {
        let mut first_error = None;
        let mut outs = SmallVec::new();
        for mut sink in self.sinks {
            let closed = sink
                .write(sink.target.epilogue().as_bytes())
                .and_then(|()| sink.flush());
            match closed {
                Ok(()) => outs.push(sink.out),
                Err(error) => {
                    first_error.get_or_insert(error);
                }
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(outs),
        }
    }
}

impl<W: Write> Sink<W> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.out.write_all(bytes).map_err(|source| SinkError {
            target: self.target,
            source,
        })
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.out.flush().map_err(|source| SinkError {
            target: self.target,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols() -> Symbols {
        Symbols::new("shader_frag")
    }

    fn encode_to_strings(targets: &[Target], words: &[Word]) -> Vec<String> {
        let mut encoder = Encoder::new(symbols(), 8);
        for &target in targets {
            encoder.add_sink(target, Vec::new());
        }
        encoder
            .encode(words)
            .unwrap()
            .into_iter()
            .map(|out| String::from_utf8(out).unwrap())
            .collect()
    }

    /// Strips a header down to the literals between the braces.
    fn body(header: &str) -> &str {
        let start = header.find("= {\n    ").unwrap() + "= {\n    ".len();
        let end = header.rfind("\n};").unwrap();
        &header[start..end]
    }

    #[test]
    fn plain_text_wraps_after_eight() {
        let words: Vec<Word> = (0..10).collect();
        let out = encode_to_strings(&[Target::PlainText], &words);
        assert_eq!(
            out[0],
            "0x00000000, 0x00000001, 0x00000002, 0x00000003, \
             0x00000004, 0x00000005, 0x00000006, 0x00000007, \n\
             0x00000008, 0x00000009, "
        );
    }

    #[test]
    fn literal_width_and_case() {
        let out = encode_to_strings(&[Target::PlainText], &[0, u32::MAX, 0xabc]);
        assert_eq!(out[0], "0x00000000, 0xFFFFFFFF, 0x00000ABC, ");

        for literal in out[0].split(", ").filter(|s| !s.is_empty()) {
            let digits = literal.strip_prefix("0x").unwrap();
            assert_eq!(digits.len(), 8);
            assert!(digits
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        }
    }

    #[test]
    fn c_header() {
        let out = encode_to_strings(&[Target::CHeader], &[0x07230203, 0x00010000]);
        assert_eq!(
            out[0],
            format!(
                "// Generated by {VERSION}\n\
                 #pragma once\n\
                 \n\
                 #include <stdint.h>\n\
                 \n\
                 static const uint32_t vk_shader_frag_size = 8;\n\
                 static const uint32_t vk_shader_frag[] = {{\n    \
                 0x07230203, 0x00010000, \n}};"
            )
        );
    }

    #[test]
    fn cpp_header_sized_by_word_count() {
        let out = encode_to_strings(&[Target::CppHeader], &[1, 2, 3, 4]);
        assert!(out[0].contains("#include <array>\n#include <cstdint>\n"));
        assert!(out[0].contains("constexpr uint32_t vk_shader_frag_size = 16;\n"));
        assert!(out[0].contains("constexpr std::array<uint32_t, 4> vk_shader_frag = {\n    "));
        assert!(out[0]
            .ends_with("= {\n    0x00000001, 0x00000002, 0x00000003, 0x00000004, \n};"));
    }

    #[test]
    fn every_sink_wraps_on_the_same_word() {
        let words: Vec<Word> = (0..20).collect();
        let out = encode_to_strings(
            &[Target::PlainText, Target::CHeader, Target::CppHeader],
            &words,
        );
        assert_eq!(out.len(), 3);

        let plain_lines: Vec<&str> = out[0].split('\n').collect();
        for header in &out[1..] {
            let header_lines: Vec<&str> = body(header).split("\n    ").collect();
            assert_eq!(header_lines, plain_lines);
        }

        assert_eq!(plain_lines.len(), 3);
        for (n, line) in plain_lines.iter().enumerate() {
            let items = line.matches("0x").count();
            assert_eq!(items, if n < 2 { 8 } else { 4 });
        }
    }

    #[test]
    fn full_last_line_still_breaks() {
        let words: Vec<Word> = (0..8).collect();
        let out = encode_to_strings(&[Target::PlainText, Target::CHeader], &words);
        assert!(out[0].ends_with("0x00000007, \n"));
        assert!(out[1].ends_with("0x00000007, \n    \n};"));
    }

    #[derive(Default)]
    struct Flaky {
        fail: bool,
        buffer: Vec<u8>,
        flushed: bool,
    }

    impl Write for Flaky {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail {
                return Err(io::Error::other("disk full"));
            }
            self.buffer.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushed = true;
            Ok(())
        }
    }

    #[test]
    fn failing_sink_reports_its_target() {
        let mut encoder = Encoder::new(symbols(), 8);
        encoder.add_sink(Target::PlainText, Flaky::default());
        encoder.add_sink(
            Target::CHeader,
            Flaky {
                fail: true,
                ..Default::default()
            },
        );

        let error = encoder.encode(&[1, 2, 3]).map(|_| ()).unwrap_err();
        assert_eq!(error.target, Target::CHeader);
        assert_eq!(error.source.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn finish_closes_every_sink() {
        let mut encoder = Encoder::new(symbols(), 8);
        encoder.add_sink(
            Target::CppHeader,
            Flaky {
                fail: true,
                ..Default::default()
            },
        );
        encoder.add_sink(Target::CHeader, Flaky::default());

        // Skip the prologues so only the epilogue write can fail.
        let error = encoder.finish().map(|_| ()).unwrap_err();
        assert_eq!(error.target, Target::CppHeader);
    }

    #[test]
    fn finish_flushes_healthy_sinks() {
        let mut encoder = Encoder::new(symbols(), 8);
        encoder.add_sink(Target::CHeader, Flaky::default());
        encoder.add_sink(Target::PlainText, Flaky::default());
        assert_eq!(
            encoder.targets().collect::<Vec<_>>(),
            vec![Target::CHeader, Target::PlainText]
        );

        let outs = encoder.finish().unwrap();
        assert!(outs.iter().all(|out| out.flushed));
        assert_eq!(outs[0].buffer, b"\n};");
        assert!(outs[1].buffer.is_empty());
    }
}
