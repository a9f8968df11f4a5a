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
//! Naming of the generated files and of the symbols inside them.

/// Tag on every symbol the headers define.
pub const PREFIX: &str = "vk";

/// Strips the extension (everything from the last `.`) off an input path.
///
/// This is a plain string operation: a `.` in a directory name counts too.
pub fn strip_extension(input: &str) -> &str {
    match input.rfind('.') {
        Some(pos) => &input[..pos],
        None => input,
    }
}

/// The base path, without extension, that all outputs are written next to.
pub fn output_base<'a>(input: &'a str, output: Option<&'a str>) -> &'a str {
    output.unwrap_or_else(|| strip_extension(input))
}

/// Derives a variable name from an output base path.
///
/// Directories are removed for both `/` and `\` separators, on every
/// platform, and each `.` becomes `_`.
pub fn identifier(base: &str) -> String {
    let name = base.rsplit('/').next().unwrap_or(base);
    let name = name.rsplit('\\').next().unwrap_or(name);
    name.replace('.', "_")
}

/// The symbol names a header declares: the byte size constant and the array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbols {
    pub size: String,
    pub array: String,
}

impl Symbols {
    pub fn new(identifier: &str) -> Self {
        let array = format!("{PREFIX}_{identifier}");
        Self {
            size: format!("{array}_size"),
            array,
        }
    }
}
