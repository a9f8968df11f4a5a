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
use vkshaderconv::{args, Command, Error, VERSION};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = match args::parse(std::env::args()) {
        Ok(command) => command,
        Err(error) => fail(error),
    };

    match command {
        Command::Help => print!("{}", args::HELP),
        Command::Version => println!("{VERSION}"),
        Command::Convert(config) => match vkshaderconv::run(&config) {
            Ok(report) => log::debug!(
                "converted {} words into {} file(s)",
                report.words,
                report.files.len()
            ),
            Err(error) => fail(error),
        },
    }
}

fn fail(error: Error) -> ! {
    println!("{error}");
    if let Some(source) = std::error::Error::source(&error) {
        log::debug!("caused by: {source}");
    }
    std::process::exit(error.exit_code());
}
