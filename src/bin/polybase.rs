/*
 * Copyright (C) 2026 The polybase developers
 *
 * This file is part of polybase.
 *
 * polybase is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * polybase is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with polybase. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{stdin, stdout, BufReader, BufWriter, Read, Stdout, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use polybase::bech32::{Bech32, Bech32Config, BECH32, BECH32M};
use polybase::registry;

/// Encodes or decodes data from FILE and writes the result to standard
/// output. If FILE is missing or "-", the data is read from standard input.
#[derive(Parser, Debug)]
#[command(name = "polybase", version, about, long_about = None)]
struct Cli {
    /// Decode data instead of encoding
    #[arg(short, long)]
    decode: bool,

    /// Encoding to use (see --list)
    #[arg(short, long, value_name = "ENCODING", default_value = "base64")]
    encoding: String,

    /// Human-readable prefix for bech32 and bech32m output
    #[arg(long, value_name = "HRP")]
    prefix: Option<String>,

    /// Maximum length of bech32 strings
    #[arg(long, value_name = "N", conflicts_with = "no_limit")]
    limit: Option<usize>,

    /// Don't limit the length of bech32 strings
    #[arg(long)]
    no_limit: bool,

    /// List available encodings and exit
    #[arg(long)]
    list: bool,

    /// Input file
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

#[macro_use]
mod error_exit {
    use super::{exit, Display};

    macro_rules! error_exit {
        ($($args:tt)*) => {
            crate::error_exit::__run(format_args!($($args)*))
        };
    }

    #[doc(hidden)]
    pub fn __run(args: impl Display) -> ! {
        eprintln!("error: {}", args);
        if cfg!(feature = "cli-panic") {
            panic!("error: {}", args);
        } else {
            exit(1);
        }
    }
}

fn expect<T, E: Debug>(result: Result<T, E>, msg: impl Display) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("error: {}", msg);
        if cfg!(feature = "cli-panic") {
            panic!("error: {}: {:?}", msg, e);
        } else {
            exit(1);
        }
    })
}

fn flush_stdout(writer: &mut BufWriter<Stdout>) {
    expect(writer.flush(), "could not write to standard output");
}

fn write_output(data: &[u8]) {
    let mut writer = BufWriter::new(stdout());
    expect(writer.write_all(data), "could not write to standard output");
    flush_stdout(&mut writer);
}

fn read_input(stream: impl Read) -> Vec<u8> {
    let mut input = Vec::new();
    let mut reader = BufReader::new(stream);
    expect(reader.read_to_end(&mut input), "could not read input");
    input
}

fn input_text(input: &[u8]) -> &str {
    match std::str::from_utf8(input) {
        Ok(s) => s.trim(),
        Err(e) => error_exit!("input is not valid text: {}", e),
    }
}

fn bech32_variant(name: &str) -> Option<&'static Bech32> {
    match name {
        "bech32" => Some(&BECH32),
        "bech32m" => Some(&BECH32M),
        _ => None,
    }
}

fn bech32_config(cli: &Cli) -> Bech32Config {
    let mut config = Bech32Config::new();
    if cli.no_limit {
        config.limit = None;
    } else if let Some(limit) = cli.limit {
        config.limit = Some(limit);
    }
    config
}

fn run_bech32(cli: &Cli, bech32: &Bech32, input: &[u8]) {
    let config = bech32_config(cli);
    if cli.decode {
        let decoded = bech32
            .decode_with(input_text(input), config)
            .and_then(|d| bech32.from_words(&d.words));
        match decoded {
            Ok(bytes) => write_output(&bytes),
            Err(e) => {
                error_exit!("input is not valid {} data: {}", cli.encoding, e)
            }
        }
        return;
    }
    let prefix = match &cli.prefix {
        Some(prefix) => prefix,
        None => error_exit!("--prefix is required to encode {}", cli.encoding),
    };
    let encoded = bech32
        .to_words(input)
        .and_then(|words| bech32.encode_with(prefix, &words, config));
    match encoded {
        Ok(s) => write_output(format!("{}\n", s).as_bytes()),
        Err(e) => error_exit!("could not encode {}: {}", cli.encoding, e),
    }
}

fn run(cli: &Cli, input: &[u8]) {
    if let Some(bech32) = bech32_variant(&cli.encoding) {
        return run_bech32(cli, bech32, input);
    }
    let coder = match registry::lookup(&cli.encoding) {
        Ok(coder) => coder,
        Err(e) => error_exit!("{}", e),
    };
    if cli.decode {
        match coder.decode(input_text(input)) {
            Ok(bytes) => write_output(&bytes),
            Err(e) => {
                error_exit!("input is not valid {} data: {}", cli.encoding, e)
            }
        }
    } else {
        match coder.encode(input) {
            Ok(s) => write_output(format!("{}\n", s).as_bytes()),
            Err(e) => error_exit!("could not encode {}: {}", cli.encoding, e),
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        let mut names: Vec<_> = registry::names().collect();
        names.extend(["bech32", "bech32m"]);
        write_output(format!("{}\n", names.join("\n")).as_bytes());
        return;
    }

    let input = match cli.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).unwrap_or_else(|e| {
                error_exit!("could not open file '{}': {}", path.display(), e);
            });
            read_input(file)
        }
        _ => read_input(stdin()),
    };
    log::debug!("read {} bytes of input", input.len());
    run(&cli, &input);
}
