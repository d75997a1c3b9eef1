// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use crate::convert::{convert, Destination};
use crate::{BitWidth, Format, Options};

/// Converts a binary file into one line of '0'/'1' characters per byte, for
/// seeding memory blocks in HDL simulations.
#[derive(Debug, Parser)]
#[clap(
    name = env!("CARGO_CRATE_NAME"),
    version,
    override_usage = "bin2txt [-coe] [-<width>] <FILE>"
)]
pub struct App {
    /// Write a Xilinx COE memory initialization file (also `-coe`)
    #[clap(long)]
    coe: bool,

    /// Number of high bits of each byte to emit, 1-8 (also `-<width>`)
    #[clap(
        long,
        short,
        value_parser = BitWidth::from_str,
        default_value_t = BitWidth::DEFAULT,
        overrides_with = "width"
    )]
    width: BitWidth,

    /// Output file (default: the input name with .txt or .coe appended)
    #[clap(long, short, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Write to the console instead of a file
    #[clap(long)]
    stdout: bool,

    /// Verbosity level (can be specified multiple times)
    #[clap(long, short, action = ArgAction::Count)]
    verbose: u8,

    /// The binary file to convert
    file: PathBuf,
}

impl App {
    pub fn options(&self) -> Options {
        let format = if self.coe { Format::Coe } else { Format::Text };
        Options::new(self.width, format)
    }

    pub fn destination(&self) -> Destination {
        match (&self.output, self.stdout) {
            (_, true) => Destination::Stdout,
            (Some(path), false) => Destination::Path(path.clone()),
            (None, false) => Destination::Derived,
        }
    }
}

const PASSTHROUGH: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Rewrites the traditional `bin2txt [-coe] [-<width>] <file>` form into
/// arguments clap understands.
///
/// Everything between the program name and the last argument is an option
/// slot: `-coe` becomes `--coe` and `-<digits>` becomes `--width=<digits>`.
/// The last argument is always the file, even when it looks like an option,
/// so a `--` is placed in front of it.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() < 2 {
        return args;
    }

    let file = args.pop().unwrap_or_default();
    let mut normalized: Vec<OsString> = args
        .into_iter()
        .enumerate()
        .map(|(i, arg)| if i == 0 { arg } else { normalize_option(arg) })
        .collect();

    if !file.to_str().is_some_and(|f| PASSTHROUGH.contains(&f)) {
        normalized.push("--".into());
    }
    normalized.push(file);

    normalized
}

fn normalize_option(arg: OsString) -> OsString {
    let rewritten = match arg.to_str() {
        Some("-coe") => Some("--coe".to_string()),
        Some(s) => s
            .strip_prefix('-')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .map(|digits| format!("--width={}", digits)),
        None => None,
    };

    rewritten.map(OsString::from).unwrap_or(arg)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_env(Env::new().filter("BIN2TXT_LOG"))
        .init();
}

pub fn main() {
    let args = App::parse_from(normalize_args(std::env::args_os()));
    init_logging(args.verbose);

    let options = args.options();
    if let Err(e) = convert(&args.file, &args.destination(), &options) {
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }
}
