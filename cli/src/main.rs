// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod error;
mod logger;

use std::{
    fs::File,
    io::{self, stdin, stdout, BufWriter, Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    process::exit,
};

use clex::{
    constants::DEFAULT_CONFIG_FILE,
    tokenize,
    ConfigRoot,
    OutputFormat,
    OverflowPolicy,
    ReaderSource,
    ScanOptions,
    ScanReport,
    TokenizeError,
    TraceWriter,
};
use colored::Colorize;
use log::LevelFilter;

use self::{error::CliError, logger::Logger};

const STANDARD_STREAM: &str = "-";

/// Splits C source code into keywords, identifiers, operators and literals.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to scan, `-` for standard input
    input: PathBuf,

    /// Where the token trace is written, `-` for standard output [default: output.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// `trace` or `tabular`
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Configuration file [default: clex.toml, when present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Classify runs starting with a digit as literals
    #[arg(long)]
    literals: bool,

    /// Drop a token left unterminated at the end of the input
    #[arg(long)]
    discard_trailing: bool,

    #[arg(long)]
    max_token_length: Option<NonZeroUsize>,

    /// `truncate` or `reject` tokens longer than --max-token-length
    #[arg(long)]
    overflow: Option<OverflowPolicy>,

    /// Number of bytes read from the input at once
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Print the number of tokens of every kind
    #[arg(long)]
    stats: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }

    fn scan_options(&self, config: &ConfigRoot) -> ScanOptions {
        let mut options = config.scanner.scan_options();

        options.numeric_literals |= self.literals;

        if self.discard_trailing {
            options.flush_at_end = false;
        }

        if let Some(max) = self.max_token_length {
            options.max_token_length = Some(max);
        }

        if let Some(overflow) = self.overflow {
            options.overflow = overflow;
        }

        options
    }

    fn output_path(&self, config: &ConfigRoot) -> PathBuf {
        self.output.clone().unwrap_or_else(|| config.output.path.clone())
    }
}

fn main() {
    let args = Args::parse_args();

    Logger::initialize(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn });

    if let Err(e) = run(&args) {
        e.print();
        exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    if config.log.debug {
        Logger::raise_to(LevelFilter::Debug);
    }

    let options = args.scan_options(&config);
    let chunk_size = args.chunk_size.unwrap_or(config.scanner.chunk_size);
    let format = args.format.unwrap_or(config.output.format);
    let output_path = args.output_path(&config);

    log::debug!("Scanning {} with {options:?}", args.input.display());

    let mut source = open_input(&args.input, chunk_size)?;
    let mut sink = TraceWriter::new(create_output(&output_path)?, format);
    log::debug!("Writing {} records to {}", sink.format().as_ref(), output_path.display());

    let report = tokenize(&mut source, &mut sink, options).map_err(|e| match e {
        TokenizeError::Read(source) => CliError::InputUnavailable { path: args.input.clone(), source },
        e => CliError::Tokenize(e),
    })?;

    for diagnostic in report.diagnostics() {
        eprintln!("{}[{}]: {diagnostic}", "warning".yellow().bold(), diagnostic.kind.name());
    }

    if args.stats {
        print_stats(&report);
    }

    if output_path != Path::new(STANDARD_STREAM) {
        println!("Tokenization completed. Output written to {}.", output_path.display());
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ConfigRoot, CliError> {
    if let Some(path) = path {
        return Ok(ConfigRoot::load(path)?);
    }

    let default = Path::new(DEFAULT_CONFIG_FILE);
    if default.is_file() {
        return Ok(ConfigRoot::load(default)?);
    }

    Ok(ConfigRoot::default())
}

fn open_input(path: &Path, chunk_size: usize) -> Result<ReaderSource<Box<dyn Read>>, CliError> {
    let reader: Box<dyn Read> = if path == Path::new(STANDARD_STREAM) {
        Box::new(stdin().lock())
    } else {
        let unavailable = |source| CliError::InputUnavailable { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(unavailable)?;
        if !file.metadata().map_err(unavailable)?.is_file() {
            return Err(unavailable(io::Error::new(io::ErrorKind::Other, "not a regular file")));
        }

        Box::new(file)
    };

    Ok(ReaderSource::with_chunk_size(reader, chunk_size))
}

fn create_output(path: &Path) -> Result<BufWriter<Box<dyn Write>>, CliError> {
    let writer: Box<dyn Write> = if path == Path::new(STANDARD_STREAM) {
        Box::new(stdout().lock())
    } else {
        let file = File::create(path)
            .map_err(|source| CliError::OutputUnavailable { path: path.to_path_buf(), source })?;
        Box::new(file)
    };

    Ok(BufWriter::new(writer))
}

fn print_stats(report: &ScanReport) {
    eprintln!("{}", "Tokens".bold());

    for (kind, count) in report.counts() {
        eprintln!("  {:<12}{count:>8}", kind.name());
    }

    eprintln!("  {:<12}{:>8}", "total".bold(), report.total());
    eprintln!("{} characters in {} chunks, {:?}", report.characters(), report.chunks(), report.elapsed());
}
