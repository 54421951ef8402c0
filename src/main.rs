//! evalquote CLI: quote arguments or NUL-delimited stdin for POSIX shell `eval`.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;

use evalquote::config::{Config, Settings};
use evalquote::error::Error;
use evalquote::input::RecordSplitter;
use evalquote::logging;
use evalquote::output::Output;
use evalquote::quote::{Delimiter, Quoter, Verbosity};

/// Output args quoted appropriately for POSIX shell `eval`.
#[derive(Debug, Parser)]
#[command(name = "evalquote", version, about)]
struct Cli {
    /// Send output to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE", conflicts_with = "append")]
    output: Option<String>,

    /// As --output but open FILE in append mode
    #[arg(short = 'a', long, value_name = "FILE")]
    append: Option<String>,

    /// Append standard input (split at NUL bytes) to the args
    #[arg(short = 'i', long)]
    stdin: bool,

    /// Emit an empty token when the stdin stream ends in a NUL
    #[arg(short = 'e', long, requires = "stdin")]
    trailing_empty: bool,

    /// Output backslash-newline instead of a space as token separator
    #[arg(short = 'n', long)]
    newline: bool,

    /// Output the shortest string possible
    #[arg(short = 's', long, overrides_with_all = ["unshort", "long"])]
    short: bool,

    /// Output readable and compatible length (default)
    #[arg(short = 'S', long, overrides_with_all = ["short", "long"])]
    unshort: bool,

    /// Output paranoically long/compatible
    #[arg(short = 'l', long, overrides_with_all = ["short", "unshort"])]
    long: bool,

    /// Omit the trailing newline in the output
    #[arg(short = 'c', long)]
    cut: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Strings to quote
    #[arg(value_name = "ARGS")]
    args: Vec<OsString>,
}

/// Options after merging config defaults with CLI flags.
#[derive(Debug)]
struct RunOptions {
    verbosity: Verbosity,
    delimiter: Delimiter,
    cut: bool,
    trailing_empty: bool,
}

impl Cli {
    /// CLI flags win over config values, which win over built-in defaults.
    fn resolve(&self, defaults: &Settings) -> RunOptions {
        let verbosity = if self.short {
            Verbosity::Short
        } else if self.unshort {
            Verbosity::Unshort
        } else if self.long {
            Verbosity::Long
        } else {
            defaults.verbosity
        };
        let delimiter = if self.newline || defaults.newline {
            Delimiter::BackslashNewline
        } else {
            Delimiter::Space
        };
        RunOptions {
            verbosity,
            delimiter,
            cut: self.cut || defaults.cut,
            trailing_empty: self.trailing_empty || defaults.trailing_empty,
        }
    }

    /// The output destination, tilde-expanded. An empty path means stdout.
    fn open_output(&self) -> Result<Output, Error> {
        let (path, append) = match (&self.output, &self.append) {
            (Some(path), _) => (path, false),
            (_, Some(path)) => (path, true),
            (None, None) => return Ok(Output::stdout()),
        };
        if path.is_empty() {
            return Ok(Output::stdout());
        }
        let expanded = shellexpand::tilde(path);
        if append {
            Output::append(expanded.as_ref())
        } else {
            Output::create(expanded.as_ref())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("evalquote: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = Config::load()?;
    let opts = cli.resolve(&config.settings);
    log::debug!("resolved options: {opts:?}");

    let output = cli.open_output()?;
    let dest = output.name().to_string();
    let write_err = |source: io::Error| Error::Write {
        dest: dest.clone(),
        source,
    };

    let mut quoter = Quoter::new(output, opts.verbosity, opts.delimiter);
    for arg in &cli.args {
        quoter.push(arg.as_encoded_bytes()).map_err(&write_err)?;
    }
    log::debug!("quoted {} argument(s)", cli.args.len());

    if cli.stdin {
        let stdin = io::stdin();
        let mut records = RecordSplitter::new(stdin.lock(), opts.trailing_empty);
        let mut count = 0_usize;
        while let Some(record) = records
            .next_record()
            .map_err(|source| Error::Stdin { source })?
        {
            quoter.push(&record).map_err(&write_err)?;
            count += 1;
        }
        log::debug!("quoted {count} record(s) from stdin");
    }

    let output = quoter.finish(!opts.cut).map_err(&write_err)?;
    output.finish()
}
