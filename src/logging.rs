//! Stderr logging setup.
//!
//! Diagnostics go through the `log` facade to a `simplelog` terminal logger
//! on stderr, never to the output sink. Default level is `Warn`; `--verbose`
//! raises it to `Debug`.

use log::LevelFilter;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // A second init (e.g. in tests) just keeps the first logger.
    let _ = TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
