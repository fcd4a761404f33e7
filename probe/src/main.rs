use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use log::debug;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use tenmoons_usb::rusb::LogLevel;
use tenmoons_usb::{enable_tablet, enable_tablet_with_log_level, TabletDevice};

use crate::cli::{Cli, LevelFilter};

mod cli;

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(error) => return usage_error(error),
    };

    if let Err(error) = init_logger(args.log_level) {
        eprintln!("{:#}", error);
        return ExitCode::FAILURE;
    }

    let device = TabletDevice::new(args.bus_number(), args.device_address());
    debug!("Probing tablet at {}", device);

    let result = match args.log_level {
        LevelFilter::Trace => enable_tablet_with_log_level(device, LogLevel::Debug),
        _ => enable_tablet(device),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn init_logger(level: LevelFilter) -> Result<()> {
    // Everything goes to stderr, stdout is never written to.
    CombinedLogger::init(vec![TermLogger::new(
        level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")
}

fn usage_error(error: clap::Error) -> ExitCode {
    if matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        error.exit();
    }

    ExitCode::from(write_usage_error(&error, &mut io::stderr()))
}

/// Writes the diagnostic for a command line that didn't parse, followed by the help text, and
/// returns the exit status.
fn write_usage_error(error: &clap::Error, out: &mut impl Write) -> u8 {
    // Nowhere left to report a failed write to stderr.
    let _ = if is_argument_count_error(error) {
        writeln!(out, "Invalid number of arguments")
    } else {
        write!(out, "{}", error)
    };
    let _ = write!(out, "{}", Cli::command().render_help());
    1
}

fn is_argument_count_error(error: &clap::Error) -> bool {
    match error.kind() {
        ErrorKind::MissingRequiredArgument => true,
        // An unexpected value is an extra positional, an unexpected flag is something else.
        ErrorKind::UnknownArgument => !matches!(
            error.get(ContextKind::InvalidArg),
            Some(ContextValue::String(arg)) if arg.starts_with("--")
        ),
        _ => false,
    }
}
