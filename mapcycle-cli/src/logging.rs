//! Logger setup: `log` records go to stderr, and optionally to a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};

use crate::error::CliError;

/// Install the global logger.
///
/// `--quiet` keeps warnings and errors only, `--verbose` adds debug records
/// and timestamps. `RUST_LOG` overrides either. A log file that can't be
/// created is reported as a warning; stderr logging still goes ahead.
pub(crate) fn init_logging(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
) -> Result<(), CliError> {
    let (mut builder, file_error) = logger_builder(quiet, verbose, logfile);

    builder
        .try_init()
        .map_err(|e| CliError::logger(e.to_string()))?;

    if let (Some(path), Some(e)) = (logfile, file_error) {
        log::warn!("Could not open log file {}: {e}", path.display());
    }
    Ok(())
}

/// Configure the logger without installing it. The second value is the
/// error from opening `logfile`, if any.
fn logger_builder(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
) -> (env_logger::Builder, Option<io::Error>) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    builder.format(move |buf, record| {
        if verbose {
            let timestamp = buf.timestamp_millis();
            write!(buf, "[{timestamp} {:<5}] ", record.level())?;
        } else if record.level() != Level::Info {
            write!(buf, "{}: ", record.level())?;
        }
        writeln!(buf, "{}", record.args())
    });

    let mut file_error = None;
    if let Some(path) = logfile {
        match File::create(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
            }
            Err(e) => file_error = Some(e),
        }
    }

    (builder, file_error)
}

/// Copies everything to stderr and an ANSI-free copy to a file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}
