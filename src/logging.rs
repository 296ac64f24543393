//! Logger setup for the command-line driver.

use std::io::{self, Write};

use env_logger::{fmt::Formatter, Builder, Target};
use log::{LevelFilter, Record};

use crate::{Error, Result};

/// Installs an `env_logger` writing to stderr at `level`.
///
/// `RUST_LOG`, when set, overrides the level per module.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf: &mut Formatter, record| write_record(buf, record));

    builder
        .try_init()
        .map_err(|e| Error::Logger(e.to_string()))
}

/// One line per record: `LEVEL [target] message`.
fn write_record<W: Write + ?Sized>(out: &mut W, record: &Record<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{} [{}] {}",
        record.level().as_str(),
        record.target(),
        record.args()
    )
}
