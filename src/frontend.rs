//! Front-end helpers
//!
//! Shared by the `s3pull`, `s3cat` and `s3pool-cli` binaries. None of this
//! is used by the client itself.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ClientConfig;
use crate::error::{PoolError, Result};

/// Arguments common to the pull front ends
#[derive(Args, Debug, Clone)]
pub struct PullArgs {
    /// Port number of the s3pool process
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// File whose first line is the filespec
    pub filespec: PathBuf,

    /// Schema file, passed through to the daemon
    pub schema: String,

    /// Bucket name
    pub bucket: String,

    /// Object key(s)
    #[arg(required = true)]
    pub keys: Vec<String>,
}

impl PullArgs {
    pub fn config(&self) -> ClientConfig {
        ClientConfig::with_port(self.port)
    }
}

/// Install the stderr log subscriber (`RUST_LOG`, default `warn`)
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

/// Report a fatal error the way the tools always have, then exit 1
pub fn fatal(err: &PoolError) -> ! {
    tracing::debug!("fatal: {:?}", err);
    eprintln!("FATAL: {}", err);
    std::process::exit(1);
}

/// Read the filespec: the first line of `path`, line terminator cut
///
/// Only the first line has to be UTF-8, since it goes on the request line
/// as text; anything after it is never looked at.
pub fn read_filespec(path: &Path) -> Result<String> {
    let content = fs::read(path).map_err(|e| {
        PoolError::Io(io::Error::new(
            e.kind(),
            format!("filespec file {}: {}", path.display(), e),
        ))
    })?;

    let end = content
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(content.len());
    let mut line = content;
    line.truncate(end);

    String::from_utf8(line).map_err(|_| {
        PoolError::InvalidArgument(format!(
            "filespec file {}: first line is not valid UTF-8",
            path.display()
        ))
    })
}

/// Write `line` followed by a newline, bytes untouched
pub fn write_line<W: Write>(out: &mut W, line: &[u8]) -> Result<()> {
    out.write_all(line)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write a path followed by a newline, without lossy conversion on unix
#[cfg(unix)]
pub fn write_path<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    use std::os::unix::ffi::OsStrExt;
    write_line(out, path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
pub fn write_path<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    write_line(out, path.to_string_lossy().as_bytes())
}

/// Copy each file to `out`, in order; returns the total bytes copied
pub fn cat_files<P: AsRef<Path>, W: Write>(paths: &[P], out: &mut W) -> Result<u64> {
    let mut total = 0;
    for path in paths {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            PoolError::Io(io::Error::new(
                e.kind(),
                format!("open {}: {}", path.display(), e),
            ))
        })?;
        total += io::copy(&mut file, out)?;
    }
    out.flush()?;
    Ok(total)
}
