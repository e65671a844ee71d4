//! s3cat
//!
//! Pull s3 files through the cache and copy their contents to stdout.

use std::io;

use clap::Parser;
use s3pool_client::frontend::{self, PullArgs};
use s3pool_client::Client;

/// Copy s3 files to stdout.
#[derive(Parser, Debug)]
#[command(name = "s3cat")]
#[command(version)]
struct Args {
    #[command(flatten)]
    pull: PullArgs,
}

fn main() {
    frontend::init_logging();
    let args = Args::parse();

    if let Err(e) = run(&args.pull) {
        frontend::fatal(&e);
    }
}

fn run(args: &PullArgs) -> s3pool_client::Result<()> {
    let filespec = frontend::read_filespec(&args.filespec)?;
    let client = Client::new(args.config())?;

    let paths = client.pull_multi(&filespec, &args.schema, &args.bucket, args.keys.as_slice())?;
    tracing::debug!("Copying {} file(s) to stdout", paths.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    frontend::cat_files(&paths, &mut out)?;
    Ok(())
}
