//! s3pull
//!
//! Pull s3 files into the local cache and print their paths to stdout.

use std::io::{self, Write};

use clap::Parser;
use s3pool_client::frontend::{self, PullArgs};
use s3pool_client::Client;

/// Pull a s3 file and print path to stdout.
#[derive(Parser, Debug)]
#[command(name = "s3pull")]
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

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let [key] = args.keys.as_slice() {
        let path = client.pull(&filespec, &args.schema, &args.bucket, key)?;
        frontend::write_path(&mut out, &path)?;
    } else {
        for path in client.pull_multi(&filespec, &args.schema, &args.bucket, args.keys.as_slice())? {
            frontend::write_path(&mut out, &path)?;
        }
    }
    out.flush()?;
    Ok(())
}
