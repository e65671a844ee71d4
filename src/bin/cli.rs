//! s3pool CLI Client
//!
//! Command-line interface for the non-pull operations of the s3pool daemon.

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use s3pool_client::{frontend, Client, ClientConfig};

/// s3pool CLI
#[derive(Parser, Debug)]
#[command(name = "s3pool-cli")]
#[command(about = "CLI for the s3pool cache daemon")]
#[command(version)]
struct Args {
    /// Port number of the s3pool process
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload a local file to the store
    Push {
        /// Bucket name
        bucket: String,

        /// Object key
        key: String,

        /// Path of the local file
        path: String,
    },

    /// Re-list a bucket
    Refresh {
        /// Bucket name
        bucket: String,
    },

    /// Print the keys of a bucket matching a pattern
    Glob {
        /// Bucket name
        bucket: String,

        /// Glob pattern, `/` is the separator
        pattern: String,
    },
}

fn main() {
    frontend::init_logging();
    let args = Args::parse();

    if let Err(e) = run(args) {
        frontend::fatal(&e);
    }
}

fn run(args: Args) -> s3pool_client::Result<()> {
    let client = Client::new(ClientConfig::with_port(args.port))?;

    match args.command {
        Commands::Push { bucket, key, path } => client.push(&bucket, &key, &path),
        Commands::Refresh { bucket } => client.refresh(&bucket),
        Commands::Glob { bucket, pattern } => {
            let keys = client.glob(&bucket, &pattern)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for key in &keys {
                frontend::write_line(&mut out, key)?;
            }
            out.flush()?;
            Ok(())
        }
    }
}
