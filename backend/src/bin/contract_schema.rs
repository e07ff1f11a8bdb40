//! Print the domain contract as an OpenAPI components document.
//!
//! # Examples
//! ```sh
//! cargo run --manifest-path backend/Cargo.toml --bin contract-schema -- --pretty \
//!     --output docs/contract.json
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;

use travel_backend::ContractDoc;

/// `contract-schema` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "contract-schema",
    about = "Emit the travel planner domain contract as OpenAPI JSON",
    version
)]
struct CliArgs {
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
    /// Write to this file instead of stdout.
    #[arg(long, value_name = "path")]
    output: Option<Utf8PathBuf>,
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let document = ContractDoc::render(args.pretty).map_err(io::Error::other)?;

    match args.output {
        Some(path) => write_document(&path, &document),
        None => {
            println!("{document}");
            Ok(())
        }
    }
}

fn write_document(path: &Utf8Path, document: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path {path} has no file name"),
        )
    })?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
    directory.write(file_name, format!("{document}\n"))
}
