use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Wrap mixed-width text to a fixed display width")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    /// Display-width budget per line, indent included
    #[arg(long, default_value_t = 80, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    width: usize,
    /// String prepended to every output line; its width counts toward the
    /// budget
    #[arg(long, default_value = "")]
    indent: String,
    /// Text files to wrap
    files: Vec<PathBuf>,
}

fn wrap_path(path: &Path, indent: &str, width: usize) -> anyhow::Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(jawrap::wrap(&text, indent, width))
}

/// Entry point for the `jawrap` command-line tool.
///
/// With no file arguments the tool wraps standard input to standard output.
/// File arguments are wrapped in parallel and printed in argument order, or
/// rewritten in place with `--in-place`.
///
/// # Examples
///
/// ```sh
/// # Wrap a file to 40 columns and print to stdout
/// jawrap --width 40 notes.txt
///
/// # Wrap files in place with a two-space indent
/// jawrap --in-place --width 72 --indent "  " a.txt b.txt
///
/// # Wrap standard input
/// cat notes.txt | jawrap
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        println!("{}", jawrap::wrap(&input, &cli.indent, cli.width));
        return Ok(());
    }

    if cli.in_place {
        cli.files.par_iter().try_for_each(|path| {
            jawrap::io::rewrite(path, &cli.indent, cli.width)
                .with_context(|| format!("failed to rewrite {}", path.display()))
        })?;
        return Ok(());
    }

    let outputs: Vec<anyhow::Result<String>> = cli
        .files
        .par_iter()
        .map(|path| wrap_path(path, &cli.indent, cli.width))
        .collect();
    for output in outputs {
        println!("{}", output?);
    }
    Ok(())
}
