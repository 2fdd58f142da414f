use std::{
    error::Error,
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use clap::Parser;
use open_script::Config;

/// Opens sites of an n-by-n grid read from the input and reports whether
/// the grid percolates.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Read from this file instead of stdin
    #[clap(long)]
    input: Option<PathBuf>,
    /// A row equal to this value ends the input
    #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
    sentinel: i64,
    /// Do not print prompts
    #[clap(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let Args { input, sentinel, quiet } = Args::parse();
    log::debug!("input: {input:?}, sentinel: {sentinel}, quiet: {quiet}");

    let config = Config { sentinel, prompt: !quiet };
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    open_script::run(reader, io::stdout().lock(), &config)?;
    Ok(())
}
