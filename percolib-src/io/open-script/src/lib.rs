//! Drives a [`PercolationGrid`] from a stream of integers: the side `n`,
//! then `row col` pairs to open, until a sentinel value or the end of input.

use std::{
    collections::VecDeque,
    fmt,
    io::{self, BufRead, Write},
};

use percolation::PercolationGrid;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("expected an integer, but got {token:?}")]
    Parse { token: String },
    #[error("input ended before the grid side")]
    MissingSide,
    #[error("input ended after row {row} without a column")]
    MissingColumn { row: i64 },
    #[error(transparent)]
    Grid(#[from] percolation::Error),
}

#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// A row equal to this ends the session.
    pub sentinel: i64,
    pub prompt: bool,
}

impl Default for Config {
    fn default() -> Self { Self { sentinel: 0, prompt: true } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub side: usize,
    pub open_sites: usize,
    pub percolates: bool,
}

struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self { Self { input, pending: VecDeque::new() } }

    // reads lazily so that an interactive session sees each prompt in time
    fn next_int(&mut self) -> Result<Option<i64>, Error> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return match token.parse() {
                    Ok(x) => Ok(Some(x)),
                    Err(_) => Err(Error::Parse { token }),
                };
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(String::from));
        }
    }
}

fn say<W: Write>(
    output: &mut W,
    config: &Config,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    if config.prompt { writeln!(output, "{args}") } else { Ok(()) }
}

pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &Config,
) -> Result<Report, Error> {
    let mut tokens = Tokens::new(input);
    let out = &mut output;

    say(out, config, format_args!("Enter the grid side n:"))?;
    let side = tokens.next_int()?.ok_or(Error::MissingSide)?;
    let mut grid = PercolationGrid::new(side)?;
    say(out, config, format_args!("Created a {side}-by-{side} grid."))?;

    loop {
        say(
            out,
            config,
            format_args!(
                "Enter a site to open as `row col`, or {} to stop:",
                config.sentinel
            ),
        )?;
        let row = match tokens.next_int()? {
            Some(row) if row != config.sentinel => row,
            _ => break,
        };
        let col = tokens.next_int()?.ok_or(Error::MissingColumn { row })?;
        grid.open(row, col)?;
        say(out, config, format_args!("Opened site ({row}, {col})."))?;
    }

    let report = Report {
        side: grid.side(),
        open_sites: grid.number_of_open_sites(),
        percolates: grid.percolates(),
    };
    log::debug!("session finished: {report:?}");
    writeln!(out, "Percolates: {}", report.percolates)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Config = Config { sentinel: 0, prompt: false };

    fn run_str(
        input: &str,
        config: &Config,
    ) -> (Result<Report, Error>, String) {
        let mut output = vec![];
        let res = run(input.as_bytes(), &mut output, config);
        (res, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winding_path() {
        let (res, out) = run_str("3\n1 2\n2 2\n2 1\n3 1\n0\n", &QUIET);
        let expected = Report { side: 3, open_sites: 4, percolates: true };
        assert_eq!(res.unwrap(), expected);
        assert_eq!(out, "Percolates: true\n");
    }

    #[test]
    fn tokens_span_lines() {
        let (res, _) = run_str("2 1 1\n  1\n1 2 2 0 9 9", &QUIET);
        let expected = Report { side: 2, open_sites: 2, percolates: false };
        assert_eq!(res.unwrap(), expected);
    }

    #[test]
    fn end_of_input_stops() {
        let (res, out) = run_str("2\n1 1\n2 1\n", &QUIET);
        let expected = Report { side: 2, open_sites: 2, percolates: true };
        assert_eq!(res.unwrap(), expected);
        assert_eq!(out, "Percolates: true\n");
    }

    #[test]
    fn custom_sentinel() {
        let config = Config { sentinel: -1, prompt: false };
        let (res, _) = run_str("2 1 1 -1 2 1", &config);
        let expected = Report { side: 2, open_sites: 1, percolates: false };
        assert_eq!(res.unwrap(), expected);
    }

    #[test]
    fn repeated_sites_count_once() {
        let (res, _) = run_str("2 1 1 1 1 1 1 0", &QUIET);
        assert_eq!(res.unwrap().open_sites, 1);
    }

    #[test]
    fn prompts() {
        let (res, out) = run_str("1\n1 1\n0\n", &Config::default());
        assert!(res.unwrap().percolates);
        assert_eq!(
            out,
            "Enter the grid side n:\n\
             Created a 1-by-1 grid.\n\
             Enter a site to open as `row col`, or 0 to stop:\n\
             Opened site (1, 1).\n\
             Enter a site to open as `row col`, or 0 to stop:\n\
             Percolates: true\n"
        );
    }

    #[test]
    fn malformed_input() {
        assert!(matches!(run_str("", &QUIET).0, Err(Error::MissingSide)));
        assert!(matches!(
            run_str("2 1", &QUIET).0,
            Err(Error::MissingColumn { row: 1 })
        ));
        assert!(matches!(
            run_str("2 1 x", &QUIET).0,
            Err(Error::Parse { token }) if token == "x"
        ));
    }

    #[test]
    fn grid_errors() {
        assert!(matches!(
            run_str("0", &QUIET).0,
            Err(Error::Grid(percolation::Error::InvalidArgument(0)))
        ));
        assert!(matches!(
            run_str("-5 1 1", &QUIET).0,
            Err(Error::Grid(percolation::Error::InvalidArgument(-5)))
        ));
        assert!(matches!(
            run_str("1073741824 1 1 0", &QUIET).0,
            Err(Error::Grid(percolation::Error::InvalidArgument(1073741824)))
        ));
        assert!(matches!(
            run_str("2 3 1 0", &QUIET).0,
            Err(Error::Grid(percolation::Error::OutOfRange {
                row: 3,
                col: 1,
                side: 2
            }))
        ));
    }
}
