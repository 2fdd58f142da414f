//! Incremental site percolation on an n-by-n grid.
//!
//! Sites are addressed by 1-based `(row, col)`. Each site `(r, c)` is the
//! element `(r - 1) * n + c` of a [`DisjointSet`] over `n * n + 2`
//! elements; element `0` stands for the whole top row and element
//! `n * n + 1` for the whole bottom row, so fullness and percolation are a
//! single root comparison each.
//!
//! Fullness is "shares a set with the top sentinel". Once the grid
//! percolates, an open site connected only to the bottom row shares that
//! set through the bottom sentinel and is reported full as well
//! (backwash).

use thiserror::Error;
use union_find::DisjointSet;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("grid side {0} is not positive or too large")]
    InvalidArgument(i64),
    #[error("site ({row}, {col}) out of range for a grid of side {side}")]
    OutOfRange { row: i64, col: i64, side: usize },
    #[error(transparent)]
    Connectivity(#[from] union_find::Error),
}

const TOP: usize = 0;

#[derive(Clone, Debug)]
pub struct PercolationGrid {
    side: usize,
    // indexed like `connectivity`; the sentinels stay closed
    open: Vec<bool>,
    open_count: usize,
    connectivity: DisjointSet,
}

impl PercolationGrid {
    /// Creates a grid with every site blocked. Fails with
    /// [`Error::InvalidArgument`] if `side` is not positive or the grid
    /// does not fit in memory.
    pub fn new(side: i64) -> Result<Self, Error> {
        let invalid = || Error::InvalidArgument(side);
        let n = usize::try_from(side)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(invalid)?;
        let len = n
            .checked_mul(n)
            .and_then(|sq| sq.checked_add(2))
            .ok_or_else(invalid)?;

        // the only failure left is an unallocatable universe
        let connectivity = DisjointSet::new(len).map_err(|_| invalid())?;
        let mut open = vec![];
        open.try_reserve_exact(len).map_err(|_| invalid())?;
        open.resize(len, false);

        log::debug!("created {n}-by-{n} percolation grid");
        Ok(Self { side: n, open, open_count: 0, connectivity })
    }

    pub fn side(&self) -> usize { self.side }

    fn bottom(&self) -> usize { self.side * self.side + 1 }

    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.side + col
    }

    fn site(&self, row: i64, col: i64) -> Result<(usize, usize), Error> {
        let n = self.side;
        let coord =
            |x: i64| usize::try_from(x).ok().filter(|x| (1..=n).contains(x));
        match (coord(row), coord(col)) {
            (Some(r), Some(c)) => Ok((r, c)),
            _ => Err(Error::OutOfRange { row, col, side: n }),
        }
    }

    /// Opens `(row, col)`. Returns `false` if it was already open, in
    /// which case nothing changes.
    pub fn open(&mut self, row: i64, col: i64) -> Result<bool, Error> {
        let (r, c) = self.site(row, col)?;
        let i = self.index(r, c);
        if self.open[i] {
            return Ok(false);
        }
        let watch = log::log_enabled!(log::Level::Debug) && !self.percolates();

        self.open[i] = true;
        self.open_count += 1;

        let n = self.side;
        if r == 1 {
            self.connectivity.union(TOP, i)?;
        }
        if r == n {
            let bottom = self.bottom();
            self.connectivity.union(bottom, i)?;
        }
        for (nr, nc) in neighbors(n, r, c) {
            let j = self.index(nr, nc);
            if self.open[j] {
                self.connectivity.union(i, j)?;
            }
        }

        log::trace!("opened site ({r}, {c})");
        if watch && self.percolates() {
            log::debug!(
                "{n}-by-{n} grid percolates after {} open sites",
                self.open_count
            );
        }
        Ok(true)
    }

    pub fn is_open(&self, row: i64, col: i64) -> Result<bool, Error> {
        let (r, c) = self.site(row, col)?;
        Ok(self.open[self.index(r, c)])
    }

    pub fn is_full(&self, row: i64, col: i64) -> Result<bool, Error> {
        let (r, c) = self.site(row, col)?;
        Ok(self.connectivity.equiv(TOP, self.index(r, c))?)
    }

    pub fn number_of_open_sites(&self) -> usize { self.open_count }

    pub fn percolates(&self) -> bool {
        // both sentinels are in range for every grid
        matches!(self.connectivity.equiv(TOP, self.bottom()), Ok(true))
    }
}

fn neighbors(
    n: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    [
        (row > 1).then(|| (row - 1, col)),
        (row < n).then(|| (row + 1, col)),
        (col > 1).then(|| (row, col - 1)),
        (col < n).then(|| (row, col + 1)),
    ]
    .into_iter()
    .flatten()
}
