use std::{cell::RefCell, collections::TryReserveError, fmt};

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot build a disjoint set over {0} elements")]
    InvalidArgument(usize),
    #[error("element {index} out of range for a universe of length {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Union-find over `0..len` with union by size and path halving.
///
/// Queries take `&self`; path halving writes through a [`RefCell`], so the
/// structure is not [`Sync`].
#[derive(Clone)]
pub struct DisjointSet {
    parent: RefCell<Vec<usize>>,
    size: Vec<usize>,
    partition_len: usize,
}

impl DisjointSet {
    /// Fails with [`Error::InvalidArgument`] if `len` is zero or the
    /// universe cannot be allocated.
    pub fn new(len: usize) -> Result<Self, Error> {
        if len == 0 {
            return Err(Error::InvalidArgument(0));
        }
        let invalid = |_: TryReserveError| Error::InvalidArgument(len);
        let mut parent = vec![];
        parent.try_reserve_exact(len).map_err(invalid)?;
        parent.extend(0..len);
        let mut size = vec![];
        size.try_reserve_exact(len).map_err(invalid)?;
        size.resize(len, 1);

        Ok(Self { parent: RefCell::new(parent), size, partition_len: len })
    }

    pub fn len(&self) -> usize { self.size.len() }

    fn check(&self, index: usize) -> Result<usize, Error> {
        let len = self.len();
        if index < len {
            Ok(index)
        } else {
            Err(Error::OutOfRange { index, len })
        }
    }

    fn root(&self, mut u: usize) -> usize {
        let mut par = self.parent.borrow_mut();
        while par[u] != u {
            let grand = par[par[u]];
            par[u] = grand;
            u = grand;
        }
        u
    }

    pub fn find(&self, u: usize) -> Result<usize, Error> {
        Ok(self.root(self.check(u)?))
    }

    /// Merges the sets of `u` and `v`. Returns `false` if they were already
    /// the same set. On a size tie the root of `u` survives.
    pub fn union(&mut self, u: usize, v: usize) -> Result<bool, Error> {
        let u = self.find(u)?;
        let v = self.find(v)?;
        if u == v {
            return Ok(false);
        }

        let (par, child) =
            if self.size[u] < self.size[v] { (v, u) } else { (u, v) };
        self.parent.get_mut()[child] = par;
        self.size[par] += self.size[child];
        self.partition_len -= 1;
        Ok(true)
    }

    pub fn equiv(&self, u: usize, v: usize) -> Result<bool, Error> {
        Ok(self.find(u)? == self.find(v)?)
    }

    pub fn count(&self, u: usize) -> Result<usize, Error> {
        Ok(self.size[self.find(u)?])
    }

    // ordered by the smallest member of each set
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let len = self.len();
        let mut by_root = vec![vec![]; len];
        for i in 0..len {
            by_root[self.root(i)].push(i);
        }
        let mut ptn: Vec<_> =
            by_root.into_iter().filter(|set| !set.is_empty()).collect();
        ptn.sort_unstable_by_key(|set| set[0]);
        ptn
    }

    pub fn partition_len(&self) -> usize { self.partition_len }
}

struct AsSet<'a>(&'a [usize]);
impl fmt::Debug for AsSet<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Debug for DisjointSet {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        fmt.debug_map()
            .entries(ptn.iter().map(|set| (self.root(set[0]), AsSet(set))))
            .finish()
    }
}

impl fmt::Display for DisjointSet {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        fmt.debug_set().entries(ptn.iter().map(|set| AsSet(set))).finish()
    }
}
