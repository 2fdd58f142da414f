#[doc(inline)]
pub use open_script;
#[doc(inline)]
pub use percolation::{self, PercolationGrid};
#[doc(inline)]
pub use union_find::{self, DisjointSet};

#[test]
fn reexports() {
    let mut grid = PercolationGrid::new(2).unwrap();
    grid.open(1, 2).unwrap();
    grid.open(2, 2).unwrap();
    assert!(grid.percolates());

    let ds = DisjointSet::new(2).unwrap();
    assert_eq!(ds.partition_len(), 2);
}
