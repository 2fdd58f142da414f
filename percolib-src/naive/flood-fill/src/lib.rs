// Breadth-first fill over an n-by-n grid of open flags, 0-based.
// Stands in for the union-find based grid in tests.

use std::collections::VecDeque;

pub fn reach<I>(open: &[Vec<bool>], sources: I) -> Vec<Vec<bool>>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let n = open.len();
    let mut seen = vec![vec![false; n]; n];
    let mut queue: VecDeque<_> =
        sources.into_iter().filter(|&(i, j)| open[i][j]).collect();
    for &(i, j) in &queue {
        seen[i][j] = true;
    }
    while let Some((i, j)) = queue.pop_front() {
        let adj = [
            (i.wrapping_sub(1), j),
            (i + 1, j),
            (i, j.wrapping_sub(1)),
            (i, j + 1),
        ];
        for (ni, nj) in adj {
            if ni < n && nj < n && open[ni][nj] && !seen[ni][nj] {
                seen[ni][nj] = true;
                queue.push_back((ni, nj));
            }
        }
    }
    seen
}

pub fn from_top(open: &[Vec<bool>]) -> Vec<Vec<bool>> {
    reach(open, (0..open.len()).map(|j| (0, j)))
}

pub fn from_bottom(open: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let n = open.len();
    reach(open, (0..n).map(|j| (n - 1, j)))
}

pub fn percolates(open: &[Vec<bool>]) -> bool {
    from_top(open).last().is_some_and(|row| row.iter().any(|&b| b))
}

#[cfg(test)]
macro_rules! grid {
    ($($row:literal),* $(,)?) => {
        vec![$($row.iter().map(|&b| b == b'#').collect::<Vec<_>>()),*]
    };
}

#[test]
fn sanity_check() {
    let open = grid![b"#..", b"##.", b".#."];
    assert!(percolates(&open));
    assert_eq!(from_top(&open), grid![b"#..", b"##.", b".#."]);

    let open = grid![b"#..", b"..#", b"..#"];
    assert!(!percolates(&open));
    assert_eq!(from_top(&open), grid![b"#..", b"...", b"..."]);
    assert_eq!(from_bottom(&open), grid![b"...", b"..#", b"..#"]);
}

#[test]
fn closed_sources_are_skipped() {
    let open = grid![b".#", b"##"];
    assert_eq!(reach(&open, [(0, 0)]), grid![b"..", b".."]);
    assert_eq!(reach(&open, [(1, 0)]), grid![b".#", b"##"]);
}
