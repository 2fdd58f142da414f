// Reference partition: remembers every merge as an edge and answers by
// graph search. O(n + m) per query.

pub struct DisjointSet {
    adj: Vec<Vec<usize>>,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self { Self { adj: vec![vec![]; n] } }

    pub fn len(&self) -> usize { self.adj.len() }

    pub fn union(&mut self, u: usize, v: usize) -> bool {
        if self.equiv(u, v) {
            return false;
        }
        self.adj[u].push(v);
        self.adj[v].push(u);
        true
    }

    pub fn equiv(&self, u: usize, v: usize) -> bool {
        self.component(u).contains(&v)
    }

    pub fn count(&self, u: usize) -> usize { self.component(u).len() }

    // members of u's set, ascending
    pub fn component(&self, u: usize) -> Vec<usize> {
        let mut seen = vec![false; self.len()];
        let mut stack = vec![u];
        seen[u] = true;
        while let Some(v) = stack.pop() {
            for &nv in &self.adj[v] {
                if !seen[nv] {
                    seen[nv] = true;
                    stack.push(nv);
                }
            }
        }
        (0..self.len()).filter(|&i| seen[i]).collect()
    }

    pub fn partition(&self) -> Vec<Vec<usize>> {
        let mut res: Vec<Vec<usize>> = vec![];
        for i in 0..self.len() {
            if res.iter().all(|set| !set.contains(&i)) {
                res.push(self.component(i));
            }
        }
        res
    }
}

#[test]
fn sanity_check() {
    let mut ds = DisjointSet::new(5);
    assert!(ds.union(0, 3));
    assert!(ds.union(3, 4));
    assert!(!ds.union(4, 0));
    assert!(ds.equiv(0, 4));
    assert!(!ds.equiv(1, 2));
    assert_eq!(ds.count(3), 3);
    assert_eq!(ds.partition(), [vec![0, 3, 4], vec![1], vec![2]]);
}
