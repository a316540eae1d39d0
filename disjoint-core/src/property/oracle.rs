//! Reachability oracle for union-find property verification.
//!
//! Treats every union as an undirected edge and labels components with a
//! depth-first search, sharing no code with the strategies under test.

/// Component labelling computed independently of any union-find strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct ReachabilityOracle {
    component: Vec<usize>,
    count: usize,
}

impl ReachabilityOracle {
    /// Labels the components induced by `unions` over `len` elements.
    pub(super) fn new(len: usize, unions: &[(usize, usize)]) -> Self {
        let mut adjacency = vec![Vec::new(); len];
        for &(p, q) in unions {
            adjacency[p].push(q);
            adjacency[q].push(p);
        }

        let mut component = vec![usize::MAX; len];
        let mut count = 0;
        for start in 0..len {
            if component[start] != usize::MAX {
                continue;
            }
            let mut stack = vec![start];
            component[start] = count;
            while let Some(node) = stack.pop() {
                for &next in &adjacency[node] {
                    if component[next] == usize::MAX {
                        component[next] = count;
                        stack.push(next);
                    }
                }
            }
            count += 1;
        }

        Self { component, count }
    }

    /// Returns whether `p` and `q` are reachable from one another.
    pub(super) fn connected(&self, p: usize, q: usize) -> bool {
        self.component[p] == self.component[q]
    }

    /// Number of components.
    pub(super) fn count(&self) -> usize {
        self.count
    }
}
