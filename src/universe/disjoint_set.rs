//! Union-find over arena indices, used to keep the spanning tree acyclic.

#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of `node`'s set. Every node on the walked path is repointed at the root.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets holding `a` and `b`. Returns false when they already
    /// shared a root, i.e. an edge between them would close a cycle.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut left = self.find(a);
        let mut right = self.find(b);
        if left == right {
            return false;
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_start_in_their_own_set() {
        let mut set = DisjointSet::new(4);
        for i in 0..4 {
            assert_eq!(set.find(i), i);
        }
        assert!(!set.connected(0, 1));
    }

    #[test]
    fn union_reports_whether_it_merged() {
        let mut set = DisjointSet::new(5);
        assert!(set.union(0, 1));
        assert!(set.union(2, 3));
        assert!(set.union(1, 3));
        assert!(!set.union(0, 2), "0 and 2 already share a root");
        assert!(!set.union(4, 4));
        assert!(set.connected(0, 3));
        assert!(!set.connected(0, 4));
    }

    #[test]
    fn find_compresses_long_chains() {
        let n = 10_000;
        let mut set = DisjointSet::new(n);
        // Hand-built chain so the walk is as deep as possible.
        for i in 1..n {
            set.parent[i] = i - 1;
        }
        assert_eq!(set.find(n - 1), 0);
        assert!(set.parent.iter().all(|&p| p == 0));
    }

    #[test]
    fn equal_ranks_bump_the_surviving_root() {
        let mut set = DisjointSet::new(4);
        set.union(0, 1);
        set.union(2, 3);
        let root = set.find(0);
        assert_eq!(set.rank[root], 1);
        set.union(0, 2);
        let root = set.find(3);
        assert_eq!(set.rank[root], 2);
        assert_eq!(set.len(), 4);
    }
}
