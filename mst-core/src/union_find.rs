//--------------------------------------------------------------------
// union_find.rs
//--------------------------------------------------------------------
// Provides the disjoint-set forest used by Kruskal's algorithm
//--------------------------------------------------------------------

use std::mem;

/// Disjoint sets over `0..n` with path compression and union by size.
///
/// On a size tie the root of `i` is attached under the root of `j`, so the
/// resulting forest depends only on the sequence of calls.
pub struct UnionFind {
    parents: Box<[usize]>,
    sizes: Box<[usize]>,
    count: usize
}

impl UnionFind {
    pub fn new(cnt: usize) -> UnionFind {
        let parents = (0..cnt).collect::<Vec<_>>().into_boxed_slice();
        let sizes = vec![1; cnt].into_boxed_slice();
        UnionFind { parents, sizes, count: cnt }
    }

    pub fn len(&self) -> usize { self.parents.len() }

    /// Number of disjoint sets left
    pub fn count(&self) -> usize { self.count }

    pub fn find(&mut self, i: usize) -> usize {
        assert!(i < self.len(), "Index {} is out of range for a union-find of size {}", i, self.len());
        if self.parents[i] == i { i }
        else {
            self.parents[i] = self.find(self.parents[i]);
            self.parents[i]
        }
    }

    /// Merges the sets of `i` and `j`. Returns false if they were already one.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let mut i = self.find(i);
        let mut j = self.find(j);
        if i == j { return false; }

        // j becomes the new root; it must be the larger (or equal) tree
        if self.sizes[i] > self.sizes[j] { mem::swap(&mut i, &mut j); }
        self.parents[i] = j;
        self.sizes[j] += self.sizes[i];
        self.count -= 1;
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.count(), 4);
        for i in 0..4 { assert_eq!(uf.find(i), i); }
    }

    #[test]
    fn test_union_and_find() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.count(), 3);
        assert_eq!(uf.find(0), uf.find(1));
        assert_ne!(uf.find(1), uf.find(2));

        assert!(uf.union(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
        assert_eq!(uf.count(), 2);
        assert_ne!(uf.find(4), uf.find(0));
    }

    #[test]
    fn test_tie_attaches_first_under_second() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        assert_eq!(uf.find(0), 1);

        // Size 2 tree absorbs the singleton regardless of argument order
        uf.union(1, 2);
        assert_eq!(uf.find(2), 1);
    }

    #[test]
    fn test_path_compression() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(1, 3);
        let root = uf.find(0);
        assert_eq!(uf.parents[0], root);
        assert_eq!(uf.parents[1], root);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_find_out_of_range() {
        UnionFind::new(2).find(2);
    }
}
