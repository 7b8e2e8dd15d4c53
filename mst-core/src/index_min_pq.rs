//--------------------------------------------------------------------
// index_min_pq.rs
//--------------------------------------------------------------------
// Provides an indexed binary min-heap over a fixed universe of
// indices 0..capacity, with decrease-key and membership tests
//--------------------------------------------------------------------

use std::cmp::Ordering;

// Heap entries are compared by key first and then by the order in
// which their index was inserted, so equal keys pop first-in first-out
pub struct IndexMinPq<K: Ord + Copy> {
    heap: Vec<usize>,
    positions: Box<[Option<usize>]>,
    keys: Box<[Option<K>]>,
    stamps: Box<[u64]>,
    next_stamp: u64
}

impl<K: Ord + Copy> IndexMinPq<K> {
    pub fn new(capacity: usize) -> IndexMinPq<K> {
        IndexMinPq {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity].into_boxed_slice(),
            keys: vec![None; capacity].into_boxed_slice(),
            stamps: vec![0; capacity].into_boxed_slice(),
            next_stamp: 0
        }
    }

    pub fn capacity(&self) -> usize { self.positions.len() }
    pub fn len(&self) -> usize { self.heap.len() }
    pub fn is_empty(&self) -> bool { self.heap.is_empty() }

    pub fn contains(&self, i: usize) -> bool {
        self.check_index(i);
        self.positions[i].is_some()
    }

    pub fn insert(&mut self, i: usize, key: K) {
        assert!(!self.contains(i), "Index {} is already in the priority queue", i);

        let pos = self.heap.len();
        self.heap.push(i);
        self.positions[i] = Some(pos);
        self.keys[i] = Some(key);
        self.stamps[i] = self.next_stamp;
        self.next_stamp += 1;
        self.swim(pos);
    }

    pub fn decrease_key(&mut self, i: usize, key: K) {
        let pos = match self.positions.get(i).copied().flatten() {
            Some(pos) => pos,
            None => panic!("Index {} is not in the priority queue", i)
        };
        let current = self.keys[i].expect("queued index without a key");
        assert!(key < current, "Calling decrease_key() with a key not strictly less than the current one");

        self.keys[i] = Some(key);
        self.swim(pos);
    }

    /// Removes and returns the index with the minimum key together with that key.
    pub fn del_min(&mut self) -> (usize, K) {
        assert!(!self.is_empty(), "Priority queue underflow");

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let min = self.heap.pop().expect("heap cannot be empty here");
        if !self.heap.is_empty() { self.sink(0); }

        self.positions[min] = None;
        let key = self.keys[min].take().expect("queued index without a key");
        (min, key)
    }

    fn check_index(&self, i: usize) {
        assert!(i < self.capacity(), "Index {} is out of range for a priority queue of capacity {}", i, self.capacity());
    }

    fn cmp_at(&self, a: usize, b: usize) -> Ordering {
        let (ia, ib) = (self.heap[a], self.heap[b]);
        self.keys[ia].cmp(&self.keys[ib]).then(self.stamps[ia].cmp(&self.stamps[ib]))
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }

    fn swim(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.cmp_at(pos, parent) != Ordering::Less { break; }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sink(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let mut child = 2 * pos + 1;
            if child >= len { break; }
            if child + 1 < len && self.cmp_at(child + 1, child) == Ordering::Less { child += 1; }
            if self.cmp_at(child, pos) != Ordering::Less { break; }
            self.swap(pos, child);
            pos = child;
        }
    }
}
