//! Fixed-capacity, two-level doubly-linked lists (C5.b): a pool of `n`
//! preallocated nodes threaded into any number of named buckets.
//!
//! Every node lives in at most one bucket at a time, so a single `prev`/
//! `next` pair per node is enough regardless of how many buckets exist. This
//! is exactly the shape push-relabel needs to thread "vertices currently at
//! label height `h`" and Dial's algorithm needs to thread "vertices whose
//! tentative distance is currently `d`": both are a fixed population of `n`
//! elements partitioned across a dynamic number of buckets, with O(1)
//! insert/remove/pop-front.

const END: usize = usize::MAX;

/// A pool of `n` nodes, each placeable into one of a dynamic number of
/// buckets. Node `i` is detached (in no bucket) until [`BucketList::insert`]
/// places it somewhere; [`BucketList::remove`] detaches it again without the
/// caller needing to know which bucket it was in.
#[derive(Debug, Clone)]
pub struct BucketList {
    bucket_head: Vec<usize>,
    prev: Vec<usize>,
    next: Vec<usize>,
    bucket_of: Vec<usize>,
}

impl BucketList {
    /// `capacity` nodes, no buckets yet (buckets are created lazily by
    /// [`BucketList::ensure_bucket`] / on first [`BucketList::insert`]).
    pub fn new(capacity: usize) -> Self {
        BucketList {
            bucket_head: Vec::new(),
            prev: vec![END; capacity],
            next: vec![END; capacity],
            bucket_of: vec![END; capacity],
        }
    }

    /// Grow the bucket index space so bucket `b` exists (and is empty).
    pub fn ensure_bucket(&mut self, b: usize) {
        if self.bucket_head.len() <= b {
            self.bucket_head.resize(b + 1, END);
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_head.len()
    }

    pub fn is_bucket_empty(&self, b: usize) -> bool {
        b >= self.bucket_head.len() || self.bucket_head[b] == END
    }

    pub fn bucket_of(&self, node: usize) -> Option<usize> {
        let b = self.bucket_of[node];
        if b == END {
            None
        } else {
            Some(b)
        }
    }

    /// Detach `node` from its current bucket, if any. No-op if `node` is not
    /// currently in any bucket.
    pub fn remove(&mut self, node: usize) {
        let b = self.bucket_of[node];
        if b == END {
            return;
        }
        let p = self.prev[node];
        let n = self.next[node];
        if p != END {
            self.next[p] = n;
        } else {
            self.bucket_head[b] = n;
        }
        if n != END {
            self.prev[n] = p;
        }
        self.prev[node] = END;
        self.next[node] = END;
        self.bucket_of[node] = END;
    }

    /// Place `node` at the front of bucket `b`, detaching it from wherever it
    /// currently lives first.
    pub fn insert(&mut self, b: usize, node: usize) {
        self.remove(node);
        self.ensure_bucket(b);
        let old_head = self.bucket_head[b];
        self.next[node] = old_head;
        self.prev[node] = END;
        if old_head != END {
            self.prev[old_head] = node;
        }
        self.bucket_head[b] = node;
        self.bucket_of[node] = b;
    }

    /// The node following `node` within whatever bucket it currently
    /// occupies, or `None` if `node` is the last element of its bucket.
    /// Used by algorithms (relabel-to-front) that need to walk a bucket as a
    /// plain ordered list rather than only pop from its front.
    pub fn next(&self, node: usize) -> Option<usize> {
        let n = self.next[node];
        if n == END {
            None
        } else {
            Some(n)
        }
    }

    pub fn front(&self, b: usize) -> Option<usize> {
        if b >= self.bucket_head.len() || self.bucket_head[b] == END {
            None
        } else {
            Some(self.bucket_head[b])
        }
    }

    /// Remove and return the front element of bucket `b`.
    pub fn pop_front(&mut self, b: usize) -> Option<usize> {
        let head = self.front(b)?;
        self.remove(head);
        Some(head)
    }
}
