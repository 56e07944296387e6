//! Node array with an embedded free-slot allocator.
//! Slot 0 is the sentinel, slots 1..=capacity are either live or on the free chain.
use crate::coredef::{
    error::{err, Result, StatusCode},
    types::{Index, FREE_MARKER, SENTINEL},
};

pub struct Node<T> {
    pub elem: Option<T>,
    pub next: Index,
    pub prev: Index,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Node {
            elem: None,
            next: SENTINEL,
            prev: SENTINEL,
        }
    }

    fn free(next: Index) -> Self {
        Node {
            elem: None,
            next,
            prev: FREE_MARKER,
        }
    }
}

pub struct NodeStore<T> {
    nodes: Vec<Node<T>>,
    free: Index,
    capacity: usize,
}

impl<T> NodeStore<T> {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let slots = match capacity.checked_add(1) {
            Some(slots) => slots,
            None => return err(StatusCode::MemoryError, "capacity overflows the index space"),
        };
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(slots)?;
        nodes.push(Node::sentinel());

        let mut store = NodeStore {
            nodes,
            free: SENTINEL,
            capacity: 0,
        };
        store.append_free(capacity);
        Ok(store)
    }

    /// Pushes free slots up to `new_capacity` and makes them the whole free chain.
    /// Storage must already be reserved.
    fn append_free(&mut self, new_capacity: usize) {
        let first = self.capacity + 1;
        for idx in first..=new_capacity {
            let next = if idx < new_capacity { idx + 1 } else { SENTINEL };
            self.nodes.push(Node::free(next));
        }
        self.free = if first <= new_capacity { first } else { SENTINEL };
        self.capacity = new_capacity;
    }

    /// Grows to `capacity * 2 + 1`. On failure nothing is touched.
    pub fn grow(&mut self) -> Result<usize> {
        let new_capacity = match self.capacity.checked_mul(2).and_then(|c| c.checked_add(1)) {
            Some(c) if c < FREE_MARKER => c,
            _ => return err(StatusCode::MemoryError, "capacity overflows the index space"),
        };
        self.nodes.try_reserve_exact(new_capacity - self.capacity)?;
        self.append_free(new_capacity);
        Ok(new_capacity)
    }

    /// Pops the free head, growing first if the chain is exhausted.
    /// The caller links the returned slot and fills its element.
    pub fn allocate(&mut self) -> Result<Index> {
        if self.free == SENTINEL {
            self.grow()?;
        }
        let idx = self.free;
        self.free = self.nodes[idx].next;
        Ok(idx)
    }

    /// Pushes `idx` onto the free chain and hands back the element it held
    pub fn release(&mut self, idx: Index) -> Option<T> {
        let free = self.free;
        let node = &mut self.nodes[idx];
        node.prev = FREE_MARKER;
        node.next = free;
        self.free = idx;
        node.elem.take()
    }

    /// Rethreads the free chain over `from..=capacity`, in ascending order
    pub fn rebuild_free(&mut self, from: Index) {
        debug_assert!(from > SENTINEL);
        for idx in from..=self.capacity {
            let next = if idx < self.capacity { idx + 1 } else { SENTINEL };
            self.nodes[idx] = Node::free(next);
        }
        self.free = if from <= self.capacity { from } else { SENTINEL };
    }

    /// Exchanges the full contents of two slots and repairs every link that
    /// referenced either of them. Only live slots get their neighbours fixed,
    /// a free slot's chain link is left stale for `rebuild_free`.
    pub fn swap(&mut self, a: Index, b: Index) {
        debug_assert!(a > SENTINEL && a <= self.capacity);
        debug_assert!(b > SENTINEL && b <= self.capacity);
        if a == b {
            return;
        }

        self.nodes.swap(a, b);
        let remap = |i: Index| {
            if i == a {
                b
            } else if i == b {
                a
            } else {
                i
            }
        };
        for idx in [a, b] {
            let node = &mut self.nodes[idx];
            if node.elem.is_some() {
                node.next = remap(node.next);
                node.prev = remap(node.prev);
            }
        }
        for idx in [a, b] {
            if self.nodes[idx].elem.is_some() {
                let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
                self.nodes[prev].next = idx;
                self.nodes[next].prev = idx;
            }
        }
    }

    /// Scrubs and drops the storage. Afterwards `exists()` is false.
    pub fn destroy(&mut self) {
        self.nodes.clear();
        self.nodes.shrink_to_fit();
        self.free = SENTINEL;
        self.capacity = 0;
    }

    pub fn exists(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Number of allocated slots, the sentinel included
    pub fn slots(&self) -> usize {
        self.nodes.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn free_head(&self) -> Index {
        self.free
    }

    pub fn node(&self, idx: Index) -> &Node<T> {
        &self.nodes[idx]
    }

    pub fn node_mut(&mut self, idx: Index) -> &mut Node<T> {
        &mut self.nodes[idx]
    }

    /// Real (non-sentinel) slot not holding an element
    pub fn is_free(&self, idx: Index) -> bool {
        idx != SENTINEL && self.nodes[idx].elem.is_none()
    }

    #[cfg(test)]
    pub fn set_free_head(&mut self, free: Index) {
        self.free = free;
    }

    #[cfg(test)]
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }
}
