//! A doubly linked list packed into one contiguous array.
//!
//! Slot 0 is a sentinel closing the circular chain, unused slots form a singly
//! linked free chain. Indices returned by insertions are stable handles until
//! the node is deleted or the list is sorted.
//!
//! While `quick` holds, physical slot `k` is the `k`-th node in logical order,
//! so positional access is O(1). `sort()` compacts the list to restore it.
use crate::coredef::{
    error::{Result, Status, StatusCode},
    options::Options,
    types::{Index, Verification, SENTINEL},
};
use crate::log;

mod dump;
mod position;
mod sequence;
mod sort;
mod store;
mod verify;

use store::NodeStore;

pub struct List<T> {
    store: NodeStore<T>,
    len: usize,
    quick: bool,
    options: Options,
}

/// Read-only view of one physical slot
#[derive(Debug, PartialEq)]
pub struct NodeView<'a, T> {
    pub index: Index,
    pub elem: Option<&'a T>,
    pub next: Index,
    pub prev: Index,
}

impl<T> List<T> {
    pub fn new(options: Options) -> Result<Self> {
        let store = NodeStore::with_capacity(options.capacity).map_err(|e| {
            log!(
                options.log,
                "Construction failed for capacity {}: {}",
                options.capacity,
                e
            );
            e
        })?;
        Ok(List {
            store,
            len: 0,
            quick: true,
            options,
        })
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(Options::with_capacity(capacity))
    }

    /// Releases the storage. Every later call is refused as a `DataFlaw`.
    pub fn destroy(&mut self) {
        self.store.destroy();
        self.len = 0;
        self.quick = false;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Whether physical order currently mirrors logical order
    pub fn is_quick(&self) -> bool {
        self.quick
    }

    pub fn free_head(&self) -> Index {
        self.store.free_head()
    }

    /// Index of the first node, `SENTINEL` when empty
    pub fn head(&self) -> Index {
        if !self.store.exists() {
            return SENTINEL;
        }
        self.store.node(SENTINEL).next
    }

    /// Index of the last node, `SENTINEL` when empty
    pub fn tail(&self) -> Index {
        if !self.store.exists() {
            return SENTINEL;
        }
        self.store.node(SENTINEL).prev
    }

    /// Element held by a live slot
    pub fn get(&self, idx: Index) -> Option<&T> {
        if idx >= self.store.slots() {
            return None;
        }
        self.store.node(idx).elem.as_ref()
    }

    pub fn get_mut(&mut self, idx: Index) -> Option<&mut T> {
        if idx >= self.store.slots() {
            return None;
        }
        self.store.node_mut(idx).elem.as_mut()
    }

    pub fn slot(&self, idx: Index) -> Option<NodeView<'_, T>> {
        if idx >= self.store.slots() {
            return None;
        }
        let node = self.store.node(idx);
        Some(NodeView {
            index: idx,
            elem: node.elem.as_ref(),
            next: node.next,
            prev: node.prev,
        })
    }

    /// Every physical slot in index order, the sentinel first
    pub fn slots(&self) -> impl Iterator<Item = NodeView<'_, T>> {
        (0..self.store.slots()).filter_map(move |idx| self.slot(idx))
    }

    /// Refuses the call when the storage is gone, or when pre-flight
    /// verification is enabled and finds a flaw.
    fn preflight(&self, op: &str) -> Result<()> {
        let verdict = if !self.store.exists() {
            Verification::DataFlaw
        } else if self.options.verify_calls {
            self.check_structure()
        } else {
            return Ok(());
        };
        if verdict.is_ok() {
            return Ok(());
        }
        log!(self.options.log, "{} refused: verification failed ({})", op, verdict);
        Err(Status::new(
            StatusCode::VerificationFailed(verdict),
            &format!("{} refused: {}", op, verdict),
        ))
    }

    fn invalid_position(&self, op: &str, msg: String) -> Status {
        log!(self.options.log, "{} failed: {}", op, msg);
        Status::new(StatusCode::InvalidPosition, &msg)
    }
}
