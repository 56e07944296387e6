use super::List;
use crate::coredef::{
    error::Result,
    types::{Deletion, Index, SENTINEL},
};
use crate::log;

impl<T> List<T> {
    pub fn insert_front(&mut self, value: T) -> Result<Index> {
        self.preflight("insert_front")?;
        let at = self.allocate("insert_front")?;
        self.link_after(SENTINEL, at, value);
        Ok(at)
    }

    pub fn insert_back(&mut self, value: T) -> Result<Index> {
        self.preflight("insert_back")?;
        let at = self.allocate("insert_back")?;
        let tail = self.store.node(SENTINEL).prev;
        self.link_after(tail, at, value);
        Ok(at)
    }

    /// Inserts before the node at `idx`. `idx == SENTINEL` appends.
    pub fn insert_before(&mut self, idx: Index, value: T) -> Result<Index> {
        self.preflight("insert_before")?;
        self.splice_before("insert_before", idx, value)
    }

    /// Inserts after the node at `idx`. `idx == SENTINEL` prepends.
    pub fn insert_after(&mut self, idx: Index, value: T) -> Result<Index> {
        self.preflight("insert_after")?;
        self.splice_after("insert_after", idx, value)
    }

    pub fn delete_front(&mut self) -> Result<Deletion<T>> {
        self.preflight("delete_front")?;
        let head = self.store.node(SENTINEL).next;
        if head == SENTINEL {
            return Ok(Deletion::NoObjectToDelete);
        }
        self.remove("delete_front", head).map(Deletion::Deleted)
    }

    pub fn delete_back(&mut self) -> Result<Deletion<T>> {
        self.preflight("delete_back")?;
        let tail = self.store.node(SENTINEL).prev;
        if tail == SENTINEL {
            return Ok(Deletion::NoObjectToDelete);
        }
        self.remove("delete_back", tail).map(Deletion::Deleted)
    }

    pub fn delete_at(&mut self, idx: Index) -> Result<T> {
        self.preflight("delete_at")?;
        self.remove("delete_at", idx)
    }

    pub(super) fn splice_before(&mut self, op: &str, idx: Index, value: T) -> Result<Index> {
        self.check_linked(op, idx)?;
        let at = self.allocate(op)?;
        let prev = self.store.node(idx).prev;
        self.link_after(prev, at, value);
        Ok(at)
    }

    pub(super) fn splice_after(&mut self, op: &str, idx: Index, value: T) -> Result<Index> {
        self.check_linked(op, idx)?;
        let at = self.allocate(op)?;
        self.link_after(idx, at, value);
        Ok(at)
    }

    pub(super) fn remove(&mut self, op: &str, idx: Index) -> Result<T> {
        if idx == SENTINEL {
            return Err(self.invalid_position(op, "cannot delete the sentinel".into()));
        }
        self.check_linked(op, idx)?;
        match self.unlink(idx) {
            Some(value) => Ok(value),
            None => Err(self.invalid_position(op, format!("index {} held nothing", idx))),
        }
    }

    /// `idx` must be the sentinel or a live node
    fn check_linked(&self, op: &str, idx: Index) -> Result<()> {
        if idx > self.capacity() {
            return Err(self.invalid_position(
                op,
                format!("index {} exceeds capacity {}", idx, self.capacity()),
            ));
        }
        if self.store.is_free(idx) {
            return Err(self.invalid_position(op, format!("index {} points at a free node", idx)));
        }
        Ok(())
    }

    fn allocate(&mut self, op: &str) -> Result<Index> {
        let old_capacity = self.capacity();
        let idx = self.store.allocate().map_err(|e| {
            log!(
                self.options.log,
                "{} failed: resize up from capacity {} failed: {}",
                op,
                old_capacity,
                e
            );
            e
        })?;
        if self.capacity() != old_capacity {
            log!(
                self.options.log,
                "Resized from capacity {} to {}",
                old_capacity,
                self.capacity()
            );
        }
        Ok(idx)
    }

    /// Splices the freshly allocated slot `at` right after `idx`.
    /// Quick mode survives only an append that lands in slot `len`.
    fn link_after(&mut self, idx: Index, at: Index, value: T) {
        let next = self.store.node(idx).next;
        let node = self.store.node_mut(at);
        node.elem = Some(value);
        node.prev = idx;
        node.next = next;
        self.store.node_mut(next).prev = at;
        self.store.node_mut(idx).next = at;

        self.len += 1;
        self.quick = self.quick && next == SENTINEL && at == self.len;
    }

    /// Unlinks a live node and returns its slot to the free chain.
    /// Quick mode survives only removing the tail from slot `len`.
    fn unlink(&mut self, idx: Index) -> Option<T> {
        let (prev, next) = {
            let node = self.store.node(idx);
            (node.prev, node.next)
        };
        self.quick = self.quick && next == SENTINEL && idx == self.len;

        self.store.node_mut(prev).next = next;
        self.store.node_mut(next).prev = prev;
        self.len -= 1;
        self.store.release(idx)
    }
}
