use super::List;
use crate::coredef::{
    error::Result,
    types::{Index, SeqNum, SENTINEL},
};

impl<T> List<T> {
    /// Resolves a 1-based sequence number to a slot index, 0 being the sentinel.
    /// O(1) in quick mode, otherwise a walk from the sentinel.
    pub fn resolve(&self, nseq: SeqNum) -> Result<Index> {
        self.preflight("resolve")?;
        self.locate("resolve", nseq)
    }

    /// Element at logical position `nseq`
    pub fn take(&self, nseq: SeqNum) -> Result<&T> {
        self.preflight("take")?;
        if nseq == SENTINEL {
            return Err(self.invalid_position("take", "the sentinel holds no element".into()));
        }
        let idx = self.locate("take", nseq)?;
        self.store
            .node(idx)
            .elem
            .as_ref()
            .ok_or_else(|| self.invalid_position("take", format!("index {} is free", idx)))
    }

    /// Inserts before the `nseq`-th node, `nseq == 0` appends
    pub fn seq_insert_before(&mut self, value: T, nseq: SeqNum) -> Result<Index> {
        self.preflight("seq_insert_before")?;
        let idx = self.locate("seq_insert_before", nseq)?;
        self.splice_before("seq_insert_before", idx, value)
    }

    /// Inserts after the `nseq`-th node, `nseq == 0` prepends
    pub fn seq_insert_after(&mut self, value: T, nseq: SeqNum) -> Result<Index> {
        self.preflight("seq_insert_after")?;
        let idx = self.locate("seq_insert_after", nseq)?;
        self.splice_after("seq_insert_after", idx, value)
    }

    pub fn seq_delete(&mut self, nseq: SeqNum) -> Result<T> {
        self.preflight("seq_delete")?;
        if nseq == SENTINEL {
            return Err(self.invalid_position("seq_delete", "cannot delete the sentinel".into()));
        }
        let idx = self.locate("seq_delete", nseq)?;
        self.remove("seq_delete", idx)
    }

    fn locate(&self, op: &str, nseq: SeqNum) -> Result<Index> {
        if nseq > self.len {
            return Err(self.invalid_position(
                op,
                format!("sequence number {} exceeds length {}", nseq, self.len),
            ));
        }
        if self.quick {
            return Ok(nseq);
        }

        let mut idx = SENTINEL;
        for _ in 0..nseq {
            idx = self.store.node(idx).next;
        }
        Ok(idx)
    }
}
