use super::List;
use crate::coredef::types::{Index, Verification, FREE_MARKER, SENTINEL};
use crate::log;

impl<T> List<T> {
    /// Read-only structural check. Returns the first violated invariant.
    pub fn verify(&self) -> Verification {
        let verdict = self.check_structure();
        if !verdict.is_ok() {
            log!(self.options.log, "Verification failed: {}", verdict);
        }
        verdict
    }

    pub(super) fn check_structure(&self) -> Verification {
        let store = &self.store;
        if !store.exists() {
            return Verification::DataFlaw;
        }
        let capacity = store.capacity();
        if store.slots() != capacity + 1 {
            return Verification::CapacityFlaw;
        }
        if store.free_head() > capacity {
            return Verification::FreeFlaw;
        }

        let sentinel = store.node(SENTINEL);
        let live = 1..=capacity;
        let empty = sentinel.next == SENTINEL && sentinel.prev == SENTINEL;
        if !empty && !(live.contains(&sentinel.next) && live.contains(&sentinel.prev)) {
            return Verification::SentinelFlaw;
        }

        // Every walk is bounded by the slot count, a cycle shows up as incompleteness.
        let slots = capacity + 1;
        let in_range = |i: Index| i <= capacity;

        let mut visited = 0;
        let mut idx = SENTINEL;
        loop {
            let next = store.node(idx).next;
            if !in_range(next) {
                return Verification::ChainIndexFlaw;
            }
            let back = store.node(next).prev;
            if !in_range(back) {
                return Verification::ChainIndexFlaw;
            }
            if back != idx {
                return Verification::ChainSequenceFlaw;
            }
            idx = next;
            visited += 1;
            if idx == SENTINEL {
                break;
            }
            if visited >= slots {
                return Verification::IncompletenessFlaw;
            }
        }
        if visited != self.len + 1 {
            return Verification::IncompletenessFlaw;
        }

        let mut idx = store.free_head();
        while idx != SENTINEL {
            let node = store.node(idx);
            if node.prev != FREE_MARKER || node.elem.is_some() {
                return Verification::FreeMarkerFlaw;
            }
            if !in_range(node.next) {
                return Verification::FreeIndexFlaw;
            }
            idx = node.next;
            visited += 1;
            if visited > slots {
                return Verification::IncompletenessFlaw;
            }
        }

        if visited != slots {
            return Verification::IncompletenessFlaw;
        }
        Verification::NoFlaws
    }
}
