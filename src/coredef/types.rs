use std::fmt::Display;

/// Physical slot index inside the node array
pub type Index = usize;
/// 1-based logical rank of a live node, 0 denotes the sentinel
pub type SeqNum = usize;

/// The fictitious node closing the circular chain
pub const SENTINEL: Index = 0;
/// Stored in `prev` of every slot on the free chain
pub const FREE_MARKER: Index = usize::MAX;
pub const DEFAULT_CAPACITY: usize = 8;

/// Outcome of `delete_front` / `delete_back`.
/// An empty list is not an error, so it gets its own variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Deletion<T> {
    Deleted(T),
    NoObjectToDelete,
}

/// Verifier verdict: the first violated invariant, in checking order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    NoFlaws,

    /// Storage is gone (the list was destroyed)
    DataFlaw,
    /// Capacity disagrees with the storage length
    CapacityFlaw,
    /// Free head points outside the array
    FreeFlaw,
    /// Sentinel links are neither both empty nor both in range
    SentinelFlaw,
    /// A link on the main chain holds an impossible index
    ChainIndexFlaw,
    /// `prev` of a node does not point back to its predecessor
    ChainSequenceFlaw,
    /// A free slot lost its free marker
    FreeMarkerFlaw,
    /// A link on the free chain holds an impossible index
    FreeIndexFlaw,
    /// Main and free chains do not cover every slot exactly once
    IncompletenessFlaw,
}

impl Verification {
    pub fn is_ok(&self) -> bool {
        *self == Verification::NoFlaws
    }
}

impl Display for Verification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let desc = match self {
            Verification::NoFlaws => "no flaws",
            Verification::DataFlaw => "storage does not exist",
            Verification::CapacityFlaw => "capacity does not match storage",
            Verification::FreeFlaw => "free head out of range",
            Verification::SentinelFlaw => "impossible sentinel links",
            Verification::ChainIndexFlaw => "impossible index on the main chain",
            Verification::ChainSequenceFlaw => "next/prev incongruity on the main chain",
            Verification::FreeMarkerFlaw => "free node without free marker",
            Verification::FreeIndexFlaw => "impossible index on the free chain",
            Verification::IncompletenessFlaw => "chains do not cover every slot",
        };
        write!(f, "{}", desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_display() {
        assert!(Verification::NoFlaws.is_ok());
        assert!(!Verification::FreeFlaw.is_ok());
        assert_eq!(Verification::NoFlaws.to_string(), "no flaws");
        assert_eq!(
            Verification::ChainIndexFlaw.to_string(),
            "impossible index on the main chain"
        );
    }
}
