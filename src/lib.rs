//! slotlist: a doubly linked list packed into one contiguous array
//!
//! ```
//! use slotlist::{Deletion, List, Options, Verification};
//!
//! let mut list = List::new(Options::default()).unwrap();
//! list.insert_front(1).unwrap();
//! list.insert_front(2).unwrap();
//! let three = list.insert_front(3).unwrap();
//!
//! assert_eq!(list.delete_back().unwrap(), Deletion::Deleted(1));
//! assert_eq!(*list.take(1).unwrap(), 3);
//! assert_eq!(list.get(three), Some(&3));
//!
//! // Front inserts leave physical order reversed, positional access walks the chain.
//! // Sorting compacts the nodes and makes it O(1) again.
//! assert!(!list.is_quick());
//! list.sort().unwrap();
//! assert_eq!(list.resolve(2).unwrap(), 2);
//! assert_eq!(list.verify(), Verification::NoFlaws);
//! ```
//!

mod coredef;
mod list;
mod utils;

pub use coredef::{
    error::{Result, Status, StatusCode},
    log::{stderr, Logger, SharedLogger},
    options::Options,
    types::{Deletion, Index, SeqNum, Verification, DEFAULT_CAPACITY, FREE_MARKER, SENTINEL},
};

pub use list::{List, NodeView};

pub use utils::logical_values;
