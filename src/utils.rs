use crate::coredef::types::{Index, SENTINEL};
use crate::list::List;

/// Elements in logical order, read by following `next` links from the sentinel.
/// Bounded by the slot count so a corrupted chain cannot loop forever.
pub fn logical_values<T: Clone>(list: &List<T>) -> Vec<T> {
    let mut values = Vec::with_capacity(list.len());
    let mut idx: Index = list.head();
    for _ in 0..list.capacity() {
        if idx == SENTINEL {
            break;
        }
        let Some(view) = list.slot(idx) else {
            break;
        };
        if let Some(elem) = view.elem {
            values.push(elem.clone());
        }
        idx = view.next;
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_values() {
        let mut list = List::with_capacity(4).unwrap();
        assert!(logical_values(&list).is_empty());
        list.insert_back("b".to_owned()).unwrap();
        list.insert_front("a".to_owned()).unwrap();
        assert_eq!(logical_values(&list), vec!["a", "b"]);
    }
}
