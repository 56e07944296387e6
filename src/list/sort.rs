use super::List;
use crate::coredef::{error::Result, types::SENTINEL};

impl<T> List<T> {
    /// Compacts live nodes into slots `1..=len` in logical order and turns quick
    /// mode back on. An in-place permutation of slots, not a sort by value.
    pub fn sort(&mut self) -> Result<()> {
        self.preflight("sort")?;
        if self.quick {
            return Ok(());
        }

        let mut idx = self.store.node(SENTINEL).next;
        let mut nseq = 1;
        while idx != SENTINEL {
            self.store.swap(idx, nseq);
            idx = self.store.node(nseq).next;
            nseq += 1;
        }
        debug_assert_eq!(nseq, self.len + 1);

        self.store.rebuild_free(nseq);
        self.quick = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::coredef::{
        error::StatusCode,
        options::Options,
        types::{Verification, SENTINEL},
    };
    use crate::list::List;
    use crate::utils::logical_values;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_sort_front_inserted() {
        let mut list = List::with_capacity(8).unwrap();
        for i in 1..=5 {
            list.insert_front(i).unwrap();
        }
        assert!(!list.is_quick());
        list.sort().unwrap();

        assert!(list.is_quick());
        assert_eq!(logical_values(&list), vec![5, 4, 3, 2, 1]);
        for k in 1..=5 {
            assert_eq!(list.resolve(k).unwrap(), k);
            assert_eq!(list.get(k), Some(&(6 - k as i32)));
        }
        assert_eq!(list.free_head(), 6);
        assert_eq!(list.verify(), Verification::NoFlaws);
    }

    #[test]
    fn test_sort_already_quick() {
        let mut list = List::with_capacity(4).unwrap();
        for i in 1..=3 {
            list.insert_back(i).unwrap();
        }
        assert!(list.is_quick());
        let before: Vec<_> = list.slots().map(|v| (v.elem.copied(), v.next, v.prev)).collect();
        list.sort().unwrap();
        let after: Vec<_> = list.slots().map(|v| (v.elem.copied(), v.next, v.prev)).collect();
        assert_eq!(before, after);
        assert!(list.is_quick());
    }

    #[test]
    fn test_sort_empty_and_full() {
        let mut list: List<i32> = List::with_capacity(3).unwrap();
        list.insert_front(1).unwrap();
        list.insert_front(2).unwrap();
        list.delete_front().unwrap();
        list.delete_front().unwrap();
        assert!(!list.is_quick());
        list.sort().unwrap();
        assert!(list.is_quick());
        assert_eq!(list.free_head(), 1);
        assert_eq!(list.verify(), Verification::NoFlaws);

        let mut list = List::with_capacity(3).unwrap();
        for i in 1..=3 {
            list.insert_front(i).unwrap();
        }
        list.sort().unwrap();
        assert_eq!(list.free_head(), SENTINEL);
        assert_eq!(logical_values(&list), vec![3, 2, 1]);
        assert_eq!(list.verify(), Verification::NoFlaws);

        // a sorted full list grows into slot `len + 1`
        assert_eq!(list.insert_back(0).unwrap(), 4);
        assert!(list.is_quick());
    }

    #[test]
    fn test_sort_adjacent_swaps() {
        // logical order 2 -> 1 -> 3 in slots, forces swapping neighbours
        let mut list = List::with_capacity(4).unwrap();
        let one = list.insert_back(1).unwrap();
        list.insert_before(one, 2).unwrap();
        list.insert_back(3).unwrap();
        list.sort().unwrap();
        assert_eq!(logical_values(&list), vec![2, 1, 3]);
        assert_eq!(*list.take(1).unwrap(), 2);
        assert_eq!(list.get(1), Some(&2));
        assert_eq!(list.verify(), Verification::NoFlaws);
    }

    #[test]
    fn test_sort_after_deletes() {
        let mut list = List::with_capacity(8).unwrap();
        for i in 0..8 {
            list.insert_back(i).unwrap();
        }
        list.delete_at(2).unwrap();
        list.delete_at(5).unwrap();
        list.delete_front().unwrap();
        list.sort().unwrap();

        assert_eq!(logical_values(&list), vec![2, 3, 5, 6, 7]);
        for k in 1..=5 {
            assert_eq!(list.resolve(k).unwrap(), k);
        }
        assert_eq!(list.take(6).unwrap_err().code, StatusCode::InvalidPosition);
        assert_eq!(list.free_head(), 6);
        assert_eq!(list.verify(), Verification::NoFlaws);
    }

    #[test]
    fn test_sort_random() {
        const N: usize = 100;
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..N {
            let mut list = List::with_capacity(rng.gen_range(0..16)).unwrap();
            let mut handles = vec![];
            for i in 0..rng.gen_range(1..64) {
                let idx = if handles.is_empty() || rng.gen_bool(0.3) {
                    list.insert_front(i).unwrap()
                } else {
                    let at = handles[rng.gen_range(0..handles.len())];
                    list.insert_after(at, i).unwrap()
                };
                handles.push(idx);
            }
            for _ in 0..rng.gen_range(0..handles.len()) {
                let pos = rng.gen_range(0..handles.len());
                list.delete_at(handles.swap_remove(pos)).unwrap();
            }

            let before = logical_values(&list);
            list.sort().unwrap();
            assert!(list.is_quick());
            assert_eq!(logical_values(&list), before);
            for (k, value) in before.iter().enumerate() {
                assert_eq!(list.resolve(k + 1).unwrap(), k + 1);
                assert_eq!(list.take(k + 1).unwrap(), value);
            }
            assert_eq!(list.verify(), Verification::NoFlaws);
        }
    }

    #[test]
    fn test_sort_large_unchecked() {
        use time_test::time_test;
        time_test!();

        const N: usize = 100_000;
        let options = Options {
            capacity: 0,
            ..Options::unchecked()
        };
        let mut list = List::new(options).unwrap();
        for i in 0..N {
            if i % 2 == 0 {
                list.insert_front(i).unwrap();
            } else {
                list.insert_back(i).unwrap();
            }
        }
        assert_eq!(list.capacity(), (1 << 17) - 1);
        assert_eq!(list.verify(), Verification::NoFlaws);

        list.sort().unwrap();
        assert_eq!(list.verify(), Verification::NoFlaws);
        assert_eq!(*list.take(1).unwrap(), N - 2);
        assert_eq!(*list.take(N / 2).unwrap(), 0);
        assert_eq!(*list.take(N / 2 + 1).unwrap(), 1);
        assert_eq!(*list.take(N).unwrap(), N - 1);
    }
}
