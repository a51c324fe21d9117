//! Stack-safety tests for PersistentList.
//!
//! Every operation runs on lists far longer than a recursive implementation
//! could handle. The tests run on a thread with a deliberately small stack so
//! that any recursion proportional to the list length overflows.

use conslist::persistent::PersistentList;
use conslist::typeclass::{Foldable, Semigroup};
use rstest::rstest;
use std::thread;

const LARGE: usize = 200_000;
const SMALL_STACK: usize = 256 * 1024;

fn on_small_stack<F>(body: F)
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .stack_size(SMALL_STACK)
        .spawn(body)
        .expect("failed to spawn test thread")
        .join()
        .expect("test thread panicked");
}

#[rstest]
fn test_build_and_drop_large_list() {
    on_small_stack(|| {
        let list: PersistentList<usize> = (0..LARGE).collect();
        assert_eq!(list.len(), LARGE);
        drop(list);
    });
}

#[rstest]
fn test_cons_chain_and_drop() {
    on_small_stack(|| {
        let list = (0..LARGE).fold(PersistentList::new(), |accumulator, value| {
            accumulator.cons(value)
        });
        assert_eq!(list.head(), Ok(&(LARGE - 1)));
    });
}

#[rstest]
fn test_at_and_remove_at_on_large_list() {
    on_small_stack(|| {
        let list: PersistentList<usize> = (0..LARGE).collect();
        assert_eq!(list.at(LARGE - 1), Ok(&(LARGE - 1)));
        assert!(list.at(LARGE).is_err());
        let removed = list.remove_at(LARGE - 1);
        assert_eq!(removed.len(), LARGE - 1);
        assert_eq!(list.remove_at(LARGE), list);
    });
}

#[rstest]
fn test_reverse_and_concat_on_large_list() {
    on_small_stack(|| {
        let list: PersistentList<usize> = (0..LARGE).collect();
        let reversed = list.reverse();
        assert_eq!(reversed.head(), Ok(&(LARGE - 1)));
        assert_eq!(reversed.reverse(), list);

        let combined = list.concat(&reversed);
        assert_eq!(combined.len(), 2 * LARGE);
        assert_eq!(combined.at(LARGE), Ok(&(LARGE - 1)));
        assert_eq!(list.clone().combine(reversed).len(), 2 * LARGE);
    });
}

#[rstest]
fn test_map_flat_map_filter_on_large_list() {
    on_small_stack(|| {
        let list: PersistentList<usize> = (0..LARGE).collect();
        assert_eq!(list.map(|x| x + 1).at(LARGE - 1), Ok(&LARGE));
        let doubled = list.flat_map(|x| PersistentList::from_sequence([*x, *x]));
        assert_eq!(doubled.len(), 2 * LARGE);
        assert_eq!(list.filter(|x| x % 2 == 0).len(), LARGE / 2);
    });
}

#[rstest]
fn test_folds_equality_and_display_on_large_list() {
    on_small_stack(|| {
        let list: PersistentList<usize> = (0..LARGE).collect();
        let sum = Foldable::fold_right(&list, 0usize, |x, accumulator| accumulator + x);
        assert_eq!(sum, LARGE * (LARGE - 1) / 2);
        assert_eq!(list, list.clone());
        assert!(list.to_string().ends_with(&format!("{}]", LARGE - 1)));
    });
}

#[rstest]
fn test_drop_of_shared_suffix_versions() {
    on_small_stack(|| {
        let shared: PersistentList<usize> = (0..LARGE).collect();
        let versions: Vec<PersistentList<usize>> = (0..8).map(|index| shared.cons(index)).collect();
        drop(shared);
        drop(versions);
    });
}
