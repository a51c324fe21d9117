//! `demo` subcommand
//!
//! Builds [1, 2, 3, 4] by prepending onto the empty list and prints the
//! result of each list operation, one per line.

use conslist::persistent::{ListError, PersistentList};

/// Renders the demo report.
pub fn report() -> Vec<String> {
    let list = PersistentList::new().cons(4).cons(3).cons(2).cons(1);
    let empty: PersistentList<i32> = PersistentList::new();
    let render = |result: Result<&i32, ListError>| match result {
        Ok(value) => value.to_string(),
        Err(error) => format!("error: {error}"),
    };

    vec![
        format!("list = {list}"),
        format!("head = {}", render(list.head())),
        format!("at(2) = {}", render(list.at(2))),
        format!("at(10) = {}", render(list.at(10))),
        format!("length = {}", list.len()),
        format!("reverse = {}", list.reverse()),
        format!("from_sequence(1..=5) = {}", PersistentList::from_sequence(1..=5)),
        format!(
            "concat([5, 6]) = {}",
            list.concat(&PersistentList::from_sequence([5, 6]))
        ),
        format!("remove_at(1) = {}", list.remove_at(1)),
        format!("remove_at(10) = {}", list.remove_at(10)),
        format!("map(x * 2) = {}", list.map(|x| x * 2)),
        format!(
            "flat_map([x, 2x]) = {}",
            list.flat_map(|x| PersistentList::from_sequence([*x, x * 2]))
        ),
        format!("filter(odd) = {}", list.filter(|x| x % 2 == 1)),
        format!("empty = {empty}"),
        format!("empty.head = {}", render(empty.head())),
    ]
}

pub fn run() {
    for line in report() {
        println!("{line}");
    }
}
