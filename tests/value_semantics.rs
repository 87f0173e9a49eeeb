use cow_linked_list::collections::linked::{LinkedList, Position};
use expect_test::expect;

fn collect(list: &LinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_copies_behave_as_values() {
    let mut l = LinkedList::new();
    l.push(1);
    l.push(2);
    l.push(3);
    expect!["3 -> 2 -> 1"].assert_eq(&l.to_string());

    let mut m = l.clone();
    m.append(9);
    expect!["3 -> 2 -> 1 -> 9"].assert_eq(&m.to_string());
    expect!["3 -> 2 -> 1"].assert_eq(&l.to_string());
}

#[test]
fn test_remove_after_on_shared_chain() {
    let a: LinkedList<i32> = (1..=4).collect();
    let mut b = a.clone();

    let first = b.node_at(0).expect("list has four elements");
    assert_eq!(b.remove_after(&first), Some(2));
    assert_eq!(collect(&b), [1, 3, 4]);
    assert_eq!(collect(&a), [1, 2, 3, 4]);
}

#[test]
fn test_traversal_by_position() {
    let list: LinkedList<i32> = (0..10).collect();

    let mut sum = 0;
    let mut position: Position<i32> = list.start();
    while !position.is_end() {
        sum += position.value().copied().unwrap_or_default();
        position = position.advanced();
    }
    assert_eq!(sum, 45);
    assert_eq!(sum, list.iter().sum::<i32>());

    let mut restarted = list.start();
    restarted.advance();
    assert_eq!(restarted.value(), Some(&1), "Traversal should restart from the front.");
}

#[test]
fn test_push_then_pop_restores_every_copy() {
    let original: LinkedList<i32> = (0..5).collect();
    let mut copy = original.clone();

    copy.push(-1);
    assert_eq!(copy.pop(), Some(-1));
    copy.append(5);
    assert_eq!(copy.remove_last(), Some(5));

    assert_eq!(copy, original);
    assert_eq!(collect(&original), [0, 1, 2, 3, 4]);
}
