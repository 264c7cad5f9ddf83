use queues::error::Error;
use queues::{Blocking, Circular, Linked, Options, Priority, Queue};

// Every queue below is created with room for at least 8 elements and holds
// [1, 2, 3] in that order, so they all behave as plain FIFOs here.

fn blocking() -> Blocking<i32> {
    Blocking::new([1, 2, 3], Options::new().capacity(8))
}

fn circular() -> Circular<i32> {
    Circular::with_capacity([1, 2, 3], 8)
}

fn linked() -> Linked<i32> {
    Linked::new([1, 2, 3])
}

fn priority() -> Priority<i32> {
    fn less(a: &i32, b: &i32) -> bool {
        a < b
    }
    Priority::new([3, 1, 2], less as fn(&i32, &i32) -> bool, Options::new())
}

fn check_fifo<Q: Queue<i32>>(queue: Q) {
    for elem in 4..=6 {
        queue.offer(elem).unwrap();
    }
    let got: Vec<i32> = std::iter::from_fn(|| queue.get().ok()).collect();
    assert_eq!(got, vec![1, 2, 3, 4, 5, 6]);
}

fn check_empty<Q: Queue<i32>>(queue: Q) {
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.size(), 0);
    assert_eq!(queue.get(), Err(Error::NoElementsAvailable));
    assert_eq!(queue.peek(), Err(Error::NoElementsAvailable));
    assert_eq!(queue.drain().count(), 0);
    assert!(queue.clear().is_empty());
}

fn check_peek<Q: Queue<i32>>(queue: Q) {
    while !queue.is_empty() {
        let size = queue.size();
        let head = queue.peek().unwrap();
        assert_eq!(queue.size(), size);
        assert_eq!(queue.get(), Ok(head));
    }
}

fn check_contains_after_get<Q: Queue<i32>>(queue: Q) {
    while let Ok(head) = queue.peek() {
        assert!(queue.contains(&head));
        assert_eq!(queue.get(), Ok(head));
        assert!(!queue.contains(&head));
    }
}

fn check_reset<Q: Queue<i32>>(queue: Q) {
    let initial = {
        let elems = queue.clear();
        queue.reset();
        elems
    };

    // Arbitrary mutation between resets
    let script: &[fn(&Q)] = &[
        |q| {
            q.get().ok();
        },
        |q| {
            q.offer(42).ok();
        },
        |q| {
            q.clear();
        },
        |q| {
            q.drain().take(1).for_each(drop);
        },
        |q| {
            q.offer(7).ok();
            q.offer(8).ok();
        },
    ];

    for steps in 0..script.len() {
        for step in &script[..=steps] {
            step(&queue);
        }
        queue.reset();
        assert_eq!(queue.size(), initial.len());
        assert_eq!(queue.clear(), initial);
        queue.reset();
    }
}

fn check_drain<Q: Queue<i32>>(queue: Q) {
    let mut drain = queue.drain();
    assert_eq!(drain.next(), Some(1));
    assert_eq!(drain.collect::<Vec<_>>(), vec![2, 3]);
    assert!(queue.is_empty());
}

fn check_partial_drain<Q: Queue<i32>>(queue: Q) {
    assert_eq!(queue.drain().take(1).collect::<Vec<_>>(), vec![1]);
    assert_eq!(queue.size(), 2);
    assert_eq!(queue.clear(), vec![2, 3]);
}

#[test]
fn fifo() {
    check_fifo(blocking());
    check_fifo(circular());
    check_fifo(linked());
}

#[test]
fn priority_order_matches_fifo_for_sorted_input() {
    check_fifo(priority());
}

#[test]
fn empty() {
    check_empty(blocking());
    check_empty(circular());
    check_empty(linked());
    check_empty(priority());
}

#[test]
fn peek_then_get() {
    check_peek(blocking());
    check_peek(circular());
    check_peek(linked());
    check_peek(priority());
}

#[test]
fn contains_after_get() {
    check_contains_after_get(blocking());
    check_contains_after_get(circular());
    check_contains_after_get(linked());
    check_contains_after_get(priority());
}

#[test]
fn reset_restores_snapshot() {
    check_reset(blocking());
    check_reset(circular());
    check_reset(linked());
    check_reset(priority());
}

#[test]
fn drain() {
    check_drain(blocking());
    check_drain(circular());
    check_drain(linked());
}

#[test]
fn partial_drain_leaves_the_rest() {
    check_partial_drain(blocking());
    check_partial_drain(circular());
    check_partial_drain(linked());
    check_partial_drain(priority());
}

#[test]
fn circular_end_to_end() {
    let queue = Circular::with_capacity([1, 2, 3], 3);
    queue.offer(4).unwrap();
    assert_eq!(queue.clear(), vec![2, 3, 4]);
}

#[test]
fn priority_end_to_end() {
    let queue = Priority::new([4, 1, 2], |a: &i32, b: &i32| a < b, Options::new().capacity(4));
    queue.offer(5).unwrap();
    let got: Vec<i32> = std::iter::from_fn(|| queue.get().ok()).collect();
    assert_eq!(got, vec![1, 2, 4, 5]);
}

#[test]
fn bounded_offer_rejected_without_change() {
    let blocking = Blocking::new([1, 2], Options::new().capacity(2));
    assert_eq!(blocking.offer(3), Err(Error::QueueFull));
    assert_eq!(blocking.clear(), vec![1, 2]);

    let priority = Priority::new([1, 2], |a: &i32, b: &i32| a < b, Options::new().capacity(2));
    assert_eq!(priority.offer(0), Err(Error::QueueFull));
    assert_eq!(priority.clear(), vec![1, 2]);
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::NoElementsAvailable.to_string(),
        "no elements available in the queue"
    );
    assert_eq!(Error::QueueFull.to_string(), "queue is full");
}
