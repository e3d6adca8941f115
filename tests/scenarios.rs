use linked_deque::{Deque, DequeError};

#[test]
fn push_front_pop_front() {
    let mut d = Deque::new();
    d.push_front(Some(0)).unwrap();
    assert_eq!(Ok(0), d.pop_front());
    assert!(d.is_empty());
}

#[test]
fn push_front_pop_back() {
    let mut d = Deque::new();
    d.push_front(Some(1)).unwrap();
    assert_eq!(Ok(1), d.pop_back());
    assert!(d.is_empty());
}

#[test]
fn push_back_pop_front() {
    let mut d = Deque::new();
    d.push_back(Some(2)).unwrap();
    assert_eq!(Ok(2), d.pop_front());
    assert!(d.is_empty());
}

#[test]
fn push_back_pop_back() {
    let mut d = Deque::new();
    d.push_back(Some(3)).unwrap();
    assert_eq!(Ok(3), d.pop_back());
    assert!(d.is_empty());
}

#[test]
fn push_front_drain_back_is_fifo() {
    let mut d = Deque::new();
    for i in 0..10 {
        d.push_front(Some(i)).unwrap();
    }

    let mut got = Vec::new();
    for _ in 0..10 {
        got.push(d.pop_back().unwrap());
    }

    assert_eq!(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9], got);
    assert!(d.is_empty());
}

#[test]
fn push_front_drain_front_is_lifo() {
    let mut d = Deque::new();
    for i in 0..10 {
        d.push_front(Some(i)).unwrap();
    }

    let mut got = Vec::new();
    for _ in 0..10 {
        got.push(d.pop_front().unwrap());
    }

    assert_eq!(vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0], got);
    assert!(d.is_empty());
}

#[test]
fn push_back_drain_front_keeps_order() {
    let mut d = Deque::new();
    for i in 0..10 {
        d.push_back(Some(i)).unwrap();
    }

    let got: Vec<i32> = (0..10).map(|_| d.pop_front().unwrap()).collect();
    assert_eq!((0..10).collect::<Vec<i32>>(), got);
}

#[test]
fn new_deque_refuses_removal() {
    let mut d: Deque<i32> = Deque::new();
    assert_eq!(Err(DequeError::Empty), d.pop_front());
    assert_eq!(Err(DequeError::Empty), d.pop_back());
    assert_eq!(0, d.len());
}

#[test]
fn iter_reports_every_element_once() {
    let mut d = Deque::new();
    for i in 0..10 {
        d.push_front(Some(i)).unwrap();
    }

    let seen: Vec<i32> = d.iter().unwrap().cloned().collect();
    assert_eq!(vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0], seen);
    assert_eq!(10, d.len());
}

#[test]
fn errors_read_as_messages() {
    let mut d: Deque<i32> = Deque::new();
    let e = d.pop_front().unwrap_err();
    let boxed: Box<dyn std::error::Error> = Box::new(e);
    assert_eq!("deque is empty", boxed.to_string());
}
