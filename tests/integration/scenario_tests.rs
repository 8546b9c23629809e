//! End-to-end lending scenarios

use library_desk::{models::{Book, Reader}, AppError, LibraryManager};

use crate::common::StepClock;

#[test]
fn test_lend_return_and_remove_scenario() {
    let mut manager = LibraryManager::new(StepClock::default());

    manager.add_book(Book::new("Dune", "Herbert", "111")).unwrap();
    assert_eq!(manager.next_reader_id(), 1);
    manager
        .add_reader(Reader::new(1, "Paul", "paul@arrakis.example"))
        .unwrap();

    manager.issue_loan("111", 1).unwrap();
    assert!(!manager.book("111").unwrap().is_available);

    assert!(matches!(manager.remove_book("111"), Err(AppError::BusinessRule(_))));

    manager.return_book("111", 1).unwrap();
    assert!(manager.book("111").unwrap().is_available);

    manager.remove_book("111").unwrap();
    assert!(manager.book("111").is_none());
    // History survives the book
    assert_eq!(manager.loans().len(), 1);
    assert!(manager.loans()[0].return_date.is_some());
}

#[test]
fn test_next_reader_id_exceeds_every_id() {
    let mut manager = LibraryManager::new(StepClock::default());
    for _ in 0..5 {
        let id = manager.next_reader_id();
        manager.add_reader(Reader::new(id, "R", "")).unwrap();
    }
    manager.remove_reader(5).unwrap();
    manager.add_reader(Reader::new(40, "Late", "")).unwrap();

    let next = manager.next_reader_id();
    assert_eq!(next, 41);
    assert!(manager.readers().all(|r| r.id < next));
}

#[test]
fn test_book_can_be_lent_again_after_return() {
    let mut manager = LibraryManager::new(StepClock::default());
    manager.add_book(Book::new("Dune", "Herbert", "111")).unwrap();
    manager.add_reader(Reader::new(1, "A", "")).unwrap();
    manager.add_reader(Reader::new(2, "B", "")).unwrap();

    manager.issue_loan("111", 1).unwrap();
    manager.return_book("111", 1).unwrap();
    manager.issue_loan("111", 2).unwrap();

    assert_eq!(manager.loans().len(), 2);
    let active = manager.active_loans();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].reader_id, 2);
    assert_eq!(active[0].loan_date, "2024-03-01T10:02:00Z");
}
