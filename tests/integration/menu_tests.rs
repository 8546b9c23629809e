//! Scripted menu sessions

use std::io::Cursor;

use library_desk::{
    menu::{Menu, MenuExit},
    AppError, LibraryManager, LoadOutcome,
};
use tempfile::tempdir;

use crate::common::{files_in, StepClock};

#[test]
fn test_session_saved_and_reloaded() {
    let dir = tempdir().expect("tempdir");
    let files = files_in(dir.path());
    let script = "1\nDune\nFrank Herbert\n111\n\
                  1\nEmma\nJane Austen\n222\n\
                  3\nPaul\npaul@example.org\n\
                  5\n1\n111\n\
                  8\n\
                  9\n";

    let mut manager = LibraryManager::new(StepClock::default());
    let mut output = Vec::new();
    let exit = Menu::new(&mut manager, &files, Cursor::new(script), &mut output)
        .run()
        .unwrap();
    let out = String::from_utf8(output).unwrap();

    assert!(matches!(exit, MenuExit::Saved));
    assert!(out.contains("Reader added with Id=1"));
    assert!(out.contains("Issued."));
    assert!(out.contains("Available books:\nEmma — Jane Austen — 222\nActive loans:\n"));
    assert!(out.contains("ISBN: 111 ReaderId: 1 since 2024-03-01T10:00:00Z"));
    assert!(out.ends_with("Saved. Exiting.\n"));

    let mut reloaded = LibraryManager::new(StepClock::default());
    assert!(matches!(
        reloaded.load(&files),
        LoadOutcome::Loaded { books: 2, readers: 1, loans: 1 }
    ));
}

#[test]
fn test_failed_save_still_exits() {
    let dir = tempdir().expect("tempdir");
    let files = files_in(&dir.path().join("missing"));
    let script = "1\nDune\nHerbert\n111\n9\n";

    let mut manager = LibraryManager::new(StepClock::default());
    let mut output = Vec::new();
    let exit = Menu::new(&mut manager, &files, Cursor::new(script), &mut output)
        .run()
        .unwrap();
    let out = String::from_utf8(output).unwrap();

    match exit {
        MenuExit::SaveFailed(AppError::Save(failures)) => assert_eq!(failures.len(), 3),
        other => panic!("expected failed save, got {:?}", other),
    }
    assert!(out.contains("Save failed: Failed to save 3 collection(s)"));
    assert!(out.ends_with("Exiting.\n"));
    assert!(!out.contains("Saved. Exiting."));
}

#[test]
fn test_failed_operations_report_failure() {
    let dir = tempdir().expect("tempdir");
    let files = files_in(dir.path());
    let script = "1\nDune\nHerbert\n111\n\
                  1\nDuplicate\nSomeone\n111\n\
                  2\n999\n\
                  4\n7\n\
                  5\n7\n111\n\
                  6\n1\n111\n\
                  0\n";

    let mut manager = LibraryManager::new(StepClock::default());
    let mut output = Vec::new();
    let exit = Menu::new(&mut manager, &files, Cursor::new(script), &mut output)
        .run()
        .unwrap();
    let out = String::from_utf8(output).unwrap();

    assert!(matches!(exit, MenuExit::Discarded));
    assert!(out.contains("Book exists."));
    assert!(out.contains("Remove failed (not found or loaned)."));
    assert!(out.contains("Not found."));
    assert!(out.contains("Issue failed."));
    assert!(out.contains("Return failed."));
    // Nothing written on exit without save
    assert!(!files.books.exists());
}
