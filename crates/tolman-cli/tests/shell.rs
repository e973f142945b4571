//! End-to-end shell flows over a temporary store file.

use tempfile::TempDir;

use tolman_cli::shell::{EditShell, ShellReply};
use tolman_model::ItemId;
use tolman_persistence::{StoreFile, load_store, seed_items};

fn new_shell(dir: &TempDir) -> EditShell {
    EditShell::new(StoreFile::new(seed_items()), dir.path().join("items.json"))
}

fn reply(shell: &mut EditShell, line: &str) -> String {
    match shell.handle_line(line) {
        ShellReply::Continue(text) => text,
        ShellReply::Quit(text) => panic!("unexpected quit reply: {text}"),
    }
}

#[test]
fn test_list_shows_the_seed() {
    let dir = TempDir::new().expect("tempdir");
    let mut shell = new_shell(&dir);
    let text = reply(&mut shell, "list");
    assert_eq!(
        text,
        "1  Item 1\n\
         \x20 1-1  Tolerance A  5 (0 - 10)\n\
         \x20 1-2  Tolerance B  8 (0 - 15)\n\
         2  Item 2\n\
         \x20 2-1  Tolerance A  3 (0 - 10)\n\
         \x20 2-2  Tolerance B  7 (0 - 15)"
    );
}

#[test]
fn test_open_renders_the_session_view() {
    let dir = TempDir::new().expect("tempdir");
    let mut shell = new_shell(&dir);
    assert_eq!(
        reply(&mut shell, "open 1"),
        "Editing 1  Item 1\n  1-1  Tolerance A  5 (0 - 10)\n  1-2  Tolerance B  8 (0 - 15)"
    );
    assert_eq!(reply(&mut shell, "open 9"), "error: Unknown item: 9");
}

#[test]
fn test_set_reports_the_fresh_error_set() {
    let dir = TempDir::new().expect("tempdir");
    let mut shell = new_shell(&dir);
    reply(&mut shell, "open 1");
    assert_eq!(
        reply(&mut shell, "set 1-1 12"),
        "1-1 = 12\n\
         \x20 ! 1-1  Tolerance A cannot be greater than Tolerance B\n\
         \x20 ! 1-1  Value cannot be greater than 10"
    );
    // Setting by exact name resolves to the same tolerance and clears both.
    assert_eq!(reply(&mut shell, "set Tolerance A 6"), "1-1 = 6");
    assert_eq!(reply(&mut shell, "errors"), "No validation errors.");
}

#[test]
fn test_set_rejects_unknown_tolerances_and_missing_sessions() {
    let dir = TempDir::new().expect("tempdir");
    let mut shell = new_shell(&dir);
    assert_eq!(
        reply(&mut shell, "set 1-1 6"),
        "error: No edit session is open"
    );
    reply(&mut shell, "open 1");
    assert_eq!(
        reply(&mut shell, "set bogus 6"),
        "error: no tolerance `bogus` on item 1"
    );
}

#[test]
fn test_apply_writes_the_store_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("items.json");
    let mut shell = EditShell::new(StoreFile::new(seed_items()), path.clone());
    reply(&mut shell, "open 1");
    reply(&mut shell, "set 1-1 6");
    assert_eq!(
        reply(&mut shell, "apply"),
        "Applied 1 change(s) to item 1.\n  1-1 = 6"
    );

    let saved = load_store(&path).expect("load saved store");
    assert_eq!(saved.items[0].tolerances[0].value, 6.0);
    assert_eq!(saved.items[0].tolerances[1].value, 8.0);
    assert_eq!(saved.items[1].tolerances[0].value, 3.0);
}

#[test]
fn test_apply_with_outstanding_errors_saves_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("items.json");
    let mut shell = EditShell::new(StoreFile::new(seed_items()), path.clone());
    reply(&mut shell, "open 1");
    reply(&mut shell, "set 1-1 12");
    assert_eq!(
        reply(&mut shell, "apply"),
        "error: Cannot apply: 2 validation error(s) outstanding"
    );
    assert!(!path.exists());
    // The session survives a refused apply and can be repaired.
    assert_eq!(reply(&mut shell, "set 1-1 6"), "1-1 = 6");
    assert_eq!(
        reply(&mut shell, "apply"),
        "Applied 1 change(s) to item 1.\n  1-1 = 6"
    );
}

#[test]
fn test_submit_prints_the_payload_then_empties() {
    let dir = TempDir::new().expect("tempdir");
    let mut shell = new_shell(&dir);
    reply(&mut shell, "open 1");
    reply(&mut shell, "set 1-1 6");
    reply(&mut shell, "apply");
    let text = reply(&mut shell, "submit");
    insta::assert_snapshot!(text, @r###"
    Submitting 1 item(s):
    [
      {
        "partId": "1",
        "changedTolerances": {
          "1-1": 6.0
        }
      }
    ]
    "###);
    assert_eq!(reply(&mut shell, "submit"), "No changes to submit.");
}

#[test]
fn test_status_tracks_session_and_pending_counts() {
    let dir = TempDir::new().expect("tempdir");
    let mut shell = new_shell(&dir);
    assert_eq!(
        reply(&mut shell, "status"),
        "No session open.\nPending changes: 0 item(s)."
    );
    reply(&mut shell, "open 2");
    reply(&mut shell, "set 2-1 4");
    let text = reply(&mut shell, "status");
    assert!(text.starts_with("Editing 2  Item 2"));
    assert!(text.contains("Ready to apply."));
    reply(&mut shell, "apply");
    assert_eq!(
        reply(&mut shell, "status"),
        "No session open.\nPending changes: 1 item(s)."
    );
}

#[test]
fn test_status_annotates_fields_with_their_first_error() {
    let dir = TempDir::new().expect("tempdir");
    let mut shell = new_shell(&dir);
    reply(&mut shell, "open 1");
    reply(&mut shell, "set 1-1 12");
    assert_eq!(
        reply(&mut shell, "status"),
        "Editing 1  Item 1\n\
         \x20 1-1  Tolerance A  12 (0 - 10)\n\
         \x20   ! Tolerance A cannot be greater than Tolerance B\n\
         \x20 1-2  Tolerance B  8 (0 - 15)\n\
         2 validation error(s); `errors` lists them.\n\
         Pending changes: 0 item(s)."
    );
}

#[test]
fn test_cancel_discards_candidates() {
    let dir = TempDir::new().expect("tempdir");
    let mut shell = new_shell(&dir);
    reply(&mut shell, "open 1");
    reply(&mut shell, "set 1-1 6");
    assert_eq!(
        reply(&mut shell, "cancel"),
        "Session cancelled; candidates discarded."
    );
    assert_eq!(reply(&mut shell, "cancel"), "No session open.");
    let item = shell
        .workbench()
        .store()
        .get(&ItemId::new("1"))
        .expect("item");
    assert_eq!(item.tolerances[0].value, 5.0);
}

#[test]
fn test_quit_reports_unsubmitted_changes() {
    let dir = TempDir::new().expect("tempdir");
    let mut shell = new_shell(&dir);
    assert_eq!(shell.handle_line("quit"), ShellReply::Quit(String::new()));

    let mut shell = new_shell(&dir);
    reply(&mut shell, "open 1");
    reply(&mut shell, "set 1-1 6");
    reply(&mut shell, "apply");
    match shell.handle_line("exit") {
        ShellReply::Quit(text) => {
            assert!(text.contains("1 item(s) had unsubmitted changes"));
        }
        ShellReply::Continue(text) => panic!("expected quit, got: {text}"),
    }
}
