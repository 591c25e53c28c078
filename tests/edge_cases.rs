//! Edge case and error handling tests for stepwalk


use assert_cmd::Command;
use harness::{TestTree, listed_paths, run_stepwalk};
use predicates::prelude::*;

fn stepwalk() -> Command {
    let mut cmd = Command::cargo_bin("stepwalk").expect("binary built");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_missing_root() {
    let tree = TestTree::new();
    stepwalk()
        .current_dir(tree.path())
        .arg("does-not-exist")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot access 'does-not-exist'"));
}

#[test]
fn test_missing_root_reported_once() {
    let tree = TestTree::new();
    let (stdout, stderr, code) = run_stepwalk(tree.path(), &["missing/dir"]);
    assert_eq!(code, 1);
    assert_eq!(stderr.matches("cannot access").count(), 1, "{}", stderr);
    assert!(stderr.contains("'missing/dir'"), "{}", stderr);
    assert!(!stderr.contains("'.'"), "{}", stderr);
    assert!(listed_paths(&stdout).is_empty());
}

#[test]
fn test_file_root() {
    let tree = TestTree::new();
    tree.add_file("only.txt", "hi");
    stepwalk()
        .current_dir(tree.path())
        .args(["only.txt", "--no-summary"])
        .assert()
        .success()
        .stdout("only.txt\n");
}

#[test]
fn test_empty_directory() {
    let tree = TestTree::new();
    stepwalk()
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 directories, 0 files"));
}

#[test]
fn test_invalid_level() {
    let tree = TestTree::new();
    stepwalk()
        .current_dir(tree.path())
        .args(["-L", "many"])
        .assert()
        .failure();
}

#[test]
fn test_level_zero_lists_only_root() {
    let tree = TestTree::new();
    tree.add_file("a/b", "");
    let (stdout, _stderr, code) = run_stepwalk(tree.path(), &["-L", "0"]);
    assert_eq!(code, 0);
    assert_eq!(listed_paths(&stdout), vec!["."]);
}

#[test]
fn test_unicode_names_sorted_bytewise() {
    let tree = TestTree::new();
    tree.add_file("é.txt", "");
    tree.add_file("Z.txt", "");
    tree.add_file("a.txt", "");
    let (stdout, _stderr, _code) = run_stepwalk(tree.path(), &[]);
    assert_eq!(listed_paths(&stdout), vec![".", "Z.txt", "a.txt", "é.txt"]);
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::fs;
    use std::os::unix::fs::{PermissionsExt, symlink};

    #[test]
    fn test_symlinked_dir_not_followed() {
        let tree = TestTree::new();
        tree.add_file("real/file.rs", "");
        symlink(tree.path().join("real"), tree.path().join("link")).unwrap();

        let (stdout, _stderr, code) = run_stepwalk(tree.path(), &[]);
        assert_eq!(code, 0);
        assert_eq!(
            listed_paths(&stdout),
            vec![".", "link", "real", "real/file.rs"]
        );
    }

    #[test]
    fn test_symlink_loop_terminates() {
        let tree = TestTree::new();
        tree.add_dir("sub");
        symlink("..", tree.path().join("sub/parent")).unwrap();

        let (stdout, _stderr, code) = run_stepwalk(tree.path(), &[]);
        assert_eq!(code, 0);
        assert_eq!(listed_paths(&stdout), vec![".", "sub", "sub/parent"]);
    }

    #[test]
    fn test_symlinked_root_is_walked() {
        let tree = TestTree::new();
        tree.add_file("real/file.rs", "");
        symlink(tree.path().join("real"), tree.path().join("link")).unwrap();

        let (stdout, _stderr, _code) = run_stepwalk(tree.path(), &["link"]);
        assert_eq!(listed_paths(&stdout), vec!["link", "link/file.rs"]);
    }

    #[test]
    fn test_unreadable_directory_reported_and_walk_continues() {
        let tree = TestTree::new();
        tree.add_file("locked/secret", "");
        tree.add_file("open/visible", "");
        let locked = tree.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read_dir(&locked).is_ok() {
            // running with permission checks bypassed (e.g. as root)
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let (stdout, stderr, code) = run_stepwalk(tree.path(), &[]);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(code, 2);
        assert!(stderr.contains("locked"), "{}", stderr);
        assert_eq!(
            listed_paths(&stdout),
            vec![".", "locked", "open", "open/visible"]
        );
        assert!(stdout.contains("1 errors"));
    }
}
