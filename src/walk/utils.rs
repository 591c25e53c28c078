//! Shared utility functions for walking

use glob::Pattern;

/// Join a directory path and a child name with a slash.
///
/// The root `.` is dropped so children of `.` are plain names.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir == "." || dir.is_empty() {
        name.to_string()
    } else if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Number of path elements below `root` (the root itself is depth 0).
pub fn depth_below(root: &str, path: &str) -> usize {
    if path == root {
        return 0;
    }
    let rest = if root == "." {
        path
    } else {
        path.strip_prefix(root)
            .map(|r| r.trim_start_matches('/'))
            .unwrap_or(path)
    };
    rest.split('/').filter(|e| !e.is_empty()).count()
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(".", "a"), "a");
        assert_eq!(join_path("a", "x"), "a/x");
        assert_eq!(join_path("d/z", "u"), "d/z/u");
        assert_eq!(join_path("usr/lib/", "x"), "usr/lib/x");
    }

    #[test]
    fn test_depth_below() {
        assert_eq!(depth_below(".", "."), 0);
        assert_eq!(depth_below(".", "a"), 1);
        assert_eq!(depth_below(".", "d/z/u"), 3);
        assert_eq!(depth_below("usr/lib", "usr/lib"), 0);
        assert_eq!(depth_below("usr/lib", "usr/lib/x/y"), 2);
    }

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.rs", "main.rs"));
        assert!(!glob_match("*.rs", "main.py"));
        assert!(glob_match("test*", "test_foo"));
        assert!(!glob_match("test*", "foo_test"));
        assert!(glob_match("exact", "exact"));

        assert!(glob_match("test?.rs", "test1.rs"));
        assert!(!glob_match("test?.rs", "test12.rs"));

        assert!(glob_match("[abc].txt", "a.txt"));
        assert!(!glob_match("[abc].txt", "d.txt"));
        assert!(!glob_match("[a-z].txt", "X.txt"));
    }
}
