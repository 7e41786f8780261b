// src/watch/path_utils.rs

//! Utility functions for path handling in the watcher.

use std::path::Path;

/// Returns true if `path` is `root` itself or sits directly inside it.
///
/// - First we compare the paths as given.
/// - If that fails (e.g. symlinked prefixes such as `/private/var` on
///   macOS), we canonicalize `root` and the *parent* of `path` and compare
///   again. The parent is used because the file itself may already be gone.
pub fn is_direct_child(root: &Path, path: &Path) -> bool {
    if path == root || path.parent() == Some(root) {
        return true;
    }

    let Ok(root_canon) = root.canonicalize() else {
        return false;
    };

    if let Ok(path_canon) = path.canonicalize() {
        if path_canon == root_canon {
            return true;
        }
    }

    match path.parent().map(Path::canonicalize) {
        Some(Ok(parent_canon)) => parent_canon == root_canon,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_children_match() {
        let root = Path::new("/srv/scripts");
        assert!(is_direct_child(root, root));
        assert!(is_direct_child(root, Path::new("/srv/scripts/a.lua")));
    }

    #[test]
    fn grandchildren_and_siblings_do_not_match() {
        let root = Path::new("/srv/scripts");
        assert!(!is_direct_child(root, Path::new("/srv/scripts/sub/a.lua")));
        assert!(!is_direct_child(root, Path::new("/srv/other/a.lua")));
        assert!(!is_direct_child(root, Path::new("/srv")));
    }

    #[test]
    fn symlinked_root_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        std::fs::create_dir(&real).unwrap();
        std::fs::write(real.join("a.lua"), b"-- lua").unwrap();

        #[cfg(unix)]
        {
            let link = dir.path().join("link");
            std::os::unix::fs::symlink(&real, &link).unwrap();
            assert!(is_direct_child(&link, &real.join("a.lua")));
            assert!(!is_direct_child(&link, &dir.path().join("a.lua")));
        }
    }
}
