// tests/property_paths.rs

use std::path::{Path, PathBuf};

use notify::event::{DataChange, ModifyKind};
use notify::{Event, EventKind};
use proptest::prelude::*;

use autoreload::watch::modified_paths;
use autoreload::watch::path_utils::is_direct_child;

const ROOT: &str = "/autoreload-prop-root/watch";

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}(\\.lua)?"
}

proptest! {
    #[test]
    fn direct_children_are_always_kept(name in segment()) {
        let root = Path::new(ROOT);
        prop_assert!(is_direct_child(root, &root.join(&name)));
    }

    #[test]
    fn nested_paths_are_never_kept(dirs in proptest::collection::vec(segment(), 1..4), name in segment()) {
        let root = Path::new(ROOT);
        let mut path = root.to_path_buf();
        for d in &dirs {
            path.push(d);
        }
        path.push(&name);

        let event = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)))
            .add_path(path);
        prop_assert!(modified_paths(root, &event).is_empty());
    }

    #[test]
    fn one_relay_per_direct_child(names in proptest::collection::vec(segment(), 0..6)) {
        let root = Path::new(ROOT);
        let mut event = Event::new(EventKind::Modify(ModifyKind::Any));
        let expected: Vec<PathBuf> = names.iter().map(|n| root.join(n)).collect();
        for p in &expected {
            event = event.add_path(p.clone());
        }
        prop_assert_eq!(modified_paths(root, &event), expected);
    }
}
