// src/watch/event_handler.rs

//! Classification of raw notify events.
//!
//! Two kinds of change are relayed:
//! - a direct child (or the watched directory) was modified in place: the
//!   child's own path is relayed;
//! - a direct child was created, removed or renamed: the directory's
//!   listing changed, so the watched directory's path is relayed once.

use std::path::{Path, PathBuf};

use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind};
use tracing::trace;

use crate::watch::path_utils::is_direct_child;

/// Returns true for event kinds that modify an entry in place.
///
/// Content and metadata changes count (a `touch` is a metadata change).
/// Renames, creations, removals and plain accesses do not.
pub fn is_modification(kind: &EventKind) -> bool {
    match kind {
        EventKind::Modify(modify) => !matches!(modify, ModifyKind::Name(_)),
        _ => false,
    }
}

/// Returns true for event kinds that change the watched directory's listing.
///
/// `RenameMode::Both` is skipped: backends that report it have already
/// reported the `From` and `To` halves separately.
pub fn is_listing_change(kind: &EventKind) -> bool {
    match kind {
        EventKind::Create(_) | EventKind::Remove(_) => true,
        EventKind::Modify(ModifyKind::Name(mode)) => !matches!(mode, RenameMode::Both),
        _ => false,
    }
}

/// Paths from `event` that should each be relayed once.
///
/// Paths deeper than one level below `root` are dropped even if the backend
/// reported them.
pub fn modified_paths(root: &Path, event: &Event) -> Vec<PathBuf> {
    if is_modification(&event.kind) {
        return event
            .paths
            .iter()
            .filter(|path| in_watched_dir(root, path))
            .cloned()
            .collect();
    }

    if is_listing_change(&event.kind) {
        if event.paths.iter().any(|path| in_watched_dir(root, path)) {
            trace!(kind = ?event.kind, "directory listing changed");
            return vec![root.to_path_buf()];
        }
        return Vec::new();
    }

    trace!(kind = ?event.kind, "ignoring event");
    Vec::new()
}

fn in_watched_dir(root: &Path, path: &Path) -> bool {
    let keep = is_direct_child(root, path);
    if !keep {
        trace!(path = ?path, "ignoring event outside the watched directory");
    }
    keep
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, MetadataKind, RemoveKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn data_and_metadata_changes_are_modifications() {
        assert!(is_modification(&EventKind::Modify(ModifyKind::Data(
            DataChange::Content
        ))));
        assert!(is_modification(&EventKind::Modify(ModifyKind::Metadata(
            MetadataKind::Any
        ))));
        assert!(is_modification(&EventKind::Modify(ModifyKind::Any)));
    }

    #[test]
    fn renames_creates_and_removes_are_not_modifications() {
        assert!(!is_modification(&EventKind::Modify(ModifyKind::Name(
            RenameMode::Both
        ))));
        assert!(!is_modification(&EventKind::Create(CreateKind::File)));
        assert!(!is_modification(&EventKind::Remove(RemoveKind::File)));
        assert!(!is_modification(&EventKind::Access(AccessKind::Any)));
    }

    #[test]
    fn creates_removes_and_rename_halves_change_the_listing() {
        assert!(is_listing_change(&EventKind::Create(CreateKind::File)));
        assert!(is_listing_change(&EventKind::Remove(RemoveKind::Any)));
        assert!(is_listing_change(&EventKind::Modify(ModifyKind::Name(
            RenameMode::From
        ))));
        assert!(is_listing_change(&EventKind::Modify(ModifyKind::Name(
            RenameMode::To
        ))));
        assert!(!is_listing_change(&EventKind::Modify(ModifyKind::Name(
            RenameMode::Both
        ))));
        assert!(!is_listing_change(&EventKind::Access(AccessKind::Any)));
    }

    #[test]
    fn keeps_direct_children_only() {
        let root = Path::new("/tmp/watch");
        let kind = || EventKind::Modify(ModifyKind::Data(DataChange::Any));

        let paths = modified_paths(root, &event(kind(), "/tmp/watch/a.lua"));
        assert_eq!(paths, vec![PathBuf::from("/tmp/watch/a.lua")]);

        let nested = modified_paths(root, &event(kind(), "/tmp/watch/sub/b.lua"));
        assert!(nested.is_empty());
    }

    #[test]
    fn one_path_per_reported_child() {
        let root = Path::new("/tmp/watch");
        let ev = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/tmp/watch/a.lua"))
            .add_path(PathBuf::from("/tmp/watch/b.lua"));
        assert_eq!(modified_paths(root, &ev).len(), 2);
    }

    #[test]
    fn removing_a_child_relays_the_directory() {
        let root = Path::new("/tmp/watch");
        let ev = event(EventKind::Remove(RemoveKind::File), "/tmp/watch/a.lua");
        assert_eq!(modified_paths(root, &ev), vec![PathBuf::from("/tmp/watch")]);
    }

    #[test]
    fn creating_a_child_relays_the_directory_once() {
        let root = Path::new("/tmp/watch");
        let ev = Event::new(EventKind::Create(CreateKind::Any))
            .add_path(PathBuf::from("/tmp/watch/a.lua"))
            .add_path(PathBuf::from("/tmp/watch/b.lua"));
        assert_eq!(modified_paths(root, &ev), vec![PathBuf::from("/tmp/watch")]);
    }

    #[test]
    fn nested_create_is_ignored() {
        let root = Path::new("/tmp/watch");
        let ev = event(EventKind::Create(CreateKind::File), "/tmp/watch/sub/a.lua");
        assert!(modified_paths(root, &ev).is_empty());
    }

    #[test]
    fn access_events_yield_nothing() {
        let root = Path::new("/tmp/watch");
        let ev = event(EventKind::Access(AccessKind::Any), "/tmp/watch/a.lua");
        assert!(modified_paths(root, &ev).is_empty());
    }
}
