#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{read_raw_tags, seed_raw_tags};
use std::path::Path;
use taggit::{
    AttributeStore, Capability, Color, MemoryStore, Tag, TagError, TagInput, TagStore,
    FINDER_INFO_ATTRIBUTE,
};

fn store() -> TagStore<MemoryStore> {
    TagStore::new(MemoryStore::new(), Capability::Enabled)
}

#[test]
fn test_add_then_list_on_untagged_file() {
    let store = store();
    let file = Path::new("/docs/report.pdf");

    store
        .add_tags(file, ["Urgent\nRED"])
        .expect("Should add tag");

    let tags = store.list_tags(file);
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name(), "Urgent");
    assert_eq!(tags[0].color_name(), "RED");
    assert_eq!(tags[0].color_code(), 6);
}

#[test]
fn test_remove_one_of_two_tags() {
    let store = store();
    let file = Path::new("/docs/report.pdf");
    seed_raw_tags(store.attributes(), file, &["A\n1", "B\n2"]);

    store.remove_tag(file, "A\n1").expect("Should remove tag");

    assert_eq!(
        read_raw_tags(store.attributes(), file),
        Some(vec!["B\n2".to_string()])
    );
}

#[test]
fn test_full_lifecycle() {
    let store = store();
    let file = Path::new("/photos/beach.jpg");

    store
        .add_tags(
            file,
            vec![
                TagInput::from(("Holiday", "yellow")),
                TagInput::from(Tag::new("Family", "green")),
                TagInput::from("Archive"),
            ],
        )
        .expect("Should add tags");
    store
        .add_tag(file, ("Holiday", "5"))
        .expect("Re-adding should succeed");

    assert_eq!(
        store.list_tags(file),
        vec![
            Tag::with_color("Holiday", Color::Yellow),
            Tag::with_color("Family", Color::Green),
            Tag::with_color("Archive", Color::None),
        ]
    );

    store
        .remove_tags(file, [("Family", "green"), ("Missing", "red")])
        .expect("Should remove tags");
    assert_eq!(store.list_tags(file).len(), 2);

    store.remove_all_tags(file).expect("Should clear tags");
    assert!(store.list_tags(file).is_empty());
    assert_eq!(read_raw_tags(store.attributes(), file), Some(Vec::new()));
}

#[test]
fn test_tags_are_per_file() {
    let store = store();
    let first = Path::new("/a.txt");
    let second = Path::new("/b.txt");

    store.add_tag(first, ("One", "red")).unwrap();
    store.add_tag(second, ("Two", "blue")).unwrap();

    assert_eq!(store.list_tags(first), vec![Tag::with_color("One", Color::Red)]);
    assert_eq!(store.list_tags(second), vec![Tag::with_color("Two", Color::Blue)]);
}

#[test]
fn test_write_clears_finder_info_but_keeps_other_attributes() {
    let store = store();
    let file = Path::new("/a.txt");
    store
        .attributes()
        .set(file, FINDER_INFO_ATTRIBUTE, &[0_u8; 32])
        .unwrap();
    store
        .attributes()
        .set(file, "com.apple.quarantine", b"0081;")
        .unwrap();

    store.add_tag(file, ("Work", "blue")).unwrap();

    let keys = store.attributes().list_keys(file).unwrap();
    assert!(!keys.contains(&FINDER_INFO_ATTRIBUTE.to_string()));
    assert!(keys.contains(&"com.apple.quarantine".to_string()));
}

#[test]
fn test_malformed_input_leaves_file_untouched() {
    let store = store();
    let file = Path::new("/a.txt");
    seed_raw_tags(store.attributes(), file, &["Keep\n3"]);

    let err = store
        .remove_tags(
            file,
            vec![
                TagInput::from("Keep\n3"),
                TagInput::Pair(vec!["x".into(), "y".into(), "z".into()]),
            ],
        )
        .unwrap_err();

    assert!(matches!(err, TagError::InvalidTagInput(_)));
    assert_eq!(
        read_raw_tags(store.attributes(), file),
        Some(vec!["Keep\n3".to_string()])
    );
}

#[test]
fn test_disabled_capability_reads_and_writes_nothing() {
    let attributes = MemoryStore::new();
    let file = Path::new("/a.txt");
    seed_raw_tags(&attributes, file, &["A\n1"]);

    let store = TagStore::new(&attributes, Capability::Disabled);
    assert!(store.list_tags(file).is_empty());
    store.remove_all_tags(file).unwrap();

    assert_eq!(read_raw_tags(&attributes, file), Some(vec!["A\n1".to_string()]));
}

#[test]
fn test_store_over_borrowed_attributes() {
    let attributes = MemoryStore::new();
    let file = Path::new("/a.txt");

    TagStore::new(&attributes, Capability::Enabled)
        .add_tag(file, ("Shared", "orange"))
        .unwrap();

    let tags = TagStore::new(&attributes, Capability::Enabled).list_tags(file);
    assert_eq!(tags, vec![Tag::with_color("Shared", Color::Orange)]);
}

#[test]
fn test_read_only_file_surfaces_io_error() {
    let store = TagStore::new(MemoryStore::new().into_read_only(), Capability::Enabled);
    let err = store.remove_all_tags(Path::new("/locked.txt")).unwrap_err();
    match err {
        TagError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
        other => panic!("unexpected error: {other}"),
    }
}
