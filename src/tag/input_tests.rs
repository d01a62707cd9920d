use super::*;
use crate::tag::Color;

#[test]
fn test_normalize_passes_tag_through() {
    let tag = Tag::with_color("Keep", Color::Green);
    assert_eq!(TagInput::from(tag.clone()).normalize().unwrap(), tag);
}

#[test]
fn test_normalize_encoded_string() {
    let tag = TagInput::from("Urgent\nRED").normalize().unwrap();
    assert_eq!(tag, Tag::with_color("Urgent", Color::Red));

    let tag = TagInput::from(String::from("Bare")).normalize().unwrap();
    assert_eq!(tag, Tag::with_color("Bare", Color::None));
}

#[test]
fn test_normalize_pair() {
    let tag = TagInput::from(("Work", "blue")).normalize().unwrap();
    assert_eq!(tag, Tag::with_color("Work", Color::Blue));

    let tag = TagInput::from(vec!["Solo".to_string()]).normalize().unwrap();
    assert_eq!(tag, Tag::with_color("Solo", Color::None));
}

#[test]
fn test_normalize_malformed_pair_is_an_error() {
    let err = TagInput::Pair(Vec::new()).normalize().unwrap_err();
    assert!(matches!(err, TagError::InvalidTagInput(_)));
}

#[test]
fn test_parse_cli_forms() {
    assert_eq!(TagInput::parse_cli("Work"), TagInput::Pair(vec!["Work".to_string()]));
    assert_eq!(
        TagInput::parse_cli("Work:blue"),
        TagInput::Pair(vec!["Work".to_string(), "blue".to_string()])
    );
    assert_eq!(
        TagInput::parse_cli("a:b:4"),
        TagInput::Pair(vec!["a:b".to_string(), "4".to_string()])
    );
}

#[test]
fn test_parse_cli_keeps_non_color_suffix_in_name() {
    assert_eq!(
        TagInput::parse_cli("Q3:Review"),
        TagInput::Pair(vec!["Q3:Review".to_string()])
    );
    assert_eq!(TagInput::parse_cli("Work:"), TagInput::Pair(vec!["Work:".to_string()]));
    assert_eq!(TagInput::parse_cli("v:9"), TagInput::Pair(vec!["v:9".to_string()]));
    assert_eq!(
        TagInput::parse_cli("10:30:green"),
        TagInput::Pair(vec!["10:30".to_string(), "green".to_string()])
    );

    let tag = TagInput::parse_cli("Q3:Review").normalize().unwrap();
    assert_eq!(tag, Tag::with_color("Q3:Review", Color::None));
}

#[test]
fn test_parse_cli_normalizes() {
    let tag = TagInput::parse_cli("Home:5").normalize().unwrap();
    assert_eq!(tag, Tag::with_color("Home", Color::Yellow));
}

#[test]
fn test_normalize_all_keeps_order() {
    let tags = normalize_all(["B\n2", "A\n1"]).unwrap();
    assert_eq!(
        tags,
        vec![Tag::with_color("B", Color::Green), Tag::with_color("A", Color::Gray)]
    );
}

#[test]
fn test_normalize_all_aborts_on_first_bad_input() {
    let inputs = vec![
        TagInput::from("Fine"),
        TagInput::Pair(vec!["a".into(), "b".into(), "c".into()]),
    ];
    assert!(normalize_all(inputs).is_err());
}
