//! Theme document parsing through the real plist parser.

use crate::common::fixtures;
use iterm2gnome::error::ConvertError;
use iterm2gnome::plist::parse_document;
use iterm2gnome::theme::parse_theme;

#[test]
fn test_full_theme_converts_every_slot() {
    let entries = parse_document(&fixtures::full_theme()).unwrap();
    let export = parse_theme(&entries).unwrap();

    for slot in 0..16 {
        assert_eq!(
            export.palette[slot].as_ref().map(|c| c.as_str()),
            Some("'#FF0000'"),
            "slot {slot}"
        );
    }
    assert_eq!(export.foreground.as_str(), "'#FFFFFF'");
    assert_eq!(export.background.as_str(), "'#000000'");
    assert_eq!(export.bold.as_str(), "'#FFFFFF'");
}

#[test]
fn test_unconsumed_keys_are_ignored() {
    let entries = parse_document(&fixtures::theme_with_extra_keys()).unwrap();
    let export = parse_theme(&entries).unwrap();

    // Cursor Color and Color Space are present in the document but have
    // no effect on the export.
    assert_eq!(export.foreground.as_str(), "'#FFFFFF'");
    assert!(export.palette.iter().all(Option::is_some));
}

#[test]
fn test_missing_component_names_the_offending_key() {
    let entries = parse_document(&fixtures::theme_with_malformed_entry()).unwrap();
    let err = parse_theme(&entries).unwrap_err();

    match err {
        ConvertError::MalformedColorEntry { key, component } => {
            assert_eq!(key, "Ansi 7 Color");
            assert_eq!(component, "Blue Component");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_document_order_is_preserved() {
    let entries = parse_document(&fixtures::theme_with_extra_keys()).unwrap();

    // Cursor Color comes first in this fixture, ANSI slots follow.
    assert_eq!(entries[0].0, "Cursor Color");
    assert_eq!(entries[1].0, "Ansi 0 Color");
}

#[test]
fn test_plain_text_file_is_rejected() {
    let err = parse_document("not a theme at all").unwrap_err();
    assert!(matches!(err, ConvertError::InvalidDocument(_)));
}
