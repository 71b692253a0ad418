//! Property tests for resource name normalization

use modforge_cli_lib::scaffold::naming::{capitalize, has_separators, normalize};
use modforge_cli_lib::ModulePath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalized_names_are_ascii_alphabetic(raw in "[A-Za-z0-9 _./-]{0,24}") {
        if let Some(name) = normalize(&raw) {
            prop_assert!(!name.is_empty());
            if has_separators(&raw) {
                prop_assert!(name.chars().all(|c| c.is_ascii_alphabetic()));
            }
        }
    }

    #[test]
    fn alphabetic_names_are_lowercased(raw in "[A-Za-z]{1,24}") {
        prop_assert_eq!(normalize(&raw), Some(raw.to_ascii_lowercase()));
    }

    #[test]
    fn lowercase_names_are_stable(raw in "[a-z]{1,24}") {
        let once = normalize(&raw).unwrap();
        prop_assert_eq!(normalize(&once).unwrap(), once);
    }

    #[test]
    fn separated_words_start_lowercase(words in prop::collection::vec("[a-zA-Z]{1,8}", 2..5)) {
        let raw = words.join("-");
        let name = normalize(&raw).unwrap();
        prop_assert!(name.starts_with(|c: char| c.is_ascii_lowercase()));
        prop_assert_eq!(name.len(), raw.len() - (words.len() - 1));
    }

    #[test]
    fn capitalize_only_touches_first_char(raw in "[a-z][a-zA-Z]{0,16}") {
        let capitalized = capitalize(&raw);
        prop_assert!(capitalized.starts_with(|c: char| c.is_ascii_uppercase()));
        prop_assert_eq!(&capitalized[1..], &raw[1..]);
    }

    #[test]
    fn import_depth_tracks_nesting(folders in prop::collection::vec("[a-z]{1,6}", 0..6)) {
        let mut segments = folders.clone();
        segments.push("widget".to_string());
        let module = ModulePath::parse(&segments.join("/")).unwrap();

        prop_assert_eq!(module.import_depth(), folders.len() + 2);
        prop_assert_eq!(module.import_prefix(), "../".repeat(folders.len() + 2));
    }
}
