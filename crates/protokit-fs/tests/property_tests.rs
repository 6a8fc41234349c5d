use proptest::prelude::*;
use protokit_fs::NormalizedPath;

proptest! {
    #[test]
    fn normalized_paths_never_contain_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }

    #[test]
    fn native_roundtrip_is_stable(s in "[a-zA-Z0-9_./]{0,40}") {
        let path = NormalizedPath::new(&s);
        prop_assert_eq!(NormalizedPath::new(path.to_native()), path);
    }

    #[test]
    fn relative_join_keeps_base_prefix(base in "[a-z]{1,10}", seg in "[a-z]{1,10}(/[a-z]{1,10}){0,3}") {
        let joined = NormalizedPath::new(&base).join(&seg);
        prop_assert!(joined.as_str().starts_with(&base));
        prop_assert!(joined.as_str().ends_with(&seg));
    }
}
