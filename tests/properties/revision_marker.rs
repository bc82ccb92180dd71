//! Property tests for the remote revision marker encoding.

use proptest::prelude::*;

use revship::Revision;

fn commit_id() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-f]{7,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Decoding never panics on arbitrary bytes.
    #[test]
    fn property_decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let _ = Revision::from_marker(&bytes);
    }

    /// PROPERTY: Trailing whitespace added by editors or `echo` is ignored.
    #[test]
    fn property_trailing_whitespace_ignored(
        id in commit_id(),
        tail in proptest::string::string_regex("[ \t\r\n]{0,4}").unwrap(),
    ) {
        let marker = format!("{}{}", id, tail);
        prop_assert_eq!(Revision::from_marker(marker.as_bytes()), Some(Revision::new(id)));
    }

    /// PROPERTY: A marker holding only whitespace means "never deployed".
    #[test]
    fn property_blank_marker_is_absent(
        blank in proptest::string::string_regex("[ \t\r\n]{0,8}").unwrap(),
    ) {
        prop_assert_eq!(Revision::from_marker(blank.as_bytes()), None);
    }

    /// PROPERTY: `short` is a prefix of the full id, at most SHORT_LEN chars.
    #[test]
    fn property_short_is_prefix(id in commit_id()) {
        let revision = Revision::new(id.clone());
        prop_assert!(id.starts_with(revision.short()));
        prop_assert!(revision.short().chars().count() <= Revision::SHORT_LEN);
    }
}

#[test]
fn encoded_marker_decodes_to_same_revision() {
    let revision = Revision::new("4b825dc642cb6eb9a060e54bf8d69288fbee4904");
    assert_eq!(Revision::from_marker(&revision.to_marker()), Some(revision));
}
