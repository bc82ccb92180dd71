//! Property tests for remote target spec parsing.

use proptest::prelude::*;

use revship::RemoteTarget;

fn host() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{1,12}(\\.[a-z]{2,4})?").unwrap()
}

fn remote_dir() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-]{1,8}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|s| format!("/{}", s.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(spec in "(?s).{0,128}") {
        let _ = RemoteTarget::parse(&spec);
    }

    /// PROPERTY: `host:/path` and `ssh://host/path` name the same target.
    #[test]
    fn property_scp_and_url_forms_agree(host in host(), dir in remote_dir()) {
        let scp = RemoteTarget::parse(&format!("{}:{}", host, dir)).unwrap();
        let url = RemoteTarget::parse(&format!("ssh://{}{}", host, dir)).unwrap();
        prop_assert_eq!(scp, url);
    }

    /// PROPERTY: Absolute paths without a host are local targets.
    #[test]
    fn property_absolute_path_is_local(dir in remote_dir()) {
        let target = RemoteTarget::parse(&dir).unwrap();
        prop_assert!(target.is_local());
    }
}
