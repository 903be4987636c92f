//! Property tests for remote target parsing.

use proptest::prelude::*;

use ferry::RemoteTarget;

fn host_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,10}").unwrap()
}

fn path_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(/[a-z0-9._-]{1,12}){1,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics, whatever the operator types.
    #[test]
    fn parse_never_panics(s in "(?s).{0,128}") {
        let _ = RemoteTarget::parse(&s);
    }

    /// PROPERTY: host:path specs round-trip through parse and remote_dest.
    #[test]
    fn host_path_round_trips(host in host_strategy(), path in path_strategy()) {
        let spec = format!("{}:{}", host, path);
        let target = RemoteTarget::parse(&spec).unwrap();
        prop_assert_eq!(target.host(), host.as_str());
        prop_assert_eq!(target.root(), path.as_str());
        prop_assert_eq!(target.remote_dest(), spec);
    }

    /// PROPERTY: reparsing the display form yields the same target.
    #[test]
    fn display_reparses(host in host_strategy(), path in path_strategy()) {
        let original = RemoteTarget::parse(&format!("{}:{}", host, path)).unwrap();
        let reparsed = RemoteTarget::parse(&original.to_string()).unwrap();
        prop_assert_eq!(original, reparsed);
    }

    /// PROPERTY: a bare host always resolves to the login directory.
    #[test]
    fn bare_host_gets_login_dir(host in host_strategy()) {
        let target = RemoteTarget::parse(&host).unwrap();
        prop_assert_eq!(target.root(), ".");
    }
}
