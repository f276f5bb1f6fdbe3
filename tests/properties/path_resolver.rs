//! Property tests for destination resolution.

use proptest::prelude::*;
use tempfile::tempdir;

use cpy_deploy::domain::value_objects::{DestinationOrigin, Platform};
use cpy_deploy::infrastructure::LocalFs;
use cpy_deploy::PathResolver;

fn device_id() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_]{1,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A missing mount point with fallback enabled resolves to the
    /// fallback directory, which exists afterward.
    #[test]
    fn property_missing_device_uses_created_fallback(device in device_id()) {
        let dir = tempdir().unwrap();
        let fallback = dir.path().join("scratch").join("CIRCUITPY");
        let resolver = PathResolver::new(Platform::Media { root: dir.path().join("media") })
            .with_fallback(&fallback);

        let destination = resolver.resolve(&LocalFs::new(), &device).unwrap();

        prop_assert_eq!(destination.origin(), DestinationOrigin::Fallback);
        prop_assert_eq!(destination.path(), fallback.as_path());
        prop_assert!(fallback.is_dir());
    }

    /// PROPERTY: An existing mount point is returned unchanged, never replaced
    /// by the fallback.
    #[test]
    fn property_existing_device_is_returned_unchanged(device in device_id()) {
        let dir = tempdir().unwrap();
        let media = dir.path().join("media");
        let mount = media.join(&device);
        std::fs::create_dir_all(&mount).unwrap();
        let fallback = dir.path().join("scratch");
        let resolver = PathResolver::new(Platform::Media { root: media }).with_fallback(&fallback);

        let destination = resolver.resolve(&LocalFs::new(), &device).unwrap();

        prop_assert_eq!(destination.origin(), DestinationOrigin::Device);
        prop_assert_eq!(destination.path(), mount.as_path());
        prop_assert!(!fallback.exists());
    }
}
