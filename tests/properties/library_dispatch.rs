//! Property tests for library dispatch.

use proptest::prelude::*;
use tempfile::tempdir;

use cpy_deploy::domain::value_objects::Destination;
use cpy_deploy::infrastructure::LocalFs;
use cpy_deploy::{DeployOptions, DeployUseCase, LibraryKind, LibraryOutcome};

fn library_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A name present only as a directory dispatches to the
    /// directory copy; no packed file is written.
    #[test]
    fn property_directory_is_selected_exclusively(name in library_name()) {
        let dir = tempdir().unwrap();
        let bundle = dir.path().join("bundle");
        let device = dir.path().join("device");
        std::fs::create_dir_all(bundle.join("lib").join(&name)).unwrap();
        std::fs::write(bundle.join("lib").join(&name).join("code.mpy"), "x").unwrap();
        std::fs::create_dir_all(&device).unwrap();
        let script = dir.path().join("code.py");
        std::fs::write(&script, "").unwrap();

        let options = DeployOptions::new(&script, "code.py")
            .with_library_root(&bundle)
            .with_libraries(vec![name.clone()]);
        let report = DeployUseCase::new(LocalFs::new())
            .execute(&options, &Destination::device(&device))
            .unwrap();

        prop_assert_eq!(report.libraries[0].kind(), Some(LibraryKind::Directory));
        prop_assert!(device.join("lib").join(&name).join("code.mpy").is_file());
        let packed = device.join("lib").join(format!("{}.mpy", name));
        prop_assert!(!packed.exists());
    }

    /// PROPERTY: A name present neither as a directory nor as a packed file
    /// is skipped and nothing is copied for it.
    #[test]
    fn property_absent_library_is_skipped(name in library_name()) {
        let dir = tempdir().unwrap();
        let bundle = dir.path().join("bundle");
        let device = dir.path().join("device");
        std::fs::create_dir_all(bundle.join("lib")).unwrap();
        std::fs::create_dir_all(&device).unwrap();
        let script = dir.path().join("code.py");
        std::fs::write(&script, "").unwrap();

        let options = DeployOptions::new(&script, "code.py")
            .with_library_root(&bundle)
            .with_libraries(vec![name.clone()]);
        let report = DeployUseCase::new(LocalFs::new())
            .execute(&options, &Destination::device(&device))
            .unwrap();

        prop_assert_eq!(&report.libraries[0], &LibraryOutcome::Skipped { name: name.clone() });
        prop_assert!(!device.join("lib").exists());
    }
}
