//! A user runs a deploy with the board unplugged: the files land in the
//! scratch directory. After plugging the board in, the same command
//! deploys to the board.

use crate::common::*;

#[test]
fn scenario_unplugged_then_plugged() {
    let env = TestEnv::builder()
        .with_descriptor("deploy_as: main.py\nlibdir: {bundle}\nlibraries: [adafruit_bar]\n")
        .with_packed_library("adafruit_bar", BAR_CONTENT)
        .build();

    let unplugged = env.deploy(&[]);
    crate::assert_success!(unplugged);
    crate::assert_output_contains!(unplugged, "using fallback");
    assert!(env.fallback_dir().join("main.py").is_file());
    assert!(env.fallback_dir().join("lib/adafruit_bar.mpy").is_file());

    env.mount_device();
    let plugged = env.deploy(&[]);
    crate::assert_success!(plugged);
    assert!(!plugged.stdout.contains("using fallback"));
    assert!(env.device_dir().join("main.py").is_file());
    assert!(env.device_dir().join("lib/adafruit_bar.mpy").is_file());
}

#[test]
fn scenario_existing_fallback_is_reused() {
    let env = TestEnv::builder()
        .with_descriptor("deploy_as: main.py\n")
        .build();
    env.write_file("fallback/keep.txt", "earlier run");

    crate::assert_success!(env.deploy(&[]));

    assert!(env.fallback_dir().join("keep.txt").is_file());
    assert!(env.fallback_dir().join("main.py").is_file());
}
