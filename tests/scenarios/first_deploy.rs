//! A user deploys a script with one directory library and one packed library
//! to a freshly mounted board, then updates the bundle and deploys again.

use crate::common::*;

const DESCRIPTOR: &str = r#"deploy_as: main.py
libdir: {bundle}
libraries:
  - adafruit_foo
  - adafruit_bar
"#;

fn env() -> TestEnv {
    TestEnv::builder()
        .with_descriptor(DESCRIPTOR)
        .with_library_dir("adafruit_foo", FOO_FILES)
        .with_packed_library("adafruit_bar", BAR_CONTENT)
        .with_packed_library("adafruit_baz", "never declared")
        .with_device_mounted()
        .build()
}

#[test]
fn scenario_first_deploy_copies_declared_items_only() {
    let env = env();

    let result = env.deploy(&[]);

    crate::assert_success!(result);
    assert_eq!(env.read_target("main.py"), DEFAULT_SCRIPT);
    crate::assert_deployed!(env, "lib/adafruit_foo/__init__.mpy");
    crate::assert_deployed!(env, "lib/adafruit_foo/display.mpy");
    assert_eq!(env.read_target("lib/adafruit_bar.mpy"), BAR_CONTENT);
    crate::assert_not_deployed!(env, "lib/adafruit_baz.mpy");
    assert!(!result.stdout.contains("adafruit_baz"));
}

#[test]
fn scenario_bundle_update_then_redeploy() {
    let env = env();
    crate::assert_success!(env.deploy(&[]));

    // New bundle release drops display.mpy and changes __init__.mpy.
    std::fs::remove_file(env.bundle_dir().join("lib/adafruit_foo/display.mpy")).unwrap();
    env.write_file("bundle/lib/adafruit_foo/__init__.mpy", "foo init v2");
    env.write_file("bundle/lib/adafruit_bar.mpy", "bar v2");

    crate::assert_success!(env.deploy(&[]));

    assert_eq!(env.read_target("lib/adafruit_foo/__init__.mpy"), "foo init v2");
    crate::assert_not_deployed!(env, "lib/adafruit_foo/display.mpy");
    assert_eq!(env.read_target("lib/adafruit_bar.mpy"), "bar v2");
}
