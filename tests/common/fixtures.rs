//! Reusable test content.

pub const DEFAULT_SCRIPT: &str = "import board\nimport adafruit_foo\n\nprint(board.board_id)\n";

/// Descriptor for the canonical scenario: one directory, one packed, one missing.
pub const SCENARIO_DESCRIPTOR: &str = r#"deploy_as: main.py
libdir: {bundle}
libraries:
  - adafruit_foo
  - adafruit_bar
  - adafruit_baz
"#;

pub const FOO_FILES: &[(&str, &str)] = &[
    ("__init__.mpy", "foo init"),
    ("display.mpy", "foo display"),
    (".git/HEAD", "ref: refs/heads/main"),
];

pub const BAR_CONTENT: &str = "bar packed";
