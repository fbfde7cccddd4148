//! Fake pandoc executables for tests (available with the `test-utils` feature).

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Answers `--version`, checks the conversion argument layout, and "converts"
/// by copying the Markdown input to the output path.
pub const WORKING_PANDOC: &str = r#"if [ "$1" = "--version" ]; then
  echo "pandoc 3.1.11"
  echo "Features: +server +lua"
  exit 0
fi
if [ "$2" != "-o" ] || [ "$4" != "--from" ] || [ "$5" != "markdown" ] || [ "$6" != "--to" ] || [ "$7" != "docx" ] || [ "$8" != "--standalone" ]; then
  echo "unexpected arguments: $*" >&2
  exit 2
fi
cp "$1" "$3"
"#;

/// Fails every invocation with a diagnostic on stderr.
pub const BROKEN_PANDOC: &str = r#"echo "pandoc: Could not find data file reference.docx" >&2
exit 97
"#;

/// Exits successfully without writing any output file.
pub const SILENT_PANDOC: &str = "exit 0\n";

/// Never finishes on its own.
pub const HANGING_PANDOC: &str = "exec sleep 30\n";

/// Writes an executable `/bin/sh` script named `pandoc` into `dir`.
pub fn install_fake_pandoc(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("pandoc");
    fs::write(&path, format!("#!/bin/sh\n{body}")).expect("write fake pandoc");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake pandoc");
    path
}
