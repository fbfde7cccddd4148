//! Markdown to Word conversion through an external `pandoc` process.
//!
//! Provides:
//! - [`Converter`]: writes the source into a scoped temp directory, runs pandoc,
//!   and copies the result into the downloads directory under a random name
//! - [`probe`]: `pandoc --version` availability check
//! - [`run_tool`]: the subprocess runner both of them share

pub mod command;
pub mod invoker;
pub mod naming;
pub mod probe;

#[cfg(all(unix, any(test, feature = "test-utils")))]
pub mod test_utils;

pub use command::{run_tool, ToolOutput};
pub use invoker::{conversion_args, Artifact, Converter};
pub use naming::{artifact_name, new_artifact_name};
pub use probe::check_pandoc;
