//! Test harness: a router over scratch directories and a fake pandoc.

use std::path::{Path, PathBuf};

use axum_test::TestServer;
use docforge_converter::test_utils::install_fake_pandoc;
use docforge_converter::Converter;
use tempfile::TempDir;

use crate::server::{build_router, GatewayState};

pub struct TestGateway {
    pub server: TestServer,
    root: TempDir,
}

impl TestGateway {
    /// Gateway whose pandoc is a shell script with the given body.
    pub fn new(pandoc_script: &str) -> Self {
        let root = Self::scratch();
        let pandoc = install_fake_pandoc(&root.path().join("bin"), pandoc_script);
        Self::with_pandoc(root, pandoc)
    }

    /// Gateway pointing at a pandoc binary that does not exist.
    pub fn without_pandoc() -> Self {
        let root = Self::scratch();
        let pandoc = root.path().join("bin/pandoc");
        Self::with_pandoc(root, pandoc)
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn downloads(&self) -> Vec<String> {
        list(&self.root.path().join("downloads"))
    }

    pub fn temp_entries(&self) -> Vec<String> {
        list(&self.root.path().join("tmp"))
    }

    fn scratch() -> TempDir {
        let root = tempfile::tempdir().expect("scratch dir");
        for sub in ["bin", "downloads", "tmp"] {
            std::fs::create_dir(root.path().join(sub)).expect("scratch subdir");
        }
        root
    }

    fn with_pandoc(root: TempDir, pandoc: PathBuf) -> Self {
        let converter = Converter::new(pandoc, root.path().join("downloads"))
            .with_temp_root(root.path().join("tmp"));
        let server = TestServer::new(build_router(GatewayState::new(converter)))
            .expect("test server");
        Self { server, root }
    }
}

fn list(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .expect("read scratch dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect()
}
