//! Test support utilities for kubesecret integration tests.
//!
//! Provides an isolated test environment with a fake kubectl on disk.

#![allow(dead_code)]


#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// The fake kubectl script lives in `dir` and appends every argument vector
/// it receives to `kubectl.log` next to itself.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
}

impl Test {
    /// Create a test environment backed by `cluster`.
    pub fn new(cluster: FakeKubectl) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let t = Self { dir };

        let path = t.kubectl_path();
        fs::write(&path, cluster.script()).expect("failed to write fake kubectl");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to mark fake kubectl executable");
        t
    }

    /// Test environment with the standard fixture secrets.
    pub fn standard() -> Self {
        Self::new(FakeKubectl::standard())
    }

    /// Path of the fake kubectl script.
    pub fn kubectl_path(&self) -> PathBuf {
        self.dir.path().join("kubectl")
    }

    /// Argument lines the fake kubectl was called with.
    pub fn kubectl_calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("kubectl.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Wait until the fake kubectl has been called `n` times.
    pub fn wait_for_calls(&self, n: usize) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while self.kubectl_calls().len() < n {
            assert!(Instant::now() < deadline, "kubectl was not called {} times", n);
            thread::sleep(Duration::from_millis(20));
        }
    }

    /// Path inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
