#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use docker_secrets::{FileSystem, LocalFs};
use tempfile::TempDir;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // test-log may already have installed a subscriber in this binary.
        let _ = tracing_subscriber::fmt()
            .with_env_filter("docker_secrets=trace")
            .with_test_writer()
            .try_init();
    });
}

/// Loads `tests/data/.test.env` into the process environment exactly once.
pub fn load_test_env() {
    static LOAD: Once = Once::new();
    LOAD.call_once(|| {
        dotenvy::from_filename_override("tests/data/.test.env")
            .expect("Failed to load tests/data/.test.env");
    });
}

/// Builds an in-memory environment from string pairs.
pub fn env_of(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A temporary directory of secret files, removed on drop.
pub struct SecretDir {
    dir: TempDir,
}

impl SecretDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Writes `content` to a file named `name` and returns its path as a string.
    pub fn write(&self, name: &str, content: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write secret file");
        path.to_string_lossy().into_owned()
    }

    /// Writes raw `bytes` to a file named `name` and returns its path as a string.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write secret file");
        path.to_string_lossy().into_owned()
    }

    /// A path inside the directory that does not exist.
    pub fn missing(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().into_owned()
    }
}

/// Reads through [`LocalFs`] and records every path it was asked for.
#[derive(Debug, Default, Clone)]
pub struct RecordingFs {
    reads: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }

    fn record(&self, path: &Path) {
        self.reads.lock().unwrap().push(path.to_path_buf());
    }
}

#[async_trait]
impl FileSystem for RecordingFs {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.record(path);
        LocalFs.read_to_string(path).await
    }

    fn read_to_string_blocking(&self, path: &Path) -> io::Result<String> {
        self.record(path);
        LocalFs.read_to_string_blocking(path)
    }
}

/// Fails every read with `PermissionDenied`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeniedFs;

#[async_trait]
impl FileSystem for DeniedFs {
    async fn read_to_string(&self, _path: &Path) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }

    fn read_to_string_blocking(&self, _path: &Path) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }
}
