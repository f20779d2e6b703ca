#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;
use wiremock::{Mock, MockServer};

/// Mock VAT API for blocking CLI runs; the runtime keeps the server alive.
pub struct MockApi {
    server: MockServer,
    runtime: tokio::runtime::Runtime,
}

impl MockApi {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn request_count(&self) -> usize {
        self.runtime
            .block_on(self.server.received_requests())
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

/// A profile directory, optionally holding an API key.
pub struct Profile {
    dir: TempDir,
}

impl Profile {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn with_api_key(key: &str) -> Self {
        let profile = Self::empty();
        std::fs::write(
            profile.dir.path().join("config.json"),
            format!(r#"{{"apiKey":"{}"}}"#, key),
        )
        .unwrap();
        profile
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// The binary pointed at this profile and the given API base URL.
    pub fn cmd(&self, base_url: &str) -> Command {
        let mut cmd = Command::cargo_bin("vatapi").unwrap();
        cmd.env("VATAPI_CONFIG_DIR", self.dir.path())
            .env("VATAPI_BASE_URL", base_url)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}
