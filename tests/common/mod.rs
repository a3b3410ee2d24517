#![allow(dead_code)]

pub mod mock_language;
pub mod mock_store;

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

pub const OBAMA: &str = "Barack Obama lives in Washington D.C.";
pub const POLITICS: &str = "The first two gubernatorial elections since President \
    Donald Trump took office went in favor of Democratic candidates in Virginia and New Jersey.";
pub const PRESIDENTS_URI: &str = "gs://lingo-test/language/presidents.txt";

/// Runs the `lingo` binary with an isolated config dir
pub struct TestContext {
    pub temp_dir: TempDir,
    envs: Vec<(String, String)>,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("config"))
            .expect("Failed to create config dir");
        Self {
            temp_dir,
            envs: Vec::new(),
        }
    }

    /// Point every endpoint at one fake server
    pub fn with_server(mut self, url: &str) -> Self {
        for key in [
            "LINGO_LANGUAGE_ENDPOINT",
            "LINGO_STORAGE_ENDPOINT",
            "LINGO_TTS_ENDPOINT",
        ] {
            self.envs.push((key.to_string(), url.to_string()));
        }
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let bin_path = env!("CARGO_BIN_EXE_lingo");
        let mut cmd = Command::new(bin_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env("HOME", self.temp_dir.path())
            // Disable env vars that might interfere
            .env_remove("LINGO_API_KEY")
            .env_remove("LINGO_ACCESS_TOKEN")
            .env_remove("LINGO_LANGUAGE_ENDPOINT")
            .env_remove("LINGO_STORAGE_ENDPOINT")
            .env_remove("LINGO_TTS_ENDPOINT")
            .env_remove("RUST_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to run lingo")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
