#![allow(dead_code)]

pub mod fake_api;
pub mod http;
pub mod mock_data;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the compiled binary under test
pub fn helpdesk_binary() -> &'static str {
    env!("CARGO_BIN_EXE_helpdesk")
}

/// Helper struct to run helpdesk commands against an isolated config file
pub struct HelpdeskTest {
    pub temp_dir: TempDir,
    api_url: Option<String>,
}

impl HelpdeskTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        HelpdeskTest {
            temp_dir,
            api_url: None,
        }
    }

    /// Point every command at `url` through the environment
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = Some(url.to_string());
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config file");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut command = Command::new(helpdesk_binary());
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("HELPDESK_CONFIG", self.config_path())
            .env_remove("HELPDESK_LOG");
        match &self.api_url {
            Some(url) => command.env("HELPDESK_API_URL", url),
            None => command.env_remove("HELPDESK_API_URL"),
        };
        command.output().expect("Failed to execute helpdesk command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
