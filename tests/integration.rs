//! End-to-end tests for the readme binary
//!
//! These tests run the compiled `readme` binary with a private `PATH` that
//! holds stub `clear` and `learn` scripts, feed it stdin, and check:
//! 1. The lesson text on stdout
//! 2. How often each stub ran
//! 3. The exit status

#![cfg(unix)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Test context with a stub bin directory
struct TestContext {
    /// Holds the stubs and their call logs; removed on drop
    dir: TempDir,
}

impl TestContext {
    /// Create a context with stub `clear` and `learn` commands
    fn new() -> Self {
        let ctx = Self::without_runner();
        ctx.stub("learn", "echo run >> \"$STUB_LOG_DIR/learn.log\"\nexit ${LEARN_EXIT:-0}\n");
        ctx
    }

    /// Create a context where only `clear` exists
    fn without_runner() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let ctx = Self { dir };
        ctx.stub("clear", "echo cleared >> \"$STUB_LOG_DIR/clear.log\"\n");
        ctx
    }

    fn bin_dir(&self) -> &Path {
        self.dir.path()
    }

    fn log(&self, name: &str) -> PathBuf {
        self.dir.path().join(format!("{name}.log"))
    }

    fn stub(&self, name: &str, body: &str) {
        let path = self.bin_dir().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}")).expect("Failed to write stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod stub");
    }

    /// Number of times a stub was invoked
    fn calls(&self, name: &str) -> usize {
        fs::read_to_string(self.log(name))
            .map(|s| s.lines().count())
            .unwrap_or(0)
    }

    /// Run the binary with the given stdin and extra environment
    fn run(&self, stdin: &str, env: &[(&str, &str)]) -> Output {
        self.run_bytes(stdin.as_bytes(), env)
    }

    fn run_bytes(&self, stdin: &[u8], env: &[(&str, &str)]) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_readme"))
            .env_clear()
            .env("PATH", self.bin_dir())
            .env("STUB_LOG_DIR", self.dir.path())
            .envs(env.iter().copied())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn readme");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin)
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for readme")
    }
}

fn acks() -> String {
    "\n".repeat(8)
}

#[test]
fn test_full_walk_runs_tests_once() {
    let ctx = TestContext::new();
    let output = ctx.run(&format!("{}learn\n", acks()), &[]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with(concat!(
        "Welcome to your Ruby Basics Todo!\n",
        "---------------------------------\n",
        "Press enter to continue...\n",
    )));
    for n in 1..=7 {
        assert_eq!(stdout.matches(&format!("\n{n}. ")).count(), 1, "instruction {n}");
    }
    assert!(stdout.contains("\n          To move on from one step to the next"));
    assert!(stdout.trim_end().ends_with("re-run the tests with the learn command."));
    assert!(!stdout.contains("Type 'learn'..."));

    assert_eq!(ctx.calls("clear"), 1);
    assert_eq!(ctx.calls("learn"), 1);
}

#[test]
fn test_wrong_tokens_reprompt_before_running() {
    let ctx = TestContext::new();
    let output = ctx.run(&format!("{}Learn\nlearn \n\nquit\nlearn\n", acks()), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Type 'learn'...").count(), 4);
    assert_eq!(ctx.calls("learn"), 1);
}

#[test]
fn test_exit_code_follows_test_runner() {
    let ctx = TestContext::new();
    let output = ctx.run(&format!("{}learn\n", acks()), &[("LEARN_EXIT", "7")]);

    assert_eq!(output.status.code(), Some(7));
    assert_eq!(ctx.calls("learn"), 1);
}

#[test]
fn test_signal_from_test_runner_is_not_success() {
    let ctx = TestContext::new();
    ctx.stub("learn", "echo run >> \"$STUB_LOG_DIR/learn.log\"\nkill -9 $$\n");
    let output = ctx.run(&format!("{}learn\n", acks()), &[]);

    assert_eq!(output.status.code(), Some(137));
    assert_eq!(ctx.calls("learn"), 1);
}

#[test]
fn test_non_utf8_input_does_not_stop_the_walk() {
    let ctx = TestContext::new();
    // Bad bytes on the second gating line and on the first confirmation line
    let stdin = b"\n\xff\xfe\n\n\n\n\n\n\n\xe9\nlearn\n";
    let output = ctx.run_bytes(stdin, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Type 'learn'...").count(), 1);
    assert_eq!(ctx.calls("learn"), 1);
}

#[test]
fn test_end_of_input_never_runs_tests() {
    let ctx = TestContext::new();
    let output = ctx.run(&format!("{}nope\n", acks()), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Input ended while waiting for 'learn'"), "{stderr}");
    assert_eq!(ctx.calls("learn"), 0);
}

#[test]
fn test_missing_test_runner_is_reported() {
    let ctx = TestContext::without_runner();
    let output = ctx.run(&format!("{}learn\n", acks()), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Test runner 'learn' not found"), "{stderr}");
}

#[test]
fn test_missing_clear_is_not_fatal() {
    let ctx = TestContext::new();
    fs::remove_file(ctx.bin_dir().join("clear")).unwrap();
    let output = ctx.run(&format!("{}learn\n", acks()), &[]);

    assert!(output.status.success());
    assert_eq!(ctx.calls("learn"), 1);
}
