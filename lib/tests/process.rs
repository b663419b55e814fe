#![cfg(unix)]

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use bgpsim::{run, validate, Engine, InvocationArgs, InvocationResult, LocalFs, ProcessEngine};

use tempfile::TempDir;

/// A scratch directory holding a stub simulator and its input files.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        for name in ["rel.txt", "anns.csv", "rov.csv"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a shell script stub simulator with the given body and mode.
    fn simulator(&self, body: &str, mode: u32) -> ProcessEngine {
        let program = self.path("simulator");
        fs::write(&program, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(mode)).unwrap();
        ProcessEngine::new(program)
    }

    fn args(&self) -> InvocationArgs {
        InvocationArgs::new(self.path("rel.txt"), self.path("anns.csv"))
            .with_rov_asns(self.path("rov.csv"))
            .with_output(self.path("ribs.csv"))
    }
}

#[test]
fn forwards_exit_code_and_arguments() {
    let ws = Workspace::new();
    let log = ws.path("argv.log");
    let engine = ws.simulator(
        &format!(
            r#"for arg in "$@"; do printf '%s\n' "$arg" >> '{}'; done; exit 3"#,
            log.display()
        ),
        0o755,
    );
    let request = validate(&engine, &LocalFs, ws.args()).unwrap();

    let result = run(&engine, &request);
    assert!(matches!(result, InvocationResult::Exited(3)));
    assert_eq!(result.code(), 3);

    let argv = fs::read_to_string(&log).unwrap();
    let expect = [
        "--caida".into(),
        ws.path("rel.txt").display().to_string(),
        "--announcements".into(),
        ws.path("anns.csv").display().to_string(),
        "--output".into(),
        ws.path("ribs.csv").display().to_string(),
        "--rov-asns".into(),
        ws.path("rov.csv").display().to_string(),
    ];
    assert_eq!(argv.lines().collect::<Vec<_>>(), expect);
}

#[test]
fn non_executable_simulator_is_a_launch_failure() {
    let ws = Workspace::new();
    let engine = ws.simulator("exit 0", 0o644);
    assert!(engine.is_available());
    let request = validate(&engine, &LocalFs, ws.args()).unwrap();

    match run(&engine, &request) {
        InvocationResult::LaunchFailed(err) => {
            assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
            assert_eq!(err.program(), ws.path("simulator"));
        }
        InvocationResult::Exited(code) => panic!("unexpected exit code {code}"),
    }
}

#[test]
fn vanished_simulator_is_a_launch_failure() {
    let ws = Workspace::new();
    let engine = ws.simulator("exit 0", 0o755);
    let request = validate(&engine, &LocalFs, ws.args()).unwrap();
    fs::remove_file(engine.program()).unwrap();

    let result = run(&engine, &request);
    assert_eq!(result.code(), 1);
    assert!(matches!(
        result,
        InvocationResult::LaunchFailed(ref err) if err.kind() == io::ErrorKind::NotFound
    ));
}

#[test]
fn signal_termination_maps_to_shell_status() {
    let ws = Workspace::new();
    let engine = ws.simulator("kill -TERM $$", 0o755);
    let request = validate(&engine, &LocalFs, ws.args()).unwrap();

    let result = run(&engine, &request);
    assert!(matches!(result, InvocationResult::Exited(143)));
    assert!(!result.is_success());
}
