//! Dispatcher behaviour against a recording stand-in for the external tool.
#![cfg(unix)]

use std::cell::RefCell;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use gitops::config::GitConfig;
use gitops::dispatch::{Dispatcher, OperationResult, Status};
use gitops::git::CommandRunner;
use gitops::request::{BranchAction, Command, InvocationRequest, StashAction, TagAction};

#[derive(Debug, Clone)]
struct Call {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
}

/// Records every call and answers with a canned exit code / stdout / stderr.
struct RecordingRunner {
    calls: RefCell<Vec<Call>>,
    code: i32,
    stdout: String,
    stderr: String,
}

impl RecordingRunner {
    fn answering(code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            calls: RefCell::new(vec![]),
            code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    fn ok() -> Self {
        Self::answering(0, "", "")
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<Output> {
        self.calls.borrow_mut().push(Call {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });
        Ok(Output {
            status: ExitStatus::from_raw(self.code << 8),
            stdout: self.stdout.as_bytes().to_vec(),
            stderr: self.stderr.as_bytes().to_vec(),
        })
    }
}

/// Always fails to spawn, like a missing binary.
struct BrokenRunner;

impl CommandRunner for BrokenRunner {
    fn run(&self, _: &str, _: &[String], _: &Path) -> io::Result<Output> {
        Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }
}

fn dispatcher(runner: RecordingRunner) -> Dispatcher<RecordingRunner> {
    Dispatcher::with_runner(GitConfig::default(), runner)
}

fn argv_for(request: InvocationRequest) -> Vec<String> {
    let d = dispatcher(RecordingRunner::ok());
    d.execute(&request).unwrap();
    let calls = d.runner().calls();
    assert_eq!(calls.len(), 1, "exactly one external call per request");
    calls[0].args.clone()
}

// ── Argument vectors ─────────────────────────────────────────────────────────

#[test]
fn test_argument_vectors_match_operation_table() {
    let cases: Vec<(InvocationRequest, Vec<&str>)> = vec![
        (InvocationRequest::new(Command::Commit).arg("msg"), vec!["commit", "-m", "msg"]),
        (
            InvocationRequest::new(Command::Commit).arg("msg").flag("all", true),
            vec!["commit", "-a", "-m", "msg"],
        ),
        (InvocationRequest::new(Command::Push).arg("main"), vec!["push", "origin", "main"]),
        (
            InvocationRequest::new(Command::Push).arg("dev").flag("force", true),
            vec!["push", "origin", "dev", "-f"],
        ),
        (InvocationRequest::new(Command::Pull).arg("dev"), vec!["pull", "origin", "dev"]),
        (
            InvocationRequest::new(Command::Branch(BranchAction::Create)).arg("feat/a"),
            vec!["checkout", "-b", "feat/a"],
        ),
        (
            InvocationRequest::new(Command::Branch(BranchAction::Checkout)).arg("feat/a"),
            vec!["checkout", "feat/a"],
        ),
        (InvocationRequest::new(Command::Branch(BranchAction::List)), vec!["branch", "-a"]),
        (InvocationRequest::new(Command::Merge).arg("dev"), vec!["merge", "dev"]),
        (InvocationRequest::new(Command::Stash(StashAction::Save)), vec!["stash", "push"]),
        (
            InvocationRequest::new(Command::Stash(StashAction::Save))
                .text("message", Some("wip".into())),
            vec!["stash", "push", "-m", "wip"],
        ),
        (InvocationRequest::new(Command::Stash(StashAction::Pop)), vec!["stash", "pop"]),
        (InvocationRequest::new(Command::Rebase).arg("main"), vec!["rebase", "main"]),
        (InvocationRequest::new(Command::Tag(TagAction::Create)).arg("v1"), vec!["tag", "v1"]),
        (
            InvocationRequest::new(Command::Tag(TagAction::Create))
                .arg("v1")
                .text("message", Some("first".into())),
            vec!["tag", "v1", "-a", "-m", "first"],
        ),
        (
            InvocationRequest::new(Command::Tag(TagAction::Delete)).arg("v1"),
            vec!["tag", "-d", "v1"],
        ),
        (InvocationRequest::new(Command::Tag(TagAction::List)), vec!["tag"]),
        (InvocationRequest::new(Command::Status), vec!["status"]),
        (InvocationRequest::new(Command::Add).arg("a.rs").arg("b.rs"), vec!["add", "a.rs", "b.rs"]),
        (InvocationRequest::new(Command::Add).flag("all", true), vec!["add", "."]),
    ];

    for (request, expected) in cases {
        let command = request.command;
        assert_eq!(argv_for(request), expected, "wrong argv for `{}`", command);
    }
}

#[test]
fn test_config_program_and_directory_are_used() {
    let cfg = GitConfig::new("fakegit", "/srv/repo");
    let d = Dispatcher::with_runner(cfg, RecordingRunner::ok());
    d.execute(&InvocationRequest::new(Command::Status)).unwrap();

    let call = &d.runner().calls()[0];
    assert_eq!(call.program, "fakegit");
    assert_eq!(call.cwd, PathBuf::from("/srv/repo"));
}

#[test]
fn test_add_all_ignores_explicit_files() {
    let request = InvocationRequest::new(Command::Add)
        .arg("src/a.rs")
        .arg("src/b.rs")
        .flag("all", true);
    assert_eq!(argv_for(request), vec!["add", "."]);
}

// ── Validation ───────────────────────────────────────────────────────────────

#[test]
fn test_tag_create_without_name_never_invokes_tool() {
    let d = dispatcher(RecordingRunner::ok());
    let result = d.execute(&InvocationRequest::new(Command::Tag(TagAction::Create)));
    assert!(result.is_err(), "missing tag name should fail validation");
    assert!(d.runner().calls().is_empty(), "no process should have run");
}

#[test]
fn test_branch_create_without_name_never_invokes_tool() {
    let d = dispatcher(RecordingRunner::ok());
    assert!(d.execute(&InvocationRequest::new(Command::Branch(BranchAction::Create))).is_err());
    assert!(d.runner().calls().is_empty());
}

// ── Result normalisation ─────────────────────────────────────────────────────

#[test]
fn test_error_propagates_stderr_for_every_operation() {
    let requests = vec![
        InvocationRequest::new(Command::Commit).arg("m"),
        InvocationRequest::new(Command::Push).arg("main"),
        InvocationRequest::new(Command::Pull).arg("main"),
        InvocationRequest::new(Command::Branch(BranchAction::List)),
        InvocationRequest::new(Command::Merge).arg("dev"),
        InvocationRequest::new(Command::Stash(StashAction::Pop)),
        InvocationRequest::new(Command::Rebase).arg("main"),
        InvocationRequest::new(Command::Tag(TagAction::List)),
        InvocationRequest::new(Command::Status),
        InvocationRequest::new(Command::Add).flag("all", true),
    ];
    for request in requests {
        let d = dispatcher(RecordingRunner::answering(1, "", "conflict"));
        let result = d.execute(&request).unwrap();
        assert_eq!(
            result,
            OperationResult { status: Status::Error, output: "conflict".into() },
            "`{}` should surface stderr",
            request.command
        );
    }
}

#[test]
fn test_success_propagates_stdout() {
    let d = dispatcher(RecordingRunner::answering(0, "On branch main\n", ""));
    let result = d.execute(&InvocationRequest::new(Command::Status)).unwrap();
    assert_eq!(result.status, Status::Success);
    assert_eq!(result.output, "On branch main");
}

#[test]
fn test_status_and_branch_list_are_idempotent() {
    for request in [
        InvocationRequest::new(Command::Status),
        InvocationRequest::new(Command::Branch(BranchAction::List)),
    ] {
        let d = dispatcher(RecordingRunner::answering(0, "* main\n", ""));
        let first = d.execute(&request).unwrap();
        let second = d.execute(&request).unwrap();
        assert_eq!(first, second);
        let calls = d.runner().calls();
        assert_eq!(calls[0].args, calls[1].args);
    }
}

#[test]
fn test_spawn_failure_becomes_error_result() {
    let d = Dispatcher::with_runner(GitConfig::new("nogit", "."), BrokenRunner);
    let result = d.execute(&InvocationRequest::new(Command::Status)).unwrap();
    assert_eq!(result.status, Status::Error);
    assert!(result.output.contains("nogit"), "should name the program: {}", result.output);
}

#[test]
fn test_commit_fix_bug_scenario() {
    let d = dispatcher(RecordingRunner::answering(0, "[main abc123] fix bug\n", ""));
    let result = d
        .execute(&InvocationRequest::new(Command::Commit).arg("fix bug"))
        .unwrap();
    assert_eq!(d.runner().calls()[0].args, vec!["commit", "-m", "fix bug"]);
    assert_eq!(gitops::output::render(&result), "[SUCCESS] [main abc123] fix bug");
}
