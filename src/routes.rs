//! Route table: every (command, sub-action) pair maps to a pure function that
//! builds the argument vector handed to the external tool.
//!
//! Planning never touches the filesystem or spawns anything, so a request
//! that fails here has produced no side effects.

use crate::request::{
    BranchAction, Command, InvocationRequest, RequestError, StashAction, TagAction,
};

/// Branch used by push/pull when none is given.
pub const DEFAULT_BRANCH: &str = "main";

/// Remote used by push/pull.
pub const REMOTE: &str = "origin";

pub type ArgvBuilder = fn(&InvocationRequest) -> Result<Vec<String>, RequestError>;

pub struct Route {
    pub command: Command,
    pub build: ArgvBuilder,
}

pub static ROUTES: &[Route] = &[
    Route { command: Command::Commit, build: commit },
    Route { command: Command::Push, build: push },
    Route { command: Command::Pull, build: pull },
    Route { command: Command::Branch(BranchAction::Create), build: branch_create },
    Route { command: Command::Branch(BranchAction::Checkout), build: branch_checkout },
    Route { command: Command::Branch(BranchAction::List), build: branch_list },
    Route { command: Command::Merge, build: merge },
    Route { command: Command::Stash(StashAction::Save), build: stash_save },
    Route { command: Command::Stash(StashAction::Pop), build: stash_pop },
    Route { command: Command::Rebase, build: rebase },
    Route { command: Command::Tag(TagAction::Create), build: tag_create },
    Route { command: Command::Tag(TagAction::Delete), build: tag_delete },
    Route { command: Command::Tag(TagAction::List), build: tag_list },
    Route { command: Command::Status, build: status },
    Route { command: Command::Add, build: add },
];

/// Look up the builder for `command`.
pub fn route(command: Command) -> &'static Route {
    ROUTES
        .iter()
        .find(|r| r.command == command)
        .unwrap_or_else(|| unreachable!("no route for `{command}`"))
}

/// Validate `request` and produce the argument vector for the external tool.
pub fn plan(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    (route(request.command).build)(request)
}

fn argv<const N: usize>(parts: [&str; N]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn branch_or_default(request: &InvocationRequest) -> &str {
    request.positional(0).unwrap_or(DEFAULT_BRANCH)
}

fn commit(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    let message = request.require("commit message")?;
    let mut args = argv(["commit"]);
    if request.is_set("all") {
        args.push("-a".into());
    }
    args.extend(argv(["-m", message]));
    Ok(args)
}

fn push(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    let mut args = argv(["push", REMOTE, branch_or_default(request)]);
    if request.is_set("force") {
        args.push("-f".into());
    }
    Ok(args)
}

fn pull(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    Ok(argv(["pull", REMOTE, branch_or_default(request)]))
}

fn branch_create(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    Ok(argv(["checkout", "-b", request.require("branch name")?]))
}

fn branch_checkout(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    Ok(argv(["checkout", request.require("branch name")?]))
}

fn branch_list(_: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    Ok(argv(["branch", "-a"]))
}

fn merge(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    Ok(argv(["merge", request.require("branch name")?]))
}

fn stash_save(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    let mut args = argv(["stash", "push"]);
    if let Some(message) = request.text_value("message") {
        args.extend(argv(["-m", message]));
    }
    Ok(args)
}

fn stash_pop(_: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    Ok(argv(["stash", "pop"]))
}

fn rebase(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    Ok(argv(["rebase", request.require("branch name")?]))
}

fn tag_create(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    let mut args = argv(["tag", request.require("tag name")?]);
    // A message turns the tag into an annotated one.
    if let Some(message) = request.text_value("message") {
        args.extend(argv(["-a", "-m", message]));
    }
    Ok(args)
}

fn tag_delete(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    Ok(argv(["tag", "-d", request.require("tag name")?]))
}

fn tag_list(_: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    Ok(argv(["tag"]))
}

fn status(_: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    Ok(argv(["status"]))
}

fn add(request: &InvocationRequest) -> Result<Vec<String>, RequestError> {
    let mut args = argv(["add"]);
    // --all wins over an explicit file list.
    if request.is_set("all") {
        args.push(".".into());
    } else {
        args.extend(request.args.iter().cloned());
    }
    Ok(args)
}
