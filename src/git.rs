use std::io;
use std::path::Path;
use std::process::{Command, Output};

/// Seam between the dispatcher and the external tool, so tests can record
/// argument vectors instead of spawning processes.
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<Output>;
}

/// Spawns real processes with stdout and stderr captured separately.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<Output> {
        Command::new(program).args(args).current_dir(cwd).output()
    }
}
