use std::path::Path;
use std::process::Command;

use crate::sim::{
    self,
    SimError,
};

/// Captured output of a successful external program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs external programs for the simulation workflow.
pub trait CommandRunner {
    /// Run `program` with `args`, inside `working_dir` when given.
    /// A non-zero exit status is an `ExternalProcessError`.
    fn run(&self, program: &str, args: &[String], working_dir: Option<&str>) -> sim::ProcResult<CommandOutput>;
}

/// Runs programs with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], working_dir: Option<&str>) -> sim::ProcResult<CommandOutput> {
        let program = resolve_program(program);
        tracing::info!("running `{} {}`", program, args.join(" "));

        let mut command = Command::new(&program);
        command.args(args);
        if let Some(working_dir) = working_dir {
            command.current_dir(working_dir);
        }

        let output = command.output().map_err(|error| SimError::ExternalProcessError{
            program: program.clone(),
            status: None,
            stdout: String::new(),
            stderr: format!("failed to start: {}", error),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(SimError::ExternalProcessError{
                program,
                status: output.status.code(),
                stdout,
                stderr,
            });
        }
        if !stderr.trim().is_empty() {
            tracing::debug!("`{}` stderr:\n{}", program, stderr);
        }
        Ok(CommandOutput{stdout, stderr})
    }
}

/// Relative program paths (with a separator) are anchored to the launch directory,
/// so changing the child's working directory does not change which program runs.
/// Bare names are left for the `PATH` lookup.
fn resolve_program(program: &str) -> String {
    let path = Path::new(program);
    if path.is_absolute() || path.components().count() < 2 {
        return program.to_string();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path).to_string_lossy().into_owned(),
        Err(_) => program.to_string(),
    }
}
