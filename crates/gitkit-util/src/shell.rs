//! External command execution.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::{ShellError, ShellResult};

/// Output of a completed command.
#[derive(Debug, Clone)]
pub struct ShellOutput {
    /// Exit code (0 on success).
    pub status: i32,
    /// Captured standard output, empty when stdio was inherited.
    pub stdout: String,
    /// Captured standard error, empty when stdio was inherited.
    pub stderr: String,
}

impl ShellOutput {
    /// Returns stdout with surrounding whitespace removed.
    #[must_use]
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Builder for running an external command.
///
/// Output is captured by default. Call [`ShellCommand::inherit_stdio`] when
/// the child should share the parent's terminal, for progress output and
/// credential prompts.
#[derive(Debug, Clone)]
pub struct ShellCommand {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    inherit_stdio: bool,
}

impl ShellCommand {
    /// Creates a command for the given program.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            inherit_stdio: false,
        }
    }

    /// Appends a single argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the working directory of the child process.
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Shares the parent's stdio with the child instead of capturing it.
    #[must_use]
    pub fn inherit_stdio(mut self, inherit: bool) -> Self {
        self.inherit_stdio = inherit;
        self
    }

    /// Runs the command and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started or exits with a
    /// non-zero status.
    pub fn run(&self) -> ShellResult<ShellOutput> {
        let rendered = self.rendered();
        debug!(command = %rendered, cwd = ?self.cwd, "running command");

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }

        let output = if self.inherit_stdio {
            let status = command.status().map_err(|source| ShellError::Spawn {
                command: rendered.clone(),
                source,
            })?;
            ShellOutput {
                status: status.code().unwrap_or(-1),
                stdout: String::new(),
                stderr: String::new(),
            }
        } else {
            // No stdin when capturing, so the child never waits on a prompt
            command.stdin(Stdio::null());
            let captured = command.output().map_err(|source| ShellError::Spawn {
                command: rendered.clone(),
                source,
            })?;
            ShellOutput {
                status: captured.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&captured.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&captured.stderr).into_owned(),
            }
        };

        if output.status != 0 {
            warn!(command = %rendered, status = output.status, "command failed");
            return Err(ShellError::CommandFailed {
                command: rendered,
                status: output.status,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output)
    }

    fn rendered(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
