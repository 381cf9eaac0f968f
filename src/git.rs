use std::{
    ffi::OsString,
    io,
    process::{Command, Output},
};

use tracing::debug;

use crate::error::AppError;

/// Git config key holding the identity name
pub const USER_NAME_KEY: &str = "user.name";
/// Git config key holding the identity email
pub const USER_EMAIL_KEY: &str = "user.email";

/// Read/write access to the global Git configuration
pub trait GitConfig {
    /// Returns the trimmed value of a global config key
    fn get(&self, key: &str) -> Result<String, AppError>;

    /// Sets a global config key to `value`
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// `GitConfig` backed by `git config --global`
#[derive(Debug, Clone)]
pub struct GlobalGitConfig {
    program: String,
    envs: Vec<(String, OsString)>,
}

impl GlobalGitConfig {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Uses another executable in place of `git`
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            envs: Vec::new(),
        }
    }

    /// Sets an environment variable for every git invocation, e.g. `GIT_CONFIG_GLOBAL`
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Runs the git executable
    ///
    /// Arguments go straight to the process, so values need no shell quoting.
    fn run(&self, args: &[&str]) -> Result<Output, AppError> {
        debug!(program = %self.program, ?args, "running git");
        Command::new(&self.program)
            .args(args)
            .envs(self.envs.iter().map(|(key, value)| (key, value)))
            .output()
            .map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    AppError::GitNotFound
                } else {
                    AppError::Io(err)
                }
            })
    }
}

impl Default for GlobalGitConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GitConfig for GlobalGitConfig {
    /// Executes Git config get command
    ///
    /// # Arguments
    /// * `key` - Git config key (user.name or user.email)
    fn get(&self, key: &str) -> Result<String, AppError> {
        let git_command_output: Output = self.run(&["config", "--global", "--get", key])?;

        if !git_command_output.status.success() {
            let stderr = String::from_utf8_lossy(&git_command_output.stderr);
            // `git config --get` exits 1 without output when the key is unset
            if stderr.trim().is_empty() {
                return Err(AppError::GitKeyUnset(key.to_string()));
            }
            return Err(AppError::GitCommand(stderr.trim().to_string()));
        }

        let value = String::from_utf8_lossy(&git_command_output.stdout);
        Ok(value.trim().to_string())
    }

    /// Executes a Git config set command
    ///
    /// # Arguments
    /// * `key` - Git config key to set (user.name or user.email)
    /// * `value` - Value to set for key (username or email)
    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let git_command_output: Output = self.run(&["config", "--global", key, value])?;

        if !git_command_output.status.success() {
            let stderr = String::from_utf8_lossy(&git_command_output.stderr);
            return Err(AppError::GitCommand(stderr.trim().to_string()));
        }

        Ok(())
    }
}
