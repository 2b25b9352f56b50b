use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod export;
mod init;
mod preview;

const BIN_NAME: &str = "rosetta";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop the config search at the temp project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        Self::with_files(&[(path, content)])
    }

    /// A project holding the given `(path, content)` files.
    pub fn with_files(files: &[(&str, &str)]) -> Result<Self> {
        let test = Self::new()?;
        for (path, content) in files {
            test.write_file(path, content)?;
        }
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("cannot write {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear().env("NO_COLOR", "1");
        cmd
    }

    fn subcommand(&self, name: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg(name);
        cmd
    }

    pub fn check_command(&self) -> Command {
        self.subcommand("check")
    }

    pub fn preview_command(&self) -> Command {
        self.subcommand("preview")
    }

    pub fn export_command(&self) -> Command {
        self.subcommand("export")
    }

    /// Whether `path` exists under the project root.
    pub fn has_file(&self, path: &str) -> bool {
        self.project_dir.join(path).is_file()
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("cannot read {}", file_path.display()))
    }
}

/// Captured process output as UTF-8 text.
pub struct RunOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(cmd: &mut Command) -> Result<RunOutput> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output()?;
    Ok(RunOutput {
        code: status.code(),
        stdout: String::from_utf8(stdout)?,
        stderr: String::from_utf8(stderr)?,
    })
}
