use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::reenact::domain::reenactor::{FaceReenactor, ReenactError};

/// Runs the reenactment tool as a subprocess:
/// `<python> <script> --face F --audio A --outfile O`.
///
/// The child runs with its working directory set to the tool checkout (it
/// loads checkpoints relative to its own tree); this process's working
/// directory is never touched. Paths are passed as discrete arguments.
pub struct ReenactorCommand {
    tool_dir: PathBuf,
    python: PathBuf,
    script: PathBuf,
}

impl ReenactorCommand {
    pub fn new(tool_dir: impl Into<PathBuf>) -> Self {
        Self {
            tool_dir: tool_dir.into(),
            python: PathBuf::from("python3"),
            script: PathBuf::from("inference.py"),
        }
    }

    pub fn with_python(mut self, python: impl Into<PathBuf>) -> Self {
        self.python = python.into();
        self
    }

    pub fn with_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = script.into();
        self
    }
}

impl FaceReenactor for ReenactorCommand {
    fn generate(&self, face: &Path, audio: &Path, outfile: &Path) -> Result<(), ReenactError> {
        if let Some(parent) = outfile.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ReenactError::OutputDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        log::info!(
            "running reenactment for {} against {}",
            face.display(),
            audio.display()
        );

        let status = Command::new(&self.python)
            .arg(&self.script)
            .arg("--face")
            .arg(face)
            .arg("--audio")
            .arg(audio)
            .arg("--outfile")
            .arg(outfile)
            .current_dir(&self.tool_dir)
            .status()
            .map_err(|source| ReenactError::Launch {
                program: self.python.clone(),
                source,
            })?;

        if !outfile.exists() {
            return Err(ReenactError::NoOutput {
                path: outfile.to_path_buf(),
                status: status.to_string(),
            });
        }

        if !status.success() {
            log::warn!("reenactment tool exited with {status} but wrote its output; continuing");
        }

        Ok(())
    }
}
