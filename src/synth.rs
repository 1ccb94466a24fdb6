use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::constants::SYNTH_SUBCOMMAND;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::manifest;

/// Trait for the external capability that regenerates common scaffolding.
pub trait TemplateSynthesizer {
    /// Regenerates the common project files, leaving `excludes` untouched.
    fn common_templates(&self, excludes: &[String]) -> Result<()>;
}

/// Structure representing the request passed to the synthesis tool.
///
/// This data is serialized to JSON and passed to the tool via stdin.
#[derive(Serialize)]
struct SynthRequest<'a> {
    /// Path to the repository root the pass runs against
    pub repo_root: &'a str,
    /// Files the pass must leave untouched
    pub excludes: &'a [String],
}

/// Binds the synthesis capability to the external tool's executable.
///
/// The tool is spawned as a child process with its stdout and stderr
/// inherited, so its own reporting reaches the user unchanged.
pub struct SynthTool {
    program: PathBuf,
    repo_root: PathBuf,
}

impl SynthTool {
    pub fn new(program: PathBuf, repo_root: PathBuf) -> Self {
        Self { program, repo_root }
    }
}

impl TemplateSynthesizer for SynthTool {
    fn common_templates(&self, excludes: &[String]) -> Result<()> {
        let repo_root = self.repo_root.as_path().to_str_checked()?;
        let request = SynthRequest { repo_root, excludes };
        let request_data = serde_json::to_vec(&request).map_err(Error::JSONParseError)?;

        let mut child = Command::new(&self.program)
            .arg(SYNTH_SUBCOMMAND)
            .current_dir(&self.repo_root)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;

        // Write the request to stdin and close it
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(&request_data) {
                if e.kind() == std::io::ErrorKind::BrokenPipe {
                    log::debug!(
                        "Tool closed stdin before the request was written (broken pipe)"
                    );
                } else {
                    return Err(Error::IoError(e));
                }
            }
            drop(stdin);
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(Error::SynthExecutionError {
                program: self.program.display().to_string(),
                status,
            });
        }

        Ok(())
    }
}

/// Builds the exclusion manifest and hands it to the synthesizer.
///
/// Exactly one capability call is made; its outcome is returned unmodified.
pub fn synthesize(synthesizer: &dyn TemplateSynthesizer) -> Result<()> {
    let excludes = manifest::excluded_templates()?;
    synthesizer.common_templates(&excludes)
}
