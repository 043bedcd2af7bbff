use super::StatusProbe;
use crate::error::ProbeError;
use std::process::{Command, Stdio};

/// 固定命令 + 固定参数，无超时
#[derive(Debug, Clone)]
pub struct CommandProbe {
    program: String,
    args: Vec<String>,
}

impl CommandProbe {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `pmset -g batt`
    pub fn pmset() -> Self {
        Self::new("pmset", ["-g", "batt"])
    }
}

impl StatusProbe for CommandProbe {
    fn run(&self) -> Result<String, ProbeError> {
        let path = which::which(&self.program).map_err(|source| ProbeError::NotFound {
            program: self.program.clone(),
            source,
        })?;

        tracing::debug!(program = %path.display(), args = ?self.args, "running probe");

        let output = Command::new(&path)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| ProbeError::Io {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                program: self.program.clone(),
                status: output.status,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
