use std::process::ExitStatus;
use thiserror::Error;

/// 外部命令无法执行或执行失败
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("command not found: {program}")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// 状态行缺少 tab 分隔的两段结构
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find home directory")]
    NoHomeDir,

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
