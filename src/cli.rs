use crate::config::{Align, Config, CwdMode, SegmentId, Shell, SymbolMode};
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "promptline")]
#[command(version, about = "Powerline-style prompt segments: battery and cwd")]
pub struct Cli {
    /// Write the default config file
    #[arg(long = "init")]
    pub init: bool,

    /// Print the effective configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Validate the configuration file
    #[arg(long = "check")]
    pub check: bool,

    /// Dump the segment sequence as JSON instead of rendering
    #[arg(long = "json")]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Theme preset name
    #[arg(short = 't', long = "theme")]
    pub theme: Option<String>,

    /// Working directory to render (defaults to the process cwd, then $PWD)
    #[arg(long = "cwd")]
    pub cwd: Option<String>,

    #[arg(long = "cwd-mode", value_enum)]
    pub cwd_mode: Option<CwdMode>,

    /// Maximum directory name length, 0 disables shortening
    #[arg(long = "cwd-max-dir-size")]
    pub cwd_max_dir_size: Option<usize>,

    #[arg(long = "align", value_enum)]
    pub align: Option<Align>,

    #[arg(long = "shell", value_enum)]
    pub shell: Option<Shell>,

    #[arg(long = "mode", value_enum)]
    pub mode: Option<SymbolMode>,

    /// Comma separated segment order, e.g. cwd,battery
    #[arg(long = "modules", value_enum, value_delimiter = ',')]
    pub modules: Option<Vec<SegmentId>>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// 命令行参数覆盖配置文件
    pub fn apply(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(mode) = self.cwd_mode {
            config.cwd_mode = mode;
        }
        if let Some(size) = self.cwd_max_dir_size {
            config.cwd_max_dir_size = size;
        }
        if let Some(align) = self.align {
            config.align = align;
        }
        if let Some(shell) = self.shell {
            config.shell = shell;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(modules) = &self.modules {
            config.modules = modules.clone();
        }
    }
}
