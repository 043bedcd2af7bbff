use crate::ui::themes::SegmentColors;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SegmentId {
    Cwd,
    Battery,
}

/// cwd 渲染模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CwdMode {
    /// 单个扁平字符串，仅做 home 替换
    Plain,
    /// 拆分为带样式的路径段
    #[default]
    Lite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Shell {
    #[default]
    Bare,
    Bash,
    Zsh,
}

impl Shell {
    /// bash 没有右侧 prompt
    pub fn supports_right_modules(&self) -> bool {
        matches!(self, Shell::Bare | Shell::Zsh)
    }

    /// 包裹不可见转义序列，让 readline / ZLE 正确计算 prompt 宽度
    pub fn non_printing_delimiters(&self) -> (&'static str, &'static str) {
        match self {
            Shell::Bare => ("", ""),
            Shell::Bash => ("\\[", "\\]"),
            Shell::Zsh => ("%{", "%}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SymbolMode {
    /// Powerline patched fonts
    #[default]
    Patched,
    Compatible,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 段的输出顺序
    pub modules: Vec<SegmentId>,
    pub cwd_mode: CwdMode,
    pub align: Align,
    pub shell: Shell,
    /// 0 表示不截断
    pub cwd_max_dir_size: usize,
    pub mode: SymbolMode,
    pub theme: String,
    /// 路径前缀 -> 别名，例如 "~/work" = "W"
    pub path_aliases: BTreeMap<String, String>,
    /// 按段名覆盖主题颜色
    pub theme_overrides: BTreeMap<String, SegmentColors>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modules: vec![SegmentId::Cwd, SegmentId::Battery],
            cwd_mode: CwdMode::default(),
            align: Align::default(),
            shell: Shell::default(),
            cwd_max_dir_size: 0,
            mode: SymbolMode::default(),
            theme: "default".to_string(),
            path_aliases: BTreeMap::new(),
            theme_overrides: BTreeMap::new(),
        }
    }
}
