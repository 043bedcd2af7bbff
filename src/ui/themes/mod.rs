mod theme_default;
mod theme_low_contrast;

use crate::config::SymbolMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 256 色前景/背景
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentColors {
    pub foreground: u8,
    pub background: u8,
}

/// 主题颜色表，字段按语义命名，段本身不拥有颜色
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub alias_fg: u8,
    pub alias_bg: u8,
    pub path_fg: u8,
    pub path_bg: u8,
    pub cwd_fg: u8,
    pub separator_fg: u8,
    pub git_ahead_fg: u8,
    pub git_ahead_bg: u8,
    pub git_untracked_fg: u8,
    pub git_untracked_bg: u8,
    /// 按段名覆盖颜色 ("cwd", "cwd-path", "battery")
    #[serde(default)]
    pub overrides: BTreeMap<String, SegmentColors>,
}

impl Theme {
    pub fn override_for(&self, name: &str) -> Option<SegmentColors> {
        self.overrides.get(name).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTemplates {
    pub separator: &'static str,
    pub separator_thin: &'static str,
    pub separator_reverse: &'static str,
    pub separator_reverse_thin: &'static str,
    pub ellipsis: &'static str,
}

impl SymbolTemplates {
    pub fn for_mode(mode: SymbolMode) -> Self {
        match mode {
            SymbolMode::Patched => Self {
                separator: "\u{e0b0}",
                separator_thin: "\u{e0b1}",
                separator_reverse: "\u{e0b2}",
                separator_reverse_thin: "\u{e0b3}",
                ellipsis: "\u{2026}",
            },
            SymbolMode::Compatible => Self {
                separator: "\u{25b6}",
                separator_thin: "\u{276f}",
                separator_reverse: "\u{25c0}",
                separator_reverse_thin: "\u{276e}",
                ellipsis: "...",
            },
        }
    }
}

pub struct ThemePresets;

impl ThemePresets {
    const NAMES: &'static [&'static str] = &["default", "low-contrast"];

    pub fn names() -> &'static [&'static str] {
        Self::NAMES
    }

    pub fn is_known(name: &str) -> bool {
        Self::NAMES.contains(&name)
    }

    /// 未知主题名回退到 default
    pub fn get_theme(name: &str) -> Theme {
        match name {
            "low-contrast" => theme_low_contrast::theme(),
            _ => theme_default::theme(),
        }
    }
}
