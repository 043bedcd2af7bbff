use super::Theme;
use std::collections::BTreeMap;

pub fn theme() -> Theme {
    Theme {
        alias_fg: 15,
        alias_bg: 31,
        path_fg: 250,
        path_bg: 237,
        cwd_fg: 254,
        separator_fg: 244,
        git_ahead_fg: 250,
        git_ahead_bg: 240,
        git_untracked_fg: 15,
        git_untracked_bg: 52, // Dark red
        overrides: BTreeMap::new(),
    }
}
