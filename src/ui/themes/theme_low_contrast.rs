use super::Theme;
use std::collections::BTreeMap;

pub fn theme() -> Theme {
    Theme {
        alias_fg: 0,
        alias_bg: 15,
        path_fg: 8,
        path_bg: 15,
        cwd_fg: 0,
        separator_fg: 7,
        git_ahead_fg: 0,
        git_ahead_bg: 7,
        git_untracked_fg: 0,
        git_untracked_bg: 11,
        overrides: BTreeMap::new(),
    }
}
