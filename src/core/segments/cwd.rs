//! 当前目录段
//! plain 模式输出一个扁平字符串，lite 模式输出带分隔符的路径段

use super::{Segment, SegmentData, Separator, SeparatorSide};
use crate::config::{Align, CwdMode, SegmentId};
use crate::core::context::{RenderContext, SegmentSink};
use crate::error::SegmentError;
use crate::ui::themes::Theme;
use crate::utils::escape_for_shell;
use std::collections::BTreeMap;

/// 最后一个目录段
pub const CWD: &str = "cwd";
/// 其余目录段
pub const CWD_PATH: &str = "cwd-path";

pub const HOME_ALIAS: &str = "~";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub path: String,
    /// 别名段显示别名且不参与分隔符链接
    pub alias: Option<String>,
}

impl PathSegment {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: Some(alias.into()),
        }
    }

    pub fn is_special(&self) -> bool {
        self.alias.is_some()
    }

    pub fn display(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.path)
    }
}

/// 将 home 前缀替换为 "~"；只在完整路径组件边界上替换
// 不做裸前缀替换：HOME=/Users/alice 时 /Users/alicebob 保持原样
pub fn alias_home(cwd: &str, home: Option<&str>) -> String {
    let home = match home.map(|h| h.trim_end_matches('/')) {
        Some(h) if !h.is_empty() => h,
        _ => return cwd.to_string(),
    };

    match cwd.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("{}{}", HOME_ALIAS, rest),
        _ => cwd.to_string(),
    }
}

/// lite 模式：home 替换 + 去掉首尾 '/'，再做别名展开
pub fn lite_path_segments(
    cwd: &str,
    home: Option<&str>,
    aliases: &BTreeMap<String, String>,
) -> Vec<PathSegment> {
    let aliased = alias_home(cwd, home);
    let trimmed = aliased.trim_matches('/');
    // 根目录去掉 '/' 后为空，保留 "/"
    let path = if trimmed.is_empty() && aliased.starts_with('/') {
        "/"
    } else {
        trimmed
    };

    let normalized: Vec<(String, &str)> = aliases
        .iter()
        .map(|(prefix, alias)| {
            let key = alias_home(prefix, home).trim_matches('/').to_string();
            (key, alias.as_str())
        })
        .filter(|(key, _)| !key.is_empty())
        .collect();

    resolve_aliases(vec![PathSegment::new(path)], &normalized)
}

/// 以最长匹配的别名前缀替换路径开头，剩余部分作为普通段跟在后面
pub fn resolve_aliases(segments: Vec<PathSegment>, aliases: &[(String, &str)]) -> Vec<PathSegment> {
    if aliases.is_empty() {
        return segments;
    }

    let mut resolved = Vec::with_capacity(segments.len() + 1);
    for segment in segments {
        if segment.is_special() {
            resolved.push(segment);
            continue;
        }

        let best = aliases
            .iter()
            .filter_map(|(prefix, alias)| {
                let rest = segment.path.strip_prefix(prefix.as_str())?;
                (rest.is_empty() || rest.starts_with('/')).then_some((prefix, *alias, rest))
            })
            .max_by_key(|(prefix, _, _)| prefix.len());

        match best {
            Some((prefix, alias, rest)) => {
                resolved.push(PathSegment::aliased(prefix.clone(), alias));
                let rest = rest.trim_start_matches('/');
                if !rest.is_empty() {
                    resolved.push(PathSegment::new(rest));
                }
            }
            None => resolved.push(segment),
        }
    }
    resolved
}

/// 超过 max 个字符时截断并追加省略号；max 为 0 表示不截断
pub fn shorten_name(name: &str, max: usize, ellipsis: &str) -> String {
    if max == 0 || name.chars().count() <= max {
        return name.to_string();
    }
    let mut short: String = name.chars().take(max).collect();
    short.push_str(ellipsis);
    short
}

/// 返回 (前景, 背景, 是否特殊段)
fn path_colors(theme: &Theme, segment: &PathSegment, is_last_dir: bool) -> (u8, u8, bool) {
    if segment.is_special() {
        (theme.alias_fg, theme.alias_bg, true)
    } else if is_last_dir {
        (theme.cwd_fg, theme.path_bg, false)
    } else {
        (theme.path_fg, theme.path_bg, false)
    }
}

pub fn style_path_segment(
    ctx: &RenderContext,
    segment: &PathSegment,
    index: usize,
    is_last_dir: bool,
) -> SegmentData {
    let config = &ctx.config;
    let (foreground, background, special) = path_colors(&ctx.theme, segment, is_last_dir);

    let content = escape_for_shell(
        &shorten_name(segment.display(), config.cwd_max_dir_size, ctx.symbols.ellipsis),
        config.shell,
    );

    let name = if is_last_dir { CWD } else { CWD_PATH };
    let mut styled = SegmentData::new(name, content, foreground, background);

    if !special {
        let supports_right = ctx.supports_right_modules();
        if config.align == Align::Right && supports_right && index != 0 {
            styled.separator = Some(Separator {
                glyph: ctx.symbols.separator_reverse_thin.to_string(),
                foreground: ctx.theme.separator_fg,
                side: SeparatorSide::Before,
            });
        } else if (config.align == Align::Left || !supports_right) && !is_last_dir {
            styled.separator = Some(Separator {
                glyph: ctx.symbols.separator_thin.to_string(),
                foreground: ctx.theme.separator_fg,
                side: SeparatorSide::After,
            });
        }
    }

    styled
}

#[derive(Default)]
pub struct CwdSegment;

impl CwdSegment {
    pub fn new() -> Self {
        Self
    }
}

impl Segment for CwdSegment {
    /// 路径处理没有失败路径，总是至少追加一个段
    fn collect(&self, ctx: &RenderContext, sink: &mut SegmentSink) -> Result<(), SegmentError> {
        let home = ctx.home.as_deref();

        match ctx.config.cwd_mode {
            CwdMode::Plain => {
                let content = escape_for_shell(&alias_home(&ctx.cwd, home), ctx.config.shell);
                sink.append_segment(SegmentData::new(
                    CWD,
                    content,
                    ctx.theme.cwd_fg,
                    ctx.theme.path_bg,
                ));
            }
            CwdMode::Lite => {
                let segments = lite_path_segments(&ctx.cwd, home, &ctx.config.path_aliases);
                let last = segments.len().saturating_sub(1);
                for (index, segment) in segments.iter().enumerate() {
                    sink.append_segment(style_path_segment(ctx, segment, index, index == last));
                }
            }
        }
        Ok(())
    }

    fn id(&self) -> SegmentId {
        SegmentId::Cwd
    }
}
