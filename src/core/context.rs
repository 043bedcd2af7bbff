use super::segments::SegmentData;
use crate::config::Config;
use crate::ui::themes::{SymbolTemplates, Theme, ThemePresets};
use std::env;

/// 一次渲染的只读输入
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub cwd: String,
    pub home: Option<String>,
    pub config: Config,
    pub theme: Theme,
    pub symbols: SymbolTemplates,
}

impl RenderContext {
    /// 从进程环境构建：cwd 优先使用传入值，其次进程工作目录，最后 $PWD
    pub fn new(config: &Config, cwd: Option<String>) -> Self {
        let cwd = cwd
            .filter(|c| !c.is_empty())
            .or_else(|| {
                env::current_dir()
                    .ok()
                    .map(|p| p.to_string_lossy().into_owned())
            })
            .filter(|c| !c.is_empty())
            .or_else(|| env::var("PWD").ok())
            .unwrap_or_default();

        let home = env::var("HOME").ok().filter(|h| !h.is_empty());

        Self::from_parts(config, cwd, home)
    }

    pub fn from_parts(config: &Config, cwd: String, home: Option<String>) -> Self {
        let mut theme = ThemePresets::get_theme(&config.theme);
        theme.overrides.extend(
            config
                .theme_overrides
                .iter()
                .map(|(name, colors)| (name.clone(), *colors)),
        );

        Self {
            cwd,
            home,
            config: config.clone(),
            theme,
            symbols: SymbolTemplates::for_mode(config.mode),
        }
    }

    pub fn supports_right_modules(&self) -> bool {
        self.config.shell.supports_right_modules()
    }
}

/// 只追加的段序列，由顶层驱动持有
#[derive(Debug, Default)]
pub struct SegmentSink {
    segments: Vec<SegmentData>,
}

impl SegmentSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_segment(&mut self, segment: SegmentData) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[SegmentData] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn into_segments(self) -> Vec<SegmentData> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::themes::SegmentColors;
    use serial_test::serial;

    #[test]
    fn test_sink_preserves_append_order() {
        let mut sink = SegmentSink::new();
        sink.append_segment(SegmentData::new("a", "1", 0, 0));
        sink.append_segment(SegmentData::new("b", "2", 0, 0));
        let names: Vec<_> = sink.segments().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_config_overrides_merge_into_theme() {
        let mut config = Config::default();
        config.theme_overrides.insert(
            "battery".to_string(),
            SegmentColors {
                foreground: 1,
                background: 2,
            },
        );
        let ctx = RenderContext::from_parts(&config, "/".to_string(), None);
        assert_eq!(ctx.theme.override_for("battery").map(|c| c.background), Some(2));
        assert!(ctx.theme.override_for("cwd").is_none());
    }

    #[test]
    #[serial]
    fn test_explicit_cwd_wins_and_empty_home_is_ignored() {
        let saved = env::var("HOME").ok();
        env::set_var("HOME", "");

        let ctx = RenderContext::new(&Config::default(), Some("/srv/app".to_string()));
        assert_eq!(ctx.cwd, "/srv/app");
        assert_eq!(ctx.home, None);

        match saved {
            Some(home) => env::set_var("HOME", home),
            None => env::remove_var("HOME"),
        }
    }

    #[test]
    #[serial]
    fn test_home_is_read_from_environment() {
        let saved = env::var("HOME").ok();
        env::set_var("HOME", "/Users/alice");

        let ctx = RenderContext::new(&Config::default(), None);
        assert_eq!(ctx.home.as_deref(), Some("/Users/alice"));
        assert!(!ctx.cwd.is_empty());

        match saved {
            Some(home) => env::set_var("HOME", home),
            None => env::remove_var("HOME"),
        }
    }
}
