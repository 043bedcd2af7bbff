//! 电池段
//! 解析 `pmset -g batt` 的电池状态行并输出 "battery" 段

use super::{Segment, SegmentData};
use crate::config::SegmentId;
use crate::core::context::{RenderContext, SegmentSink};
use crate::error::{ParseError, SegmentError};
use crate::probe::{self, StatusProbe, BATTERY_MARKER};
use crate::utils::escape_for_shell;
use regex::Regex;
use std::sync::LazyLock;

pub const SEGMENT_NAME: &str = "battery";

/// pmset 在没有估算时偶尔报告的无意义时间
const NO_ESTIMATE_SENTINEL: &str = "0:00";

static PERCENTAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+%").expect("valid percentage pattern"));
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+)").expect("valid time pattern"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatteryStatus {
    pub percentage: Option<String>,
    pub ac_attached: bool,
    pub charging: bool,
    /// "H:MM"，不包含 "0:00"
    pub estimated_time: Option<String>,
}

/// 单个 token 的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusToken {
    Percentage(String),
    AcAttached,
    NotCharging,
    Charging,
    EstimatedTime(String),
    NoEstimate,
    Unrecognized,
}

type TokenRule = fn(&str) -> Option<StatusToken>;

/// 顺序即优先级："not charging" 包含 "charging"，必须排在通用规则之前
const TOKEN_RULES: &[TokenRule] = &[
    match_percentage,
    match_ac_attached,
    match_not_charging,
    match_charging,
    match_estimated_time,
];

fn match_percentage(token: &str) -> Option<StatusToken> {
    PERCENTAGE_PATTERN
        .find(token)
        .map(|m| StatusToken::Percentage(m.as_str().to_string()))
}

fn match_ac_attached(token: &str) -> Option<StatusToken> {
    token.contains("AC attached").then_some(StatusToken::AcAttached)
}

fn match_not_charging(token: &str) -> Option<StatusToken> {
    (token.contains("not charging") || token.contains("discharging"))
        .then_some(StatusToken::NotCharging)
}

fn match_charging(token: &str) -> Option<StatusToken> {
    token.contains("charging").then_some(StatusToken::Charging)
}

fn match_estimated_time(token: &str) -> Option<StatusToken> {
    TIME_PATTERN.find(token).map(|m| match m.as_str() {
        NO_ESTIMATE_SENTINEL => StatusToken::NoEstimate,
        time => StatusToken::EstimatedTime(time.to_string()),
    })
}

pub fn classify_token(token: &str) -> StatusToken {
    TOKEN_RULES
        .iter()
        .find_map(|rule| rule(token))
        .unwrap_or(StatusToken::Unrecognized)
}

impl BatteryStatus {
    fn apply(&mut self, token: StatusToken) {
        match token {
            StatusToken::Percentage(p) => self.percentage = Some(p),
            StatusToken::AcAttached => self.ac_attached = true,
            StatusToken::NotCharging => self.charging = false,
            StatusToken::Charging => self.charging = true,
            StatusToken::EstimatedTime(t) => self.estimated_time = Some(t),
            StatusToken::NoEstimate | StatusToken::Unrecognized => {}
        }
    }

    /// 估算剩余分钟数，没有估算时为 0
    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_time
            .as_deref()
            .map(parse_estimated_minutes)
            .unwrap_or(0)
    }
}

/// 解析电池状态行，例如
///
/// ```text
/// -InternalBattery-0 (id=4325475)	10%; charging; 2:17 remaining present: true
/// -InternalBattery-0 (id=4325475)	9%; discharging; (no estimate) present: true
/// -InternalBattery-0 (id=4325475)	14%; AC attached; not charging present: true
/// ```
///
/// 百分比前是一个 tab；tab 之后按 "; " 拆分。
pub fn parse_status_line(line: &str) -> Result<BatteryStatus, ParseError> {
    let (_, details) = line
        .split_once('\t')
        .ok_or_else(|| ParseError::new("cannot parse battery line"))?;

    // 只取第一个 tab 之后、下一个 tab 之前的部分
    let details = details.split('\t').next().unwrap_or_default();

    let mut status = BatteryStatus::default();
    for token in details.split("; ") {
        status.apply(classify_token(token));
    }

    Ok(status)
}

/// "2:17" -> 137，无法解析时为 0
pub fn parse_estimated_minutes(time: &str) -> u32 {
    TIME_PATTERN
        .captures(time)
        .and_then(|caps| {
            let hours: u32 = caps[1].parse().ok()?;
            let minutes: u32 = caps[2].parse().ok()?;
            hours.checked_mul(60)?.checked_add(minutes)
        })
        .unwrap_or(0)
}

pub fn format_label(status: &BatteryStatus) -> String {
    let percentage = status.percentage.as_deref().unwrap_or_default();
    match &status.estimated_time {
        Some(time) => format!("{} ({})", percentage, time),
        None => percentage.to_string(),
    }
}

/// 充电或接通电源时用 "ahead" 配色，否则用 "untracked" 配色
pub fn style_battery(ctx: &RenderContext, status: &BatteryStatus) -> SegmentData {
    let theme = &ctx.theme;
    let (foreground, background) = if status.charging || status.ac_attached {
        (theme.git_ahead_fg, theme.git_ahead_bg)
    } else {
        (theme.git_untracked_fg, theme.git_untracked_bg)
    };

    let label = escape_for_shell(&format_label(status), ctx.config.shell);
    let mut segment = SegmentData::new(SEGMENT_NAME, label, foreground, background);
    segment.metadata.insert(
        "estimated_minutes".to_string(),
        status.estimated_minutes().to_string(),
    );
    segment
        .metadata
        .insert("charging".to_string(), status.charging.to_string());
    segment
        .metadata
        .insert("ac_attached".to_string(), status.ac_attached.to_string());
    segment
}

pub struct BatterySegment<'a> {
    probe: &'a dyn StatusProbe,
}

impl<'a> BatterySegment<'a> {
    pub fn new(probe: &'a dyn StatusProbe) -> Self {
        Self { probe }
    }
}

impl Segment for BatterySegment<'_> {
    /// 探测或解析失败时不追加任何段
    fn collect(&self, ctx: &RenderContext, sink: &mut SegmentSink) -> Result<(), SegmentError> {
        let line = probe::probe_status_line(self.probe, BATTERY_MARKER)?;
        let status = parse_status_line(&line)?;
        tracing::debug!(?status, "parsed battery status");

        sink.append_segment(style_battery(ctx, &status));
        Ok(())
    }

    fn id(&self) -> SegmentId {
        SegmentId::Battery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Shell};
    use crate::error::ProbeError;

    const CHARGING: &str =
        "-InternalBattery-0 (id=4325475)\t10%; charging; 2:17 remaining present: true";
    const AC_NOT_CHARGING: &str =
        "-InternalBattery-0 (id=4325475)\t14%; AC attached; not charging present: true";
    const DISCHARGING: &str =
        "-InternalBattery-0 (id=4325475)\t9%; discharging; (no estimate) present: true";

    fn context() -> RenderContext {
        RenderContext::from_parts(&Config::default(), "/tmp".to_string(), None)
    }

    #[test]
    fn test_parse_charging_line() {
        let status = parse_status_line(CHARGING).unwrap();
        assert_eq!(status.percentage.as_deref(), Some("10%"));
        assert!(status.charging);
        assert!(!status.ac_attached);
        assert_eq!(status.estimated_time.as_deref(), Some("2:17"));
    }

    #[test]
    fn test_parse_ac_attached_not_charging() {
        let status = parse_status_line(AC_NOT_CHARGING).unwrap();
        assert_eq!(status.percentage.as_deref(), Some("14%"));
        assert!(status.ac_attached);
        assert!(!status.charging);
        assert_eq!(status.estimated_time, None);
    }

    #[test]
    fn test_parse_discharging_without_estimate() {
        let status = parse_status_line(DISCHARGING).unwrap();
        assert_eq!(status.percentage.as_deref(), Some("9%"));
        assert!(!status.charging);
        assert_eq!(status.estimated_time, None);
    }

    #[test]
    fn test_zero_estimate_is_discarded() {
        let status = parse_status_line("x\t80%; discharging; 0:00 remaining present: true").unwrap();
        assert_eq!(status.estimated_time, None);

        let status = parse_status_line("x\t0:00; charging").unwrap();
        assert_eq!(status.estimated_time, None);
        assert!(status.charging);
    }

    #[test]
    fn test_line_without_tab_is_parse_error() {
        let err = parse_status_line("-InternalBattery-0 10%; charging").unwrap_err();
        assert_eq!(err.to_string(), "cannot parse battery line");
        assert!(parse_status_line("").is_err());
    }

    #[test]
    fn test_no_recognized_tokens_is_still_valid() {
        let status = parse_status_line("battery\tsomething; else entirely").unwrap();
        assert_eq!(status, BatteryStatus::default());
    }

    #[test]
    fn test_not_charging_wins_over_generic_charging() {
        assert_eq!(classify_token("not charging"), StatusToken::NotCharging);
        assert_eq!(classify_token("discharging"), StatusToken::NotCharging);
        assert_eq!(classify_token("charging"), StatusToken::Charging);
        assert_eq!(classify_token("AC attached"), StatusToken::AcAttached);
        assert_eq!(classify_token("(no estimate)"), StatusToken::Unrecognized);
        assert_eq!(
            classify_token("2:17 remaining"),
            StatusToken::EstimatedTime("2:17".to_string())
        );
    }

    #[test]
    fn test_parse_is_repeatable() {
        for line in [CHARGING, AC_NOT_CHARGING, DISCHARGING] {
            assert_eq!(parse_status_line(line), parse_status_line(line));
        }
    }

    #[test]
    fn test_parse_estimated_minutes() {
        assert_eq!(parse_estimated_minutes("2:17"), 137);
        assert_eq!(parse_estimated_minutes("0:05"), 5);
        assert_eq!(parse_estimated_minutes("soon"), 0);
        assert_eq!(parse_estimated_minutes(""), 0);
    }

    #[test]
    fn test_format_label() {
        let with_estimate = BatteryStatus {
            percentage: Some("10%".to_string()),
            estimated_time: Some("2:17".to_string()),
            ..BatteryStatus::default()
        };
        assert_eq!(format_label(&with_estimate), "10% (2:17)");

        let without_estimate = BatteryStatus {
            percentage: Some("10%".to_string()),
            ..BatteryStatus::default()
        };
        assert_eq!(format_label(&without_estimate), "10%");
    }

    #[test]
    fn test_style_uses_shared_palette() {
        let ctx = context();
        let charging = parse_status_line(CHARGING).unwrap();
        let segment = style_battery(&ctx, &charging);
        assert_eq!(segment.name, "battery");
        assert_eq!(segment.content, "10% (2:17)");
        assert_eq!(segment.background, ctx.theme.git_ahead_bg);
        assert_eq!(segment.metadata["estimated_minutes"], "137");

        let ac = parse_status_line(AC_NOT_CHARGING).unwrap();
        assert_eq!(style_battery(&ctx, &ac).background, ctx.theme.git_ahead_bg);

        let discharging = parse_status_line(DISCHARGING).unwrap();
        let segment = style_battery(&ctx, &discharging);
        assert_eq!(segment.foreground, ctx.theme.git_untracked_fg);
        assert_eq!(segment.background, ctx.theme.git_untracked_bg);
        assert!(segment.separator.is_none());
    }

    #[test]
    fn test_collect_appends_one_segment() {
        let ctx = context();
        let mut sink = SegmentSink::new();
        let probe = || -> Result<String, ProbeError> {
            Ok(format!("Now drawing from 'Battery Power'\n {}\n", DISCHARGING))
        };

        BatterySegment::new(&probe).collect(&ctx, &mut sink).unwrap();
        let segments = sink.into_segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, "9%");
    }

    #[test]
    fn test_collect_without_battery_line_appends_nothing() {
        let ctx = context();
        let mut sink = SegmentSink::new();
        let probe = || -> Result<String, ProbeError> { Ok("Now drawing from 'AC Power'\n".to_string()) };

        let result = BatterySegment::new(&probe).collect(&ctx, &mut sink);
        assert!(matches!(result, Err(SegmentError::Parse(_))));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_label_is_escaped_for_zsh_prompt() {
        let config = Config {
            shell: Shell::Zsh,
            ..Config::default()
        };
        let ctx = RenderContext::from_parts(&config, "/tmp".to_string(), None);
        let status = parse_status_line(CHARGING).unwrap();

        assert_eq!(style_battery(&ctx, &status).content, "10%% (2:17)");
        assert_eq!(format_label(&status), "10% (2:17)");
    }

    #[test]
    fn test_segment_id() {
        let probe = || -> Result<String, ProbeError> { Ok(String::new()) };
        assert_eq!(BatterySegment::new(&probe).id(), SegmentId::Battery);
    }
}
