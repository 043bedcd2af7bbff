//! 外部命令探针
//! 以阻塞方式运行一次系统命令并返回标准输出文本

mod command;

pub use command::CommandProbe;

use crate::error::ProbeError;

/// pmset 输出中标识内置电池的行
pub const BATTERY_MARKER: &str = "InternalBattery";

/// "运行并捕获文本" 的窄接口，测试时可注入闭包代替真实子进程
pub trait StatusProbe {
    fn run(&self) -> Result<String, ProbeError>;
}

impl<F> StatusProbe for F
where
    F: Fn() -> Result<String, ProbeError>,
{
    fn run(&self) -> Result<String, ProbeError> {
        self()
    }
}

/// 返回第一行包含 `marker` 的内容；没有匹配时返回空字符串
pub fn select_line(output: &str, marker: &str) -> String {
    output
        .lines()
        .find(|line| line.contains(marker))
        .unwrap_or_default()
        .to_string()
}

/// 运行探针并挑出状态行
pub fn probe_status_line(probe: &dyn StatusProbe, marker: &str) -> Result<String, ProbeError> {
    let output = probe.run()?;
    let line = select_line(&output, marker);
    if line.is_empty() {
        tracing::debug!(marker, "no line matched marker");
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PMSET_OUTPUT: &str = "Now drawing from 'AC Power'\n -InternalBattery-0 (id=4325475)\t14%; AC attached; not charging present: true\n";

    #[test]
    fn test_select_line_picks_marked_line() {
        let line = select_line(PMSET_OUTPUT, BATTERY_MARKER);
        assert!(line.starts_with(" -InternalBattery-0"));
        assert!(line.contains('\t'));
    }

    #[test]
    fn test_select_line_without_match_is_empty() {
        assert_eq!(select_line("Now drawing from 'AC Power'\n", BATTERY_MARKER), "");
        assert_eq!(select_line("", BATTERY_MARKER), "");
    }

    #[test]
    fn test_closure_probe_is_used() {
        let probe = || -> Result<String, ProbeError> { Ok(PMSET_OUTPUT.to_string()) };
        let line = probe_status_line(&probe, BATTERY_MARKER).unwrap();
        assert!(line.contains("14%"));
    }

    #[test]
    fn test_probe_error_propagates() {
        let probe = || -> Result<String, ProbeError> {
            Err(ProbeError::Io {
                program: "pmset".to_string(),
                source: std::io::Error::other("boom"),
            })
        };
        assert!(matches!(
            probe_status_line(&probe, BATTERY_MARKER),
            Err(ProbeError::Io { .. })
        ));
    }
}
