pub mod logging;

pub use logging::init_tracing;

use crate::config::Shell;

/// 转义会被 shell 在 prompt 中展开的字符
pub fn escape_for_shell(content: &str, shell: Shell) -> String {
    match shell {
        Shell::Bare => content.to_string(),
        Shell::Bash => {
            let mut escaped = String::with_capacity(content.len());
            for c in content.chars() {
                if matches!(c, '\\' | '`' | '$') {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped
        }
        Shell::Zsh => content.replace('%', "%%"),
    }
}
