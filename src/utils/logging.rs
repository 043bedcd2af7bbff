use tracing_subscriber::EnvFilter;

/// 日志级别环境变量
pub const LOG_ENV: &str = "PROMPTLINE_LOG";

/// 日志只写 stderr，stdout 留给 prompt 本身
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
