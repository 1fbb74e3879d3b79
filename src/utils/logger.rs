use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Compact,
    Json,
}

/// `RUST_LOG` wins over these.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "news_reader=debug,info"
    } else {
        "news_reader=info"
    }
}

fn install(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // stdout 只留給文章輸出
    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

pub fn init_cli_logger(verbose: bool) {
    install(verbose, LogFormat::Compact);
}

/// JSON 格式輸出，方便交給日誌收集系統
pub fn init_json_logger(verbose: bool) {
    install(verbose, LogFormat::Json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_crate_debug() {
        assert_eq!(default_directives(false), "news_reader=info");
        assert!(default_directives(true).starts_with("news_reader=debug"));
        assert!(EnvFilter::try_new(default_directives(true)).is_ok());
    }
}
