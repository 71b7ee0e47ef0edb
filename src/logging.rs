use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "slide_inventory=debug,slide_inventory_common=debug";

/// stderr へのログ出力を初期化する（`RUST_LOG` があればそちらを優先）
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER })
    });

    // 二重初期化（テストなど）は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
