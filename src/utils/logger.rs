use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Stage progress is logged at debug,
/// so a default run stays silent apart from the final result line.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "bounty_targets=debug,info"
    } else {
        "bounty_targets=info"
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // 診斷訊息一律寫到 stderr，stdout 只保留成功訊息
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
