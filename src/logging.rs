use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// コンソールログ初期化（RUST_LOG 未設定時は info、出力先は標準エラー）
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // 二重初期化は無視する
    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}
