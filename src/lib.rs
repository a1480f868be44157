mod constants;
mod types;
mod config;
mod error;
mod image_utils;
mod icons;
mod logging;

use anyhow::Context;
use tracing::{error, info};

pub use config::GeneratorConfig;
pub use constants::{APP_ICON_SIZES, EXPECTED_SOURCE_SIZE, OUTPUT_DIR, SOURCE_ICON_PATH};
pub use error::{IconError, Result};
pub use icons::{generate_app_icons, SourceIcon};
pub use types::{GeneratedIcon, GenerationReport, IconSpec};

// 固定パスでアイコン一式を生成する
fn generate(config: &GeneratorConfig) -> anyhow::Result<GenerationReport> {
    generate_app_icons(config).context("アイコン生成に失敗しました")
}

// 実行ファイルのエントリポイント（失敗時は終了コード1）
pub fn run() {
    logging::init_logging();

    let config = GeneratorConfig::default();
    match generate(&config) {
        Ok(report) => {
            info!(
                "{}件のアイコンを生成しました: {}",
                report.generated.len(),
                config.output_dir.display()
            );
        }
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}
