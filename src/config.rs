use std::path::PathBuf;
use crate::constants::{APP_ICON_SIZES, EXPECTED_SOURCE_SIZE, OUTPUT_DIR, SOURCE_ICON_PATH};
use crate::types::IconSpec;

// 生成処理の設定（実行ファイルは常に Default を使う）
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub source_path: PathBuf,
    pub output_dir: PathBuf,
    pub expected_source_size: u32,
    pub icons: &'static [IconSpec],
}

impl GeneratorConfig {
    // 入出力パスだけ差し替える
    pub fn new(source_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(SOURCE_ICON_PATH),
            output_dir: PathBuf::from(OUTPUT_DIR),
            expected_source_size: EXPECTED_SOURCE_SIZE,
            icons: APP_ICON_SIZES,
        }
    }
}
