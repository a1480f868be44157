mod source;

pub use self::source::SourceIcon;

use std::fs;
use std::path::Path;
use tracing::{info, warn};
use crate::config::GeneratorConfig;
use crate::error::{IconError, Result};
use crate::image_utils::{resize_icon, save_png};
use crate::types::{GeneratedIcon, GenerationReport, IconSpec};

// 元アイコンからサイズ表のアイコンをすべて生成
pub fn generate_app_icons(config: &GeneratorConfig) -> Result<GenerationReport> {
    // 元画像がなければ何も書き出さずに終了
    let source = SourceIcon::load(&config.source_path)?;

    let source_dimensions = source.dimensions();
    let dimension_warning = !source.has_expected_size(config.expected_source_size);
    if dimension_warning {
        warn!(
            "元アイコンのサイズが{}x{}ではありません。現在のサイズ: {}x{}",
            config.expected_source_size,
            config.expected_source_size,
            source_dimensions.0,
            source_dimensions.1
        );
    }

    let output_dir = config.output_dir.as_path();
    fs::create_dir_all(output_dir).map_err(|source| IconError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut generated = Vec::with_capacity(config.icons.len());
    for spec in config.icons {
        generated.push(generate_icon(&source, spec, output_dir)?);
    }

    Ok(GenerationReport {
        source_dimensions,
        dimension_warning,
        generated,
    })
}

// 1件分: リサイズ → PNG保存 → ログ
fn generate_icon(source: &SourceIcon, spec: &IconSpec, output_dir: &Path) -> Result<GeneratedIcon> {
    let output_path = output_dir.join(spec.filename);

    // 同じサイズでも再サンプリング・再エンコードを通す
    let resized = resize_icon(source.image(), spec.size);
    save_png(&resized, &output_path)?;

    info!("アイコン生成: {} ({}x{})", spec.filename, spec.size, spec.size);

    Ok(GeneratedIcon {
        filename: spec.filename,
        size: spec.size,
        path: output_path,
    })
}
