use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::DynamicImage;
use crate::error::{IconError, Result};

// 元画像サイズ検証（想定外でも処理は続行するため真偽値のみ返す）
pub fn is_expected_dimensions(width: u32, height: u32, expected: u32) -> bool {
    width == expected && height == expected
}

// 正方形アイコンにリサイズ
pub fn resize_icon(img: &DynamicImage, size: u32) -> DynamicImage {
    // Lanczos3: 小さいアイコンでも輪郭が潰れない高品質フィルタ
    img.resize_exact(size, size, FilterType::Lanczos3)
}

// PNG形式で保存（可逆圧縮、最適化パスなし、既存ファイルは上書き）
pub fn save_png(img: &DynamicImage, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let encoder = PngEncoder::new_with_quality(&mut writer, CompressionType::Default, PngFilter::Adaptive);
    img.write_with_encoder(encoder).map_err(|source| IconError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    writer.flush().map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })
}
