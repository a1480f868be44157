use std::path::{Path, PathBuf};
use image::{DynamicImage, GenericImageView};
use tracing::debug;
use crate::error::{IconError, Result};
use crate::image_utils::is_expected_dimensions;

/// 読み込み済みの元アイコン
///
/// 生成処理の間だけ保持し、スコープを抜けるとデコード済みバッファも解放される。
pub struct SourceIcon {
    path: PathBuf,
    image: DynamicImage,
}

impl SourceIcon {
    // 元画像を読み込む（存在しなければ MissingSource）
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IconError::MissingSource(path.to_path_buf()));
        }

        let image = image::open(path).map_err(|source| IconError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("元アイコン読み込み: {} ({:?})", path.display(), image.color());

        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn has_expected_size(&self, expected: u32) -> bool {
        let (width, height) = self.dimensions();
        is_expected_dimensions(width, height, expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn missing_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AppIcon-1024.png");

        match SourceIcon::load(&path) {
            Err(IconError::MissingSource(missing)) => assert_eq!(missing, path),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("missing source loaded"),
        }
    }

    #[test]
    fn undecodable_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AppIcon-1024.png");
        std::fs::write(&path, b"garbage").unwrap();

        assert!(matches!(SourceIcon::load(&path), Err(IconError::Decode { .. })));
    }

    #[test]
    fn loads_dimensions_and_checks_expected_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.png");
        RgbaImage::new(64, 64).save(&path).unwrap();

        let source = SourceIcon::load(&path).unwrap();
        assert_eq!(source.path(), path.as_path());
        assert_eq!(source.dimensions(), (64, 64));
        assert!(source.has_expected_size(64));
        assert!(!source.has_expected_size(1024));
    }
}
