use crate::types::IconSpec;

// 入出力パス（リポジトリルートからの相対パス）
pub const SOURCE_ICON_PATH: &str = "CristineNote/Assets.xcassets/AppIcon.appiconset/AppIcon-1024.png";
pub const OUTPUT_DIR: &str = "CristineNote/Assets.xcassets/AppIcon.appiconset";

// 元画像の想定サイズ（これ以外は警告のみ）
pub const EXPECTED_SOURCE_SIZE: u32 = 1024;

// 生成するアイコン一覧（ファイル名 → 辺の長さ）
pub const APP_ICON_SIZES: &[IconSpec] = &[
    IconSpec::new("AppIcon-20.png", 20),
    IconSpec::new("AppIcon-20@2x.png", 40),
    IconSpec::new("AppIcon-20@3x.png", 60),
    IconSpec::new("AppIcon-29.png", 29),
    IconSpec::new("AppIcon-29@2x.png", 58),
    IconSpec::new("AppIcon-29@3x.png", 87),
    IconSpec::new("AppIcon-40.png", 40),
    IconSpec::new("AppIcon-40@2x.png", 80),
    IconSpec::new("AppIcon-40@3x.png", 120),
    IconSpec::new("AppIcon-60@2x.png", 120),
    IconSpec::new("AppIcon-60@3x.png", 180),
    IconSpec::new("AppIcon-76.png", 76),
    IconSpec::new("AppIcon-76@2x.png", 152),
    IconSpec::new("AppIcon-83.5@2x.png", 167),
    IconSpec::new("AppIcon-1024.png", 1024),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_fifteen_unique_filenames() {
        let names: HashSet<_> = APP_ICON_SIZES.iter().map(|spec| spec.filename).collect();
        assert_eq!(APP_ICON_SIZES.len(), 15);
        assert_eq!(names.len(), APP_ICON_SIZES.len());
    }

    #[test]
    fn sizes_never_exceed_source() {
        for spec in APP_ICON_SIZES {
            assert!(spec.size > 0, "{} のサイズが0", spec.filename);
            assert!(spec.size <= EXPECTED_SOURCE_SIZE, "{} が元画像より大きい", spec.filename);
            assert!(spec.filename.ends_with(".png"));
        }
    }
}
